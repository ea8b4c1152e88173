//! Filter composition for the email list.
//!
//! This module provides:
//! - [`FilterCriteria`]: the optional date range, urgency, sentiment and
//!   category constraints, and the conjunctive matching rule
//! - [`FilterState`]: the session's current selection, mutated one field at a
//!   time, with change listeners
//!
//! # Example
//!
//! ```
//! use inboxlens_core::FilterState;
//!
//! let mut filters = FilterState::new();
//! filters.on_change(|criteria| println!("{} active", criteria.active_count()));
//!
//! filters.set_urgency("high")?;
//! let criteria = filters.set_category("inbox")?;
//! assert_eq!(criteria.active_labels(), ["Urgency: high", "Category: inbox"]);
//!
//! assert!(filters.clear().is_empty());
//! # Ok::<(), inboxlens_core::Error>(())
//! ```

mod criteria;
mod state;

pub use criteria::{DateRange, FilterCriteria, FilterField, FilterUpdate};
pub use state::{FilterState, ListenerId};
