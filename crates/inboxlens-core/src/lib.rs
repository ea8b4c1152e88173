//! # inboxlens-core
//!
//! Core logic for the `InboxLens` email insights dashboard.
//!
//! This crate provides:
//! - Email records and an ordered in-memory collection
//! - **Filter composition** - multi-field criteria with change notification
//! - **Derived statistics** - per-category, starred and weekly activity counts
//! - **Smart search state** - query box with simulated search latency
//! - A [`Dashboard`] session tying the pieces together
//! - Settings persisted as JSON in the user's config directory

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod email;
mod error;
pub mod filter;
pub mod search;
pub mod session;
pub mod stats;

pub use config::{DashboardSettings, FilterMode};
pub use email::{
    EmailCollection, EmailRecord, EmailSource, JsonFileSource, KNOWN_CATEGORIES, SampleMailbox,
    Sentiment, Urgency,
};
pub use error::{Error, Result};
pub use filter::{DateRange, FilterCriteria, FilterField, FilterState, FilterUpdate, ListenerId};
pub use search::{SUGGESTED_QUERIES, SearchPhase, SearchQueryState, SubmitStatus};
pub use session::{Dashboard, Insights};
pub use stats::{DayActivity, DerivedStats, WeeklyActivity, compute_stats, weekly_activity};
