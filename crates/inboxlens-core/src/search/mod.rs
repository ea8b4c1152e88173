//! Smart search: a query box, suggested queries and an idle/busy state
//! machine standing in for a real search backend.
//!
//! Submission rules:
//! - blank text is rejected without a transition
//! - text submitted while a search runs is ignored, never queued
//! - an accepted search returns to idle once its latency elapses

mod state;
mod suggestions;

pub use state::{SearchPhase, SearchQueryState, SubmitStatus};
pub use suggestions::{RecentQueries, SUGGESTED_QUERIES};
