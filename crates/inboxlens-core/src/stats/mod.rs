//! Derived statistics for the dashboard's stat cards and charts.
//!
//! Everything here is a pure function of a set of records; nothing is cached.

mod activity;
mod derived;

pub use activity::{DayActivity, WeeklyActivity, weekly_activity};
pub use derived::{DerivedStats, compute_stats};
