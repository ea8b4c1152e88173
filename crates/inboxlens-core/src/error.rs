//! Error types for the core library.

use chrono::NaiveDate;
use thiserror::Error;

use crate::filter::FilterField;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter value outside the known domain was rejected in strict mode.
    #[error("Invalid {field} filter value: {value:?}")]
    InvalidFilterValue {
        /// The filter field being set.
        field: FilterField,
        /// The rejected value.
        value: String,
    },

    /// Date range with its start after its end.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Start of the range.
        start: NaiveDate,
        /// End of the range.
        end: NaiveDate,
    },

    /// Two records in one collection share an identifier.
    #[error("Duplicate email id: {0}")]
    DuplicateEmailId(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
