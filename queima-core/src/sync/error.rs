//! Progress payload errors.

/// Reasons a progress body is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Field '{field}' out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Field '{field}' is not an ISO 8601 timestamp: {value}")]
    InvalidTimestamp { field: &'static str, value: String },

    #[error("Malformed progress body: {0}")]
    Malformed(String),
}
