//! Error types for report assembly

use thiserror::Error;

/// Failures while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// A load-generator field that must be numeric holds something else
    #[error("field '{field}' is not numeric: {value}")]
    InvalidNumber {
        /// Dotted path of the field, e.g. `summary.duration_seconds`
        field: String,
        /// The offending JSON value
        value: serde_json::Value,
    },
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
