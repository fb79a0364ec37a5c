//! Error types for loading the load-generator document

use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or decoding a load-generator document
#[derive(Debug, Error)]
pub enum LoadGenError {
    /// The file could not be read
    #[error("failed to read load-generator output '{}': {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON
    #[error("invalid load-generator JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON root is something other than an object
    #[error("load-generator document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Result type for load-generator operations
pub type LoadGenResult<T> = Result<T, LoadGenError>;
