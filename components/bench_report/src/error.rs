//! Error types for the CLI

use loadgen::LoadGenError;
use report_builder::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A benchmark log could not be read
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written
    #[error("could not write '{}': {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The load-generator document could not be loaded
    #[error(transparent)]
    LoadGen(#[from] LoadGenError),

    /// The report could not be rendered
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
