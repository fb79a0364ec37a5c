//! Benchmark report CLI library
//!
//! Provides the argument definitions and the read/parse/render/write pipeline
//! behind the `bench-report` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use pipeline::{render, run};
