//! Markdown report assembly
//!
//! Combines parsed native and script benchmark groups, the load-generator
//! document and run metadata into a single markdown report with a fixed
//! section layout.
//!
//! # Examples
//!
//! ```rust
//! use bench_types::{NativeBucket, NativeGroup, NativeRecord};
//! use report_builder::{ReportBuilder, RunMetadata};
//!
//! let mut native = NativeGroup::new();
//! native.push(NativeBucket::E2ee, NativeRecord::new("BenchmarkSeal", "52.3", "16", "1"));
//!
//! let report = ReportBuilder::new(RunMetadata::default())
//!     .with_native(native)
//!     .build()
//!     .unwrap();
//! assert!(report.contains("| BenchmarkSeal | 52.3 | 16 | 1 |"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod error;
pub mod format;
mod loadgen_tables;
mod metadata;
mod table;

pub use builder::ReportBuilder;
pub use error::{ReportError, ReportResult};
pub use loadgen_tables::{
    CONFIG_KEYS, LATENCY_COLUMNS, LATENCY_STAGES, RESOURCE_KEYS, SUMMARY_KEYS,
};
pub use metadata::{Commands, Environment, RunMetadata};
pub use table::{Align, MarkdownTable};
