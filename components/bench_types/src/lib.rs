//! Normalized benchmark record types shared by the log parsers.
//!
//! This crate defines the in-memory shape that both benchmark-log parsers
//! produce and the report assembler consumes.
//!
//! # Overview
//!
//! - [`NativeRecord`] - One sample from the native benchmark harness
//! - [`ScriptRecord`] - One sample from the script benchmark harness
//! - [`Group`] - Fixed set of named buckets holding records in first-seen order
//! - [`NativeBucket`] / [`ScriptSection`] - The bucket keys for each harness
//!
//! # Examples
//!
//! ```
//! use bench_types::{NativeBucket, NativeGroup, NativeRecord};
//!
//! let mut group = NativeGroup::new();
//! group.push(
//!     NativeBucket::E2ee,
//!     NativeRecord::new("BenchmarkSeal", "52.3", "16", "1"),
//! );
//!
//! assert_eq!(group.get(NativeBucket::E2ee).len(), 1);
//! assert!(group.get(NativeBucket::TunnelServer).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod bucket;
mod group;
mod record;

pub use bucket::{BucketKey, NativeBucket, ScriptSection};
pub use group::Group;
pub use record::{NativeRecord, ScriptRecord};

/// Records from the native benchmark harness, bucketed by package.
pub type NativeGroup = Group<NativeBucket, NativeRecord>;

/// Records from the script benchmark harness, bucketed by section.
pub type ScriptGroup = Group<ScriptSection, ScriptRecord>;
