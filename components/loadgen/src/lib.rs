//! Load-generator result document
//!
//! The load generator writes a JSON object with four sub-documents:
//! `summary`, `config`, `latency` and `resources`. This crate loads that
//! document and offers keyed lookup into each part without interpreting the
//! values; defaults are applied by the report assembler.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod document;
mod error;

pub use document::{LoadGenDocument, Section, SectionKind};
pub use error::{LoadGenError, LoadGenResult};
