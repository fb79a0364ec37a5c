//! Parsers for textual benchmark-harness output
//!
//! Both parsers are forgiving: any line they do not recognize (banners,
//! progress output, blank lines) is skipped without error.
//!
//! - [`native`] reads `go test -bench -benchmem` style output
//! - [`script`] reads vitest `bench` style output
//!
//! # Examples
//!
//! ```rust
//! use bench_parsers::parse_native;
//! use bench_types::NativeBucket;
//!
//! let log = "pkg: example.com/crypto/e2ee\n\
//!            BenchmarkSeal 1000000 52.3 ns/op 16 B/op 1 allocs/op\n";
//! let group = parse_native(log);
//! assert_eq!(group.get(NativeBucket::E2ee)[0].ns_per_op, "52.3");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod native;
pub mod script;

pub use native::{classify_native_line, parse_native, NativeLine};
pub use script::{classify_script_line, parse_script, ScriptLine};

/// Split harness output into lines
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Terminal captures use a bare
/// `\r` to redraw progress output, and what follows it is a new line.
pub(crate) fn log_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
