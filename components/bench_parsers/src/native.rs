//! Native benchmark log parser
//!
//! The log interleaves package headers (`pkg: <import path>`) with one line
//! per benchmark:
//!
//! ```text
//! BenchmarkSeal-8   1000000   52.3 ns/op   16 B/op   1 allocs/op
//! ```

use crate::log_lines;
use bench_types::{NativeBucket, NativeGroup, NativeRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

const PACKAGE_MARKER: &str = "pkg:";

static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Benchmark\S+)\s+\d+\s+([0-9.]+) ns/op\s+([0-9.]+) B/op\s+(\d+) allocs/op$")
        .expect("benchmark line pattern is valid")
});

/// What a single trimmed log line means to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeLine<'a> {
    /// Package header; `None` when the header carries no path field
    Package(Option<&'a str>),
    /// A benchmark result line
    Record(NativeRecord),
    /// Anything else
    Other,
}

/// Classify one line of native benchmark output
///
/// Surrounding whitespace is ignored. Package headers take priority over
/// record matching.
pub fn classify_native_line(line: &str) -> NativeLine<'_> {
    let line = line.trim();

    if line.starts_with(PACKAGE_MARKER) {
        return NativeLine::Package(line.split_whitespace().nth(1));
    }

    match BENCH_LINE.captures(line) {
        Some(caps) => NativeLine::Record(NativeRecord::new(
            &caps[1], &caps[2], &caps[3], &caps[4],
        )),
        None => NativeLine::Other,
    }
}

/// Parse a full native benchmark log into package buckets
///
/// Records are filed under the bucket of the most recent package header.
/// Records seen before any header, or under a package that maps to no bucket,
/// are dropped.
pub fn parse_native(text: &str) -> NativeGroup {
    let mut group = NativeGroup::new();
    let mut package = "";

    for (lineno, line) in log_lines(text).enumerate() {
        match classify_native_line(line) {
            NativeLine::Package(Some(path)) => package = path,
            NativeLine::Package(None) => {}
            NativeLine::Record(record) => match NativeBucket::from_package(package) {
                Some(bucket) => group.push(bucket, record),
                None => trace!(
                    line = lineno + 1,
                    package,
                    name = %record.name,
                    "dropping record outside tracked packages"
                ),
            },
            NativeLine::Other => trace!(line = lineno + 1, "skipping line"),
        }
    }

    debug!(
        e2ee = group.get(NativeBucket::E2ee).len(),
        tunnel = group.get(NativeBucket::TunnelServer).len(),
        "parsed native benchmark log"
    );
    group
}
