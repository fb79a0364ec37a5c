//! Benchmark sample records.
//!
//! Numeric columns are kept as the literal text found in the log so that the
//! rendered report shows exactly what the harness printed.

use serde::Serialize;

/// One native benchmark sample (`ns/op`, `B/op`, `allocs/op`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeRecord {
    /// Benchmark identifier, always starting with `Benchmark`
    pub name: String,
    /// Time per operation in nanoseconds, as printed
    pub ns_per_op: String,
    /// Bytes allocated per operation, as printed
    pub bytes_per_op: String,
    /// Allocations per operation, as printed
    pub allocs_per_op: String,
}

impl NativeRecord {
    /// Create a record from the four captured columns
    pub fn new(
        name: impl Into<String>,
        ns_per_op: impl Into<String>,
        bytes_per_op: impl Into<String>,
        allocs_per_op: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ns_per_op: ns_per_op.into(),
            bytes_per_op: bytes_per_op.into(),
            allocs_per_op: allocs_per_op.into(),
        }
    }
}

/// One script benchmark sample (throughput and mean duration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRecord {
    /// Benchmark name (first column of the row)
    pub name: String,
    /// Operations per second (`hz` column), as printed
    pub ops_per_sec: String,
    /// Mean duration in milliseconds, as printed
    pub mean_ms: String,
}

impl ScriptRecord {
    /// Create a record from the captured columns
    pub fn new(
        name: impl Into<String>,
        ops_per_sec: impl Into<String>,
        mean_ms: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ops_per_sec: ops_per_sec.into(),
            mean_ms: mean_ms.into(),
        }
    }
}
