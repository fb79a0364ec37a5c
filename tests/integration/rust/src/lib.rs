//! Integration test suite for the benchmark report tool
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

use std::path::PathBuf;

/// Re-export components for test convenience
pub mod components {
    pub use bench_parsers;
    pub use bench_report;
    pub use bench_types;
    pub use loadgen;
    pub use report_builder;
}

/// Absolute path of a file under `fixtures/`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `fixtures/`
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", name, e))
}
