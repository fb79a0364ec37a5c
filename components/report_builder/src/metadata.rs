//! Run metadata embedded at the top of the report

use serde::{Deserialize, Serialize};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Host and runtime description of the benchmark machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Operating system name
    pub os: String,
    /// CPU model description
    pub cpu: String,
    /// Installed memory in bytes
    pub ram_bytes: u64,
    /// Native toolchain version string
    pub go_version: String,
    /// Script runtime version string
    pub node_version: String,
    /// `GOMAXPROCS` used for the native benchmarks
    pub gomaxprocs: String,
    /// `GOMEMLIMIT` used for the native benchmarks
    pub gomemlimit: String,
    /// `NODE_OPTIONS` used for the script benchmarks
    pub node_options: String,
}

impl Environment {
    /// Installed memory in GiB
    pub fn ram_gib(&self) -> f64 {
        self.ram_bytes as f64 / BYTES_PER_GIB
    }

    /// Bullet lines for the Environment section
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("- OS: {}", self.os),
            format!("- CPU: {}", self.cpu),
            format!("- RAM: {:.1} GB", self.ram_gib()),
            format!("- Go: {}", self.go_version),
            format!("- Node: {}", self.node_version),
            "- Constraints used:".to_string(),
            format!(
                "  - Go: `GOMAXPROCS={}`, `GOMEMLIMIT={}`",
                self.gomaxprocs, self.gomemlimit
            ),
            format!("  - Node: `NODE_OPTIONS={}`", self.node_options),
        ]
    }
}

/// Shell commands that produced the three inputs, kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commands {
    /// Native benchmark command
    pub native: String,
    /// Script benchmark command
    pub script: String,
    /// Load generator command
    pub loadgen: String,
}

/// Everything about the run that is not a measurement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Human-readable date of the run
    pub run_date: String,
    /// Host and runtime description
    pub environment: Environment,
    /// Commands used to produce the inputs
    pub commands: Commands,
}
