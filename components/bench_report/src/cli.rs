//! Command-line arguments

use chrono::Local;
use clap::Parser;
use report_builder::{Commands, Environment, RunMetadata};
use std::path::PathBuf;

/// Aggregate benchmark outputs into a markdown report
#[derive(Debug, Parser)]
#[command(name = "bench-report", version)]
pub struct Cli {
    /// Output of the Go micro benchmarks (`go test -bench -benchmem`)
    #[arg(long, value_name = "FILE")]
    pub go_output: PathBuf,

    /// Output of the TypeScript micro benchmarks (`vitest bench`)
    #[arg(long, value_name = "FILE")]
    pub ts_output: PathBuf,

    /// JSON result written by the load generator
    #[arg(long, value_name = "FILE")]
    pub loadgen_output: PathBuf,

    /// Where to write the markdown report
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,

    /// Run date shown in the report; defaults to the current local time
    #[arg(long, default_value = "")]
    pub run_date: String,

    /// Operating system name
    #[arg(long)]
    pub os: String,

    /// CPU model description
    #[arg(long)]
    pub cpu: String,

    /// Installed memory in bytes
    ///
    /// Must be a plain integer; float notation such as `1.6e10` is rejected.
    #[arg(long)]
    pub ram_bytes: u64,

    /// Go toolchain version
    #[arg(long)]
    pub go_version: String,

    /// Node.js version
    #[arg(long)]
    pub node_version: String,

    /// GOMAXPROCS used for the Go benchmarks
    #[arg(long)]
    pub gomaxprocs: String,

    /// GOMEMLIMIT used for the Go benchmarks
    #[arg(long)]
    pub gomemlimit: String,

    /// NODE_OPTIONS used for the TypeScript benchmarks
    #[arg(long, allow_hyphen_values = true)]
    pub node_options: String,

    /// Command that produced --go-output
    #[arg(long, allow_hyphen_values = true)]
    pub go_command: String,

    /// Command that produced --ts-output
    #[arg(long, allow_hyphen_values = true)]
    pub ts_command: String,

    /// Command that produced --loadgen-output
    #[arg(long, allow_hyphen_values = true)]
    pub loadgen_command: String,

    /// Log debug output from every stage to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run date to print, falling back to the current local time
    pub fn resolved_run_date(&self) -> String {
        if self.run_date.is_empty() {
            Local::now().format("%c").to_string()
        } else {
            self.run_date.clone()
        }
    }

    /// Collect the non-measurement inputs for the report
    pub fn metadata(&self) -> RunMetadata {
        RunMetadata {
            run_date: self.resolved_run_date(),
            environment: Environment {
                os: self.os.clone(),
                cpu: self.cpu.clone(),
                ram_bytes: self.ram_bytes,
                go_version: self.go_version.clone(),
                node_version: self.node_version.clone(),
                gomaxprocs: self.gomaxprocs.clone(),
                gomemlimit: self.gomemlimit.clone(),
                node_options: self.node_options.clone(),
            },
            commands: Commands {
                native: self.go_command.clone(),
                script: self.ts_command.clone(),
                loadgen: self.loadgen_command.clone(),
            },
        }
    }
}
