//! Benchmark report CLI
//!
//! Entry point for the report generator. Parses CLI arguments and delegates
//! to the pipeline.

use bench_report::{logging, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = bench_report::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
