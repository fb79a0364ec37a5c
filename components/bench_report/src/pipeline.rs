//! Read inputs, parse, render and write the report

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use bench_parsers::{parse_native, parse_script};
use loadgen::LoadGenDocument;
use report_builder::ReportBuilder;
use std::fs;
use std::path::Path;
use tracing::info;

/// Build the report text from the inputs named by `cli`
///
/// # Errors
/// Returns `CliError` if an input cannot be read, the load-generator JSON is
/// invalid, or a load-generator field cannot be formatted
pub fn render(cli: &Cli) -> CliResult<String> {
    let native = parse_native(&read_input(&cli.go_output)?);
    let script = parse_script(&read_input(&cli.ts_output)?);
    let loadgen = LoadGenDocument::load(&cli.loadgen_output)?;

    let report = ReportBuilder::new(cli.metadata())
        .with_native(native)
        .with_script(script)
        .with_loadgen(loadgen)
        .build()?;
    Ok(report)
}

/// Render the report and write it to `cli.out`
///
/// The output file is only touched once the whole report has been rendered.
pub fn run(cli: &Cli) -> CliResult<()> {
    let report = render(cli)?;
    fs::write(&cli.out, &report).map_err(|source| CliError::Write {
        path: cli.out.clone(),
        source,
    })?;

    info!(path = %cli.out.display(), bytes = report.len(), "wrote benchmark report");
    Ok(())
}

fn read_input(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
