//! Report assembly

use crate::error::ReportResult;
use crate::loadgen_tables::{config_table, latency_table, resources_table, summary_table};
use crate::metadata::RunMetadata;
use crate::table::{Align, MarkdownTable};
use bench_types::{NativeBucket, NativeGroup, ScriptGroup, ScriptSection};
use loadgen::LoadGenDocument;
use tracing::debug;

/// Builds the markdown report from parsed inputs
///
/// Inputs that are never supplied render as empty: empty benchmark tables and
/// a load-generator section filled with defaults.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    metadata: RunMetadata,
    native: NativeGroup,
    script: ScriptGroup,
    loadgen: LoadGenDocument,
}

impl ReportBuilder {
    /// Create a builder for a run described by `metadata`
    pub fn new(metadata: RunMetadata) -> Self {
        Self {
            metadata,
            native: NativeGroup::new(),
            script: ScriptGroup::new(),
            loadgen: LoadGenDocument::default(),
        }
    }

    /// Set the native benchmark records
    pub fn with_native(mut self, native: NativeGroup) -> Self {
        self.native = native;
        self
    }

    /// Set the script benchmark records
    pub fn with_script(mut self, script: ScriptGroup) -> Self {
        self.script = script;
        self
    }

    /// Set the load-generator document
    pub fn with_loadgen(mut self, loadgen: LoadGenDocument) -> Self {
        self.loadgen = loadgen;
        self
    }

    /// Render the complete report
    ///
    /// # Errors
    /// Returns [`ReportError::InvalidNumber`](crate::ReportError::InvalidNumber)
    /// when a load-generator field that is formatted as a number holds a
    /// non-numeric value. Nothing is returned in that case, so callers never
    /// see a partial report.
    pub fn build(&self) -> ReportResult<String> {
        let mut output = String::new();
        self.render_header(&mut output);
        self.render_native(&mut output);
        self.render_script(&mut output);
        self.render_loadgen(&mut output)?;

        debug!(
            native = self.native.len(),
            script = self.script.len(),
            bytes = output.len(),
            "rendered report"
        );
        Ok(output)
    }

    fn render_header(&self, output: &mut String) {
        let meta = &self.metadata;
        output.push_str("# Benchmark Results\n\n");
        output.push_str(&format!("Run date: {}\n\n", meta.run_date));

        output.push_str("## Environment\n\n");
        output.push_str(&meta.environment.lines().join("\n"));
        output.push_str("\n\n");

        output.push_str("## Commands\n\n```bash\n");
        output.push_str(&format!("# Go micro benches\n{}\n\n", meta.commands.native));
        output.push_str(&format!("# TS micro benches\n{}\n\n", meta.commands.script));
        output.push_str(&format!(
            "# Load generator (full mode, loopback)\n{}\n",
            meta.commands.loadgen
        ));
        output.push_str("```\n\n");
    }

    fn render_native(&self, output: &mut String) {
        output.push_str("## Go Benchmarks\n");
        for (bucket, records) in self.native.iter() {
            let mut table = MarkdownTable::new(&[
                ("Benchmark", Align::Left),
                ("ns/op", Align::Right),
                ("B/op", Align::Right),
                ("allocs/op", Align::Right),
            ]);
            for record in records {
                table.add_row(vec![
                    record.name.clone(),
                    record.ns_per_op.clone(),
                    record.bytes_per_op.clone(),
                    record.allocs_per_op.clone(),
                ]);
            }
            push_subsection(output, native_heading(bucket), &table);
        }
    }

    fn render_script(&self, output: &mut String) {
        output.push_str("\n## TypeScript Benchmarks\n");
        for (section, records) in self.script.iter() {
            let mut table = MarkdownTable::new(&[
                ("Benchmark", Align::Left),
                ("ops/s (hz)", Align::Right),
                ("mean (ms)", Align::Right),
            ]);
            for record in records {
                table.add_row(vec![
                    record.name.clone(),
                    record.ops_per_sec.clone(),
                    record.mean_ms.clone(),
                ]);
            }
            push_subsection(output, script_heading(section), &table);
        }
    }

    fn render_loadgen(&self, output: &mut String) -> ReportResult<()> {
        let doc = &self.loadgen;
        output.push_str("\n## Load Generator (full mode)\n");
        push_subsection(output, "Summary", &summary_table(doc)?);
        push_subsection(output, "Config", &config_table(doc));
        push_subsection(output, "Latency (ms)", &latency_table(doc)?);
        push_subsection(output, "Resources (peak)", &resources_table(doc)?);
        Ok(())
    }
}

fn push_subsection(output: &mut String, heading: &str, table: &MarkdownTable) {
    output.push_str(&format!("\n### {}\n\n", heading));
    output.push_str(&table.render());
}

fn native_heading(bucket: NativeBucket) -> &'static str {
    match bucket {
        NativeBucket::E2ee => "E2EE (ns/op, B/op, allocs/op)",
        NativeBucket::TunnelServer => "Tunnel Server Hot Path (ns/op, B/op, allocs/op)",
    }
}

fn script_heading(section: ScriptSection) -> &'static str {
    match section {
        ScriptSection::Handshake => "E2EE Handshake (ops/s, mean ms)",
        ScriptSection::Record => "E2EE Record (ops/s, mean ms)",
        ScriptSection::Yamux => "Yamux (ops/s, mean ms)",
    }
}
