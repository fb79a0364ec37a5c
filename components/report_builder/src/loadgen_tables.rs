//! Tables rendered from the load-generator document

use crate::error::ReportResult;
use crate::format::{format_float, format_int, format_plain, DEFAULT_PLACES};
use crate::table::{Align, MarkdownTable};
use loadgen::LoadGenDocument;

/// Summary metrics, in display order
pub const SUMMARY_KEYS: [&str; 7] = [
    "attempts",
    "success",
    "failure",
    "success_rate",
    "duration_seconds",
    "peak_conn_per_sec",
    "active_peak",
];

/// Summary metric rendered as a fixed-precision duration
const DURATION_KEY: &str = "duration_seconds";
const DURATION_PLACES: usize = 4;

/// Config keys, in display order; keys outside this list are not shown
pub const CONFIG_KEYS: [&str; 18] = [
    "mode",
    "channels",
    "rate_per_sec",
    "ramp_step",
    "ramp_interval_ms",
    "steady_duration_ms",
    "workers",
    "conn_timeout_ms",
    "rpc_timeout_ms",
    "report_interval_ms",
    "max_handshake_bytes",
    "max_record_bytes",
    "max_buffered_bytes",
    "max_pending_bytes",
    "idle_timeout_ms",
    "cleanup_interval_ms",
    "max_conns",
    "max_channels",
];

/// Connection pipeline stages, in display order
pub const LATENCY_STAGES: [&str; 5] = [
    "ws_open",
    "attach_send",
    "pair_ready",
    "handshake",
    "rpc_call",
];

/// Per-stage latency fields, in column order
pub const LATENCY_COLUMNS: [&str; 6] = ["p50_ms", "p95_ms", "p99_ms", "mean_ms", "min_ms", "max_ms"];

/// Peak resource counters, in display order
pub const RESOURCE_KEYS: [&str; 4] = [
    "max_heap_alloc_bytes",
    "max_heap_inuse_bytes",
    "max_sys_bytes",
    "max_goroutines",
];

const METRIC_VALUE: [(&str, Align); 2] = [("Metric", Align::Left), ("Value", Align::Right)];

pub(crate) fn summary_table(doc: &LoadGenDocument) -> ReportResult<MarkdownTable> {
    let summary = doc.summary();
    let mut table = MarkdownTable::new(&METRIC_VALUE);
    for key in SUMMARY_KEYS {
        let value = summary.get(key);
        let cell = if key == DURATION_KEY {
            format_float(&format!("summary.{}", key), value, DURATION_PLACES)?
        } else {
            format_plain(value)
        };
        table.add_row(vec![key.to_string(), cell]);
    }
    Ok(table)
}

pub(crate) fn config_table(doc: &LoadGenDocument) -> MarkdownTable {
    let config = doc.config();
    let mut table = MarkdownTable::new(&[("Key", Align::Left), ("Value", Align::Left)]);
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            table.add_row(vec![key.to_string(), format_plain(Some(value))]);
        }
    }
    table
}

pub(crate) fn latency_table(doc: &LoadGenDocument) -> ReportResult<MarkdownTable> {
    let latency = doc.latency();
    let mut columns = vec![("Stage", Align::Left)];
    columns.extend(
        ["p50", "p95", "p99", "mean", "min", "max"]
            .into_iter()
            .map(|name| (name, Align::Right)),
    );

    let mut table = MarkdownTable::new(&columns);
    for stage in LATENCY_STAGES {
        let timings = latency.child(stage);
        let mut cells = vec![stage.to_string()];
        for column in LATENCY_COLUMNS {
            let field = format!("latency.{}.{}", stage, column);
            cells.push(format_float(&field, timings.get(column), DEFAULT_PLACES)?);
        }
        table.add_row(cells);
    }
    Ok(table)
}

pub(crate) fn resources_table(doc: &LoadGenDocument) -> ReportResult<MarkdownTable> {
    let resources = doc.resources();
    let mut table = MarkdownTable::new(&METRIC_VALUE);
    for key in RESOURCE_KEYS {
        let cell = format_int(&format!("resources.{}", key), resources.get(key))?;
        table.add_row(vec![key.to_string(), cell]);
    }
    Ok(table)
}
