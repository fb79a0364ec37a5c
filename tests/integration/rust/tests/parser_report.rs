//! Parser to Report Integration Tests
//!
//! Tests that records parsed from raw harness output reach the rendered
//! report unchanged and in the right tables.

use bench_parsers::{parse_native, parse_script};
use bench_types::{NativeBucket, ScriptSection};
use integration_tests::read_fixture;
use loadgen::LoadGenDocument;
use report_builder::{ReportBuilder, RunMetadata};

fn table_after<'a>(report: &'a str, heading: &str) -> Vec<&'a str> {
    let start = report.find(heading).expect("heading present") + heading.len();
    report[start..]
        .lines()
        .skip_while(|line| !line.starts_with("| ---"))
        .skip(1)
        .take_while(|line| line.starts_with('|'))
        .collect()
}

/// Test: the documented single-record example
#[test]
fn test_single_e2ee_record_example() {
    let native = parse_native(
        "pkg: example.com/crypto/e2ee\nBenchmarkSeal 1000000 52.3 ns/op 16 B/op 1 allocs/op\n",
    );
    let report = ReportBuilder::new(RunMetadata::default())
        .with_native(native)
        .build()
        .unwrap();

    assert_eq!(
        table_after(&report, "### E2EE (ns/op"),
        vec!["| BenchmarkSeal | 52.3 | 16 | 1 |"]
    );
    assert!(table_after(&report, "### Tunnel Server Hot Path").is_empty());
}

/// Test: numeric text is carried through without reformatting
#[test]
fn test_numeric_cells_round_trip_byte_identical() {
    let native = parse_native(&read_fixture("go_bench.txt"));
    let script = parse_script(&read_fixture("ts_bench.txt"));
    let report = ReportBuilder::new(RunMetadata::default())
        .with_native(native.clone())
        .with_script(script.clone())
        .build()
        .unwrap();

    for (_, records) in native.iter() {
        for r in records {
            let row = format!(
                "| {} | {} | {} | {} |",
                r.name, r.ns_per_op, r.bytes_per_op, r.allocs_per_op
            );
            assert!(report.contains(&row), "missing row {row}");
        }
    }
    for (_, records) in script.iter() {
        for r in records {
            let row = format!("| {} | {} | {} |", r.name, r.ops_per_sec, r.mean_ms);
            assert!(report.contains(&row), "missing row {row}");
        }
    }
    assert!(report.contains("| BenchmarkTokenCacheHit-4 | 139.20 | 0 | 0 |"));
}

/// Test: rows land in the table for their bucket, in source order
#[test]
fn test_rows_rendered_per_bucket_in_order() {
    let native = parse_native(&read_fixture("go_bench.txt"));
    let script = parse_script(&read_fixture("ts_bench.txt"));
    let report = ReportBuilder::new(RunMetadata::default())
        .with_native(native.clone())
        .with_script(script.clone())
        .build()
        .unwrap();

    let tunnel = table_after(&report, "### Tunnel Server Hot Path");
    assert_eq!(tunnel.len(), native.get(NativeBucket::TunnelServer).len());
    assert!(tunnel[0].starts_with("| BenchmarkAttachParse-4 |"));
    assert!(tunnel[2].starts_with("| BenchmarkPairChannel-4 |"));

    let yamux = table_after(&report, "### Yamux");
    assert_eq!(yamux.len(), script.get(ScriptSection::Yamux).len());
    assert!(yamux[1].starts_with("| write_64kib |"));
}

/// Test: untracked packages and metric-extended lines are filtered
#[test]
fn test_fixture_filtering() {
    let native = parse_native(&read_fixture("go_bench.txt"));
    let all: Vec<&str> = native
        .iter()
        .flat_map(|(_, records)| records.iter().map(|r| r.name.as_str()))
        .collect();

    assert!(!all.contains(&"BenchmarkFrameWrite-4"));
    assert!(!all.contains(&"BenchmarkSealRecord64KiB-4"));
    assert_eq!(native.get(NativeBucket::E2ee).len(), 3);
}

/// Test: a document without resources renders four zero rows
#[test]
fn test_missing_resources_renders_zero_rows() {
    let doc: LoadGenDocument = r#"{"summary": {"attempts": 1}}"#.parse().unwrap();
    let report = ReportBuilder::new(RunMetadata::default())
        .with_loadgen(doc)
        .build()
        .unwrap();

    assert_eq!(
        table_after(&report, "### Resources (peak)"),
        vec![
            "| max_heap_alloc_bytes | 0 |",
            "| max_heap_inuse_bytes | 0 |",
            "| max_sys_bytes | 0 |",
            "| max_goroutines | 0 |",
        ]
    );
}
