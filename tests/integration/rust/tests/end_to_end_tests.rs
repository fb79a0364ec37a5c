//! End-to-End Report Integration Tests
//!
//! Drives the full pipeline through the bench_report CLI types: fixture files
//! on disk in, markdown file on disk out.

use bench_report::{run, Cli};
use clap::Parser;
use integration_tests::{fixture, read_fixture};
use std::fs;
use std::path::Path;

fn cli(go: &str, ts: &str, loadgen: &str, out: &Path, env: &[(&str, &str)]) -> Cli {
    let mut args = vec![
        "bench-report".to_string(),
        format!("--go-output={}", fixture(go).display()),
        format!("--ts-output={}", fixture(ts).display()),
        format!("--loadgen-output={}", fixture(loadgen).display()),
        format!("--out={}", out.display()),
        "--run-date=Sat Oct 17 09:30:00 2026".to_string(),
    ];
    args.extend(env.iter().map(|(k, v)| format!("--{}={}", k, v)));
    Cli::try_parse_from(args).unwrap()
}

const FULL_ENV: &[(&str, &str)] = &[
    ("os", "Linux 6.8.0-45-generic"),
    ("cpu", "AMD EPYC 7B13"),
    ("ram-bytes", "16000000000"),
    ("go-version", "go1.22.4"),
    ("node-version", "v20.14.0"),
    ("gomaxprocs", "4"),
    ("gomemlimit", "2GiB"),
    ("node-options", "--max-old-space-size=2048"),
    (
        "go-command",
        "go test -run=^$ -bench=. -benchmem ./crypto/e2ee ./tunnel/server",
    ),
    ("ts-command", "npx vitest bench --run"),
    (
        "loadgen-command",
        "go run ./cmd/flowersec-loadgen --mode full --channels 512",
    ),
];

const MINIMAL_ENV: &[(&str, &str)] = &[
    ("os", "Linux"),
    ("cpu", "cpu"),
    ("ram-bytes", "0"),
    ("go-version", "go"),
    ("node-version", "node"),
    ("gomaxprocs", "1"),
    ("gomemlimit", "off"),
    ("node-options", "none"),
    ("go-command", "a"),
    ("ts-command", "b"),
    ("loadgen-command", "c"),
];

/// Test: full fixture set renders the expected report byte for byte
#[test]
fn test_e2e_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("BENCHMARKS.md");

    run(&cli("go_bench.txt", "ts_bench.txt", "loadgen.json", &out, FULL_ENV)).unwrap();

    let actual = fs::read_to_string(&out).unwrap();
    assert_eq!(actual, read_fixture("expected_report.md"));
}

/// Test: logs with no recognizable records still produce a complete report
#[test]
fn test_e2e_noise_only_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("BENCHMARKS.md");

    run(&cli(
        "go_noise.txt",
        "ts_noise.txt",
        "loadgen_empty.json",
        &out,
        MINIMAL_ENV,
    ))
    .unwrap();

    let actual = fs::read_to_string(&out).unwrap();
    assert_eq!(actual, read_fixture("expected_empty_report.md"));
}

/// Test: an existing report is replaced, not appended to
#[test]
fn test_e2e_overwrites_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("BENCHMARKS.md");
    fs::write(&out, "stale content\n").unwrap();

    run(&cli("go_bench.txt", "ts_bench.txt", "loadgen.json", &out, FULL_ENV)).unwrap();

    let actual = fs::read_to_string(&out).unwrap();
    assert!(!actual.contains("stale content"));
    assert!(actual.starts_with("# Benchmark Results\n"));
}

/// Test: a load-generator document that is not an object is fatal
#[test]
fn test_e2e_rejects_non_object_loadgen() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("BENCHMARKS.md");
    let bad = dir.path().join("loadgen.json");
    fs::write(&bad, serde_json::to_string(&serde_json::json!([1, 2, 3])).unwrap()).unwrap();

    let mut cli = cli("go_bench.txt", "ts_bench.txt", "loadgen.json", &out, FULL_ENV);
    cli.loadgen_output = bad;

    assert!(run(&cli).is_err());
    assert!(!out.exists());
}
