//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "bench_report=info";
const VERBOSE_FILTER: &str =
    "bench_report=debug,bench_parsers=debug,loadgen=debug,report_builder=debug";

/// Install a stderr subscriber
///
/// `RUST_LOG` wins when set and valid; otherwise `verbose` chooses between the
/// quiet and debug defaults. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|expr| EnvFilter::try_new(expr).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
