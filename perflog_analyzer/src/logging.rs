//!
//! Structured logging initialization shared by the binaries.
//!

use tracing_subscriber::EnvFilter;

///
/// Installs the global `tracing` subscriber writing to `stderr`.
///
/// `RUST_LOG` takes precedence. Otherwise the level is `debug` if `verbose`, `error` if `quiet`,
/// and `info` by default. A subscriber installed elsewhere is kept.
///
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

///
/// The level used when `RUST_LOG` is not set.
///
fn default_level(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "info",
    }
}
