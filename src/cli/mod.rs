//! CLI command handlers

pub mod commands;

pub use commands::{export, inspect};

use tracing_subscriber::EnvFilter;

/// Install the global log subscriber. Call once per process.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "netmon_export=debug"
    } else {
        "netmon_export=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
