//! Logging configuration and initialization.
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with the
//! prompts and results written to stdout.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter directive for a `-v` count.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "scicalc=debug,warn",
        _ => "scicalc=trace,warn",
    }
}

/// Initialize the global subscriber.
///
/// `SCICALC_LOG` (via [`Config::log_filter`]) wins over the verbosity flag.
pub fn init(config: &Config, verbose: u8) {
    let directive = config
        .log_filter
        .as_deref()
        .unwrap_or_else(|| filter_for_verbosity(verbose));
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color)
        .with_target(verbose >= 2)
        .try_init()
        .ok(); // If already initialized (e.g., in tests), don't crash.

    tracing::debug!(verbose, format = ?config.format, precision = ?config.precision, "logging initialized");
}
