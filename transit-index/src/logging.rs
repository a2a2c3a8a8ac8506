//! Tracing setup for the command line tool.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g.
/// `TRANSIT_INDEX_LOG=transit_index=debug`.
pub const LOG_ENV: &str = "TRANSIT_INDEX_LOG";

/// Install a subscriber writing to stderr, so stdout carries only the result.
///
/// Falls back to `warn` if the filter variable is unset or invalid. Does
/// nothing if a subscriber is already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
