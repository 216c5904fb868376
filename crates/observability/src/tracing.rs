//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

// Keep the audit channel on even when the application default is quiet;
// operators opt out explicitly via RUST_LOG if they must.
const DEFAULT_DIRECTIVES: &str = "info,audit=info";

/// Initialize tracing/logging for the process.
///
/// JSON output with an env-driven filter (`RUST_LOG`). Safe to call multiple
/// times; subsequent calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
