//! Tracing setup for e2e runs.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// Respects `RUST_LOG` (e.g. `RUST_LOG=fider_e2e=debug`) and falls back to
/// `default_filter`. Returns `false` if a global subscriber was already set,
/// which happens when several scenarios in one process call this.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
