use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Filtering comes from `RUST_LOG`,
/// falling back to `info` when it is unset or invalid.
///
/// Binaries call this once; the library itself only emits events.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
