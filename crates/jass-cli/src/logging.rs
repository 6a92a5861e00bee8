use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global subscriber: compact output on stderr,
/// filtered by `RUST_LOG` when set, `info` otherwise.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
