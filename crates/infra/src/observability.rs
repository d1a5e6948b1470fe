//! Tracing subscriber setup
//!
//! Library code only emits `tracing` events; binaries and tests pick the
//! output format once at startup. `RUST_LOG` always overrides the level
//! passed in.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with compact stderr output.
///
/// Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum level or filter directive, e.g. `"info"` or
///   `"calprint_core=debug"`.
pub fn init_subscriber(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails only when a global subscriber is already set
    let _ = subscriber.try_init();
}

/// Like [`init_subscriber`] but writes one JSON object per event.
pub fn init_json_subscriber(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .json();

    let _ = subscriber.try_init();
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
