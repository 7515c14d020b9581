//! Structured logging setup shared by the binaries.

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a JSON `tracing` subscriber writing to stderr.
///
/// Filtering follows `RUST_LOG`. Stdout stays reserved for rendered results.
/// A second call keeps the first subscriber and logs a warning.
pub fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing subscriber already installed");
    }
}
