//! Logging setup.
//!
//! Events go to stderr so stdout stays machine-readable. `RUST_LOG` takes
//! precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once at the start of `main`.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
