//! Logging setup for applications embedding the stores

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` if `verbose`, else `info`.
/// Returns `false` if a subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .is_ok()
}
