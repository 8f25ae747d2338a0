//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured default filter.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the event filter, preferring `RUST_LOG` when it is set and valid.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .is_ok()
}
