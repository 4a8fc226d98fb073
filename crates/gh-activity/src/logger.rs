//! Logging set-up
//!
//! Diagnostics go to stderr through `env_logger` so stdout carries only the
//! report. `RUST_LOG` overrides the default `warn` filter.

use env_logger::Env;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .try_init();
}
