//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging, honoring RUST_LOG and falling back to `default_filter`
pub fn setup_logging(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
