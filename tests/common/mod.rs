//! Shared test utilities.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a test run. Safe to call from every test;
/// only the first call installs the subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
