//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing. Manual
//! mocks keep collaborator behavior explicit and let several gateways share
//! one call log, which is what the cascade-ordering assertions need.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

/// Install a test subscriber so `tracing` output shows up under
/// `--nocapture`; safe to call from any number of tests
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
