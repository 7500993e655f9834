//! Shared helpers for `graphview` integration tests.

pub mod builders;
pub mod fixtures;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a per-test tracing subscriber once per test binary.
///
/// Output goes through `with_test_writer()`, so it only shows up for failing
/// tests (or with `-- --nocapture`). Defaults to `warn`; override with e.g.
/// `RUST_LOG=graphview=debug cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}
