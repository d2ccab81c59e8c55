//! Logging setup shared by unit and integration tests

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a test-writer subscriber, at most once per test binary.
///
/// Filter comes from `RUST_LOG`, falling back to `cfgtree=debug`.
pub fn init_test_setup() {
    LOGGING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cfgtree=debug"));
        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_filter(filter);
        // another harness may already own the global dispatcher
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            eprintln!("test logging: subscriber already installed");
        }
        tracing::debug!("test logging ready");
    });
}
