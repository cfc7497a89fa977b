pub mod builders;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset: scheduler passes and evaluator
/// diagnostics from this crate, warnings from everything else.
const DEFAULT_TEST_FILTER: &str = "warn,courseplan=debug";

/// Install a test subscriber once per test binary.
///
/// Output goes through `with_test_writer()`, so it only shows up for failing
/// tests (or with `-- --nocapture`). Override with e.g.
/// `RUST_LOG=courseplan::scheduler=trace cargo test`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .without_time()
            .init();
    });
}
