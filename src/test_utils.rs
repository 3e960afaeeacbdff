//! Shared helpers for unit tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger once per test run. Run tests with
/// `RUST_LOG=debug` to see the classifier/router traces.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
