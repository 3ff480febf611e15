//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment
//!   variable pollution between tests.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset, for hermetic `temp_env` blocks.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("KEY_LAYOUT", None),
        ("SHORTCUTS_DUMP_TIMEOUT", None),
        ("SHORTCUTS_GSETTINGS_BIN", None),
        ("GSETTINGS_SCHEMA_DIR", None),
        ("XDG_DATA_DIRS", None),
    ]
}
