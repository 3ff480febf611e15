//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the environment variables the resolver honours.
//! - Apply their values to a `ConfigLoader`.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - An unrecognized `KEY_LAYOUT` is not an error; the layout stays unset so
//!   the user is asked interactively.
//! - A non-numeric `SHORTCUTS_DUMP_TIMEOUT` returns `ConfigError::InvalidValue`.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_DUMP_TIMEOUT, ENV_GSETTINGS_BIN, ENV_GSETTINGS_SCHEMA_DIR, ENV_KEY_LAYOUT,
    ENV_XDG_DATA_DIRS,
};
use crate::types::KeyboardLayout;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Split a colon-separated directory list, dropping empty segments.
pub(crate) fn split_path_list(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(raw) = env_var_or_none(ENV_KEY_LAYOUT) {
        match raw.parse::<KeyboardLayout>() {
            Ok(layout) => loader.set_layout(Some(layout)),
            Err(e) => tracing::warn!("Ignoring {}: {}", ENV_KEY_LAYOUT, e),
        }
    }
    if let Some(timeout) = env_var_or_none(ENV_DUMP_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_DUMP_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_dump_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(bin) = env_var_or_none(ENV_GSETTINGS_BIN) {
        loader.set_gsettings_bin(Some(PathBuf::from(bin)));
    }
    if let Some(dirs) = env_var_or_none(ENV_GSETTINGS_SCHEMA_DIR) {
        loader.set_env_schema_dirs(split_path_list(&dirs));
    }
    if let Some(dirs) = env_var_or_none(ENV_XDG_DATA_DIRS) {
        loader.set_data_dirs(Some(split_path_list(&dirs)));
    }
    Ok(())
}
