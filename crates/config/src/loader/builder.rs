//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Resolve the ordered schema definition search path.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, because the
//!   CLI applies them after `from_env()`.
//! - Schema directories are searched in this order: explicit directories,
//!   `GSETTINGS_SCHEMA_DIR`, the user data directory, then `XDG_DATA_DIRS`.
//!   Duplicates keep their first position.

use std::path::PathBuf;
use std::time::Duration;

use directories::BaseDirs;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_DUMP_TIMEOUT_SECS, DEFAULT_GSETTINGS_BIN, DEFAULT_XDG_DATA_DIRS,
    MAX_DUMP_TIMEOUT_SECS, SCHEMA_SUBDIR,
};
use crate::types::{Config, KeyboardLayout};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    layout: Option<KeyboardLayout>,
    dump_timeout: Option<Duration>,
    gsettings_bin: Option<PathBuf>,
    extra_schema_dirs: Vec<PathBuf>,
    env_schema_dirs: Vec<PathBuf>,
    user_data_dir: Option<PathBuf>,
    data_dirs: Option<Vec<PathBuf>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            layout: None,
            dump_timeout: None,
            gsettings_bin: None,
            extra_schema_dirs: Vec::new(),
            env_schema_dirs: Vec::new(),
            user_data_dir: None,
            data_dirs: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the keyboard layout, skipping the interactive prompt.
    pub fn with_layout(mut self, layout: KeyboardLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the dump timeout.
    pub fn with_dump_timeout(mut self, timeout: Duration) -> Self {
        self.dump_timeout = Some(timeout);
        self
    }

    /// Set the settings dump executable.
    pub fn with_gsettings_bin(mut self, bin: PathBuf) -> Self {
        self.gsettings_bin = Some(bin);
        self
    }

    /// Prepend a schema directory to the search path.
    pub fn with_schema_dir(mut self, dir: PathBuf) -> Self {
        self.extra_schema_dirs.push(dir);
        self
    }

    /// Override the per-user data directory (primarily for testing).
    pub fn with_user_data_dir(mut self, dir: PathBuf) -> Self {
        self.user_data_dir = Some(dir);
        self
    }

    /// Override the system data directories (primarily for testing).
    pub fn with_data_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.data_dirs = Some(dirs);
        self
    }

    pub(crate) fn set_layout(&mut self, layout: Option<KeyboardLayout>) {
        self.layout = layout;
    }

    pub(crate) fn set_dump_timeout(&mut self, timeout: Option<Duration>) {
        self.dump_timeout = timeout;
    }

    pub(crate) fn set_gsettings_bin(&mut self, bin: Option<PathBuf>) {
        self.gsettings_bin = bin;
    }

    pub(crate) fn set_env_schema_dirs(&mut self, dirs: Vec<PathBuf>) {
        self.env_schema_dirs = dirs;
    }

    pub(crate) fn set_data_dirs(&mut self, dirs: Option<Vec<PathBuf>>) {
        self.data_dirs = dirs;
    }

    fn schema_dirs(&self) -> Vec<PathBuf> {
        let user_data_dir = self
            .user_data_dir
            .clone()
            .or_else(|| BaseDirs::new().map(|dirs| dirs.data_dir().to_path_buf()));
        let data_dirs = self.data_dirs.clone().unwrap_or_else(|| {
            DEFAULT_XDG_DATA_DIRS.iter().map(PathBuf::from).collect()
        });

        let candidates = self
            .extra_schema_dirs
            .iter()
            .cloned()
            .chain(self.env_schema_dirs.iter().cloned())
            .chain(user_data_dir.map(|dir| dir.join(SCHEMA_SUBDIR)))
            .chain(data_dirs.into_iter().map(|dir| dir.join(SCHEMA_SUBDIR)));

        let mut dirs: Vec<PathBuf> = Vec::new();
        for dir in candidates {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let dump_timeout = self
            .dump_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_DUMP_TIMEOUT_SECS));
        validate_dump_timeout(dump_timeout)?;

        let schema_dirs = self.schema_dirs();

        Ok(Config {
            layout: self.layout,
            dump_timeout,
            gsettings_bin: self
                .gsettings_bin
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GSETTINGS_BIN)),
            schema_dirs,
        })
    }
}

fn validate_dump_timeout(timeout: Duration) -> Result<(), ConfigError> {
    if timeout.is_zero() {
        return Err(ConfigError::InvalidTimeout {
            message: "must be greater than zero".to_string(),
        });
    }
    if timeout.as_secs() > MAX_DUMP_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "must be at most {} seconds (got {})",
                MAX_DUMP_TIMEOUT_SECS,
                timeout.as_secs()
            ),
        });
    }
    Ok(())
}
