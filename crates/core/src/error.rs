//! Error types for settings acquisition.
//!
//! These errors never escape the public `SettingsSource::dump` boundary:
//! callers of the collection pipeline only ever see a possibly empty dump.
//! They are exposed so that `GsettingsSource::try_dump` can be inspected
//! and logged.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for settings acquisition.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while acquiring the settings dump.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The dump executable could not be started or waited on.
    #[error("failed to run {}: {source}", .bin.display())]
    Spawn {
        bin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dump did not complete in time; the child was killed.
    #[error("settings dump timed out after {0:?}")]
    TimedOut(Duration),
}
