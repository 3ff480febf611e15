//! Settings dump acquisition.
//!
//! Responsibilities:
//! - Define the `SettingsSource` collaborator boundary.
//! - Run `gsettings list-recursively` under a timeout and parse its output.
//!
//! Invariants:
//! - `SettingsSource::dump` never fails: spawn errors, timeouts and non-zero
//!   exits degrade to an empty or partial dump, logged with `tracing`.
//! - A timed-out child is killed rather than left running.

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{Result, SourceError};
use crate::models::SettingsEntry;

/// Provider of raw `(schema, key, value)` triples.
pub trait SettingsSource {
    /// Best-effort dump of the settings store; empty on failure.
    fn dump(&self) -> impl Future<Output = Vec<SettingsEntry>> + Send;
}

/// Parse `gsettings list-recursively` output, skipping malformed lines.
pub fn parse_dump(text: &str) -> Vec<SettingsEntry> {
    text.lines().filter_map(SettingsEntry::parse_line).collect()
}

/// Runs the `gsettings` executable.
#[derive(Debug, Clone)]
pub struct GsettingsSource {
    bin: PathBuf,
    timeout: Duration,
}

impl GsettingsSource {
    pub fn new(bin: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    /// Raw dump text, with failures reported.
    ///
    /// A non-zero exit status is not an error: whatever the command printed
    /// before failing is still returned.
    pub async fn try_dump(&self) -> Result<String> {
        let mut command = Command::new(&self.bin);
        command
            .arg("list-recursively")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| SourceError::Spawn {
                bin: self.bin.clone(),
                source,
            })?,
            Err(_) => return Err(SourceError::TimedOut(self.timeout)),
        };

        if !output.status.success() {
            tracing::warn!(
                bin = %self.bin.display(),
                status = %output.status,
                "settings dump exited unsuccessfully; using partial output"
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl SettingsSource for GsettingsSource {
    async fn dump(&self) -> Vec<SettingsEntry> {
        match self.try_dump().await {
            Ok(text) => parse_dump(&text),
            Err(e) => {
                tracing::warn!(error = %e, "settings dump unavailable; continuing without it");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
org.gnome.desktop.wm.keybindings close ['<Alt>F4']
org.gnome.desktop.interface clock-format '24h'

broken-line
org.gnome.shell.keybindings toggle-overview @as []
";

    #[test]
    fn test_parse_dump_skips_malformed_lines() {
        let entries = parse_dump(DUMP);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key, "close");
        assert_eq!(entries[2].value, "@as []");
    }

    #[tokio::test]
    async fn test_missing_binary_degrades_to_empty() {
        let source = GsettingsSource::new(
            "/nonexistent/gsettings-for-tests",
            Duration::from_secs(1),
        );
        assert!(matches!(
            source.try_dump().await,
            Err(SourceError::Spawn { .. })
        ));
        assert!(source.dump().await.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_reads_stdout_of_failing_command() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("gsettings");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"org.gnome.shell.keybindings toggle-overview ['<Super>s']\"\nexit 1\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let source = GsettingsSource::new(&script, Duration::from_secs(5));
        let entries = source.dump().await;
        assert_eq!(
            entries,
            vec![SettingsEntry::new(
                "org.gnome.shell.keybindings",
                "toggle-overview",
                "['<Super>s']"
            )]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stalled_command_times_out() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("gsettings");
        std::fs::write(&script, "#!/bin/sh\nexec sleep 30\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let source = GsettingsSource::new(&script, Duration::from_millis(200));
        assert!(matches!(
            source.try_dump().await,
            Err(SourceError::TimedOut(_))
        ));
    }
}
