//! Shared test utilities for gnome-shortcuts integration tests.
//!
//! Invariants / Assumptions:
//! - Commands never load a local `.env`, never see the host's layout or
//!   schema directories, and never run the host's `gsettings`.

use assert_cmd::Command;

/// Returns a hermetic `gnome-shortcuts` command whose settings dump is empty.
pub fn shortcuts_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gnome-shortcuts");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // No real gsettings and no real schema directories
    cmd.env("SHORTCUTS_GSETTINGS_BIN", "/nonexistent/gsettings-for-tests")
        .env("XDG_DATA_HOME", "/nonexistent/data-home")
        .env("XDG_DATA_DIRS", "/nonexistent/data-dirs");

    // Clear potential host leakage
    cmd.env_remove("KEY_LAYOUT")
        .env_remove("SHORTCUTS_DUMP_TIMEOUT")
        .env_remove("GSETTINGS_SCHEMA_DIR")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes an executable script that prints `dump` like `gsettings list-recursively`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn fake_gsettings(dir: &std::path::Path, dump: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dump_path = dir.join("dump.txt");
    std::fs::write(&dump_path, dump).unwrap();

    let script = dir.join("gsettings");
    std::fs::write(
        &script,
        format!("#!/bin/sh\ncat '{}'\n", dump_path.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
