//! Centralized constants for the shortcut resolver workspace.
//!
//! Default values shared between the config loader, the settings source
//! and the CLI live here so they are not duplicated as magic numbers.

// =============================================================================
// Settings Dump Acquisition
// =============================================================================

/// Default time allowed for `gsettings list-recursively` to finish, in seconds.
pub const DEFAULT_DUMP_TIMEOUT_SECS: u64 = 3;

/// Maximum allowed dump timeout in seconds.
pub const MAX_DUMP_TIMEOUT_SECS: u64 = 60;

/// Executable used to dump the settings store when none is configured.
pub const DEFAULT_GSETTINGS_BIN: &str = "gsettings";

// =============================================================================
// Schema Definition Search
// =============================================================================

/// Sub-directory of an XDG data directory holding compiled-in schema sources.
pub const SCHEMA_SUBDIR: &str = "glib-2.0/schemas";

/// Fallback for `XDG_DATA_DIRS` when the variable is unset (XDG base dir spec).
pub const DEFAULT_XDG_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];

/// File suffix of schema definition files.
pub const SCHEMA_FILE_SUFFIX: &str = ".gschema.xml";

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the keyboard layout without prompting.
pub const ENV_KEY_LAYOUT: &str = "KEY_LAYOUT";

/// Overrides the dump timeout (seconds).
pub const ENV_DUMP_TIMEOUT: &str = "SHORTCUTS_DUMP_TIMEOUT";

/// Overrides the settings dump executable.
pub const ENV_GSETTINGS_BIN: &str = "SHORTCUTS_GSETTINGS_BIN";

/// Colon-separated schema directories searched before the XDG locations.
pub const ENV_GSETTINGS_SCHEMA_DIR: &str = "GSETTINGS_SCHEMA_DIR";

/// Colon-separated XDG data directories.
pub const ENV_XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";
