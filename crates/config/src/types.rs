//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the keyboard layout selection and its accepted spellings.
//! - Define the fully resolved runtime `Config`.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Mapping layouts to modifier labels (see the core crate's normalizer).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Physical keyboard family the shortcut labels are rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardLayout {
    /// Mac keyboards: Super is "Command", Alt is "Option".
    Apple,
    /// PC keyboards: Super is "Win".
    Pc,
    /// Chromebooks: Super is "Search".
    Chrome,
}

impl KeyboardLayout {
    /// All layouts, in the order they are offered interactively.
    pub const ALL: [KeyboardLayout; 3] = [Self::Apple, Self::Pc, Self::Chrome];

    /// Canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Pc => "pc",
            Self::Chrome => "chrome",
        }
    }

    /// Label shown in the interactive layout menu.
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Apple => "Mac / Apple    (Command)",
            Self::Pc => "PC / Windows   (Alt)",
            Self::Chrome => "Chromebook     (Search)",
        }
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a layout name is not one of the accepted spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown keyboard layout '{0}' (expected apple, pc or chrome)")]
pub struct ParseLayoutError(pub String);

impl FromStr for KeyboardLayout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apple" | "mac" => Ok(Self::Apple),
            "pc" | "windows" => Ok(Self::Pc),
            "chrome" | "chromebook" => Ok(Self::Chrome),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Layout chosen non-interactively; `None` means the user must be asked.
    pub layout: Option<KeyboardLayout>,
    /// Upper bound on the settings dump acquisition.
    pub dump_timeout: Duration,
    /// Executable invoked as `<bin> list-recursively`.
    pub gsettings_bin: PathBuf,
    /// Ordered schema definition directories; earlier entries win.
    pub schema_dirs: Vec<PathBuf>,
}
