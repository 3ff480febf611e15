//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not read environment variables; `shortcuts-config` owns those so an
//!   unrecognized `KEY_LAYOUT` can fall back to the prompt instead of failing.

use std::path::PathBuf;

use clap::Parser;
use shortcuts_config::KeyboardLayout;

#[derive(Parser)]
#[command(name = "gnome-shortcuts")]
#[command(
    about = "List the GNOME keyboard shortcuts that actually take effect",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gnome-shortcuts --layout pc\n  KEY_LAYOUT=mac gnome-shortcuts\n  gnome-shortcuts --layout chrome --output json\n  gnome-shortcuts --schema-dir ~/.local/share/glib-2.0/schemas\n"
)]
pub struct Cli {
    /// Keyboard layout used for modifier labels (apple, pc, chrome).
    ///
    /// Falls back to KEY_LAYOUT, then to an interactive menu.
    #[arg(short, long, value_name = "LAYOUT")]
    pub layout: Option<KeyboardLayout>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Seconds to wait for the settings dump (1-60)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to the gsettings executable
    #[arg(long, value_name = "PATH")]
    pub gsettings_bin: Option<PathBuf>,

    /// Extra directory searched for *.gschema.xml files before the defaults.
    ///
    /// May be given more than once.
    #[arg(long, value_name = "DIR")]
    pub schema_dir: Vec<PathBuf>,
}
