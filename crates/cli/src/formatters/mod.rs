//! Output formatters for the shortcut list.
//!
//! Responsibilities:
//! - Render sorted `BindingRecord`s as a fixed-width table or as JSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Sorting; records arrive in display order.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior |
//! |--------|---------------------|
//! | JSON | `[]` |
//! | Table | Header and separators only |

use std::str::FromStr;

use anyhow::Result;
use shortcuts_core::BindingRecord;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json", s),
        }
    }
}

/// Renders a list of winning bindings.
pub trait Formatter {
    fn format_shortcuts(&self, records: &[BindingRecord]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests;
