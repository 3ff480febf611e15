//! JSON formatter implementation.

use anyhow::Result;
use shortcuts_core::BindingRecord;

use crate::formatters::Formatter;

/// Pretty-printed JSON array of records.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_shortcuts(&self, records: &[BindingRecord]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');
        Ok(json)
    }
}
