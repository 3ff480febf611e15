//! Table formatter implementation.
//!
//! Invariants:
//! - Columns are left-aligned and padded to 28, 28 and 40 characters, then
//!   trailing whitespace is trimmed; longer values are never truncated.
//! - Separator lines are 100 box-drawing characters.

use anyhow::Result;
use shortcuts_core::BindingRecord;

use crate::formatters::Formatter;

const SHORTCUT_WIDTH: usize = 28;
const APPLICATION_WIDTH: usize = 28;
const ACTION_WIDTH: usize = 40;
const SEPARATOR_WIDTH: usize = 100;
const SEPARATOR_CHAR: char = '─';

/// Fixed-width table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_shortcuts(&self, records: &[BindingRecord]) -> Result<String> {
        let separator: String = std::iter::repeat_n(SEPARATOR_CHAR, SEPARATOR_WIDTH).collect();

        let mut output = String::new();
        output.push_str(&separator);
        output.push('\n');
        push_row(&mut output, "Shortcut", "Application", "Action");
        output.push_str(&separator);
        output.push('\n');
        for record in records {
            push_row(
                &mut output,
                &record.accelerator,
                &record.application,
                &record.action,
            );
        }
        output.push_str(&separator);
        output.push('\n');
        Ok(output)
    }
}

fn push_row(output: &mut String, shortcut: &str, application: &str, action: &str) {
    let row = format!(
        "{:<sw$} {:<aw$} {:<cw$}",
        shortcut,
        application,
        action,
        sw = SHORTCUT_WIDTH,
        aw = APPLICATION_WIDTH,
        cw = ACTION_WIDTH,
    );
    output.push_str(row.trim_end());
    output.push('\n');
}
