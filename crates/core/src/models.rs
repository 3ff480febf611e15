//! Data model shared by the resolution pipeline.
//!
//! Responsibilities:
//! - Define the resolved `BindingRecord` and its `Origin`.
//! - Define the raw `SettingsEntry` triple read from the settings dump.
//! - Accumulate custom keybinding fields in `CustomBindingAssembly`.
//!
//! Invariants:
//! - Lower `rank` always outranks higher; within a rank lower `order` wins.
//! - Records are produced once by the resolver and never mutated afterwards.

use serde::Serialize;

/// Rank of the hard-wired window manager shortcuts.
pub const RANK_STATIC: u8 = 0;

/// Rank of the window manager keybinding family.
pub const RANK_WINDOW_MANAGER: u8 = 1;

/// Rank of the shell and media-keys keybinding families.
pub const RANK_SHELL: u8 = 2;

/// Rank of any other application-specific keybinding schema.
pub const RANK_APPLICATION: u8 = 3;

/// Rank of user-defined custom keybindings.
pub const RANK_CUSTOM: u8 = 4;

/// Where a resolved binding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Hard-wired override that always wins its accelerator.
    Static,
    /// Declared by a GSettings keybinding schema.
    Schema,
    /// User-defined custom keybinding.
    Custom,
}

/// A single binding competing for (or owning) a canonical accelerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRecord {
    /// Canonical display form, e.g. "Win + Left".
    pub accelerator: String,
    pub application: String,
    pub action: String,
    pub rank: u8,
    pub order: u32,
    pub origin: Origin,
    /// Accelerator spec as declared, e.g. "<Super>Left".
    pub raw_spec: String,
    /// Schema identifier, custom binding path, or "static".
    pub source: String,
    pub key: String,
}

impl BindingRecord {
    /// Key used to decide between two candidates for the same accelerator.
    ///
    /// Smaller wins. Source, key and raw spec make the comparison total
    /// across distinct declarations that share a rank and order.
    pub fn precedence(&self) -> (u8, u32, &str, &str, &str) {
        (self.rank, self.order, &self.source, &self.key, &self.raw_spec)
    }
}

/// One `(schema, key, value)` line of `gsettings list-recursively`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEntry {
    pub source: String,
    pub key: String,
    pub value: String,
}

impl SettingsEntry {
    pub fn new(
        source: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse a dump line. Whitespace inside the value is collapsed to single
    /// spaces; lines with fewer than three fields yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let source = fields.next()?;
        let key = fields.next()?;
        let value = fields.collect::<Vec<_>>().join(" ");
        if value.is_empty() {
            return None;
        }
        Some(Self::new(source, key, value))
    }
}

/// Fields of one custom keybinding, observed independently in the dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomBindingAssembly {
    pub binding: Option<String>,
    pub name: Option<String>,
    pub command: Option<String>,
}

impl CustomBindingAssembly {
    /// Record one `key = value` observation. Unknown keys are ignored and
    /// empty values count as absent.
    pub fn observe(&mut self, key: &str, value: &str) {
        let value = strip_quotes(value);
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            "binding" => self.binding = value,
            "name" => self.name = value,
            "command" => self.command = value,
            _ => {}
        }
    }
}

/// Strip the quotes GVariant text format puts around strings.
fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches(|c| c == '\'' || c == '"')
}
