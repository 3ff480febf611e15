//! In-memory collaborators for tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use shortcuts_core::testing::{InMemorySchemaStore, InMemorySettingsSource};
//!
//! let source = InMemorySettingsSource::from_dump("org.gnome.shell.keybindings toggle-overview ['<Super>s']");
//! let store = InMemorySchemaStore::new().with_schema("org.gnome.shell.keybindings", &["toggle-overview"]);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::SettingsEntry;
use crate::order_index::SchemaDefinitionStore;
use crate::source::{SettingsSource, parse_dump};

/// Settings source returning a fixed set of entries.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsSource {
    entries: Vec<SettingsEntry>,
}

impl InMemorySettingsSource {
    pub fn new(entries: Vec<SettingsEntry>) -> Self {
        Self { entries }
    }

    /// Build from `gsettings list-recursively` style text.
    pub fn from_dump(text: &str) -> Self {
        Self::new(parse_dump(text))
    }
}

impl SettingsSource for InMemorySettingsSource {
    async fn dump(&self) -> Vec<SettingsEntry> {
        self.entries.clone()
    }
}

/// Schema store backed by a map, counting lookups.
#[derive(Debug, Default)]
pub struct InMemorySchemaStore {
    schemas: HashMap<String, Vec<String>>,
    lookups: AtomicUsize,
}

impl InMemorySchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema_id: &str, keys: &[&str]) -> Self {
        self.schemas.insert(
            schema_id.to_string(),
            keys.iter().map(|k| k.to_string()).collect(),
        );
        self
    }

    /// Number of `declared_keys` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl SchemaDefinitionStore for InMemorySchemaStore {
    fn declared_keys(&self, schema_id: &str) -> Vec<String> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.schemas.get(schema_id).cloned().unwrap_or_default()
    }
}
