//! Declaration-order lookup for schema keys.
//!
//! Responsibilities:
//! - Define the `SchemaDefinitionStore` collaborator boundary.
//! - Cache each schema's key positions for the lifetime of one run.
//!
//! Invariants:
//! - Each schema identifier is looked up in the store at most once per index.
//! - Unknown schemas and unknown keys map to `UNKNOWN_ORDER`, so their
//!   bindings sort last within their rank.

use std::collections::HashMap;
use std::sync::Arc;

/// Order assigned to keys whose declaration position is unknown.
pub const UNKNOWN_ORDER: u32 = u32::MAX;

/// Source of schema key declarations.
///
/// Implementations are best-effort: any failure (missing directory,
/// unreadable file, malformed definition) yields an empty list and is never
/// raised to the caller.
pub trait SchemaDefinitionStore {
    /// Key names declared by `schema_id`, in declaration order.
    fn declared_keys(&self, schema_id: &str) -> Vec<String>;
}

impl<T: SchemaDefinitionStore + ?Sized> SchemaDefinitionStore for &T {
    fn declared_keys(&self, schema_id: &str) -> Vec<String> {
        (**self).declared_keys(schema_id)
    }
}

impl<T: SchemaDefinitionStore + ?Sized> SchemaDefinitionStore for Arc<T> {
    fn declared_keys(&self, schema_id: &str) -> Vec<String> {
        (**self).declared_keys(schema_id)
    }
}

/// Per-run memo of key positions, keyed by schema identifier.
#[derive(Debug)]
pub struct SchemaOrderIndex<S> {
    store: S,
    cache: HashMap<String, HashMap<String, u32>>,
}

impl<S: SchemaDefinitionStore> SchemaOrderIndex<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of schemas resolved so far.
    pub fn cached_schemas(&self) -> usize {
        self.cache.len()
    }

    /// Zero-based position of `key` within `source`, or `UNKNOWN_ORDER`.
    ///
    /// A relocatable path suffix (`schema:/path/`) is ignored.
    pub fn order_of(&mut self, source: &str, key: &str) -> u32 {
        self.positions(source)
            .get(key)
            .copied()
            .unwrap_or(UNKNOWN_ORDER)
    }

    /// All known key positions for `source`, loading them on first use.
    pub fn positions(&mut self, source: &str) -> &HashMap<String, u32> {
        let schema_id = source.split(':').next().unwrap_or(source);
        let store = &self.store;
        self.cache
            .entry(schema_id.to_string())
            .or_insert_with(|| {
                let keys = store.declared_keys(schema_id);
                tracing::debug!(schema = schema_id, keys = keys.len(), "indexed schema keys");
                index_keys(keys)
            })
    }
}

/// First declaration wins if a key name repeats.
fn index_keys(keys: Vec<String>) -> HashMap<String, u32> {
    let mut positions = HashMap::with_capacity(keys.len());
    for (position, key) in keys.into_iter().enumerate() {
        let position = u32::try_from(position).unwrap_or(UNKNOWN_ORDER);
        positions.entry(key).or_insert(position);
    }
    positions
}
