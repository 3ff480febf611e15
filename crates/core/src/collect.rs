//! One collection pass: dump, resolve, sort.
//!
//! Invariants:
//! - Schema definition reads run on the blocking pool under a deadline; when
//!   the deadline passes, resolution is redone without declaration order.

use std::sync::Arc;
use std::time::Duration;

use shortcuts_config::KeyboardLayout;

use crate::models::{BindingRecord, SettingsEntry};
use crate::order_index::SchemaDefinitionStore;
use crate::resolver::{PrecedenceResolver, Resolution};
use crate::schema_store::FsSchemaStore;
use crate::sort::sort_for_display;
use crate::source::SettingsSource;

/// Acquire the settings dump from `source`, resolve it against `store` and
/// return the winning bindings in display order.
///
/// Never fails: an unavailable dump yields only the static overrides, and a
/// store that does not answer within `schema_deadline` is treated as empty.
pub async fn collect_shortcuts<Src, Store>(
    source: &Src,
    store: Store,
    layout: KeyboardLayout,
    schema_deadline: Duration,
) -> Vec<BindingRecord>
where
    Src: SettingsSource,
    Store: SchemaDefinitionStore + Send + 'static,
{
    let entries = Arc::new(source.dump().await);
    tracing::debug!(entries = entries.len(), %layout, "settings dump acquired");

    let task_entries = Arc::clone(&entries);
    let task = tokio::task::spawn_blocking(move || {
        PrecedenceResolver::new(layout, store).resolve(&task_entries)
    });

    let resolution = match tokio::time::timeout(schema_deadline, task).await {
        Ok(Ok(resolution)) => resolution,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "schema lookup failed; ignoring declaration order");
            resolve_without_schemas(layout, &entries)
        }
        Err(_) => {
            tracing::warn!(
                deadline = ?schema_deadline,
                "schema lookup timed out; ignoring declaration order"
            );
            resolve_without_schemas(layout, &entries)
        }
    };
    sort_for_display(resolution.into_values())
}

/// A store with no directories knows no schemas.
fn resolve_without_schemas(layout: KeyboardLayout, entries: &[SettingsEntry]) -> Resolution {
    PrecedenceResolver::new(layout, FsSchemaStore::default()).resolve(entries)
}
