//! Precedence resolution for GNOME keyboard shortcuts.
//!
//! Shortcuts are declared across many GSettings schemas, custom user
//! bindings and a handful of hard-wired window manager keys. This crate works
//! out which single binding actually fires for each key combination and
//! orders the winners for display.

pub mod classifier;
mod collect;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod order_index;
pub mod resolver;
pub mod schema_store;
pub mod sort;
pub mod source;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use classifier::{Classification, ClassifierRule, SchemaClassifier};
pub use collect::collect_shortcuts;
pub use error::{Result, SourceError};
pub use models::{BindingRecord, CustomBindingAssembly, Origin, SettingsEntry};
pub use normalizer::{AcceleratorNormalizer, humanize};
pub use order_index::{SchemaDefinitionStore, SchemaOrderIndex, UNKNOWN_ORDER};
pub use resolver::{PrecedenceResolver, Resolution, STATIC_OVERRIDES, StaticOverride};
pub use schema_store::FsSchemaStore;
pub use sort::sort_for_display;
pub use source::{GsettingsSource, SettingsSource, parse_dump};
pub use shortcuts_config::KeyboardLayout;
