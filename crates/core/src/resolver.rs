//! Precedence resolution.
//!
//! Responsibilities:
//! - Turn settings entries into candidate bindings (schema and custom).
//! - Keep exactly one winner per canonical accelerator.
//! - Apply the static override table last so it always wins.
//!
//! Does NOT handle:
//! - Acquiring the settings dump (see `source`).
//! - Display ordering (see `sort`).
//!
//! Invariants:
//! - A candidate replaces the current winner only if its
//!   `BindingRecord::precedence` is strictly smaller, which makes the result
//!   independent of entry order.
//! - Custom bindings are offered after every schema binding and with the
//!   custom rank, so they only fill accelerators no schema claimed.
//! - Malformed entries contribute no candidates and raise no errors.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::LazyLock;

use regex::Regex;
use shortcuts_config::KeyboardLayout;

use crate::classifier::{SchemaClassifier, is_custom_container, is_keybinding_container};
use crate::models::{
    BindingRecord, CustomBindingAssembly, Origin, RANK_CUSTOM, RANK_STATIC, SettingsEntry,
};
use crate::normalizer::{AcceleratorNormalizer, humanize};
use crate::order_index::{SchemaDefinitionStore, SchemaOrderIndex, UNKNOWN_ORDER};

/// Single-quoted accelerator specs inside a GVariant value.
static QUOTED_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']*)'").expect("valid quoted spec regex"));

/// Media-keys key listing the paths of custom bindings rather than specs.
const CUSTOM_PATH_LIST_KEY: &str = "custom-keybindings";

/// Application label of every static override.
pub const STATIC_APPLICATION: &str = "Window Manager";

/// Application label of custom bindings whose command is unknown.
pub const CUSTOM_APPLICATION: &str = "Custom";

/// Source recorded on static override records.
pub const STATIC_SOURCE: &str = "static";

/// A hard-wired binding that always wins its accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticOverride {
    pub spec: &'static str,
    pub action: &'static str,
}

/// Window manager keys handled outside the settings store.
pub const STATIC_OVERRIDES: &[StaticOverride] = &[
    StaticOverride {
        spec: "<Super>",
        action: "Show Activities / Search",
    },
    StaticOverride {
        spec: "<Super>+Left",
        action: "Tile Window Left",
    },
    StaticOverride {
        spec: "<Super>+Right",
        action: "Tile Window Right",
    },
    StaticOverride {
        spec: "<Super>+Up",
        action: "Maximise Window",
    },
    StaticOverride {
        spec: "<Super>+Down",
        action: "Restore / Minimise Window",
    },
];

/// Winning binding per canonical accelerator.
pub type Resolution = BTreeMap<String, BindingRecord>;

/// Resolves conflicting declarations for one run.
///
/// Owns the order-index cache, so a resolver should live exactly as long as
/// the run it serves.
#[derive(Debug)]
pub struct PrecedenceResolver<S> {
    normalizer: AcceleratorNormalizer,
    classifier: SchemaClassifier,
    order_index: SchemaOrderIndex<S>,
    overrides: Vec<StaticOverride>,
}

impl<S: SchemaDefinitionStore> PrecedenceResolver<S> {
    pub fn new(layout: KeyboardLayout, store: S) -> Self {
        Self {
            normalizer: AcceleratorNormalizer::new(layout),
            classifier: SchemaClassifier::default(),
            order_index: SchemaOrderIndex::new(store),
            overrides: STATIC_OVERRIDES.to_vec(),
        }
    }

    pub fn with_classifier(mut self, classifier: SchemaClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_overrides(mut self, overrides: Vec<StaticOverride>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn resolve(&mut self, entries: &[SettingsEntry]) -> Resolution {
        let mut winners = Resolution::new();
        let mut customs: BTreeMap<&str, CustomBindingAssembly> = BTreeMap::new();

        for entry in entries {
            if is_custom_container(&entry.source) {
                customs
                    .entry(custom_path(&entry.source))
                    .or_default()
                    .observe(&entry.key, &entry.value);
                continue;
            }
            if !is_keybinding_container(&entry.source) || entry.key == CUSTOM_PATH_LIST_KEY {
                continue;
            }
            for spec in quoted_specs(&entry.value) {
                if let Some(candidate) = self.schema_candidate(entry, spec) {
                    offer(&mut winners, candidate);
                }
            }
        }

        for (path, assembly) in &customs {
            if let Some(candidate) = self.custom_candidate(path, assembly) {
                offer(&mut winners, candidate);
            }
        }

        self.apply_overrides(&mut winners);
        tracing::debug!(
            entries = entries.len(),
            custom_groups = customs.len(),
            winners = winners.len(),
            "resolved shortcuts"
        );
        winners
    }

    fn schema_candidate(&mut self, entry: &SettingsEntry, spec: &str) -> Option<BindingRecord> {
        let accelerator = self.normalizer.normalize(spec)?;
        let classification = self.classifier.classify(&entry.source);
        let order = self.order_index.order_of(&entry.source, &entry.key);
        Some(BindingRecord {
            accelerator,
            application: classification.application,
            action: humanize(&entry.key),
            rank: classification.rank,
            order,
            origin: Origin::Schema,
            raw_spec: spec.to_string(),
            source: entry.source.clone(),
            key: entry.key.clone(),
        })
    }

    fn custom_candidate(&self, path: &str, assembly: &CustomBindingAssembly) -> Option<BindingRecord> {
        let spec = assembly.binding.as_deref()?;
        let accelerator = self.normalizer.normalize(spec)?;

        let application = assembly
            .command
            .as_deref()
            .and_then(executable_label)
            .unwrap_or_else(|| CUSTOM_APPLICATION.to_string());
        let action = assembly
            .name
            .as_deref()
            .map(humanize)
            .filter(|name| !name.is_empty())
            .or_else(|| assembly.command.clone())
            .unwrap_or_else(|| spec.to_string());

        Some(BindingRecord {
            accelerator,
            application,
            action,
            rank: RANK_CUSTOM,
            order: UNKNOWN_ORDER,
            origin: Origin::Custom,
            raw_spec: spec.to_string(),
            source: path.to_string(),
            key: "binding".to_string(),
        })
    }

    fn apply_overrides(&self, winners: &mut Resolution) {
        for (position, fixed) in self.overrides.iter().enumerate() {
            let Some(accelerator) = self.normalizer.normalize(fixed.spec) else {
                continue;
            };
            let record = BindingRecord {
                accelerator: accelerator.clone(),
                application: STATIC_APPLICATION.to_string(),
                action: fixed.action.to_string(),
                rank: RANK_STATIC,
                order: u32::try_from(position).unwrap_or(UNKNOWN_ORDER),
                origin: Origin::Static,
                raw_spec: fixed.spec.to_string(),
                source: STATIC_SOURCE.to_string(),
                key: fixed.spec.to_string(),
            };
            if let Some(replaced) = winners.insert(accelerator, record) {
                tracing::debug!(
                    accelerator = %replaced.accelerator,
                    replaced = %replaced.source,
                    "static override replaced binding"
                );
            }
        }
    }
}

fn offer(winners: &mut Resolution, candidate: BindingRecord) {
    match winners.entry(candidate.accelerator.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(candidate);
        }
        Entry::Occupied(mut slot) => {
            if candidate.precedence() < slot.get().precedence() {
                tracing::trace!(
                    accelerator = %candidate.accelerator,
                    winner = %candidate.source,
                    loser = %slot.get().source,
                    "candidate outranks current binding"
                );
                slot.insert(candidate);
            }
        }
    }
}

fn quoted_specs(value: &str) -> impl Iterator<Item = &str> {
    QUOTED_SPEC_RE
        .captures_iter(value)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
}

/// Per-entry path of a relocatable custom binding schema.
fn custom_path(source: &str) -> &str {
    match source.split_once(':') {
        Some((_, path)) => path,
        None => source,
    }
}

/// `/usr/bin/gnome-terminal --window` -> `Gnome Terminal`.
fn executable_label(command: &str) -> Option<String> {
    let executable = command.split_whitespace().next()?;
    let name = executable.rsplit('/').next().unwrap_or(executable);
    let label = humanize(name);
    (!label.is_empty()).then_some(label)
}
