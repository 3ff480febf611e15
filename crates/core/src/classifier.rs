//! Schema classification.
//!
//! Responsibilities:
//! - Map a GSettings schema identifier to an application label and a
//!   precedence rank.
//! - Keep the recognized keybinding families as data (`ClassifierRule`) so
//!   new families can be added without touching the resolver.
//!
//! Invariants:
//! - Rules are evaluated top-down; the first match wins.
//! - Classification is total: unmatched identifiers fall back to a label
//!   derived from the identifier itself with `RANK_APPLICATION`.

use crate::models::{RANK_APPLICATION, RANK_CUSTOM, RANK_SHELL, RANK_WINDOW_MANAGER};
use crate::normalizer::humanize;

/// Marker shared by the custom keybinding schema and its relocatable paths.
pub const CUSTOM_CONTAINER_MARKER: &str = ".custom-keybinding";

const MEDIA_KEYS_MARKER: &str = ".settings-daemon.plugins.media-keys";

/// One classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierRule {
    /// The identifier matches if it contains any of these.
    pub any_of: &'static [&'static str],
    /// ...and none of these.
    pub none_of: &'static [&'static str],
    pub application: &'static str,
    pub rank: u8,
}

impl ClassifierRule {
    pub fn matches(&self, source: &str) -> bool {
        self.any_of.iter().any(|p| source.contains(p))
            && !self.none_of.iter().any(|p| source.contains(p))
    }
}

/// Built-in rules for the GNOME keybinding families.
pub const DEFAULT_RULES: &[ClassifierRule] = &[
    ClassifierRule {
        any_of: &[
            ".desktop.wm.keybindings",
            ".mutter.wayland.keybindings",
            ".mutter.keybindings",
        ],
        none_of: &[],
        application: "Window Manager",
        rank: RANK_WINDOW_MANAGER,
    },
    ClassifierRule {
        any_of: &[".shell.keybindings"],
        none_of: &[],
        application: "GNOME Shell",
        rank: RANK_SHELL,
    },
    ClassifierRule {
        any_of: &[MEDIA_KEYS_MARKER],
        none_of: &[CUSTOM_CONTAINER_MARKER],
        application: "Media Keys",
        rank: RANK_SHELL,
    },
    ClassifierRule {
        any_of: &[CUSTOM_CONTAINER_MARKER],
        none_of: &[],
        application: "Custom",
        rank: RANK_CUSTOM,
    },
];

/// Application label and rank assigned to a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub application: String,
    pub rank: u8,
}

/// Ordered rule list, first match wins.
#[derive(Debug, Clone)]
pub struct SchemaClassifier {
    rules: Vec<ClassifierRule>,
}

impl Default for SchemaClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl SchemaClassifier {
    pub fn new(rules: Vec<ClassifierRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, source: &str) -> Classification {
        match self.rules.iter().find(|rule| rule.matches(source)) {
            Some(rule) => Classification {
                application: rule.application.to_string(),
                rank: rule.rank,
            },
            None => Classification {
                application: fallback_label(source),
                rank: RANK_APPLICATION,
            },
        }
    }
}

/// Whether a schema identifier belongs to the custom keybinding container.
pub fn is_custom_container(source: &str) -> bool {
    source.contains(CUSTOM_CONTAINER_MARKER)
}

/// Whether a schema identifier holds accelerators at all.
pub fn is_keybinding_container(source: &str) -> bool {
    source.contains("keybinding") || source.contains(MEDIA_KEYS_MARKER)
}

/// `org.gnome.Terminal.keybindings` -> `Terminal`.
fn fallback_label(source: &str) -> String {
    let id = source.split(':').next().unwrap_or(source);
    let id = strip_suffix_ignore_case(id, ".keybindings");
    let id = id.strip_prefix("org.").unwrap_or(id);
    let id = match id.find('.') {
        Some(vendor_end) => &id[vendor_end + 1..],
        None => id,
    };
    let segment = id.rsplit('.').next().unwrap_or(id);
    let label = humanize(segment);
    if label.is_empty() {
        "Unknown".to_string()
    } else {
        label
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> &'a str {
    let Some(split) = s.len().checked_sub(suffix.len()) else {
        return s;
    };
    match s.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(suffix) => &s[..split],
        _ => s,
    }
}
