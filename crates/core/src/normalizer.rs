//! Accelerator normalization.
//!
//! Responsibilities:
//! - Turn GTK accelerator specs such as `<Super><Shift>Left` into canonical
//!   display strings such as `Win + Shift + Left`.
//! - Substitute layout-specific modifier labels.
//! - Reject specs that can never produce a row (multimedia keys, no tokens).
//!
//! Does NOT handle:
//! - Deciding which binding wins an accelerator (see `resolver`).
//!
//! Invariants:
//! - Rejection is signalled with `None`, never an error.
//! - The same spec under the same layout always yields the same string.

use std::sync::LazyLock;

use regex::Regex;
use shortcuts_config::KeyboardLayout;

/// Bracketed modifier runs or plain alphanumeric key runs.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>|[A-Za-z0-9_]+").expect("valid token regex"));

/// Prefix shared by every X11 multimedia keysym (`XF86AudioPlay`, ...).
const MULTIMEDIA_KEY_PREFIX: &str = "xf86";

/// Separator between the parts of a canonical accelerator.
pub const ACCELERATOR_SEPARATOR: &str = " + ";

/// Whether a spec references a multimedia-key code.
pub fn is_multimedia_key(spec: &str) -> bool {
    spec.to_ascii_lowercase().contains(MULTIMEDIA_KEY_PREFIX)
}

/// Title-case a snake/kebab identifier: `page_up` -> `Page Up`.
pub fn humanize(s: &str) -> String {
    s.split(['_', '-'])
        .flat_map(str::split_whitespace)
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalizes accelerator specs for one keyboard layout.
#[derive(Debug, Clone, Copy)]
pub struct AcceleratorNormalizer {
    layout: KeyboardLayout,
}

impl AcceleratorNormalizer {
    pub fn new(layout: KeyboardLayout) -> Self {
        Self { layout }
    }

    /// Label for a bracketed modifier token, or `None` if it is not a
    /// recognized modifier. Matching ignores ASCII case.
    pub fn modifier_label(&self, token: &str) -> Option<&'static str> {
        let name = token.strip_prefix('<')?.strip_suffix('>')?;
        match name.to_ascii_lowercase().as_str() {
            "primary" | "control" | "ctrl" => Some("Ctrl"),
            "shift" => Some("Shift"),
            "alt" => Some(match self.layout {
                KeyboardLayout::Apple => "Option",
                KeyboardLayout::Pc | KeyboardLayout::Chrome => "Alt",
            }),
            "super" => Some(match self.layout {
                KeyboardLayout::Apple => "Command",
                KeyboardLayout::Pc => "Win",
                KeyboardLayout::Chrome => "Search",
            }),
            _ => None,
        }
    }

    /// Canonical display string for `spec`, or `None` if the spec must not
    /// produce a row.
    pub fn normalize(&self, spec: &str) -> Option<String> {
        if is_multimedia_key(spec) {
            return None;
        }

        let parts: Vec<String> = TOKEN_RE
            .find_iter(spec)
            .map(|m| self.render_token(m.as_str()))
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return None;
        }
        Some(parts.join(ACCELERATOR_SEPARATOR))
    }

    fn render_token(&self, token: &str) -> String {
        if let Some(label) = self.modifier_label(token) {
            return label.to_string();
        }
        match token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
            Some(inner) => humanize(inner),
            None => humanize(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc() -> AcceleratorNormalizer {
        AcceleratorNormalizer::new(KeyboardLayout::Pc)
    }

    #[test]
    fn test_super_label_per_layout() {
        let spec = "<Super>+Left";
        assert_eq!(pc().normalize(spec).as_deref(), Some("Win + Left"));
        assert_eq!(
            AcceleratorNormalizer::new(KeyboardLayout::Apple)
                .normalize(spec)
                .as_deref(),
            Some("Command + Left")
        );
        assert_eq!(
            AcceleratorNormalizer::new(KeyboardLayout::Chrome)
                .normalize(spec)
                .as_deref(),
            Some("Search + Left")
        );
    }

    #[test]
    fn test_alt_label_per_layout() {
        assert_eq!(pc().normalize("<Alt>F4").as_deref(), Some("Alt + F4"));
        assert_eq!(
            AcceleratorNormalizer::new(KeyboardLayout::Apple)
                .normalize("<Alt>F4")
                .as_deref(),
            Some("Option + F4")
        );
    }

    #[test]
    fn test_control_aliases_share_label() {
        let n = pc();
        assert_eq!(n.normalize("<Primary>q").as_deref(), Some("Ctrl + Q"));
        assert_eq!(n.normalize("<Control>q").as_deref(), Some("Ctrl + Q"));
        assert_eq!(n.normalize("<Ctrl>q").as_deref(), Some("Ctrl + Q"));
        assert_eq!(n.normalize("<control>q").as_deref(), Some("Ctrl + Q"));
    }

    #[test]
    fn test_unrecognized_modifier_is_humanized() {
        assert_eq!(
            pc().normalize("<Hyper><Mod4>page_down").as_deref(),
            Some("Hyper + Mod4 + Page Down")
        );
    }

    #[test]
    fn test_plain_tokens_are_humanized() {
        let n = pc();
        assert_eq!(n.normalize("<Super>space").as_deref(), Some("Win + Space"));
        assert_eq!(
            n.normalize("<Shift><Super>KP_Enter").as_deref(),
            Some("Shift + Win + Kp Enter")
        );
        assert_eq!(n.normalize("<Super>F2").as_deref(), Some("Win + F2"));
    }

    #[test]
    fn test_bare_modifier() {
        assert_eq!(pc().normalize("<Super>").as_deref(), Some("Win"));
    }

    #[test]
    fn test_rejects_empty_and_punctuation_only() {
        let n = pc();
        assert_eq!(n.normalize(""), None);
        assert_eq!(n.normalize("   "), None);
        assert_eq!(n.normalize("+;"), None);
    }

    #[test]
    fn test_rejects_multimedia_keys() {
        let n = pc();
        assert_eq!(n.normalize("XF86AudioPlay"), None);
        assert_eq!(n.normalize("<Ctrl>XF86AudioMute"), None);
        assert_eq!(n.normalize("<Super>xf86Calculator"), None);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("switch-to-workspace-1"), "Switch To Workspace 1");
        assert_eq!(humanize("toggle_MAXIMIZED"), "Toggle Maximized");
        assert_eq!(humanize("  spaced   out "), "Spaced Out");
        assert_eq!(humanize(""), "");
    }
}
