//! Interactive keyboard layout selection.
//!
//! Responsibilities:
//! - Offer the three layouts in a `dialoguer` menu on the terminal.
//! - Report cancellation (Esc, `q`, Ctrl+C, or no terminal) as `PromptAborted`.

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use shortcuts_config::KeyboardLayout;
use thiserror::Error;

/// The user left the layout menu without choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Layout selection cancelled")]
pub struct PromptAborted;

/// Ask the user which keyboard layout to label shortcuts for.
pub fn select_layout() -> Result<KeyboardLayout, PromptAborted> {
    let items: Vec<&str> = KeyboardLayout::ALL
        .iter()
        .map(|layout| layout.menu_label())
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select keyboard layout")
        .items(&items)
        .default(0)
        .interact_opt();

    match choice {
        Ok(Some(index)) => layout_at(index).ok_or(PromptAborted),
        Ok(None) => Err(PromptAborted),
        Err(e) => {
            tracing::debug!(error = %e, "layout prompt unavailable");
            Err(PromptAborted)
        }
    }
}

fn layout_at(index: usize) -> Option<KeyboardLayout> {
    KeyboardLayout::ALL.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_matches_layouts() {
        assert_eq!(layout_at(0), Some(KeyboardLayout::Apple));
        assert_eq!(layout_at(1), Some(KeyboardLayout::Pc));
        assert_eq!(layout_at(2), Some(KeyboardLayout::Chrome));
        assert_eq!(layout_at(3), None);
    }
}
