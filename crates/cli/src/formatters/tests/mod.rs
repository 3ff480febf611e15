//! Formatter tests split by output format.


use shortcuts_core::{BindingRecord, Origin, UNKNOWN_ORDER};

/// Helper to build a record with the display fields set.
pub fn make_record(accelerator: &str, application: &str, action: &str) -> BindingRecord {
    BindingRecord {
        accelerator: accelerator.to_string(),
        application: application.to_string(),
        action: action.to_string(),
        rank: 3,
        order: UNKNOWN_ORDER,
        origin: Origin::Schema,
        raw_spec: "<Primary>q".to_string(),
        source: "org.example.editor.keybindings".to_string(),
        key: "quit".to_string(),
    }
}
