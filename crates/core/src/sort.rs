//! Display ordering of resolved bindings.

use std::cmp::Ordering;

use crate::models::BindingRecord;

/// Rank, then order, then application and action labels (ordinal), then
/// accelerator so that no two distinct records compare equal.
pub fn display_cmp(a: &BindingRecord, b: &BindingRecord) -> Ordering {
    a.rank
        .cmp(&b.rank)
        .then(a.order.cmp(&b.order))
        .then_with(|| a.application.cmp(&b.application))
        .then_with(|| a.action.cmp(&b.action))
        .then_with(|| a.accelerator.cmp(&b.accelerator))
}

/// Collect resolved bindings into display order.
pub fn sort_for_display(records: impl IntoIterator<Item = BindingRecord>) -> Vec<BindingRecord> {
    let mut records: Vec<BindingRecord> = records.into_iter().collect();
    records.sort_by(display_cmp);
    records
}
