//! Option records derived from a native select.

use crate::native::{NativeOption, NativeOptionRef};

/// One selectable choice mirrored from a native entry.
#[derive(Debug, Clone)]
pub struct SelectOption {
    value: String,
    label: String,
    selected: bool,
    source_ref: NativeOptionRef,
}

impl SelectOption {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Back-reference to the native entry this option mirrors.
    pub fn source_ref(&self) -> &NativeOptionRef {
        &self.source_ref
    }

    /// Set the flag here and on the native entry.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !self.source_ref.set_selected(selected) {
            log::warn!("native entry for option '{}' no longer exists", self.value);
        }
    }

    /// Case-insensitive prefix match against the label. `prefix` must already
    /// be lowercase.
    pub(crate) fn label_starts_with(&self, prefix: &str) -> bool {
        self.label.to_lowercase().starts_with(prefix)
    }
}

/// Snapshot native entries into option records, preserving order.
///
/// Nothing is filtered or deduplicated. Later changes to the entries are not
/// observed by the returned records.
pub fn extract_options(entries: &[NativeOption]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|entry| SelectOption {
            value: entry.value(),
            label: entry.label(),
            selected: entry.is_selected(),
            source_ref: entry.downgrade(),
        })
        .collect()
}
