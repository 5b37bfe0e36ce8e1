//! The native selection control a widget mirrors.
//!
//! A `NativeSelect` belongs to the host page. It stays authoritative for form
//! submission: whatever entry is flagged selected here is the submitted value.

use std::sync::{Arc, RwLock, Weak};

#[derive(Debug)]
struct NativeOptionInner {
    value: String,
    label: String,
    selected: bool,
}

/// One entry of a native select.
///
/// Clones share the same entry, so a flag set through one handle is seen by
/// every other.
#[derive(Debug, Clone)]
pub struct NativeOption {
    inner: Arc<RwLock<NativeOptionInner>>,
}

impl NativeOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NativeOptionInner {
                value: value.into(),
                label: label.into(),
                selected: false,
            })),
        }
    }

    /// Builder form of [`set_selected`](Self::set_selected).
    pub fn selected(self, selected: bool) -> Self {
        self.set_selected(selected);
        self
    }

    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    pub fn is_selected(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(false)
    }

    /// Set the selected flag on this entry only.
    pub fn set_selected(&self, selected: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = selected;
        }
    }

    /// Non-owning handle used by mirrors to push state back.
    pub fn downgrade(&self) -> NativeOptionRef {
        NativeOptionRef(Arc::downgrade(&self.inner))
    }
}

/// Weak back-reference to a [`NativeOption`].
#[derive(Debug, Clone, Default)]
pub struct NativeOptionRef(Weak<RwLock<NativeOptionInner>>);

impl NativeOptionRef {
    /// Push a selected flag to the entry. Returns false if the entry is gone.
    pub fn set_selected(&self, selected: bool) -> bool {
        let Some(inner) = self.0.upgrade() else {
            return false;
        };
        if let Ok(mut guard) = inner.write() {
            guard.selected = selected;
        }
        true
    }

    /// Selected flag of the entry, if it still exists.
    pub fn is_selected(&self) -> Option<bool> {
        let inner = self.0.upgrade()?;
        inner.read().ok().map(|guard| guard.selected)
    }
}

/// A single-value native select control.
#[derive(Debug, Clone)]
pub struct NativeSelect {
    id: String,
    name: Option<String>,
    hidden: bool,
    options: Vec<NativeOption>,
}

impl NativeSelect {
    /// Create a select from its entries.
    ///
    /// Selectedness is normalised the way a native single select does it: the
    /// last entry flagged selected wins, and with none flagged the first entry
    /// is selected.
    pub fn new(id: impl Into<String>, options: impl IntoIterator<Item = NativeOption>) -> Self {
        let options: Vec<NativeOption> = options.into_iter().collect();
        let chosen = options
            .iter()
            .rposition(NativeOption::is_selected)
            .or((!options.is_empty()).then_some(0));

        for (i, option) in options.iter().enumerate() {
            option.set_selected(Some(i) == chosen);
        }

        Self {
            id: id.into(),
            name: None,
            hidden: false,
            options,
        }
    }

    /// Set the form field name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Element id of the control in the host page.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn options(&self) -> &[NativeOption] {
        &self.options
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Index of the first entry flagged selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(NativeOption::is_selected)
    }

    /// Value of the selected entry.
    pub fn value(&self) -> Option<String> {
        self.selected_index().map(|i| self.options[i].value())
    }

    /// `(name, value)` pair submitted with the form, if the control is named
    /// and has a selection.
    pub fn form_entry(&self) -> Option<(String, String)> {
        let name = self.name.clone()?;
        Some((name, self.value()?))
    }
}
