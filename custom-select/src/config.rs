//! Select widget configuration.

use std::time::Duration;

/// Class names applied to the rendered elements.
///
/// The `selected` and `show` classes double as state: the widget queries
/// them to find the marked entry and the list visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Root container.
    pub container: String,
    /// Label area showing the selected option.
    pub label: String,
    /// Option list.
    pub list: String,
    /// Each rendered option entry.
    pub option: String,
    /// Marker on the entry of the selected option.
    pub selected: String,
    /// Marker on the list while the dropdown is open.
    pub show: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "custom-select__container".into(),
            label: "custom-select__value".into(),
            list: "custom-select__options".into(),
            option: "custom-select__option".into(),
            selected: "selected".into(),
            show: "show".into(),
        }
    }
}

/// Per-widget configuration.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    /// Class names for the rendered structure.
    pub classes: ClassNames,

    /// Data attribute key carrying each entry's option value.
    pub data_key: String,

    /// Inactivity after which the type-ahead buffer is cleared.
    pub search_delay: Duration,

    /// Rows visible in the option list before it scrolls.
    /// None = the list shows every option.
    pub visible_rows: Option<u16>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            data_key: "value".into(),
            search_delay: Duration::from_millis(500),
            visible_rows: None,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the class names.
    pub fn classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }

    /// Set the data attribute key used to tag entries.
    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = key.into();
        self
    }

    /// Set the type-ahead reset delay.
    pub fn search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Bound the option list to `rows` visible rows.
    pub fn visible_rows(mut self, rows: u16) -> Self {
        self.visible_rows = Some(rows);
        self
    }
}
