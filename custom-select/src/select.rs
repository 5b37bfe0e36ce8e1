//! Select widget - a custom dropdown mirroring a native select.

mod events;
mod render;
mod search;

use std::time::Instant;

use tuidom::{
    find_by_class, find_element, find_element_mut, find_parent_mut, scroll_into_view, Element,
};

use crate::config::SelectConfig;
use crate::error::SelectError;
use crate::native::NativeSelect;
use crate::option::{extract_options, SelectOption};

pub use events::EventResult;
pub use search::{Debounce, TypeAhead};

use render::{Ids, LABEL_SLOT, LIST_SLOT};

/// Whether the option list is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
}

/// A custom dropdown that mirrors and drives a [`NativeSelect`].
///
/// The widget keeps three copies of the selection in step: its own option
/// records, the native entries they point back to, and the `selected` class
/// on the rendered entries. All three only change through
/// [`select_value`](Self::select_value) and the keyboard/pointer handlers
/// that call into the same update.
///
/// # Example
///
/// ```ignore
/// let mut source = NativeSelect::new("fruit", [
///     NativeOption::new("apple", "Apple"),
///     NativeOption::new("banana", "Banana").selected(true),
/// ]);
/// let mut select = SelectWidget::new(&mut source, SelectConfig::default())?;
/// select.select_value("apple")?;
/// assert_eq!(source.value().as_deref(), Some("apple"));
/// ```
#[derive(Debug)]
pub struct SelectWidget {
    config: SelectConfig,
    source_id: String,
    ids: Ids,
    options: Vec<SelectOption>,
    root: Element,
    state: SelectState,
    search: TypeAhead,
}

impl SelectWidget {
    /// Mirror `source`, build the rendered structure, and hide the source.
    pub fn new(source: &mut NativeSelect, config: SelectConfig) -> Result<Self, SelectError> {
        let mut options = extract_options(source.options());
        if options.is_empty() {
            return Err(SelectError::NoOptions {
                source_id: source.id().to_string(),
            });
        }

        let values: Vec<&str> = options.iter().map(SelectOption::value).collect();
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                log::warn!(
                    "SelectWidget::new id={} duplicate option value '{}'",
                    source.id(),
                    value
                );
            }
        }

        // The source may have been edited into a state a native control never
        // shows; settle on the first selected entry, or the first entry.
        let chosen = options
            .iter()
            .position(SelectOption::is_selected)
            .unwrap_or(0);
        for (i, option) in options.iter_mut().enumerate() {
            if option.is_selected() != (i == chosen) {
                option.set_selected(i == chosen);
            }
        }

        let ids = Ids::for_source(source.id());
        let root = render::build(&ids, &options, options[chosen].label(), &config);
        let search = TypeAhead::new(config.search_delay);

        source.set_hidden(true);

        log::debug!(
            "SelectWidget::new id={} options_count={} selected={}",
            source.id(),
            options.len(),
            options[chosen].value()
        );

        Ok(Self {
            config,
            source_id: source.id().to_string(),
            ids,
            options,
            root,
            state: SelectState::Closed,
            search,
        })
    }

    /// Hide the source element in `page` and place the rendered container
    /// right after it.
    ///
    /// Mounting again into the same page replaces the earlier copy.
    pub fn mount(&self, page: &mut Element) -> Result<(), SelectError> {
        let not_found = || SelectError::SourceNotFound(self.source_id.clone());
        let parent = find_parent_mut(page, &self.source_id).ok_or_else(not_found)?;

        for child in parent.child_elements_mut() {
            if child.id == self.source_id {
                child.hidden = true;
            } else if child.id == self.ids.container {
                *child = self.root.clone();
                return Ok(());
            }
        }

        parent
            .insert_after(&self.source_id, self.root.clone())
            .map_err(|_| not_found())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Element id of the mirrored native source.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Options in navigation order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.is_selected())
    }

    pub fn selected_option_index(&self) -> Option<usize> {
        self.options.iter().position(SelectOption::is_selected)
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(SelectOption::value)
    }

    /// Rendered container, including label area and option list.
    pub fn element(&self) -> &Element {
        &self.root
    }

    pub fn container_id(&self) -> &str {
        &self.ids.container
    }

    pub fn label_id(&self) -> &str {
        &self.ids.label
    }

    pub fn list_id(&self) -> &str {
        &self.ids.list
    }

    /// Element id of the rendered entry for the option at `index`.
    pub fn entry_id(&self, index: usize) -> Option<String> {
        (index < self.options.len()).then(|| self.ids.entry(index))
    }

    /// Text currently shown in the label area.
    pub fn label_text(&self) -> &str {
        self.label().text_content().unwrap_or_default()
    }

    /// Value of the rendered entry carrying the selected marker.
    pub fn marked_value(&self) -> Option<&str> {
        find_by_class(self.list(), &self.config.classes.selected)
            .into_iter()
            .next()
            .and_then(|entry| entry.get_data(&self.config.data_key))
            .map(String::as_str)
    }

    pub fn state(&self) -> SelectState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SelectState::Open
    }

    /// Current type-ahead buffer.
    pub fn search_buffer(&self) -> &str {
        self.search.buffer()
    }

    /// When the next deferred task is due. An event loop should call
    /// [`tick`](Self::tick) no later than this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    fn label(&self) -> &Element {
        &self.root.child_elements()[LABEL_SLOT]
    }

    fn list(&self) -> &Element {
        &self.root.child_elements()[LIST_SLOT]
    }

    fn list_mut(&mut self) -> &mut Element {
        &mut self.root.child_elements_mut()[LIST_SLOT]
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select the option carrying `value`.
    ///
    /// Fails without touching any state if no option carries `value`. With
    /// duplicate values the first matching option wins.
    pub fn select_value(&mut self, value: &str) -> Result<(), SelectError> {
        let index = self
            .options
            .iter()
            .position(|o| o.value() == value)
            .ok_or_else(|| SelectError::UnknownValue(value.to_string()))?;
        self.select_index(index)
    }

    /// Move the selection to the option at `index` and update every mirror.
    fn select_index(&mut self, index: usize) -> Result<(), SelectError> {
        let prev = self.selected_option_index();
        let new_entry = self.ids.entry(index);
        let prev_entry = prev.map(|i| self.ids.entry(i));

        // Check both rendered entries exist before mutating anything
        for id in prev_entry.iter().chain(Some(&new_entry)) {
            if find_element(self.list(), id).is_none() {
                return Err(SelectError::MissingEntry(id.clone()));
            }
        }

        let selected_class = self.config.classes.selected.clone();
        if let Some(prev) = prev {
            self.options[prev].set_selected(false);
        }
        self.options[index].set_selected(true);

        let label = self.options[index].label().to_string();
        self.root.child_elements_mut()[LABEL_SLOT].set_text(label);

        let list = self.list_mut();
        if let Some(prev_entry) = &prev_entry
            && let Some(entry) = find_element_mut(list, prev_entry)
        {
            entry.remove_class(&selected_class);
        }
        if let Some(entry) = find_element_mut(list, &new_entry) {
            entry.add_class(&selected_class);
        }
        scroll_into_view(list, index);

        log::debug!(
            "SelectWidget::select id={} {:?} -> {}",
            self.source_id,
            prev,
            index
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Show the option list.
    pub fn open(&mut self) {
        self.set_state(SelectState::Open);
    }

    /// Hide the option list.
    pub fn close(&mut self) {
        self.set_state(SelectState::Closed);
    }

    /// Toggle the option list.
    pub fn toggle(&mut self) {
        match self.state {
            SelectState::Open => self.close(),
            SelectState::Closed => self.open(),
        }
    }

    fn set_state(&mut self, state: SelectState) {
        if self.state == state {
            return;
        }
        log::debug!(
            "SelectWidget id={} {:?} -> {:?}",
            self.source_id,
            self.state,
            state
        );
        self.state = state;
        let show = self.config.classes.show.clone();
        self.list_mut()
            .set_class(&show, state == SelectState::Open);
    }

    /// Run deferred work that has come due. Returns true if anything fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.search.tick(now)
    }
}
