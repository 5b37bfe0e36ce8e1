//! Builds the rendered structure for a select widget.

use tuidom::Element;

use crate::config::SelectConfig;
use crate::option::SelectOption;

/// Position of the label area among the container's children.
pub(super) const LABEL_SLOT: usize = 0;
/// Position of the option list among the container's children.
pub(super) const LIST_SLOT: usize = 1;

/// Element ids of a widget's rendered parts, derived from the source id.
#[derive(Debug, Clone)]
pub(super) struct Ids {
    pub container: String,
    pub label: String,
    pub list: String,
}

impl Ids {
    pub fn for_source(source_id: &str) -> Self {
        let container = format!("{source_id}-select");
        Self {
            label: format!("{container}-value"),
            list: format!("{container}-options"),
            container,
        }
    }

    pub fn entry(&self, index: usize) -> String {
        format!("{}-opt-{}", self.container, index)
    }
}

/// Build container, label area, and one entry per option.
pub(super) fn build(
    ids: &Ids,
    options: &[SelectOption],
    selected_label: &str,
    config: &SelectConfig,
) -> Element {
    let classes = &config.classes;

    let label = Element::text(selected_label)
        .id(&ids.label)
        .class(&classes.label)
        .clickable(true);

    let entries = options.iter().enumerate().map(|(i, option)| {
        let mut entry = Element::text(option.label())
            .id(ids.entry(i))
            .class(&classes.option)
            .clickable(true)
            .data(&config.data_key, option.value());
        entry.set_class(&classes.selected, option.is_selected());
        entry
    });

    let mut list = Element::col()
        .id(&ids.list)
        .class(&classes.list)
        .item_height(1)
        .children(entries);
    if let Some(rows) = config.visible_rows {
        list = list.max_height(rows).scrollable(true);
    }

    log::debug!(
        "render::build id={} options_count={}",
        ids.container,
        options.len()
    );

    // Order must match LABEL_SLOT / LIST_SLOT
    Element::col()
        .id(&ids.container)
        .class(&classes.container)
        .focusable(true)
        .child(label)
        .child(list)
}
