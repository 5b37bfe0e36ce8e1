use custom_select::prelude::*;
use custom_select::extract_options;
use tuidom::find_by_class;

fn one_two() -> NativeSelect {
    NativeSelect::new(
        "num",
        [
            NativeOption::new("1", "One"),
            NativeOption::new("2", "Two").selected(true),
        ],
    )
    .name("num")
}

fn fruits(rows: Option<u16>) -> (NativeSelect, SelectWidget) {
    let mut source = NativeSelect::new(
        "fruit",
        [
            NativeOption::new("a", "Apple"),
            NativeOption::new("b", "Banana"),
            NativeOption::new("c", "Cherry"),
            NativeOption::new("d", "Date"),
            NativeOption::new("e", "Elderberry"),
        ],
    );
    let mut config = SelectConfig::default();
    if let Some(rows) = rows {
        config = config.visible_rows(rows);
    }
    let select = SelectWidget::new(&mut source, config).unwrap();
    (source, select)
}

/// Exactly one option selected, and the native and rendered mirrors agree.
fn assert_in_sync(select: &SelectWidget, source: &NativeSelect) {
    let selected: Vec<_> = select.options().iter().filter(|o| o.is_selected()).collect();
    assert_eq!(selected.len(), 1, "exactly one option must be selected");
    let value = selected[0].value();

    assert_eq!(source.value().as_deref(), Some(value));
    assert_eq!(
        source.options().iter().filter(|o| o.is_selected()).count(),
        1
    );
    assert_eq!(select.marked_value(), Some(value));
    assert_eq!(find_by_class(select.element(), "selected").len(), 1);
    assert_eq!(select.label_text(), selected[0].label());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_initial_selection_mirrors_source() {
    let mut source = one_two();
    let select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();

    assert_eq!(select.selected_value(), Some("2"));
    assert_eq!(select.selected_option_index(), Some(1));
    assert_eq!(select.label_text(), "Two");
    assert_eq!(select.state(), SelectState::Closed);
    assert_in_sync(&select, &source);
}

#[test]
fn test_construction_hides_source() {
    let mut source = one_two();
    assert!(!source.is_hidden());
    let _select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();
    assert!(source.is_hidden());
}

#[test]
fn test_rendered_structure() {
    let mut source = one_two();
    let select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();
    let root = select.element();

    assert_eq!(root.id, select.container_id());
    assert!(root.has_class("custom-select__container"));
    assert!(root.focusable);

    let children = root.child_elements();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].id, select.label_id());
    assert!(children[0].has_class("custom-select__value"));
    assert_eq!(children[1].id, select.list_id());
    assert!(children[1].has_class("custom-select__options"));
    assert!(!children[1].has_class("show"));

    let entries = children[1].child_elements();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].get_data("value").map(String::as_str), Some("1"));
    assert_eq!(entries[0].text_content(), Some("One"));
    assert!(!entries[0].has_class("selected"));
    assert_eq!(entries[1].get_data("value").map(String::as_str), Some("2"));
    assert!(entries[1].has_class("selected"));
    assert!(entries.iter().all(|e| e.has_class("custom-select__option")));
    assert_eq!(select.entry_id(1).as_deref(), Some(entries[1].id.as_str()));
    assert_eq!(select.entry_id(2), None);
}

#[test]
fn test_custom_class_names() {
    let mut source = one_two();
    let classes = ClassNames {
        selected: "is-active".into(),
        show: "is-open".into(),
        ..Default::default()
    };
    let config = SelectConfig::new().classes(classes).data_key("id");
    let mut select = SelectWidget::new(&mut source, config).unwrap();

    assert_eq!(find_by_class(select.element(), "is-active").len(), 1);
    assert_eq!(select.marked_value(), Some("2"));

    select.open();
    let list = &select.element().child_elements()[1];
    assert!(list.has_class("is-open"));
    assert!(list.child_elements()[0].get_data("id").is_some());
}

#[test]
fn test_empty_source_is_rejected() {
    let mut source = NativeSelect::new("empty", Vec::<NativeOption>::new());
    let err = SelectWidget::new(&mut source, SelectConfig::default()).unwrap_err();
    assert_eq!(
        err,
        SelectError::NoOptions {
            source_id: "empty".into()
        }
    );
    assert!(!source.is_hidden());
}

#[test]
fn test_externally_cleared_source_selects_first() {
    let source_options = [NativeOption::new("x", "X"), NativeOption::new("y", "Y")];
    let mut source = NativeSelect::new("xy", source_options.clone());
    source_options[0].set_selected(false);

    let select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();
    assert_eq!(select.selected_value(), Some("x"));
    assert_in_sync(&select, &source);
}

#[test]
fn test_externally_double_selected_source_keeps_first() {
    let source_options = [
        NativeOption::new("x", "X"),
        NativeOption::new("y", "Y"),
        NativeOption::new("z", "Z"),
    ];
    let mut source = NativeSelect::new("xyz", source_options.clone());
    source_options[0].set_selected(false);
    source_options[1].set_selected(true);
    source_options[2].set_selected(true);

    let select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();
    assert_eq!(select.selected_value(), Some("y"));
    assert_in_sync(&select, &source);
}

#[test]
fn test_extraction_is_a_snapshot() {
    let entry = NativeOption::new("v", "Label");
    let options = extract_options(std::slice::from_ref(&entry));

    entry.set_selected(true);

    assert_eq!(options[0].label(), "Label");
    assert_eq!(options[0].value(), "v");
    assert!(!options[0].is_selected());
    // The back-reference still reaches the live entry
    assert_eq!(options[0].source_ref().is_selected(), Some(true));
}

// ============================================================================
// select_value
// ============================================================================

#[test]
fn test_select_value_updates_all_mirrors() {
    let mut source = one_two();
    let mut select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();

    select.select_value("1").unwrap();

    assert_eq!(select.selected_value(), Some("1"));
    assert_eq!(select.label_text(), "One");
    let entries = select.element().child_elements()[1].child_elements();
    assert!(entries[0].has_class("selected"));
    assert!(!entries[1].has_class("selected"));
    assert_eq!(source.value().as_deref(), Some("1"));
    assert_eq!(source.form_entry(), Some(("num".into(), "1".into())));
    assert_in_sync(&select, &source);
}

#[test]
fn test_select_value_is_idempotent() {
    let mut source = one_two();
    let mut select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();

    select.select_value("2").unwrap();
    select.select_value("2").unwrap();

    assert_eq!(select.selected_value(), Some("2"));
    assert_in_sync(&select, &source);
}

#[test]
fn test_select_unknown_value_fails_without_side_effects() {
    let mut source = one_two();
    let mut select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();

    let err = select.select_value("missing").unwrap_err();

    assert_eq!(err, SelectError::UnknownValue("missing".into()));
    assert_eq!(err.to_string(), "no option with value 'missing'");
    assert_eq!(select.selected_value(), Some("2"));
    assert_in_sync(&select, &source);
}

#[test]
fn test_duplicate_values_resolve_to_first() {
    let mut source = NativeSelect::new(
        "dup",
        [
            NativeOption::new("same", "First"),
            NativeOption::new("other", "Other").selected(true),
            NativeOption::new("same", "Second"),
        ],
    );
    let mut select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();

    select.select_value("same").unwrap();
    assert_eq!(select.selected_option_index(), Some(0));
    assert_eq!(select.label_text(), "First");
}

#[test]
fn test_dropped_source_entry_does_not_break_selection() {
    let mut source = one_two();
    let mut select = SelectWidget::new(&mut source, SelectConfig::default()).unwrap();
    drop(source);

    select.select_value("1").unwrap();
    assert_eq!(select.selected_value(), Some("1"));
    assert_eq!(select.marked_value(), Some("1"));
    assert!(select.options()[0].source_ref().is_selected().is_none());
}

// ============================================================================
// Scrolling
// ============================================================================

fn list_offset(select: &SelectWidget) -> u16 {
    select.element().child_elements()[1].scroll_offset.1
}

#[test]
fn test_selection_scrolls_to_nearest_edge() {
    let (_source, mut select) = fruits(Some(2));
    assert_eq!(list_offset(&select), 0);

    // Already visible: no scroll
    select.select_value("b").unwrap();
    assert_eq!(list_offset(&select), 0);

    // Below the viewport: bottom edge aligns
    select.select_value("e").unwrap();
    assert_eq!(list_offset(&select), 3);

    // Visible at the top of the viewport: no scroll
    select.select_value("d").unwrap();
    assert_eq!(list_offset(&select), 3);

    // Above the viewport: top edge aligns
    select.select_value("b").unwrap();
    assert_eq!(list_offset(&select), 1);
}

#[test]
fn test_unbounded_list_never_scrolls() {
    let (_source, mut select) = fruits(None);
    select.select_value("e").unwrap();
    assert_eq!(list_offset(&select), 0);
}

// ============================================================================
// Mounting
// ============================================================================

fn page() -> Element {
    Element::col()
        .id("page")
        .child(Element::text("Pick a fruit").id("heading"))
        .child(Element::box_().id("fruit"))
        .child(Element::text("Submit").id("submit").focusable(true))
}

#[test]
fn test_mount_inserts_after_source() {
    let (_source, select) = fruits(None);
    let mut page = page();

    select.mount(&mut page).unwrap();

    let ids: Vec<&str> = page.child_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["heading", "fruit", "fruit-select", "submit"]);
    assert!(page.child_elements()[1].hidden);
    assert_eq!(&page.child_elements()[2], select.element());
}

#[test]
fn test_remount_replaces_previous_copy() {
    let (_source, mut select) = fruits(None);
    let mut page = page();

    select.mount(&mut page).unwrap();
    select.select_value("c").unwrap();
    select.mount(&mut page).unwrap();

    assert_eq!(page.child_elements().len(), 4);
    assert_eq!(&page.child_elements()[2], select.element());
}

#[test]
fn test_mount_without_source_fails() {
    let (_source, select) = fruits(None);
    let mut page = Element::col().id("page");

    let err = select.mount(&mut page).unwrap_err();
    assert_eq!(err, SelectError::SourceNotFound("fruit".into()));
}
