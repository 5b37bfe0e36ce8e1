mod args;

use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyModifiers};
use custom_select::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::{FocusState, Terminal};

use args::Args;

const SUBMIT_ID: &str = "submit";

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Set up file logging
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut source = NativeSelect::new(args.name.clone(), args.native_options()).name(&args.name);
    let config = SelectConfig::new()
        .visible_rows(args.rows)
        .search_delay(Duration::from_millis(args.search_delay_ms));
    let mut select = SelectWidget::new(&mut source, config).map_err(io::Error::other)?;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    focus.focus(select.container_id());
    let mut status = String::from("Nothing submitted yet");

    loop {
        let root = page(&select, &source, &status).map_err(io::Error::other)?;
        let focused = focus.focused().map(str::to_string);
        term.render(&root, &|el: &Element| decorate(&select, focused.as_deref(), el))?;

        // Sleep until the next keystroke or until the type-ahead reset is due
        let timeout = select
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));
        let raw_events = term.poll(timeout)?;
        if raw_events.is_empty() {
            select.tick(Instant::now());
            continue;
        }

        if raw_events.iter().any(is_quit) {
            log::info!("select-demo: quit, final value {:?}", source.value());
            break;
        }

        for event in focus.process_events(&raw_events, &root) {
            match select.handle_event(&event) {
                Ok(EventResult::Consumed) => {}
                Ok(EventResult::Ignored) => {
                    if let Some(message) = on_page_event(&event, &source) {
                        status = message;
                    }
                }
                Err(e) => {
                    log::error!("select-demo: {e}");
                    status = e.to_string();
                }
            }
        }
    }

    Ok(())
}

/// Build this frame's page with the widget mounted after its source.
fn page(select: &SelectWidget, source: &NativeSelect, status: &str) -> Result<Element, SelectError> {
    let form_value = match source.form_entry() {
        Some((name, value)) => format!("form value: {name}={value}"),
        None => "form value: (none)".to_string(),
    };

    let mut root = Element::col()
        .id("page")
        .child(Element::text(
            "Space: open/close  Up/Down: move  type: search  Tab: focus  Ctrl+Q: quit",
        ))
        .child(Element::box_().id(source.id()))
        .child(Element::text("[ Submit ]").id(SUBMIT_ID).focusable(true))
        .child(Element::text(form_value))
        .child(Element::text(status));

    select.mount(&mut root)?;
    Ok(root)
}

fn decorate(select: &SelectWidget, focused: Option<&str>, el: &Element) -> Option<String> {
    let classes = &select.config().classes;

    if el.has_class(&classes.list) && !el.has_class(&classes.show) {
        return None;
    }
    let prefix = if el.has_class(&classes.selected) {
        "  > "
    } else if el.has_class(&classes.option) {
        "    "
    } else if el.has_class(&classes.label) {
        if focused == Some(select.container_id()) {
            "* "
        } else {
            "  "
        }
    } else if el.id == SUBMIT_ID && focused == Some(SUBMIT_ID) {
        "* "
    } else if el.id == SUBMIT_ID {
        "  "
    } else {
        ""
    };
    Some(prefix.to_string())
}

/// Handle events the widget left alone. Returns a new status line.
fn on_page_event(event: &Event, source: &NativeSelect) -> Option<String> {
    match event {
        Event::Key {
            target: Some(target),
            key: Key::Enter,
            ..
        } if target == SUBMIT_ID => Some(match source.form_entry() {
            Some((name, value)) => format!("Submitted {name}={value}"),
            None => "Submitted without a value".to_string(),
        }),
        _ => None,
    }
}

fn is_quit(event: &CrosstermEvent) -> bool {
    matches!(
        event,
        CrosstermEvent::Key(key)
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    )
}
