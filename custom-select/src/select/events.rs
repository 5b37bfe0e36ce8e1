//! Event handling for the select widget.

use std::time::Instant;

use tuidom::{find_element, Event, Key, Modifiers};

use super::{SelectState, SelectWidget};
use crate::error::SelectError;

/// Whether the widget acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl SelectWidget {
    /// Handle an event using the wall clock for type-ahead timing.
    pub fn handle_event(&mut self, event: &Event) -> Result<EventResult, SelectError> {
        self.handle_event_at(event, Instant::now())
    }

    /// Handle an event that happened at `now`.
    ///
    /// Events aimed at elements outside this widget are ignored.
    pub fn handle_event_at(
        &mut self,
        event: &Event,
        now: Instant,
    ) -> Result<EventResult, SelectError> {
        // A pending reset that came due before this event fires first
        self.tick(now);

        match event {
            Event::Click {
                target: Some(target),
                ..
            } => self.on_click(target),
            Event::Blur { target, .. } if *target == self.ids.container => {
                self.close();
                Ok(EventResult::Consumed)
            }
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if *target == self.ids.container => self.on_key(*key, *modifiers, now),
            _ => Ok(EventResult::Ignored),
        }
    }

    fn on_click(&mut self, target: &str) -> Result<EventResult, SelectError> {
        if target == self.ids.label {
            self.toggle();
            return Ok(EventResult::Consumed);
        }

        // Entries are found by id, then resolved through their data attribute
        let value = find_element(self.list(), target)
            .filter(|el| el.id != self.ids.list)
            .and_then(|el| el.get_data(&self.config.data_key))
            .cloned();
        let Some(value) = value else {
            return Ok(EventResult::Ignored);
        };

        self.select_value(&value)?;
        self.close();
        Ok(EventResult::Consumed)
    }

    fn on_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        now: Instant,
    ) -> Result<EventResult, SelectError> {
        // Ignore keys with ctrl/alt modifiers
        if modifiers.ctrl || modifiers.alt {
            return Ok(EventResult::Ignored);
        }

        match key {
            Key::Char(' ') => self.toggle(),
            Key::Up => {
                if let Some(i) = self.selected_option_index()
                    && i > 0
                {
                    self.select_index(i - 1)?;
                }
            }
            Key::Down => {
                if let Some(i) = self.selected_option_index()
                    && i + 1 < self.options.len()
                {
                    self.select_index(i + 1)?;
                }
            }
            Key::Enter | Key::Escape => {
                if self.state == SelectState::Closed {
                    return Ok(EventResult::Ignored);
                }
                self.close();
            }
            Key::Char(c) if !c.is_control() => self.type_ahead(c, now)?,
            _ => return Ok(EventResult::Ignored),
        }

        Ok(EventResult::Consumed)
    }

    fn type_ahead(&mut self, c: char, now: Instant) -> Result<(), SelectError> {
        let term = self.search.push(c, now).to_string();
        let found = self.options.iter().position(|o| o.label_starts_with(&term));

        log::debug!(
            "SelectWidget::type_ahead id={} term='{}' match={:?}",
            self.source_id,
            term,
            found
        );

        match found {
            Some(index) => self.select_index(index),
            None => Ok(()),
        }
    }
}
