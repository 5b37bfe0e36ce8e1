use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.move_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.move_to(new_focus)
    }

    fn move_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events into targeted events.
    ///
    /// Tab/BackTab move focus and emit Blur/Focus pairs. Every other key press
    /// becomes an `Event::Key` aimed at the focused element.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };

            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let Ok(key) = Key::try_from(key_event.code) else {
                log::debug!("FocusState: ignoring unsupported key {:?}", key_event.code);
                continue;
            };
            let modifiers: Modifiers = key_event.modifiers.into();

            if key == Key::Tab || key == Key::BackTab {
                let old = self.focused.clone();
                let moved = if key == Key::Tab {
                    self.focus_next(root)
                } else {
                    self.focus_prev(root)
                };
                if let Some(new) = moved {
                    if let Some(old) = old {
                        events.push(Event::Blur {
                            target: old,
                            new_target: Some(new.clone()),
                        });
                    }
                    events.push(Event::Focus { target: new });
                }
                continue;
            }

            // Focused element may have been removed from the tree since the last frame
            let target = self
                .focused
                .as_deref()
                .filter(|id| find_element(root, id).is_some())
                .map(str::to_string);

            events.push(Event::Key {
                target,
                key,
                modifiers,
            });
        }

        events
    }
}

/// Collect focusable element IDs in document order, skipping hidden subtrees.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(root, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_focusable_recursive(child, result);
    }
}
