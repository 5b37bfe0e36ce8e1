//! Type-ahead search buffer and its reset timer.

use std::time::{Duration, Instant};

/// A cancel-and-restart deferred task.
///
/// Nothing runs on its own: the owner calls [`fire_if_due`](Self::fire_if_due)
/// from its event loop, and uses [`deadline`](Self::deadline) to know when to
/// wake up.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Cancel any pending run and schedule a new one `delay` after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending run if its deadline has passed.
    /// Returns true exactly once per scheduled run.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Accumulated type-ahead keystrokes, cleared after a pause.
#[derive(Debug, Clone)]
pub struct TypeAhead {
    buffer: String,
    reset: Debounce,
}

impl TypeAhead {
    pub fn new(delay: Duration) -> Self {
        Self {
            buffer: String::new(),
            reset: Debounce::new(delay),
        }
    }

    /// Current buffer, lowercased.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Append a keystroke and restart the reset timer. Returns the buffer.
    pub fn push(&mut self, c: char, now: Instant) -> &str {
        self.tick(now);
        self.reset.restart(now);
        self.buffer.extend(c.to_lowercase());
        &self.buffer
    }

    /// Clear the buffer if the reset timer has come due.
    /// Returns true if the buffer was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.fire_if_due(now) {
            log::debug!("TypeAhead: reset buffer '{}'", self.buffer);
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// When the pending reset is due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.reset.deadline()
    }
}
