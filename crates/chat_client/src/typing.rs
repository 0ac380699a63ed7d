//! Typing indicators: who else is typing, and when to tell the room that we are.

use std::time::{Duration, Instant};

pub const DEFAULT_TYPING_TIMEOUT: Duration = Duration::from_millis(2000);

/// Usernames currently typing, in the order they started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingIndicator {
    usernames: Vec<String>,
}

impl TypingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a `typing` event. Returns whether the set changed.
    pub fn apply(&mut self, username: &str, typing: bool) -> bool {
        let position = self.usernames.iter().position(|name| name == username);
        match (typing, position) {
            (true, None) => {
                self.usernames.push(username.to_string());
                true
            }
            (false, Some(index)) => {
                self.usernames.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }

    /// `"ana is typing..."`, `"ana, bo are typing..."`, or `None` when nobody is.
    pub fn label(&self) -> Option<String> {
        match self.usernames.len() {
            0 => None,
            1 => Some(format!("{} is typing...", self.usernames[0])),
            _ => Some(format!("{} are typing...", self.usernames.join(", "))),
        }
    }
}

/// Our own typing state as sent to the room.
///
/// The first keystroke announces `typing: true`; `typing: false` follows once `timeout` has
/// passed without further input.
#[derive(Debug, Clone)]
pub struct TypingNotifier {
    timeout: Duration,
    deadline: Option<Instant>,
}

impl Default for TypingNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_TIMEOUT)
    }
}

impl TypingNotifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Records a keystroke. Returns `Some(true)` when a start signal should be sent.
    pub fn on_input(&mut self, now: Instant) -> Option<bool> {
        let started = self.deadline.is_none();
        self.deadline = Some(now + self.timeout);
        started.then_some(true)
    }

    /// Returns `Some(false)` once the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(false)
            }
            _ => None,
        }
    }

    /// Stops immediately, e.g. after sending. Returns `Some(false)` if we were typing.
    pub fn stop(&mut self) -> Option<bool> {
        self.deadline.take().map(|_| false)
    }
}
