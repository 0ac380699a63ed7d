//! Result selection state machine.
//!
//! `Idle` until a non-empty result set is shown; `Showing` keeps the highlighted index inside
//! the set, wrapping in both directions. Confirming or dismissing returns to `Idle`.

use std::sync::Arc;

use crate::emoji::search::EmojiCandidate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavigatorState {
    #[default]
    Idle,
    Showing {
        results: Arc<[EmojiCandidate]>,
        index: usize,
    },
}

/// What a rendering layer needs to draw the result strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub items: Arc<[EmojiCandidate]>,
    pub highlighted: usize,
}

impl ResultsView {
    pub fn highlighted_item(&self) -> Option<&EmojiCandidate> {
        self.items.get(self.highlighted)
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct ResultNavigator {
    state: NavigatorState,
}

impl ResultNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn is_selection_mode(&self) -> bool {
        matches!(self.state, NavigatorState::Showing { .. })
    }

    pub fn selected_index(&self) -> Option<usize> {
        match &self.state {
            NavigatorState::Showing { index, .. } => Some(*index),
            NavigatorState::Idle => None,
        }
    }

    /// Replaces the result set. The highlight always restarts at the first result.
    pub fn show(&mut self, results: Arc<[EmojiCandidate]>) {
        let was_showing = self.is_selection_mode();
        if results.is_empty() {
            self.state = NavigatorState::Idle;
        } else {
            self.state = NavigatorState::Showing { results, index: 0 };
        }
        if was_showing != self.is_selection_mode() {
            tracing::debug!(
                selection_mode = self.is_selection_mode(),
                "emoji selection mode changed"
            );
        }
    }

    pub fn select_next(&mut self) -> bool {
        self.step(Direction::Forward)
    }

    pub fn select_previous(&mut self) -> bool {
        self.step(Direction::Backward)
    }

    fn step(&mut self, direction: Direction) -> bool {
        let NavigatorState::Showing { results, index } = &mut self.state else {
            return false;
        };
        let len = results.len();
        *index = match direction {
            Direction::Forward => (*index + 1) % len,
            Direction::Backward => (*index + len - 1) % len,
        };
        true
    }

    pub fn dismiss(&mut self) {
        if self.is_selection_mode() {
            tracing::debug!("emoji results dismissed");
        }
        self.state = NavigatorState::Idle;
    }

    /// Takes the highlighted candidate and returns to `Idle`. `None` when nothing is shown.
    pub fn confirm_selection(&mut self) -> Option<EmojiCandidate> {
        let index = self.selected_index()?;
        self.confirm_at(index)
    }

    /// Takes the candidate at `index` (pointer selection). Out of range leaves state untouched.
    pub fn confirm_at(&mut self, index: usize) -> Option<EmojiCandidate> {
        let NavigatorState::Showing { results, .. } = &self.state else {
            return None;
        };
        let candidate = results.get(index)?.clone();
        self.state = NavigatorState::Idle;
        tracing::debug!(glyph = %candidate.glyph, index, "emoji selection confirmed");
        Some(candidate)
    }

    pub fn view(&self) -> Option<ResultsView> {
        match &self.state {
            NavigatorState::Showing { results, index } => Some(ResultsView {
                items: Arc::clone(results),
                highlighted: *index,
            }),
            NavigatorState::Idle => None,
        }
    }
}
