//! Input-bound autocomplete controller.
//!
//! The composer owns the text buffer, the active trigger token, the search generation and the
//! navigator. Hosts feed it input changes and key ids and act on the returned values; the
//! "selection mode" flag that decides whether Enter submits or picks an emoji is derived from
//! the navigator and never stored separately.

use std::sync::Arc;

use crate::core::keys::{ComposerAction, ComposerKeybindings};
use crate::emoji::insert::insert_with_cursor;
use crate::emoji::navigator::{ResultNavigator, ResultsView};
use crate::emoji::search::{
    EmojiCandidate, EmojiSearch, SearchGeneration, SearchRequest, SearchTicket,
};
use crate::emoji::trigger::{extract_trigger, TriggerToken};

/// Text plus a byte cursor. The cursor is clamped to the text and to a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let mut cursor = cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the host applies its default behaviour (cursor moves, newline, ...).
    Ignored,
    /// Handled with no visible text change (suppress the default).
    Consumed,
    /// The highlighted result moved; re-render the results view.
    Navigated,
    /// An emoji was inserted; write `text` back to the field and place the cursor.
    Inserted { text: String, cursor: usize },
    /// Send `message`; the buffer has been cleared.
    Submit(String),
}

#[derive(Debug, Default)]
pub struct Composer {
    buffer: InputBuffer,
    token: Option<TriggerToken>,
    pending: Option<SearchTicket>,
    generation: SearchGeneration,
    navigator: ResultNavigator,
    keybindings: ComposerKeybindings,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keybindings(keybindings: ComposerKeybindings) -> Self {
        Self {
            keybindings,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn token(&self) -> Option<&TriggerToken> {
        self.token.as_ref()
    }

    /// True while emoji results are shown and navigation keys act on them.
    pub fn is_selection_mode(&self) -> bool {
        self.navigator.is_selection_mode()
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        self.navigator.view()
    }

    /// Records an edit and returns the search to run for it, if any.
    ///
    /// Any search still in flight becomes stale, whether or not a new one is issued.
    pub fn on_input(&mut self, text: impl Into<String>, cursor: usize) -> Option<SearchRequest> {
        self.buffer = InputBuffer::new(text, cursor);
        self.token = extract_trigger(&self.buffer.text, self.buffer.cursor)
            .filter(|token| !token.query.is_empty());

        let Some(token) = self.token.as_ref() else {
            self.generation.invalidate();
            self.pending = None;
            self.navigator.dismiss();
            return None;
        };

        let ticket = self.generation.issue();
        self.pending = Some(ticket);
        tracing::trace!(query = %token.query, ticket = ticket.value(), "emoji search issued");
        Some(SearchRequest {
            ticket,
            query: token.query.clone(),
        })
    }

    /// Applies results for `ticket`. Returns `false` and changes nothing when the ticket is stale.
    pub fn apply_results(&mut self, ticket: SearchTicket, results: Vec<EmojiCandidate>) -> bool {
        if !self.generation.is_current(ticket) || self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.value(), "dropping stale emoji search results");
            return false;
        }
        self.pending = None;
        self.navigator.show(Arc::from(results));
        true
    }

    /// Records an edit and resolves its search immediately.
    pub fn on_input_with(
        &mut self,
        text: impl Into<String>,
        cursor: usize,
        search: &dyn EmojiSearch,
    ) -> bool {
        match self.on_input(text, cursor) {
            Some(request) => {
                let results = search.search(&request.query);
                self.apply_results(request.ticket, results)
            }
            None => false,
        }
    }

    pub fn on_key(&mut self, key_id: &str) -> KeyOutcome {
        if self.is_selection_mode() {
            if self.keybindings.matches(key_id, ComposerAction::SelectNext) {
                self.navigator.select_next();
                return KeyOutcome::Navigated;
            }
            if self.keybindings.matches(key_id, ComposerAction::SelectPrevious) {
                self.navigator.select_previous();
                return KeyOutcome::Navigated;
            }
            if self.keybindings.matches(key_id, ComposerAction::SelectConfirm) {
                return match self.navigator.confirm_selection() {
                    Some(candidate) => self.commit(&candidate),
                    None => KeyOutcome::Consumed,
                };
            }
            if self.keybindings.matches(key_id, ComposerAction::SelectCancel) {
                self.dismiss();
                return KeyOutcome::Consumed;
            }
        }

        if self.keybindings.matches(key_id, ComposerAction::NewLine) {
            return KeyOutcome::Ignored;
        }
        if self.keybindings.matches(key_id, ComposerAction::Submit) {
            return self.submit();
        }
        KeyOutcome::Ignored
    }

    /// Pointer selection of the result at `index`.
    pub fn select_candidate(&mut self, index: usize) -> KeyOutcome {
        match self.navigator.confirm_at(index) {
            Some(candidate) => self.commit(&candidate),
            None => KeyOutcome::Ignored,
        }
    }

    /// Hides the results and drops any in-flight search.
    pub fn dismiss(&mut self) {
        self.generation.invalidate();
        self.pending = None;
        self.navigator.dismiss();
    }

    /// Takes the buffer for sending. Blank input is not submitted and stays in place.
    pub fn submit(&mut self) -> KeyOutcome {
        if self.buffer.is_blank() {
            return KeyOutcome::Consumed;
        }
        let message = std::mem::take(&mut self.buffer).text;
        self.token = None;
        self.dismiss();
        tracing::debug!(len = message.len(), "composer submitted message");
        KeyOutcome::Submit(message)
    }

    fn commit(&mut self, candidate: &EmojiCandidate) -> KeyOutcome {
        let Some(token) = self.token.take() else {
            return KeyOutcome::Consumed;
        };
        let (text, cursor) = insert_with_cursor(&self.buffer.text, token.range(), &candidate.glyph);
        self.buffer = InputBuffer::new(text.clone(), cursor);
        self.dismiss();
        KeyOutcome::Inserted { text, cursor }
    }
}
