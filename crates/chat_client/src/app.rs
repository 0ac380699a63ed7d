//! Chat room client state.
//!
//! `ChatApp` is a plain state machine: hosts feed it UI and network events and carry out the
//! side effects it requests through [`ChatHost`]. It never performs I/O itself.

use std::time::Instant;

use chat_emoji::{
    Composer, EmojiCandidate, EmojiIndex, KeyOutcome, ResultsView, SearchRequest, SearchTicket,
};
use time::UtcOffset;

use crate::config::ClientConfig;
use crate::error::ChatError;
use crate::message::{decode_history, ChatMessage, MessageBody};
use crate::paste::{pasted_files, PasteItem, PastedFile};
use crate::protocol::{ClientEvent, ServerEvent, UploadResponse};
use crate::room::{parse_room_path, RoomId};
use crate::timestamp::format_timestamp;
use crate::typing::{TypingIndicator, TypingNotifier};

pub trait ChatHost {
    fn emit(&mut self, event: ClientEvent);
    /// Runs an emoji search; answer with [`ChatApp::on_search_results`] when it completes.
    fn search_emoji(&mut self, request: SearchRequest);
    /// Uploads a file; answer with [`ChatApp::on_upload_response`].
    fn upload_image(&mut self, file: PastedFile);
    fn request_render(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub message: ChatMessage,
    pub body: MessageBody,
    pub time_label: String,
}

#[derive(Debug)]
pub struct ChatApp {
    room: Option<RoomId>,
    composer: Composer,
    emoji_index: EmojiIndex,
    transcript: Vec<TranscriptEntry>,
    typing: TypingIndicator,
    notifier: TypingNotifier,
    utc_offset: UtcOffset,
}

impl ChatApp {
    pub fn new(room: Option<RoomId>, config: &ClientConfig) -> Self {
        Self {
            room,
            composer: Composer::new(),
            emoji_index: config.emoji.emoji_index(),
            transcript: Vec::new(),
            typing: TypingIndicator::new(),
            notifier: TypingNotifier::new(config.typing_timeout),
            utc_offset: config.utc_offset,
        }
    }

    /// Builds the app for a page path; non-room paths yield a roomless app.
    pub fn from_path(path: &str, config: &ClientConfig) -> Self {
        Self::new(parse_room_path(path), config)
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.room.as_ref()
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// The catalogue search sized by the configured result cap. Hosts without their own
    /// search answer [`ChatHost::search_emoji`] with it.
    pub fn emoji_index(&self) -> &EmojiIndex {
        &self.emoji_index
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn typing_label(&self) -> Option<String> {
        self.typing.label()
    }

    pub fn emoji_results(&self) -> Option<ResultsView> {
        self.composer.results_view()
    }

    /// Whether Enter currently picks an emoji rather than sending.
    pub fn is_emoji_selection_mode(&self) -> bool {
        self.composer.is_selection_mode()
    }

    /// Joins the room, if the page has one.
    pub fn on_connected(&mut self, host: &mut dyn ChatHost) {
        if let Some(room) = self.room.clone() {
            tracing::info!(room = %room, "joining room");
            host.emit(ClientEvent::JoinRoom(room));
        }
    }

    pub fn on_input(&mut self, text: String, cursor: usize, now: Instant, host: &mut dyn ChatHost) {
        if let Some(typing) = self.notifier.on_input(now) {
            host.emit(self.typing_event(typing));
        }
        match self.composer.on_input(text, cursor) {
            Some(request) => host.search_emoji(request),
            None => host.request_render(),
        }
    }

    /// Delivers emoji search results. Returns `false` for results of an outdated query.
    pub fn on_search_results(
        &mut self,
        ticket: SearchTicket,
        results: Vec<EmojiCandidate>,
        host: &mut dyn ChatHost,
    ) -> bool {
        let applied = self.composer.apply_results(ticket, results);
        if applied {
            host.request_render();
        }
        applied
    }

    pub fn on_key(&mut self, key_id: &str, host: &mut dyn ChatHost) -> KeyOutcome {
        let outcome = self.composer.on_key(key_id);
        self.after_composer(&outcome, host);
        outcome
    }

    /// Pointer selection of an emoji result.
    pub fn select_emoji(&mut self, index: usize, host: &mut dyn ChatHost) -> KeyOutcome {
        let outcome = self.composer.select_candidate(index);
        self.after_composer(&outcome, host);
        outcome
    }

    fn after_composer(&mut self, outcome: &KeyOutcome, host: &mut dyn ChatHost) {
        match outcome {
            KeyOutcome::Submit(message) => {
                if let Some(typing) = self.notifier.stop() {
                    host.emit(self.typing_event(typing));
                }
                host.emit(ClientEvent::SendMessage {
                    message: message.clone(),
                    room_id: self.room.clone(),
                });
                host.request_render();
            }
            KeyOutcome::Navigated | KeyOutcome::Inserted { .. } | KeyOutcome::Consumed => {
                host.request_render();
            }
            KeyOutcome::Ignored => {}
        }
    }

    /// Sends the "stopped typing" signal once the idle timeout has passed.
    pub fn tick(&mut self, now: Instant, host: &mut dyn ChatHost) {
        if let Some(typing) = self.notifier.poll(now) {
            host.emit(self.typing_event(typing));
        }
    }

    pub fn on_server_event(&mut self, event: ServerEvent, host: &mut dyn ChatHost) {
        match event {
            ServerEvent::ChatMessage(message) | ServerEvent::SendImage(message) => {
                self.push_message(message);
                host.request_render();
            }
            ServerEvent::Typing { username, typing } => {
                if self.typing.apply(&username, typing) {
                    host.request_render();
                }
            }
        }
    }

    /// Decodes a raw server event and applies it.
    pub fn on_raw_server_event(
        &mut self,
        name: &str,
        payload: &str,
        host: &mut dyn ChatHost,
    ) -> Result<(), ChatError> {
        let event = ServerEvent::decode(name, payload)?;
        self.on_server_event(event, host);
        Ok(())
    }

    /// Merges a room history response into the transcript. Returns how many messages it held.
    pub fn on_history(&mut self, json: &str, host: &mut dyn ChatHost) -> Result<usize, ChatError> {
        let history = decode_history(json)?;
        let count = history.len();
        for message in history {
            self.push_message(message);
        }
        self.transcript
            .sort_by_cached_key(|entry| entry.message.chronological_key());
        tracing::debug!(count, total = self.transcript.len(), "history merged");
        host.request_render();
        Ok(count)
    }

    /// Uploads every pasted file. Returns how many uploads were started.
    pub fn on_paste(&mut self, items: Vec<PasteItem>, host: &mut dyn ChatHost) -> usize {
        let files = pasted_files(items);
        let count = files.len();
        for file in files {
            host.upload_image(file);
        }
        count
    }

    /// Shares an uploaded image with the room.
    pub fn on_upload_response(
        &mut self,
        json: &str,
        host: &mut dyn ChatHost,
    ) -> Result<(), ChatError> {
        let response = UploadResponse::decode(json)?;
        let image_url = response.image_url.ok_or(ChatError::MissingImageUrl)?;
        host.emit(ClientEvent::SendImage {
            image_url,
            room_id: self.room.clone(),
        });
        Ok(())
    }

    fn push_message(&mut self, message: ChatMessage) {
        let time_label = message
            .timestamp
            .as_ref()
            .map(|ts| format_timestamp(ts, self.utc_offset))
            .unwrap_or_else(|| crate::timestamp::TIME_NOT_AVAILABLE.to_string());
        let body = message.body();
        self.transcript.push(TranscriptEntry {
            message,
            body,
            time_label,
        });
    }

    fn typing_event(&self, typing: bool) -> ClientEvent {
        ClientEvent::Typing {
            room_id: self.room.clone(),
            typing,
        }
    }
}
