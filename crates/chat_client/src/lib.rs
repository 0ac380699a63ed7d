//! Chat room client model built around the `chat_emoji` composer.
//!
//! ## Host contract
//!
//! The crate performs no I/O. A host (browser shell, terminal UI, test harness) owns the
//! real-time connection and the HTTP client and implements [`app::ChatHost`]:
//!
//! - `emit` sends a [`protocol::ClientEvent`] over the real-time connection, using
//!   `ClientEvent::name()` as the event name and `ClientEvent::payload()` as its body.
//! - `search_emoji` runs a search, typically with `ChatApp::emoji_index` (sized by
//!   `CHAT_EMOJI_MAX_RESULTS`), and reports back through `ChatApp::on_search_results`.
//!   Results for an outdated query are discarded there.
//! - `upload_image` POSTs the file to [`room::UPLOAD_IMAGE_PATH`] and hands the JSON response
//!   to `ChatApp::on_upload_response`.
//!
//! Room history is fetched from [`room::history_path`] and passed to `ChatApp::on_history`.

pub mod app;
pub mod config;
pub mod error;
pub mod linkify;
pub mod message;
pub mod paste;
pub mod protocol;
pub mod room;
pub mod timestamp;
pub mod typing;

pub use crate::app::{ChatApp, ChatHost, TranscriptEntry};
pub use crate::config::ClientConfig;
pub use crate::error::ChatError;
pub use crate::message::{ChatMessage, MessageBody};
pub use crate::protocol::{ClientEvent, ServerEvent};
pub use crate::room::RoomId;
