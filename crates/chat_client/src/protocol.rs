//! Real-time event names and payloads exchanged with the chat server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ChatError;
use crate::message::ChatMessage;
use crate::room::RoomId;

/// Events the client emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    JoinRoom(RoomId),
    SendMessage {
        message: String,
        room_id: Option<RoomId>,
    },
    Typing {
        room_id: Option<RoomId>,
        typing: bool,
    },
    SendImage {
        image_url: String,
        room_id: Option<RoomId>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessagePayload<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_id: Option<&'a RoomId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TypingPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    room_id: Option<&'a RoomId>,
    typing: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendImagePayload<'a> {
    image_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_id: Option<&'a RoomId>,
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::JoinRoom(_) => "joinRoom",
            ClientEvent::SendMessage { .. } => "sendMessage",
            ClientEvent::Typing { .. } => "typing",
            ClientEvent::SendImage { .. } => "sendImage",
        }
    }

    pub fn payload(&self) -> Result<Value, ChatError> {
        let encoded = match self {
            ClientEvent::JoinRoom(room) => serde_json::to_value(room),
            ClientEvent::SendMessage { message, room_id } => {
                serde_json::to_value(SendMessagePayload {
                    message,
                    room_id: room_id.as_ref(),
                })
            }
            ClientEvent::Typing { room_id, typing } => serde_json::to_value(TypingPayload {
                room_id: room_id.as_ref(),
                typing: *typing,
            }),
            ClientEvent::SendImage { image_url, room_id } => {
                serde_json::to_value(SendImagePayload {
                    image_url,
                    room_id: room_id.as_ref(),
                })
            }
        };
        encoded.map_err(|source| ChatError::encode(self.name(), source))
    }
}

/// Events the server pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    ChatMessage(ChatMessage),
    SendImage(ChatMessage),
    Typing { username: String, typing: bool },
}

#[derive(Deserialize)]
struct TypingNotice {
    username: String,
    typing: bool,
}

impl ServerEvent {
    pub fn decode(name: &str, payload: &str) -> Result<Self, ChatError> {
        let json_err = |source| ChatError::json("server event", source);
        match name {
            "chatMessage" => serde_json::from_str(payload)
                .map(ServerEvent::ChatMessage)
                .map_err(json_err),
            "sendImage" => serde_json::from_str(payload)
                .map(ServerEvent::SendImage)
                .map_err(json_err),
            "typing" => serde_json::from_str::<TypingNotice>(payload)
                .map(|notice| ServerEvent::Typing {
                    username: notice.username,
                    typing: notice.typing,
                })
                .map_err(json_err),
            other => Err(ChatError::unknown_event(other)),
        }
    }
}

/// Body of the `/upload-image` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl UploadResponse {
    pub fn decode(json: &str) -> Result<Self, ChatError> {
        serde_json::from_str(json).map_err(|source| ChatError::json("upload response", source))
    }
}

/// Body of the `/user/<id>` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UserDetails {
    pub fn decode(json: &str) -> Result<Self, ChatError> {
        serde_json::from_str(json).map_err(|source| ChatError::json("user details", source))
    }
}
