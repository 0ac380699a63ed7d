//! Chat messages as delivered live and as loaded from room history.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ChatError;
use crate::linkify::{is_image_url, linkify, TextSegment};
use crate::timestamp::Timestamp;

/// A message ready for display. Live `chatMessage`/`sendImage` events carry this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "id_as_string")]
    pub user_id: Option<String>,
    pub message: String,
    pub username: String,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Image(String),
    Text(Vec<TextSegment>),
}

impl ChatMessage {
    pub fn body(&self) -> MessageBody {
        classify(&self.message)
    }

    /// Sort key: dated messages by time, then undated ones.
    pub fn chronological_key(&self) -> (bool, Option<OffsetDateTime>) {
        let moment = self.timestamp.as_ref().and_then(Timestamp::parse);
        (moment.is_none(), moment)
    }
}

/// A message that is only an image URL renders as an image; anything else as linkified text.
pub fn classify(message: &str) -> MessageBody {
    if is_image_url(message) {
        MessageBody::Image(message.to_string())
    } else {
        MessageBody::Text(linkify(message))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistorySender {
    username: String,
    #[serde(default)]
    profile_picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRecord {
    #[serde(default, deserialize_with = "id_as_string")]
    sender_id: Option<String>,
    content: String,
    #[serde(default)]
    created_at: Option<Timestamp>,
    sender: HistorySender,
}

impl From<HistoryRecord> for ChatMessage {
    fn from(record: HistoryRecord) -> Self {
        ChatMessage {
            user_id: record.sender_id,
            message: record.content,
            username: record.sender.username,
            timestamp: record.created_at,
            profile_picture: record.sender.profile_picture,
        }
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(id)) => Some(id),
        Some(serde_json::Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

/// Decodes a `/messages/<room>` response and orders it oldest first.
pub fn decode_history(json: &str) -> Result<Vec<ChatMessage>, ChatError> {
    let records: Vec<HistoryRecord> =
        serde_json::from_str(json).map_err(|source| ChatError::json("message history", source))?;
    let mut messages: Vec<ChatMessage> = records.into_iter().map(ChatMessage::from).collect();
    sort_chronologically(&mut messages);
    Ok(messages)
}

/// Stable sort by timestamp; messages without a parseable timestamp go last in arrival order.
pub fn sort_chronologically(messages: &mut [ChatMessage]) {
    messages.sort_by_cached_key(ChatMessage::chronological_key);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{classify, decode_history, ChatMessage, MessageBody};
    use crate::linkify::TextSegment;
    use crate::timestamp::Timestamp;

    #[test]
    fn image_messages_are_images() {
        assert_eq!(
            classify("/uploads/cat.gif"),
            MessageBody::Image("/uploads/cat.gif".to_string())
        );
        assert_eq!(
            classify("hi"),
            MessageBody::Text(vec![TextSegment::Text("hi".to_string())])
        );
    }

    #[test]
    fn live_message_decodes_camel_case() {
        let json = r#"{
            "userId": "u1",
            "message": "hello",
            "username": "ana",
            "timestamp": "2024-01-01T10:00:00Z",
            "profilePicture": "/p/ana.png"
        }"#;
        let message: ChatMessage = serde_json::from_str(json).expect("decode");
        assert_eq!(message.user_id.as_deref(), Some("u1"));
        assert_eq!(message.profile_picture.as_deref(), Some("/p/ana.png"));
        assert_eq!(message.timestamp, Some(Timestamp::from("2024-01-01T10:00:00Z")));
    }

    #[test]
    fn history_is_sorted_oldest_first() {
        let json = r#"[
            {"senderId": 2, "content": "second", "createdAt": "2024-01-01T10:05:00Z",
             "sender": {"username": "bo", "profilePicture": null}},
            {"senderId": "1", "content": "undated", "createdAt": "not a date",
             "sender": {"username": "ana"}},
            {"senderId": "1", "content": "first", "createdAt": "2024-01-01T10:00:00Z",
             "sender": {"username": "ana", "profilePicture": "/p/ana.png"}}
        ]"#;
        let messages = decode_history(json).expect("history");
        let contents: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "undated"]);
        assert_eq!(messages[1].user_id.as_deref(), Some("2"));
        assert_eq!(messages[0].username, "ana");
    }

    #[test]
    fn malformed_history_is_an_error() {
        let err = decode_history(r#"{"not": "a list"}"#).expect_err("must fail");
        assert!(err.to_string().contains("message history"));
    }
}
