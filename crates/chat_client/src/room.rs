//! Room identity and the HTTP paths derived from it.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

pub const UPLOAD_IMAGE_PATH: &str = "/upload-image";

static ROOM_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/server/(\d+)$").expect("room path regex is valid"));

/// Numeric room id as it appears in `/server/<id>`. Kept as text; ids may exceed `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the room id from a page path such as `/server/42`.
pub fn parse_room_path(path: &str) -> Option<RoomId> {
    ROOM_PATH
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|id| RoomId(id.as_str().to_string()))
}

impl std::str::FromStr for RoomId {
    type Err = ChatError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        parse_room_path(path).ok_or_else(|| ChatError::InvalidRoomPath {
            path: path.to_string(),
        })
    }
}

pub fn history_path(room: &RoomId) -> String {
    format!("/messages/{room}")
}

pub fn user_path(user_id: &str) -> String {
    format!("/user/{user_id}")
}
