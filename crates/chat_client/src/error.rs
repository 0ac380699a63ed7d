use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to decode {context} JSON: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {context} JSON: {source}")]
    Encode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown server event '{name}'")]
    UnknownEvent { name: String },

    #[error("path '{path}' is not a room path; expected /server/<digits>")]
    InvalidRoomPath { path: String },

    #[error("upload response did not include an image URL")]
    MissingImageUrl,
}

impl ChatError {
    #[must_use]
    pub fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    #[must_use]
    pub fn encode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { context, source }
    }

    #[must_use]
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }
}
