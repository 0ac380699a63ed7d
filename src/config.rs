//! Environment configuration.

use std::env;

use crate::emoji::search::{EmojiIndex, DEFAULT_MAX_RESULTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub max_results: usize,
    pub log_filter: Option<String>,
    pub debug: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            log_filter: None,
            debug: false,
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            max_results: env_positive_usize("CHAT_EMOJI_MAX_RESULTS")
                .unwrap_or(DEFAULT_MAX_RESULTS),
            log_filter: env_string_opt("CHAT_EMOJI_LOG"),
            debug: env_flag("CHAT_EMOJI_DEBUG"),
        }
    }

    /// Builds the bundled emoji index with this config's result cap.
    pub fn emoji_index(&self) -> EmojiIndex {
        EmojiIndex::new(self.max_results)
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_positive_usize(key: &str) -> Option<usize> {
    env_string_opt(key)?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|value| *value > 0)
}
