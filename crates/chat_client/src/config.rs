//! Client configuration from the environment.

use std::env;
use std::time::Duration;

use time::macros::format_description;
use time::UtcOffset;

use crate::typing::DEFAULT_TYPING_TIMEOUT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub typing_timeout: Duration,
    pub utc_offset: UtcOffset,
    pub emoji: chat_emoji::EnvConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            typing_timeout: DEFAULT_TYPING_TIMEOUT,
            utc_offset: UtcOffset::UTC,
            emoji: chat_emoji::EnvConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            typing_timeout: env_string_opt("CHAT_TYPING_TIMEOUT_MS")
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|millis| *millis > 0)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TYPING_TIMEOUT),
            utc_offset: env_string_opt("CHAT_UTC_OFFSET")
                .and_then(|value| parse_offset(&value))
                .unwrap_or(UtcOffset::UTC),
            emoji: chat_emoji::EnvConfig::from_env(),
        }
    }
}

/// `+HH:MM` / `-HH:MM`; `Z` and `UTC` mean zero.
pub fn parse_offset(value: &str) -> Option<UtcOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Some(UtcOffset::UTC);
    }
    UtcOffset::parse(
        value,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .ok()
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
