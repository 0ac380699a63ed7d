//! Tracing bootstrap.
//!
//! Filter precedence: `RUST_LOG`, then `CHAT_EMOJI_LOG`, then the built-in default
//! (`debug` for this crate when `CHAT_EMOJI_DEBUG=1`).

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

const DEFAULT_FILTER: &str = "warn,chat_emoji=info,chat_client=info";
const DEBUG_FILTER: &str = "info,chat_emoji=debug,chat_client=debug";

/// Installs a global fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_with(&EnvConfig::from_env());
}

pub fn init_with(config: &EnvConfig) {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(filter_for(config))
        .try_init();
}

fn filter_for(config: &EnvConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if let Some(filter) = config
        .log_filter
        .as_deref()
        .and_then(|value| EnvFilter::try_new(value).ok())
    {
        return filter;
    }

    EnvFilter::new(default_directives(config))
}

fn default_directives(config: &EnvConfig) -> &'static str {
    if config.debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}
