//! Emoji shortcode autocomplete for chat composers.
//!
//! Invariant: selection mode lives in exactly one place, the [`Composer`]'s navigator. Hosts
//! read it through [`Composer::is_selection_mode`] instead of keeping their own flag.
//!
//! # Public API Overview
//! - Find the `:query` token under the cursor with [`extract_trigger`].
//! - Walk an ordered result set with wrap-around using [`ResultNavigator`].
//! - Splice the chosen glyph back into the text with [`insert`].
//! - Drive all three from input and key events through [`Composer`], which also discards
//!   search results that arrive for an outdated query.

pub mod config;
pub mod logging;

pub mod composer;
pub mod core;
pub mod emoji;

/// Input-bound autocomplete controller.
pub use crate::composer::{Composer, InputBuffer, KeyOutcome};

/// Token extraction, navigation, insertion and search primitives.
pub use crate::emoji::insert::{insert, insert_with_cursor};
pub use crate::emoji::navigator::{NavigatorState, ResultNavigator, ResultsView};
pub use crate::emoji::search::{
    EmojiCandidate, EmojiIndex, EmojiSearch, SearchGeneration, SearchRequest, SearchTicket,
};
pub use crate::emoji::trigger::{extract_trigger, TriggerToken};

/// Fuzzy matching helpers.
pub use crate::core::fuzzy::{fuzzy_filter, fuzzy_match, FuzzyMatch};

/// Keybinding configuration and default mappings.
pub use crate::core::keys::{
    normalize_key_id, ComposerAction, ComposerKeybindings, ComposerKeybindingsConfig, KeyBinding,
    KeyId, DEFAULT_COMPOSER_KEYBINDINGS,
};

/// Environment configuration.
pub use crate::config::EnvConfig;
