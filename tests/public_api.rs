#![allow(unused_imports)]

use chat_emoji::{
    extract_trigger, fuzzy_filter, fuzzy_match, insert, insert_with_cursor, normalize_key_id,
    ComposerAction, ComposerKeybindings, ComposerKeybindingsConfig, Composer, EmojiCandidate,
    EmojiIndex, EmojiSearch, EnvConfig, FuzzyMatch, InputBuffer, KeyBinding, KeyId, KeyOutcome,
    NavigatorState, ResultNavigator, ResultsView, SearchGeneration, SearchRequest, SearchTicket,
    TriggerToken, DEFAULT_COMPOSER_KEYBINDINGS,
};

#[test]
fn public_api_exports_compile() {}
