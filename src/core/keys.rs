//! Composer keybindings.
//!
//! Key ids are strings such as `down`, `tab` or `shift+enter`. Hosts may pass browser-style
//! names (`ArrowDown`, `Shift+Enter`); [`normalize_key_id`] folds both spellings together.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComposerAction {
    SelectNext,
    SelectPrevious,
    SelectConfirm,
    SelectCancel,
    Submit,
    NewLine,
}

pub type KeyId = String;

#[derive(Debug, Clone)]
pub enum KeyBinding {
    Single(KeyId),
    Multiple(Vec<KeyId>),
}

impl KeyBinding {
    fn into_keys(self) -> Vec<KeyId> {
        match self {
            KeyBinding::Single(key) => vec![key],
            KeyBinding::Multiple(keys) => keys,
        }
    }
}

impl From<&str> for KeyBinding {
    fn from(value: &str) -> Self {
        KeyBinding::Single(value.to_string())
    }
}

impl From<Vec<&str>> for KeyBinding {
    fn from(value: Vec<&str>) -> Self {
        KeyBinding::Multiple(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for KeyBinding {
    fn from(value: Vec<String>) -> Self {
        KeyBinding::Multiple(value)
    }
}

/// Per-action overrides layered on top of [`DEFAULT_COMPOSER_KEYBINDINGS`].
#[derive(Debug, Clone, Default)]
pub struct ComposerKeybindingsConfig {
    entries: HashMap<ComposerAction, KeyBinding>,
}

impl ComposerKeybindingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<K: Into<KeyBinding>>(&mut self, action: ComposerAction, keys: K) {
        self.entries.insert(action, keys.into());
    }
}

pub static DEFAULT_COMPOSER_KEYBINDINGS: Lazy<HashMap<ComposerAction, Vec<KeyId>>> =
    Lazy::new(|| {
        use ComposerAction::*;

        let keys = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
        let mut map = HashMap::new();
        map.insert(SelectNext, keys(&["down", "right"]));
        map.insert(SelectPrevious, keys(&["up", "left"]));
        map.insert(SelectConfirm, keys(&["enter", "tab"]));
        map.insert(SelectCancel, keys(&["escape"]));
        map.insert(Submit, keys(&["enter"]));
        map.insert(NewLine, keys(&["shift+enter"]));
        map
    });

const MODIFIER_ORDER: [&str; 4] = ["ctrl", "alt", "shift", "meta"];

/// Lowercases, resolves browser key names and orders modifiers as `ctrl+alt+shift+meta+key`.
pub fn normalize_key_id(key_id: &str) -> KeyId {
    let mut modifiers: Vec<&'static str> = Vec::new();
    let mut base = String::new();

    for part in key_id.trim().split('+') {
        let part = part.trim().to_ascii_lowercase();
        let modifier = match part.as_str() {
            "ctrl" | "control" => Some("ctrl"),
            "alt" | "option" => Some("alt"),
            "shift" => Some("shift"),
            "meta" | "cmd" | "super" => Some("meta"),
            _ => None,
        };
        match modifier {
            Some(m) if !modifiers.contains(&m) => modifiers.push(m),
            Some(_) => {}
            None => base = part,
        }
    }

    let base = match base.as_str() {
        "arrowdown" => "down",
        "arrowup" => "up",
        "arrowleft" => "left",
        "arrowright" => "right",
        "esc" => "escape",
        "return" => "enter",
        other => other,
    };

    let mut normalized = String::new();
    for modifier in MODIFIER_ORDER {
        if modifiers.contains(&modifier) {
            normalized.push_str(modifier);
            normalized.push('+');
        }
    }
    normalized.push_str(base);
    normalized
}

/// Resolved bindings: which key ids trigger which composer action.
#[derive(Debug, Clone)]
pub struct ComposerKeybindings {
    action_to_keys: HashMap<ComposerAction, Vec<KeyId>>,
}

impl Default for ComposerKeybindings {
    fn default() -> Self {
        Self::new(ComposerKeybindingsConfig::default())
    }
}

impl ComposerKeybindings {
    pub fn new(config: ComposerKeybindingsConfig) -> Self {
        let mut action_to_keys: HashMap<ComposerAction, Vec<KeyId>> = DEFAULT_COMPOSER_KEYBINDINGS
            .iter()
            .map(|(action, keys)| (*action, keys.clone()))
            .collect();

        for (action, binding) in config.entries {
            let keys = binding
                .into_keys()
                .iter()
                .map(|key| normalize_key_id(key))
                .collect();
            action_to_keys.insert(action, keys);
        }

        Self { action_to_keys }
    }

    pub fn matches(&self, key_id: &str, action: ComposerAction) -> bool {
        let Some(keys) = self.action_to_keys.get(&action) else {
            return false;
        };
        let key_id = normalize_key_id(key_id);
        keys.iter().any(|key| *key == key_id)
    }

    pub fn keys(&self, action: ComposerAction) -> Vec<KeyId> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }
}
