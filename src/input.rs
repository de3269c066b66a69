//! Key names to game commands
//!
//! Hosts receive raw keys from whatever event source they own; this table
//! turns the configured key names into [`Command`]s. Matching ignores case.

use crate::game::Command;
use crate::settings::{Settings, SettingsError};
use std::collections::HashMap;

/// Key bindings resolved from settings - several keys may share a command
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, Command>,
}

impl KeyMap {
    /// Create a key map from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let keys = &settings.keys;
        let mut bindings = HashMap::new();
        for (names, command) in [
            (&keys.move_left, Command::MoveLeft),
            (&keys.move_right, Command::MoveRight),
            (&keys.soft_drop, Command::SoftDrop),
            (&keys.rotate, Command::Rotate),
            (&keys.hard_drop, Command::HardDrop),
        ] {
            for name in names {
                bindings.insert(normalize_key(name), command);
            }
        }
        Self { bindings }
    }

    /// The command bound to a key, if any
    pub fn command_for(&self, key: &str) -> Option<Command> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Map a whitespace-separated key script to commands
    pub fn parse_script(&self, script: &str) -> Result<Vec<Command>, SettingsError> {
        script
            .split_whitespace()
            .map(|key| {
                self.command_for(key)
                    .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))
            })
            .collect()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Normalize key names for consistent handling
fn normalize_key(name: &str) -> String {
    match name.trim().to_lowercase().as_str() {
        " " | "spacebar" => "space".to_string(),
        "escape" => "esc".to_string(),
        other => other.to_string(),
    }
}
