//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/tetrs-engine/settings.toml (or platform equivalent)

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("board {width}x{height} is smaller than {}x{}", MIN_BOARD_WIDTH, MIN_BOARD_HEIGHT)]
    BoardTooSmall { width: usize, height: usize },
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// Engine settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board dimensions
    pub board: BoardSettings,
    /// Gameplay settings
    pub gameplay: GameplaySettings,
    /// Keybindings
    pub keys: KeyBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    /// Piece sequence seed; a random one is picked when absent
    pub seed: Option<u64>,
    /// Upper bound on ticks per game for the headless runner
    pub max_ticks: u64,
    /// Games the autoplayer plays, restarting after each defeat
    pub games: u32,
}

/// Key bindings (stored as strings for easy editing)
/// Each command can have one or more keys bound to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_left: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub move_right: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub soft_drop: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub rotate: Vec<String>,
    #[serde(deserialize_with = "deserialize_keys", serialize_with = "serialize_keys")]
    pub hard_drop: Vec<String>,
}

/// Deserialize keys as either a single string or array of strings
fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct KeysVisitor;

    impl<'de> Visitor<'de> for KeysVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or array of strings")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut keys = Vec::new();
            while let Some(key) = seq.next_element::<String>()? {
                keys.push(key);
            }
            Ok(keys)
        }
    }

    deserializer.deserialize_any(KeysVisitor)
}

/// Serialize keys: single key as string, multiple as array
fn serialize_keys<S>(keys: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    if let [key] = keys.as_slice() {
        serializer.serialize_str(key)
    } else {
        let mut seq = serializer.serialize_seq(Some(keys.len()))?;
        for key in keys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: 100_000,
            games: 1,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["Left".to_string(), "a".to_string()],
            move_right: vec!["Right".to_string(), "d".to_string()],
            soft_drop: vec!["Down".to_string(), "s".to_string()],
            rotate: vec!["Up".to_string(), "w".to_string()],
            hard_drop: vec!["Space".to_string()],
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tetrs", "tetrs-engine")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from the config directory, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io { .. }) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        Ok(())
    }

    /// Reject boards the spawn shapes do not fit on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = (self.board.width, self.board.height);
        if width < MIN_BOARD_WIDTH || height < MIN_BOARD_HEIGHT {
            return Err(SettingsError::BoardTooSmall { width, height });
        }
        Ok(())
    }
}
