use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Game, Player, DEFAULT_POCKETS, DEFAULT_STONES};

/// Which front end drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// Line-oriented prompt on stdin/stdout
    #[default]
    Text,
    /// Full-screen terminal UI
    Tui,
}

/// Board setup for a new game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub stones_per_pocket: u32,
    pub pockets_per_side: usize,
    pub first_player: Player,
    /// Pre-built board; overrides the two counts above when present.
    pub board: Option<Vec<i64>>,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            stones_per_pocket: DEFAULT_STONES,
            pockets_per_side: DEFAULT_POCKETS,
            first_player: Player::One,
            board: None,
        }
    }
}

impl GameSettings {
    /// Build a fresh game from these settings.
    pub fn build(&self) -> Result<Game, ConfigError> {
        match &self.board {
            Some(cells) => Game::from_board(cells.clone(), self.first_player),
            None => Game::with_first_player(
                self.stones_per_pocket,
                self.pockets_per_side,
                self.first_player,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub interface: Interface,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values by building the game they describe.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.build().map(|_| ())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
