use std::path::Path;

use crate::bot::BotPolicy;
use crate::error::ConfigError;
use crate::game::Color;

/// One configured human player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    /// Piece color as a `#rrggbb` hex string.
    pub color: String,
    /// Display name; the color stands in when absent.
    pub label: Option<String>,
}

/// Automated-opponent settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub enabled: bool,
    pub policy: BotPolicy,
}

/// Game configuration, loadable from TOML. Immutable for the life of a
/// session once validated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board columns.
    pub width: usize,
    /// Board rows.
    pub height: usize,
    /// Ordered human players; the opener is first (unless a bot is enabled,
    /// in which case the bot slots in ahead of the list).
    pub players: Vec<PlayerConfig>,
    pub bot: BotConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
            players: vec![
                PlayerConfig {
                    color: "#ff0000".to_string(),
                    label: Some("Red".to_string()),
                },
                PlayerConfig {
                    color: "#ffff00".to_string(),
                    label: Some("Yellow".to_string()),
                },
            ],
            bot: BotConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Degenerate input is rejected here,
    /// before any board exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("width must be > 0".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("height must be > 0".into()));
        }
        if self.players.is_empty() {
            return Err(ConfigError::Validation(
                "at least one player is required".into(),
            ));
        }
        for (i, player) in self.players.iter().enumerate() {
            if let Err(e) = Color::from_hex(&player.color) {
                return Err(ConfigError::Validation(format!("players[{i}]: {e}")));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
