//! Configuration file loading for the console game.
//!
//! Settings come from `checkers.toml` in the current directory, or from a
//! file named on the command line. Every setting has a default, so the file
//! is optional.
//!
//! ```toml
//! board_size = 8
//!
//! [[players]]
//! name = "Alice"
//! color = "Black"
//!
//! [[players]]
//! name = "Bob"
//! color = "White"
//! ```

use checkers_core::{Color, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid number of players: expected 2, got {0}")]
    PlayerCount(usize),
    #[error("Invalid name for Player {0}")]
    EmptyName(usize),
    #[error("Players must have different names")]
    DuplicateName,
}

/// A player entry in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Color,
}

/// Console game configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width and height of the board. Defaults to 8.
    #[serde(default = "default_board_size")]
    pub board_size: u8,
    /// The two players, in turn order.
    /// Defaults to "Player 1" on Black and "Player 2" on White.
    #[serde(default = "default_players")]
    pub players: Vec<PlayerConfig>,
}

fn default_board_size() -> u8 {
    checkers_engine::DEFAULT_BOARD_SIZE
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig {
            name: "Player 1".to_string(),
            color: Color::Black,
        },
        PlayerConfig {
            name: "Player 2".to_string(),
            color: Color::White,
        },
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::config_path()`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Builds the two players, checking the entries the engine does not.
    ///
    /// Color clashes are left to the engine, which rejects them when the
    /// game is created.
    pub fn players(&self) -> Result<[Player; 2], ConfigError> {
        let [first, second] = self.players.as_slice() else {
            return Err(ConfigError::PlayerCount(self.players.len()));
        };

        for (i, p) in [first, second].into_iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(i + 1));
            }
        }
        if first.name == second.name {
            return Err(ConfigError::DuplicateName);
        }

        Ok([
            Player::new(first.color, first.name.clone()),
            Player::new(second.color, second.name.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        let players = config.players().unwrap();
        assert_eq!(players[0], Player::new(Color::Black, "Player 1"));
        assert_eq!(players[1], Player::new(Color::White, "Player 2"));
    }

    #[test]
    fn parses_players_and_size() {
        let config = GameConfig::from_toml(
            r#"
            board_size = 10

            [[players]]
            name = "Alice"
            color = "white"

            [[players]]
            name = "Bob"
            color = "Black"
            "#,
        )
        .unwrap();
        assert_eq!(config.board_size, 10);
        let players = config.players().unwrap();
        assert_eq!(players[0], Player::new(Color::White, "Alice"));
        assert_eq!(players[1], Player::new(Color::Black, "Bob"));
    }

    #[test]
    fn rejects_bad_toml() {
        assert!(matches!(
            GameConfig::from_toml("board_size = \"big\""),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            GameConfig::from_toml("[[players]]\nname = \"A\"\ncolor = \"Red\""),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn validates_players() {
        let mut config = GameConfig::default();
        config.players.pop();
        assert!(matches!(config.players(), Err(ConfigError::PlayerCount(1))));

        let mut config = GameConfig::default();
        config.players[1].name = "  ".to_string();
        assert!(matches!(config.players(), Err(ConfigError::EmptyName(2))));

        let mut config = GameConfig::default();
        config.players[1].name = "Player 1".to_string();
        assert!(matches!(config.players(), Err(ConfigError::DuplicateName)));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = GameConfig::load(Some(Path::new("definitely/not/here.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
