//! Game setup, loadable from JSON
//!
//! Every field is optional, missing ones fall back to the defaults of a
//! classic game: `x` against `o` on a fast 8x8 board.
//!
//! ```json
//! { "player_one": "r", "player_two": "b", "representation": "memory", "dimension": 12 }
//! ```
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dimensions::BoardDimension;
use crate::error::{BoardError, ConfigError};
use crate::representation::Representation;
use crate::types::Players;

/// Everything needed to start a [crate::session::GameSession]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// letter for the player starting at the top
    pub player_one: char,
    /// letter for the player starting at the bottom
    pub player_two: char,
    #[allow(missing_docs)]
    pub representation: Representation,
    /// side length, one of 8, 10, 12, 14 or 16
    pub dimension: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let players = Players::default();
        Self {
            player_one: players.one().as_char(),
            player_two: players.two().as_char(),
            representation: Representation::default(),
            dimension: BoardDimension::default().as_i32(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// checks that the players and the dimension are playable
    pub fn validate(&self) -> Result<(), BoardError> {
        self.players()?;
        self.board_dimension()?;
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn players(&self) -> Result<Players, BoardError> {
        Players::new(self.player_one, self.player_two)
    }

    #[allow(missing_docs)]
    pub fn board_dimension(&self) -> Result<BoardDimension, BoardError> {
        BoardDimension::new(self.dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.players().unwrap(), Players::default());
        assert_eq!(config.board_dimension().unwrap().get(), 8);
        assert_eq!(config.representation, Representation::Fast);
    }

    #[test]
    fn test_full_config() {
        let config = GameConfig::from_json_str(
            r#"{"player_one": "R", "player_two": "b", "representation": "m", "dimension": 16}"#,
        )
        .unwrap();
        let players = config.players().unwrap();
        assert_eq!(players.one(), Token('r'));
        assert_eq!(players.two(), Token('b'));
        assert_eq!(config.representation, Representation::MemoryEfficient);
        assert_eq!(config.board_dimension().unwrap().get(), 16);
    }

    #[test]
    fn test_rejects_unplayable_values() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{"dimension": 9}"#),
            Err(ConfigError::Board(BoardError::InvalidDimension { value: 9 }))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"player_one": "o"}"#),
            Err(ConfigError::Board(BoardError::InvalidPlayers { .. }))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"player_two": "*"}"#),
            Err(ConfigError::Board(BoardError::InvalidPlayers { .. }))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json_str(r#"{"colour": "red"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"representation": "tiny"}"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_json_str(r#"{"player_one": "xy"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GameConfig::load("/definitely/not/a/checkers/config.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
