use std::path::PathBuf;

/// Errors raised while building a game or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("custom board must be at least 4 elements, got {0}")]
    BoardTooShort(usize),

    #[error("custom board must have an even number of elements, got {0}")]
    OddBoardLength(usize),

    #[error("cannot have negative stones in a pocket (index {index} holds {stones})")]
    NegativeStones { index: usize, stones: i64 },

    #[error("pocket at index {index} holds too many stones ({stones})")]
    PocketOverflow { index: usize, stones: i64 },

    #[error("board must have at least one pocket per side")]
    NoPockets,

    #[error("board holds more stones than a game can track")]
    TooManyStones,

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised by `Game::make_move`. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{pocket} is an invalid move. Must be between 1 and {max}.")]
    OutOfRange { pocket: usize, max: usize },

    #[error("Invalid move. Chosen pocket {pocket} is empty.")]
    EmptyPocket { pocket: usize },

    #[error("This game is already over. No further moves can be made.")]
    GameOver,
}

impl MoveError {
    /// True when the move was refused because the game had already ended,
    /// as opposed to an illegal pocket choice.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NegativeStones {
            index: 2,
            stones: -1,
        };
        assert_eq!(
            err.to_string(),
            "cannot have negative stones in a pocket (index 2 holds -1)"
        );
        assert_eq!(
            ConfigError::BoardTooShort(3).to_string(),
            "custom board must be at least 4 elements, got 3"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::OutOfRange { pocket: 7, max: 6 };
        assert_eq!(err.to_string(), "7 is an invalid move. Must be between 1 and 6.");

        let err = MoveError::EmptyPocket { pocket: 3 };
        assert_eq!(err.to_string(), "Invalid move. Chosen pocket 3 is empty.");
    }

    #[test]
    fn test_move_error_kind() {
        assert!(MoveError::GameOver.is_game_over());
        assert!(!MoveError::EmptyPocket { pocket: 1 }.is_game_over());
        assert!(!MoveError::OutOfRange { pocket: 0, max: 6 }.is_game_over());
    }
}
