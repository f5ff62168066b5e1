//! Error types.
//!
//! Every error is recoverable by the caller: an operation that fails leaves
//! the controller and its `GameState` exactly as they were.

use std::path::PathBuf;

use super::side::Side;

/// Errors reported by the engine and controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("no legal divisor for {number}")]
    SearchExhausted { number: u64 },
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("divisor {0} is not 2 or 3")]
    UnsupportedDivisor(u64),

    #[error("{divisor} does not divide {number}")]
    NotDivisible { divisor: u64, number: u64 },

    #[error("it is {active}'s turn")]
    WrongTurn { active: Side },

    #[error("the match is already over")]
    MatchOver,

    #[error("the match is not over: {number} still has a legal divisor")]
    MatchNotOver { number: u64 },

    #[error("no match in progress")]
    NoMatchInProgress,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfiguration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejection_display() {
        let err = GameError::from(MoveRejection::NotDivisible {
            divisor: 2,
            number: 9,
        });
        assert_eq!(err.to_string(), "invalid move: 2 does not divide 9");

        let err = GameError::from(MoveRejection::WrongTurn {
            active: Side::Computer,
        });
        assert_eq!(err.to_string(), "invalid move: it is Computer's turn");
    }

    #[test]
    fn test_search_exhausted_display() {
        let err = GameError::SearchExhausted { number: 25 };
        assert_eq!(err.to_string(), "no legal divisor for 25");
    }

    #[test]
    fn test_config_error_converts() {
        let err: GameError = ConfigError::Validation("search.depth must be > 0".into()).into();
        assert_eq!(
            err,
            GameError::InvalidConfiguration(
                "config validation error: search.depth must be > 0".into()
            )
        );
    }
}
