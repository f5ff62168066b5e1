//! Match events.
//!
//! The controller emits events synchronously after every state change so a
//! presentation layer can render them. Events carry the values after the
//! change, never references into controller state.

use serde::{Deserialize, Serialize};

use crate::core::{Divisor, Side};
use crate::rules::MatchResult;
use crate::search::StrategyKind;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new match began.
    MatchStarted {
        starting_number: u64,
        starting_side: Side,
        /// `None` for a custom strategy.
        strategy: Option<StrategyKind>,
    },

    /// A divisor was applied.
    MoveApplied {
        mover: Side,
        divisor: Divisor,
        from: u64,
        to: u64,
    },

    /// A side's score changed.
    ScoreChanged { side: Side, delta: i64, score: i64 },

    /// The bank grew.
    BankChanged { bank: u64 },

    /// The match is over.
    MatchEnded { result: MatchResult },
}

impl GameEvent {
    /// Short name of the event kind, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::MatchStarted { .. } => "match_started",
            GameEvent::MoveApplied { .. } => "move_applied",
            GameEvent::ScoreChanged { .. } => "score_changed",
            GameEvent::BankChanged { .. } => "bank_changed",
            GameEvent::MatchEnded { .. } => "match_ended",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::MatchStarted {
                starting_number,
                starting_side,
                strategy,
            } => {
                write!(f, "Starting number: {starting_number}. {starting_side} starts first.")?;
                if let Some(kind) = strategy {
                    write!(f, " Computer will use: {kind}")?;
                }
                Ok(())
            }
            GameEvent::MoveApplied { mover, divisor, to, .. } => {
                write!(f, "{mover} chooses to divide by {divisor}. New number: {to}")
            }
            GameEvent::ScoreChanged { side, delta, .. } if *delta >= 0 => {
                write!(f, "{side} gains {delta} point(s).")
            }
            GameEvent::ScoreChanged { side, delta, .. } => {
                write!(f, "{side} loses {} point(s).", delta.unsigned_abs())
            }
            GameEvent::BankChanged { bank } => write!(f, "1 point added to the game bank ({bank})."),
            GameEvent::MatchEnded { result } => write!(
                f,
                "Final scores: Player {}, Computer {} ({})",
                result.player_score, result.computer_score, result.ending
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Ending, Winner};

    #[test]
    fn test_event_kind() {
        assert_eq!(GameEvent::BankChanged { bank: 1 }.kind(), "bank_changed");
        let moved = GameEvent::MoveApplied {
            mover: Side::Player,
            divisor: Divisor::Two,
            from: 30,
            to: 15,
        };
        assert_eq!(moved.kind(), "move_applied");
    }

    #[test]
    fn test_event_display() {
        let moved = GameEvent::MoveApplied {
            mover: Side::Player,
            divisor: Divisor::Two,
            from: 30,
            to: 15,
        };
        assert_eq!(moved.to_string(), "Player chooses to divide by 2. New number: 15");

        let lost = GameEvent::ScoreChanged {
            side: Side::Computer,
            delta: -1,
            score: -1,
        };
        assert_eq!(lost.to_string(), "Computer loses 1 point(s).");

        let started = GameEvent::MatchStarted {
            starting_number: 12_000,
            starting_side: Side::Player,
            strategy: Some(StrategyKind::AlphaBeta),
        };
        assert_eq!(
            started.to_string(),
            "Starting number: 12000. Player starts first. Computer will use: Alpha-Beta"
        );
    }

    #[test]
    fn test_event_serialization() {
        let ended = GameEvent::MatchEnded {
            result: MatchResult {
                player_score: -1,
                computer_score: -1,
                bank: 0,
                bank_awarded_to: None,
                ending: Ending::ReachedThree,
                winner: Winner::Draw,
            },
        };
        let json = serde_json::to_string(&ended).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ended, deserialized);
    }
}
