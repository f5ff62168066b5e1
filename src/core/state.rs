//! Game state.
//!
//! `GameState` is plain data. It is created by the controller at match start
//! and only ever changed by `TransitionEngine`, which returns a new value
//! rather than mutating in place. Move history uses `im` persistent vectors
//! so copies handed to strategies stay O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::divisor::MoveRecord;
use super::side::{Side, SideMap};

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The number being divided. Always >= 2.
    pub current_number: u64,

    /// Per-side scores. May go negative.
    pub scores: SideMap<i64>,

    /// Shared bonus pool.
    pub bank: u64,

    /// Whose move is next. After the final move this is the side that
    /// made it.
    pub active_side: Side,

    /// The side that made the most recent move, if any.
    pub last_mover: Option<Side>,

    /// Side that collected the bank at settlement, if any.
    pub bank_collected_by: Option<Side>,

    /// Set once the final scores (bank included) are fixed.
    pub settled: bool,

    /// Moves played so far, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh match state.
    #[must_use]
    pub fn new(starting_number: u64, starting_side: Side) -> Self {
        Self {
            current_number: starting_number,
            scores: SideMap::with_value(0),
            bank: 0,
            active_side: starting_side,
            last_mover: None,
            bank_collected_by: None,
            settled: false,
            history: Vector::new(),
        }
    }

    /// The player's score.
    #[must_use]
    pub fn player_score(&self) -> i64 {
        self.scores[Side::Player]
    }

    /// The computer's score.
    #[must_use]
    pub fn computer_score(&self) -> i64 {
        self.scores[Side::Computer]
    }

    /// Number of moves played.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Divisor;

    #[test]
    fn test_game_state_new() {
        let state = GameState::new(10_002, Side::Computer);

        assert_eq!(state.current_number, 10_002);
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.computer_score(), 0);
        assert_eq!(state.bank, 0);
        assert_eq!(state.active_side, Side::Computer);
        assert_eq!(state.last_mover, None);
        assert!(!state.settled);
        assert_eq!(state.ply(), 0);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = GameState::new(18, Side::Player);
        state.history.push_back(MoveRecord {
            ply: 1,
            mover: Side::Player,
            divisor: Divisor::Two,
            from: 18,
            to: 9,
        });

        let mut copy = state.clone();
        copy.current_number = 3;

        assert_eq!(state.current_number, 18);
        assert_eq!(copy.ply(), 1);
        assert_eq!(copy.history, state.history);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(30, Side::Player);
        state.scores[Side::Player] = -1;
        state.bank = 1;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
