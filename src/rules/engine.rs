//! Transition engine: applies moves, detects the end of a match, settles
//! the bank.
//!
//! A move, in order:
//! 1. divides the current number,
//! 2. scores the mover +1 if the result is even, -1 if odd,
//! 3. feeds the bank by 1 if the result ends in 0 or 5,
//! 4. passes the turn, unless the match just ended.
//!
//! At settlement the bank goes to the last mover only when the match ended
//! on 2. Ending on 3 or getting stuck forfeits it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Divisor, GameError, GameState, MoveRecord, MoveRejection, Side};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    /// The number reached 2. The last mover collects the bank.
    ReachedTwo,
    /// The number reached 3. Nobody collects the bank.
    ReachedThree,
    /// No legal divisor remained. Nobody collects the bank.
    Stuck,
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::ReachedTwo => write!(f, "reached 2"),
            Ending::ReachedThree => write!(f, "reached 3"),
            Ending::Stuck => write!(f, "no valid moves"),
        }
    }
}

/// Is `number` a terminal position?
///
/// True for 2, for 3, and for any number divisible by neither 2 nor 3.
#[must_use]
pub const fn is_terminal(number: u64) -> bool {
    number == 2 || number == 3 || (number % 2 != 0 && number % 3 != 0)
}

/// How the match ends at `number`, or `None` if play continues.
#[must_use]
pub const fn ending_for(number: u64) -> Option<Ending> {
    match number {
        2 => Some(Ending::ReachedTwo),
        3 => Some(Ending::ReachedThree),
        n if n % 2 != 0 && n % 3 != 0 => Some(Ending::Stuck),
        _ => None,
    }
}

/// Outcome of winning/losing/drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// One side finished with the strictly greater score.
    Side(Side),
    /// Scores are equal.
    Draw,
}

impl Winner {
    /// Decide the winner from final scores.
    #[must_use]
    pub fn from_scores(player_score: i64, computer_score: i64) -> Self {
        match player_score.cmp(&computer_score) {
            std::cmp::Ordering::Greater => Winner::Side(Side::Player),
            std::cmp::Ordering::Less => Winner::Side(Side::Computer),
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Winner::Side(s) if *s == side)
    }
}

/// Final result of a settled match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Player score, bank included if collected.
    pub player_score: i64,

    /// Computer score, bank included if collected.
    pub computer_score: i64,

    /// Bank size at the end of the match.
    pub bank: u64,

    /// Side that collected the bank, if any.
    pub bank_awarded_to: Option<Side>,

    /// How the match ended.
    pub ending: Ending,

    /// Final verdict.
    pub winner: Winner,
}

/// Everything a single move changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The side that moved.
    pub mover: Side,

    /// The divisor applied.
    pub divisor: Divisor,

    /// Number before the move.
    pub from: u64,

    /// Number after the move.
    pub to: u64,

    /// Change to the mover's score (+1 or -1).
    pub score_delta: i64,

    /// Whether the bank grew by one.
    pub bank_fed: bool,

    /// Set if this move ended the match.
    pub ending: Option<Ending>,
}

/// Applies moves and settles matches.
///
/// Stateless: every method takes the state it works on and returns a new one.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    /// Apply `divisor` on behalf of `mover`.
    ///
    /// Fails with `InvalidMove` if the match is over, if it is not `mover`'s
    /// turn, or if `divisor` does not divide the current number. On failure
    /// the input state is untouched.
    pub fn apply_move(
        state: &GameState,
        divisor: Divisor,
        mover: Side,
    ) -> Result<(GameState, MoveOutcome), GameError> {
        if state.settled || is_terminal(state.current_number) {
            return Err(MoveRejection::MatchOver.into());
        }
        if mover != state.active_side {
            return Err(MoveRejection::WrongTurn {
                active: state.active_side,
            }
            .into());
        }
        let from = state.current_number;
        let to = divisor.apply(from).ok_or(MoveRejection::NotDivisible {
            divisor: divisor.value(),
            number: from,
        })?;

        let mut next = state.clone();
        next.current_number = to;

        let score_delta = if to % 2 == 0 { 1 } else { -1 };
        next.scores[mover] += score_delta;

        let bank_fed = matches!(to % 10, 0 | 5);
        if bank_fed {
            next.bank += 1;
        }

        let ending = ending_for(to);
        next.last_mover = Some(mover);
        if ending.is_none() {
            next.active_side = mover.other();
        }

        next.history.push_back(MoveRecord {
            ply: state.ply() + 1,
            mover,
            divisor,
            from,
            to,
        });

        debug!(%mover, %divisor, from, to, score_delta, bank = next.bank, ?ending, "move applied");

        Ok((
            next,
            MoveOutcome {
                mover,
                divisor,
                from,
                to,
                score_delta,
                bank_fed,
                ending,
            },
        ))
    }

    /// Settle a match whose number is terminal.
    ///
    /// Credits the bank to the last mover when the number is 2, then
    /// decides the winner. Fails with `InvalidMove` if play can continue or
    /// the state was already settled.
    pub fn settle(state: &GameState) -> Result<(GameState, MatchResult), GameError> {
        if state.settled {
            return Err(MoveRejection::MatchOver.into());
        }
        let ending = ending_for(state.current_number).ok_or(MoveRejection::MatchNotOver {
            number: state.current_number,
        })?;
        let collector = match ending {
            Ending::ReachedTwo => state.last_mover,
            Ending::ReachedThree | Ending::Stuck => None,
        };
        Ok(Self::finish(state, ending, collector))
    }

    /// Close a match as stuck regardless of its number. Nobody collects the
    /// bank.
    ///
    /// Used when a strategy fails to produce a move for a position that
    /// still has one.
    pub fn settle_stuck(state: &GameState) -> Result<(GameState, MatchResult), GameError> {
        if state.settled {
            return Err(MoveRejection::MatchOver.into());
        }
        Ok(Self::finish(state, Ending::Stuck, None))
    }

    fn finish(state: &GameState, ending: Ending, collector: Option<Side>) -> (GameState, MatchResult) {
        let mut next = state.clone();
        if let Some(side) = collector {
            next.scores[side] += next.bank as i64;
        }
        next.bank_collected_by = collector;
        next.settled = true;

        let result = MatchResult {
            player_score: next.player_score(),
            computer_score: next.computer_score(),
            bank: next.bank,
            bank_awarded_to: collector,
            ending,
            winner: Winner::from_scores(next.player_score(), next.computer_score()),
        };
        (next, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(is_terminal(2));
        assert!(is_terminal(3));
        assert!(is_terminal(5));
        assert!(is_terminal(25));
        assert!(!is_terminal(4));
        assert!(!is_terminal(9));
        assert!(!is_terminal(10_002));
    }

    #[test]
    fn test_ending_for() {
        assert_eq!(ending_for(2), Some(Ending::ReachedTwo));
        assert_eq!(ending_for(3), Some(Ending::ReachedThree));
        assert_eq!(ending_for(35), Some(Ending::Stuck));
        assert_eq!(ending_for(9), None);
    }

    #[test]
    fn test_apply_move_scores_and_flips() {
        let state = GameState::new(12, Side::Player);
        let (next, outcome) = TransitionEngine::apply_move(&state, Divisor::Two, Side::Player).unwrap();

        assert_eq!(next.current_number, 6);
        assert_eq!(next.player_score(), 1);
        assert_eq!(next.bank, 0);
        assert_eq!(next.active_side, Side::Computer);
        assert_eq!(next.last_mover, Some(Side::Player));
        assert_eq!(outcome.score_delta, 1);
        assert!(!outcome.bank_fed);
        assert_eq!(outcome.ending, None);
        assert_eq!(next.ply(), 1);

        // Input untouched
        assert_eq!(state.current_number, 12);
    }

    #[test]
    fn test_apply_move_feeds_bank() {
        let state = GameState::new(30, Side::Player);
        let (next, outcome) = TransitionEngine::apply_move(&state, Divisor::Two, Side::Player).unwrap();

        assert_eq!(next.current_number, 15);
        assert_eq!(next.player_score(), -1);
        assert_eq!(next.bank, 1);
        assert!(outcome.bank_fed);
    }

    #[test]
    fn test_terminal_move_keeps_mover_active() {
        let state = GameState::new(6, Side::Computer);
        let (next, outcome) = TransitionEngine::apply_move(&state, Divisor::Three, Side::Computer).unwrap();

        assert_eq!(next.current_number, 2);
        assert_eq!(outcome.ending, Some(Ending::ReachedTwo));
        assert_eq!(next.active_side, Side::Computer);
    }

    #[test]
    fn test_apply_move_rejections() {
        let state = GameState::new(9, Side::Player);

        assert_eq!(
            TransitionEngine::apply_move(&state, Divisor::Two, Side::Player),
            Err(GameError::InvalidMove(MoveRejection::NotDivisible { divisor: 2, number: 9 }))
        );
        assert_eq!(
            TransitionEngine::apply_move(&state, Divisor::Three, Side::Computer),
            Err(GameError::InvalidMove(MoveRejection::WrongTurn { active: Side::Player }))
        );

        let over = GameState::new(3, Side::Player);
        assert_eq!(
            TransitionEngine::apply_move(&over, Divisor::Three, Side::Player),
            Err(GameError::InvalidMove(MoveRejection::MatchOver))
        );
    }

    #[test]
    fn test_settle_two_awards_last_mover() {
        let mut state = GameState::new(4, Side::Computer);
        state.bank = 3;
        let (state, _) = TransitionEngine::apply_move(&state, Divisor::Two, Side::Computer).unwrap();

        let (settled, result) = TransitionEngine::settle(&state).unwrap();
        assert_eq!(result.ending, Ending::ReachedTwo);
        assert_eq!(result.bank_awarded_to, Some(Side::Computer));
        assert_eq!(result.computer_score, 4);
        assert_eq!(result.winner, Winner::Side(Side::Computer));
        assert!(settled.settled);
        assert_eq!(settled.bank_collected_by, Some(Side::Computer));

        assert_eq!(
            TransitionEngine::settle(&settled),
            Err(GameError::InvalidMove(MoveRejection::MatchOver))
        );
    }

    #[test]
    fn test_settle_three_withholds_bank() {
        let mut state = GameState::new(9, Side::Player);
        state.bank = 2;
        let (state, _) = TransitionEngine::apply_move(&state, Divisor::Three, Side::Player).unwrap();

        let (_, result) = TransitionEngine::settle(&state).unwrap();
        assert_eq!(result.ending, Ending::ReachedThree);
        assert_eq!(result.bank_awarded_to, None);
        assert_eq!(result.player_score, -1);
        assert_eq!(result.winner, Winner::Side(Side::Computer));
    }

    #[test]
    fn test_settle_rejects_live_position() {
        let state = GameState::new(12, Side::Player);
        assert_eq!(
            TransitionEngine::settle(&state),
            Err(GameError::InvalidMove(MoveRejection::MatchNotOver { number: 12 }))
        );
    }

    #[test]
    fn test_settle_stuck_forfeits_bank() {
        let mut state = GameState::new(12, Side::Computer);
        state.bank = 5;
        let (_, result) = TransitionEngine::settle_stuck(&state).unwrap();

        assert_eq!(result.ending, Ending::Stuck);
        assert_eq!(result.bank_awarded_to, None);
        assert_eq!(result.bank, 5);
        assert_eq!(result.winner, Winner::Draw);
    }

    #[test]
    fn test_winner_from_scores() {
        assert_eq!(Winner::from_scores(1, 0), Winner::Side(Side::Player));
        assert_eq!(Winner::from_scores(-2, -1), Winner::Side(Side::Computer));
        assert_eq!(Winner::from_scores(-1, -1), Winner::Draw);
        assert!(Winner::Side(Side::Player).is_winner(Side::Player));
        assert!(!Winner::Draw.is_winner(Side::Player));
    }
}
