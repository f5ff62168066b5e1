//! Game rules: move application, terminal detection, bank settlement.
//!
//! `TransitionEngine` is the only code that produces new `GameState` values
//! during a match. Strategies never touch it; they reason about bare numbers
//! in `search`.

pub mod engine;

pub use engine::{ending_for, is_terminal, Ending, MatchResult, MoveOutcome, TransitionEngine, Winner};
