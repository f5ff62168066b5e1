//! # divide-game
//!
//! Decision engine for a two-player arithmetic elimination game.
//!
//! Play starts from a multiple of 6. Each side in turn divides the current
//! number by 2 or 3, scoring +1 when the result is even and -1 when it is
//! odd. Results ending in 0 or 5 add a point to a shared bank. The match
//! ends on 2, on 3, or when neither divisor applies; only a finish on 2 pays
//! the bank, to the side that got there.
//!
//! ## Design Principles
//!
//! 1. **Rules and search are separate**: `rules` owns scoring, bank and turn
//!    order; `search` reasons about bare numbers and never sees scores.
//!
//! 2. **Values, not mutation**: `TransitionEngine` returns new states, so a
//!    rejected move can never leave a half-applied state behind.
//!
//! 3. **Strategy-agnostic controller**: the computer side is any
//!    `SearchStrategy`; Minimax, AlphaBeta and Random ship built in.
//!
//! ## Modules
//!
//! - `core`: Sides, divisors, state, RNG, candidates, configuration, errors
//! - `rules`: Move application, terminal detection, bank settlement
//! - `search`: Static evaluation, minimax, alpha-beta, strategies
//! - `events`: Notifications for a presentation layer
//! - `controller`: Session and match state machine

pub mod core;
pub mod rules;
pub mod search;
pub mod events;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    generate_candidates, legal_divisors,
    Side, SideMap, Divisor, MoveRecord, GameState,
    GameRng, GameRngState,
    CandidateConfig, SearchConfig, GameConfig,
    GameError, MoveRejection, ConfigError,
};

pub use crate::rules::{is_terminal, Ending, MatchResult, MoveOutcome, TransitionEngine, Winner};

pub use crate::search::{
    static_value, minimax, alphabeta, Evaluation, SearchStats,
    SearchStrategy, StrategyKind, Minimax, AlphaBeta, RandomChoice,
};

pub use crate::events::{EventBus, EventListener, GameEvent};

pub use crate::controller::{GameController, Phase};
