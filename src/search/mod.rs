//! Move selection for the computer side.
//!
//! ## Overview
//!
//! The searches look only at the number being divided. A position stops the
//! search when it is 2, 3, divisible by neither 2 nor 3, or the horizon is
//! reached, and is then scored by `static_value` from the computer's point
//! of view.
//!
//! ## Usage
//!
//! ```rust
//! use divide_game::core::{GameRng, GameState, SearchConfig, Side};
//! use divide_game::search::StrategyKind;
//!
//! let state = GameState::new(12, Side::Computer);
//! let mut strategy = StrategyKind::AlphaBeta.build(&SearchConfig::default(), GameRng::new(0));
//!
//! let divisor = strategy.select(&state).unwrap();
//! assert_eq!(divisor.value(), 3);
//! ```

pub mod eval;
pub mod minimax;
pub mod alphabeta;
pub mod strategy;
pub mod stats;

pub use eval::{static_value, Evaluation, LOSS_VALUE, WIN_VALUE};
pub use minimax::minimax;
pub use alphabeta::alphabeta;
pub use strategy::{AlphaBeta, Minimax, RandomChoice, SearchStrategy, StrategyKind};
pub use stats::SearchStats;
