//! Core types: sides, divisors, state, RNG, configuration, errors.
//!
//! Everything here is plain data plus small helpers. The rules live in
//! `rules`, move selection in `search`.

pub mod side;
pub mod divisor;
pub mod state;
pub mod rng;
pub mod candidates;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use divisor::{legal_divisors, Divisor, MoveRecord};
pub use state::GameState;
pub use rng::{GameRng, GameRngState};
pub use candidates::{generate_candidates, is_candidate_number};
pub use config::{CandidateConfig, GameConfig, SearchConfig};
pub use error::{ConfigError, GameError, MoveRejection};
