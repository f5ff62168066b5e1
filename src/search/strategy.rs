//! Move-selection strategies for the computer side.
//!
//! Strategies are trait-based so the controller never needs to know which
//! one it holds:
//! - `Minimax`: exhaustive depth-limited search
//! - `AlphaBeta`: the same search with pruning
//! - `RandomChoice`: uniform pick among legal divisors
//!
//! Strategies see the live state only through a shared reference and never
//! produce a new `GameState`; the controller applies whatever they pick.

use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::core::{legal_divisors, Divisor, GameError, GameRng, GameState, SearchConfig};
use crate::rules::is_terminal;

use super::alphabeta::alphabeta;
use super::eval::Evaluation;
use super::minimax::minimax;
use super::stats::SearchStats;

/// Picks a divisor for the side to move.
pub trait SearchStrategy: Send {
    /// Choose a divisor for `state.active_side`.
    ///
    /// Fails with `SearchExhausted` if the position has no legal divisor or
    /// is already terminal.
    fn select(&mut self, state: &GameState) -> Result<Divisor, GameError>;

    /// Display name.
    fn name(&self) -> &str;

    /// Statistics of the most recent decision, for strategies that search.
    fn last_stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Legal divisors of a live position, or `SearchExhausted`.
fn playable(state: &GameState) -> Result<smallvec::SmallVec<[Divisor; 2]>, GameError> {
    let number = state.current_number;
    let legal = legal_divisors(number);
    if is_terminal(number) || legal.is_empty() {
        return Err(GameError::SearchExhausted { number });
    }
    Ok(legal)
}

/// Shared driver for the two tree searches.
///
/// A position with a single legal divisor is answered without searching.
fn decide(
    name: &str,
    state: &GameState,
    depth: u32,
    stats: &mut SearchStats,
    search: impl FnOnce(u64, u32, &mut SearchStats) -> Evaluation,
) -> Result<Divisor, GameError> {
    let number = state.current_number;
    let legal = playable(state)?;
    stats.reset();

    if let [only] = legal.as_slice() {
        debug!(strategy = name, number, divisor = %only, "single legal divisor");
        return Ok(*only);
    }

    let span = info_span!("decide", strategy = name, number, depth);
    let _guard = span.enter();

    let start = Instant::now();
    let eval = search(number, depth, stats);
    stats.time_us = start.elapsed().as_micros() as u64;

    debug!(
        value = eval.value,
        divisor = ?eval.divisor,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );
    eval.divisor.ok_or(GameError::SearchExhausted { number })
}

/// Exhaustive minimax strategy.
#[derive(Clone, Debug)]
pub struct Minimax {
    depth: u32,
    stats: SearchStats,
}

impl Minimax {
    /// Create a minimax strategy searching `depth` plies.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }
}

impl SearchStrategy for Minimax {
    fn select(&mut self, state: &GameState) -> Result<Divisor, GameError> {
        decide("Minimax", state, self.depth, &mut self.stats, |number, depth, stats| {
            minimax(number, true, depth, stats)
        })
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn last_stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}

/// Alpha-beta pruned minimax strategy.
#[derive(Clone, Debug)]
pub struct AlphaBeta {
    depth: u32,
    stats: SearchStats,
}

impl AlphaBeta {
    /// Create an alpha-beta strategy searching `depth` plies.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }
}

impl SearchStrategy for AlphaBeta {
    fn select(&mut self, state: &GameState) -> Result<Divisor, GameError> {
        decide("Alpha-Beta", state, self.depth, &mut self.stats, |number, depth, stats| {
            alphabeta(number, true, i64::MIN, i64::MAX, depth, stats)
        })
    }

    fn name(&self) -> &str {
        "Alpha-Beta"
    }

    fn last_stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}

/// Uniform random choice among legal divisors.
#[derive(Clone, Debug)]
pub struct RandomChoice {
    rng: GameRng,
}

impl RandomChoice {
    /// Create a random strategy drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl SearchStrategy for RandomChoice {
    fn select(&mut self, state: &GameState) -> Result<Divisor, GameError> {
        let legal = playable(state)?;
        let divisor = *self.rng.choose(&legal).ok_or(GameError::SearchExhausted {
            number: state.current_number,
        })?;
        debug!(strategy = "Random", number = state.current_number, %divisor, "random pick");
        Ok(divisor)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Exhaustive minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
    /// Uniform random choice.
    #[default]
    Random,
}

impl StrategyKind {
    /// All built-in strategies.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Minimax, StrategyKind::AlphaBeta, StrategyKind::Random];

    /// Instantiate the strategy. `rng` is only used by `Random`.
    #[must_use]
    pub fn build(self, config: &SearchConfig, rng: GameRng) -> Box<dyn SearchStrategy> {
        match self {
            StrategyKind::Minimax => Box::new(Minimax::new(config.depth)),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::new(config.depth)),
            StrategyKind::Random => Box::new(RandomChoice::new(rng)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Minimax => write!(f, "Minimax"),
            StrategyKind::AlphaBeta => write!(f, "Alpha-Beta"),
            StrategyKind::Random => write!(f, "Random"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" => Ok(StrategyKind::AlphaBeta),
            "random" => Ok(StrategyKind::Random),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown strategy '{other}'"
            ))),
        }
    }
}
