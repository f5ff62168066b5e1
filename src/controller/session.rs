//! Match orchestration.
//!
//! `GameController` owns the single authoritative `GameState` of a session
//! and moves it through `Setup -> InProgress -> Terminal`. Human moves come
//! in through `submit_human_move`; computer moves are requested with
//! `play_computer_turn`, which asks the configured strategy and then applies
//! the pick exactly like a human move.
//!
//! Every rejected call returns an error and leaves the controller as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::{
    generate_candidates, legal_divisors, Divisor, GameConfig, GameError, GameRng, GameRngState,
    GameState, MoveRejection, Side,
};
use crate::events::{EventBus, EventListener, GameEvent};
use crate::rules::{is_terminal, MatchResult, MoveOutcome, TransitionEngine};
use crate::search::{SearchStrategy, StrategyKind};

/// Controller lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Candidates are on offer; no match is running.
    Setup,
    /// A match is running.
    InProgress,
    /// The match is over and settled.
    Terminal,
}

/// Drives one session: candidate generation and a match at a time.
pub struct GameController {
    config: GameConfig,
    rng: GameRng,
    candidates: Vec<u64>,
    phase: Phase,
    state: Option<GameState>,
    strategy: Option<Box<dyn SearchStrategy>>,
    strategy_kind: Option<StrategyKind>,
    result: Option<MatchResult>,
    events: EventBus,
}

impl GameController {
    /// Create a controller and generate the first set of candidates.
    ///
    /// Fails with `InvalidConfiguration` if `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self::with_rng(config, rng))
    }

    /// Resume a session from a saved RNG state.
    ///
    /// The candidates drawn here, and every later match, are the ones the
    /// saved session would have produced by calling `new_session` at the
    /// moment `rng_state` was taken. `config.seed` is ignored.
    pub fn resume(config: GameConfig, rng: &GameRngState) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::with_rng(config, GameRng::from_state(rng)))
    }

    fn with_rng(config: GameConfig, mut rng: GameRng) -> Self {
        let candidates = generate_candidates(&config.candidates, &mut rng);
        info!(seed = rng.seed(), ?candidates, "session created");

        Self {
            config,
            rng,
            candidates,
            phase: Phase::Setup,
            state: None,
            strategy: None,
            strategy_kind: None,
            result: None,
            events: EventBus::new(),
        }
    }

    /// The configuration this session runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of the session RNG, for `resume`.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Starting numbers on offer this session.
    #[must_use]
    pub fn candidates(&self) -> &[u64] {
        &self.candidates
    }

    /// The preselected starting number (the first candidate).
    #[must_use]
    pub fn default_candidate(&self) -> Option<u64> {
        self.candidates.first().copied()
    }

    /// Discard any match, draw fresh candidates and return to `Setup`.
    pub fn new_session(&mut self) -> &[u64] {
        self.candidates = generate_candidates(&self.config.candidates, &mut self.rng);
        self.phase = Phase::Setup;
        self.state = None;
        self.strategy = None;
        self.strategy_kind = None;
        self.result = None;
        self.events.clear_journal();
        info!(candidates = ?self.candidates, "new session");
        &self.candidates
    }

    /// Start a match with one of the built-in strategies.
    ///
    /// Fails with `InvalidConfiguration` if `starting_number` is not one of
    /// this session's candidates or has no legal divisor.
    pub fn start(
        &mut self,
        starting_number: u64,
        starting_side: Side,
        kind: StrategyKind,
    ) -> Result<(), GameError> {
        self.check_starting_number(starting_number)?;
        let strategy = kind.build(&self.config.search, self.rng.fork());
        self.begin(starting_number, starting_side, strategy, Some(kind));
        Ok(())
    }

    /// Start a match with a caller-supplied strategy.
    pub fn start_with_strategy(
        &mut self,
        starting_number: u64,
        starting_side: Side,
        strategy: Box<dyn SearchStrategy>,
    ) -> Result<(), GameError> {
        self.check_starting_number(starting_number)?;
        self.begin(starting_number, starting_side, strategy, None);
        Ok(())
    }

    fn check_starting_number(&self, number: u64) -> Result<(), GameError> {
        if number == 0 {
            return Err(GameError::InvalidConfiguration(
                "starting number must be positive".into(),
            ));
        }
        if !self.candidates.contains(&number) {
            return Err(GameError::InvalidConfiguration(format!(
                "{number} is not one of this session's candidates {:?}",
                self.candidates
            )));
        }
        if is_terminal(number) {
            return Err(GameError::InvalidConfiguration(format!(
                "{number} admits no move"
            )));
        }
        Ok(())
    }

    fn begin(
        &mut self,
        starting_number: u64,
        starting_side: Side,
        strategy: Box<dyn SearchStrategy>,
        kind: Option<StrategyKind>,
    ) {
        info!(starting_number, %starting_side, strategy = strategy.name(), "match started");

        self.state = Some(GameState::new(starting_number, starting_side));
        self.strategy = Some(strategy);
        self.strategy_kind = kind;
        self.result = None;
        self.phase = Phase::InProgress;
        self.events.clear_journal();
        self.events.emit(GameEvent::MatchStarted {
            starting_number,
            starting_side,
            strategy: kind,
        });
    }

    /// Apply a divisor chosen by the human player.
    ///
    /// Fails with `InvalidMove` if no match is running, it is the
    /// computer's turn, or `divisor` does not divide the current number.
    pub fn submit_human_move(&mut self, divisor: Divisor) -> Result<MoveOutcome, GameError> {
        self.apply(divisor, Side::Player)
    }

    /// Let the computer take its turn.
    ///
    /// Returns the applied move, or `Ok(None)` if the strategy found no move
    /// and the match was closed as stuck.
    pub fn play_computer_turn(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        let state = self.live_state()?.clone();
        if state.active_side != Side::Computer {
            return Err(MoveRejection::WrongTurn {
                active: state.active_side,
            }
            .into());
        }

        let strategy = self
            .strategy
            .as_mut()
            .ok_or(GameError::from(MoveRejection::NoMatchInProgress))?;
        match strategy.select(&state) {
            Ok(divisor) => self.apply(divisor, Side::Computer).map(Some),
            Err(GameError::SearchExhausted { number }) => {
                warn!(number, "strategy found no move, closing match as stuck");
                let (settled, result) = TransitionEngine::settle_stuck(&state)?;
                self.finish(settled, result);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn live_state(&self) -> Result<&GameState, GameError> {
        match (self.phase, &self.state) {
            (Phase::InProgress, Some(state)) => Ok(state),
            (Phase::Terminal, _) => Err(MoveRejection::MatchOver.into()),
            _ => Err(MoveRejection::NoMatchInProgress.into()),
        }
    }

    fn apply(&mut self, divisor: Divisor, mover: Side) -> Result<MoveOutcome, GameError> {
        let state = self.live_state()?;
        let (next, outcome) = TransitionEngine::apply_move(state, divisor, mover)?;
        let settlement = match outcome.ending {
            Some(_) => Some(TransitionEngine::settle(&next)?),
            None => None,
        };

        self.events.emit(GameEvent::MoveApplied {
            mover,
            divisor,
            from: outcome.from,
            to: outcome.to,
        });
        self.events.emit(GameEvent::ScoreChanged {
            side: mover,
            delta: outcome.score_delta,
            score: next.scores[mover],
        });
        if outcome.bank_fed {
            self.events.emit(GameEvent::BankChanged { bank: next.bank });
        }

        match settlement {
            Some((settled, result)) => self.finish(settled, result),
            None => self.state = Some(next),
        }
        Ok(outcome)
    }

    fn finish(&mut self, settled: GameState, result: MatchResult) {
        info!(
            player_score = result.player_score,
            computer_score = result.computer_score,
            bank = result.bank,
            bank_awarded_to = ?result.bank_awarded_to,
            ending = %result.ending,
            winner = ?result.winner,
            "match ended"
        );
        if let Some(side) = result.bank_awarded_to.filter(|_| result.bank > 0) {
            self.events.emit(GameEvent::ScoreChanged {
                side,
                delta: result.bank as i64,
                score: settled.scores[side],
            });
        }
        self.state = Some(settled);
        self.result = Some(result);
        self.phase = Phase::Terminal;
        self.events.emit(GameEvent::MatchEnded { result });
    }

    /// Divisors the side to move may choose. Empty outside a running match.
    #[must_use]
    pub fn legal_divisors(&self) -> SmallVec<[Divisor; 2]> {
        match self.live_state() {
            Ok(state) => legal_divisors(state.current_number),
            Err(_) => SmallVec::new(),
        }
    }

    /// Is the match over?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current match state, if a match has been started.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Whose move it is, while a match is running.
    #[must_use]
    pub fn active_side(&self) -> Option<Side> {
        self.live_state().ok().map(|s| s.active_side)
    }

    /// Built-in strategy of the current match, if one was used.
    #[must_use]
    pub fn strategy_kind(&self) -> Option<StrategyKind> {
        self.strategy_kind
    }

    /// The computer's strategy for the current match.
    pub fn strategy(&self) -> Option<&dyn SearchStrategy> {
        self.strategy.as_deref()
    }

    /// Register a listener for match events.
    pub fn subscribe<L: EventListener + 'static>(&mut self, listener: L) {
        debug!(listeners = self.events.listener_count() + 1, "listener subscribed");
        self.events.subscribe(listener);
    }

    /// Events of the current match, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.events.journal()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("phase", &self.phase)
            .field("candidates", &self.candidates)
            .field("state", &self.state)
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .field("result", &self.result)
            .finish()
    }
}
