//! Session and match orchestration.
//!
//! ## Usage
//!
//! ```rust
//! use divide_game::controller::{GameController, Phase};
//! use divide_game::core::{GameConfig, Side};
//! use divide_game::search::StrategyKind;
//!
//! let mut ctl = GameController::new(GameConfig::default().with_seed(3)).unwrap();
//! let number = ctl.default_candidate().unwrap();
//! ctl.start(number, Side::Player, StrategyKind::AlphaBeta).unwrap();
//!
//! while !ctl.is_terminal() {
//!     if ctl.active_side() == Some(Side::Player) {
//!         let divisor = ctl.legal_divisors()[0];
//!         ctl.submit_human_move(divisor).unwrap();
//!     } else {
//!         ctl.play_computer_turn().unwrap();
//!     }
//! }
//!
//! assert_eq!(ctl.phase(), Phase::Terminal);
//! assert!(ctl.result().is_some());
//! ```

pub mod session;

pub use session::{GameController, Phase};
