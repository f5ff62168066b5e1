//! Static evaluation for the depth-limited searches.
//!
//! Values are from the computer's (maximizing) perspective. Search only
//! follows the number; scores and bank never enter the evaluation.

use serde::{Deserialize, Serialize};

use crate::core::Divisor;
use crate::rules::is_terminal;

/// Value of reaching 2.
pub const WIN_VALUE: i64 = 10;

/// Value of reaching 3.
pub const LOSS_VALUE: i64 = -10;

/// Result of searching one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Backed-up value of the node.
    pub value: i64,

    /// Divisor that produced `value`. `None` at a leaf.
    pub divisor: Option<Divisor>,
}

impl Evaluation {
    /// A leaf: static value, no move.
    #[must_use]
    pub fn leaf(number: u64) -> Self {
        Self {
            value: static_value(number),
            divisor: None,
        }
    }
}

/// Static value of `number`.
///
/// `+10` for 2, `-10` for 3, otherwise `-|number - 2|`. Applied both to
/// terminal positions and to positions where the horizon ran out.
#[must_use]
pub fn static_value(number: u64) -> i64 {
    match number {
        2 => WIN_VALUE,
        3 => LOSS_VALUE,
        n => -(n.abs_diff(2) as i64),
    }
}

/// Does the search stop at this node?
#[must_use]
pub fn is_leaf(number: u64, depth: u32) -> bool {
    depth == 0 || is_terminal(number)
}
