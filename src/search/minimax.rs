//! Exhaustive depth-limited minimax over the number alone.
//!
//! Divisors are tried 2 then 3 and only a strictly better value replaces
//! the current best, so 2 wins ties at every node.

use crate::core::Divisor;

use super::eval::{is_leaf, Evaluation};
use super::stats::SearchStats;

/// Search `number` to `depth` plies.
///
/// `maximizing` is true when the side to move is the one the values are
/// scored for. Returns the backed-up value and the divisor that achieves
/// it; the divisor is `None` at a leaf.
///
/// ```
/// use divide_game::core::Divisor;
/// use divide_game::search::{minimax, SearchStats};
///
/// // 6 / 3 = 2 wins on the spot.
/// let eval = minimax(6, true, 5, &mut SearchStats::new());
/// assert_eq!(eval.value, 10);
/// assert_eq!(eval.divisor, Some(Divisor::Three));
/// ```
pub fn minimax(number: u64, maximizing: bool, depth: u32, stats: &mut SearchStats) -> Evaluation {
    search(number, maximizing, depth, 0, stats)
}

fn search(number: u64, maximizing: bool, depth: u32, ply: u32, stats: &mut SearchStats) -> Evaluation {
    stats.visit(ply);
    if is_leaf(number, depth) {
        stats.leaves += 1;
        return Evaluation::leaf(number);
    }

    let mut best = Evaluation {
        value: if maximizing { i64::MIN } else { i64::MAX },
        divisor: None,
    };

    for divisor in Divisor::ALL {
        let Some(child) = divisor.apply(number) else {
            continue;
        };
        let value = search(child, !maximizing, depth - 1, ply + 1, stats).value;

        let improves = if maximizing {
            value > best.value
        } else {
            value < best.value
        };
        if improves {
            best = Evaluation {
                value,
                divisor: Some(divisor),
            };
        }
    }

    best
}
