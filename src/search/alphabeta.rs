//! Minimax with alpha-beta pruning.
//!
//! Same tree, move order and evaluation as `minimax`. A maximizing node
//! returns its alpha and a minimizing node its beta, so the root picks the
//! same divisor as the exhaustive search while visiting fewer nodes.

use crate::core::Divisor;

use super::eval::{is_leaf, Evaluation};
use super::stats::SearchStats;

/// Search `number` to `depth` plies with the window `(alpha, beta)`.
///
/// Call with `i64::MIN, i64::MAX` at the root.
///
/// ```
/// use divide_game::core::Divisor;
/// use divide_game::search::{alphabeta, minimax, SearchStats};
///
/// let pruned = alphabeta(144, true, i64::MIN, i64::MAX, 5, &mut SearchStats::new());
/// let full = minimax(144, true, 5, &mut SearchStats::new());
/// assert_eq!(pruned.divisor, full.divisor);
/// ```
pub fn alphabeta(
    number: u64,
    maximizing: bool,
    alpha: i64,
    beta: i64,
    depth: u32,
    stats: &mut SearchStats,
) -> Evaluation {
    search(number, maximizing, alpha, beta, depth, 0, stats)
}

fn search(
    number: u64,
    maximizing: bool,
    mut alpha: i64,
    mut beta: i64,
    depth: u32,
    ply: u32,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.visit(ply);
    if is_leaf(number, depth) {
        stats.leaves += 1;
        return Evaluation::leaf(number);
    }

    let mut best = None;

    for divisor in Divisor::ALL {
        let Some(child) = divisor.apply(number) else {
            continue;
        };
        let value = search(child, !maximizing, alpha, beta, depth - 1, ply + 1, stats).value;

        if maximizing {
            if value > alpha {
                alpha = value;
                best = Some(divisor);
            }
        } else if value < beta {
            beta = value;
            best = Some(divisor);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Evaluation {
        value: if maximizing { alpha } else { beta },
        divisor: best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::minimax;

    fn run(number: u64) -> (Evaluation, SearchStats) {
        let mut stats = SearchStats::new();
        let eval = alphabeta(number, true, i64::MIN, i64::MAX, 5, &mut stats);
        (eval, stats)
    }

    #[test]
    fn test_matches_minimax_on_small_numbers() {
        for number in [4, 6, 8, 9, 12, 18, 24, 30, 36, 48, 54, 72, 96, 108, 144] {
            let (pruned, _) = run(number);
            let full = minimax(number, true, 5, &mut SearchStats::new());
            assert_eq!(pruned, full, "mismatch at {number}");
        }
    }

    #[test]
    fn test_prunes() {
        let (_, pruned) = run(144);
        let mut full = SearchStats::new();
        minimax(144, true, 5, &mut full);

        assert_eq!(pruned.nodes, 30);
        assert_eq!(full.nodes, 40);
        assert!(pruned.cutoffs > 0);
    }

    #[test]
    fn test_ties_go_to_two() {
        let (eval, _) = run(18);
        assert_eq!(eval.value, -10);
        assert_eq!(eval.divisor, Some(Divisor::Two));
    }

    #[test]
    fn test_fail_hard_bound() {
        // With alpha already at 10 nothing under 12 can improve it.
        let eval = alphabeta(12, true, 10, i64::MAX, 5, &mut SearchStats::new());
        assert_eq!(eval.value, 10);
        assert_eq!(eval.divisor, None);
    }
}
