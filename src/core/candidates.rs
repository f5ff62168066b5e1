//! Starting-number candidates.
//!
//! Each session offers a handful of starting numbers drawn without
//! replacement from the multiples of `multiple_of` in `[min, max]`.

use super::config::CandidateConfig;
use super::rng::GameRng;

/// Draw `config.count` distinct candidates, in random order.
///
/// Returns fewer than `count` numbers when the range holds fewer, and none
/// when `multiple_of` is zero. `GameConfig::validate` rules both out.
///
/// ```
/// use divide_game::core::{generate_candidates, CandidateConfig, GameRng};
///
/// let mut rng = GameRng::new(1);
/// let picks = generate_candidates(&CandidateConfig::default(), &mut rng);
///
/// assert_eq!(picks.len(), 5);
/// assert!(picks.iter().all(|n| n % 6 == 0 && (10_000..=20_000).contains(n)));
/// ```
pub fn generate_candidates(config: &CandidateConfig, rng: &mut GameRng) -> Vec<u64> {
    let qualifying = config.qualifying_count() as usize;
    if qualifying == 0 {
        return Vec::new();
    }
    let amount = config.count.min(qualifying);
    let first = config.min.div_ceil(config.multiple_of) * config.multiple_of;

    rng.sample_indices(qualifying, amount)
        .into_iter()
        .map(|i| first + i as u64 * config.multiple_of)
        .collect()
}

/// Is `number` something `generate_candidates` could have produced?
#[must_use]
pub fn is_candidate_number(config: &CandidateConfig, number: u64) -> bool {
    config.multiple_of != 0
        && number % config.multiple_of == 0
        && (config.min..=config.max).contains(&number)
}
