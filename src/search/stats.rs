//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u32,

    /// Nodes scored with the static evaluation.
    pub leaves: u32,

    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u32,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn visit(&mut self, ply: u32) {
        self.nodes += 1;
        self.max_ply = self.max_ply.max(ply);
    }

    /// Fraction of visited nodes that were leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.leaves as f64 / self.nodes as f64
        }
    }
}
