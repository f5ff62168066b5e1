//! Game configuration.
//!
//! - `CandidateConfig`: how starting numbers are drawn
//! - `SearchConfig`: search horizon for Minimax/AlphaBeta
//! - `GameConfig`: combines both, plus the session seed
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! seed = 7
//!
//! [candidates]
//! count = 3
//!
//! [search]
//! depth = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ConfigError;

/// How the candidate starting numbers are drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// Smallest allowed candidate (inclusive).
    pub min: u64,

    /// Largest allowed candidate (inclusive).
    pub max: u64,

    /// Every candidate is a multiple of this. Must itself be a multiple of 6
    /// so both divisors are legal on the first move.
    pub multiple_of: u64,

    /// Number of candidates offered per session.
    pub count: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            min: 10_000,
            max: 20_000,
            multiple_of: 6,
            count: 5,
        }
    }
}

impl CandidateConfig {
    /// Number of values in `[min, max]` that are multiples of `multiple_of`.
    #[must_use]
    pub fn qualifying_count(&self) -> u64 {
        if self.multiple_of == 0 || self.min > self.max {
            return 0;
        }
        let first = self.min.div_ceil(self.multiple_of);
        let last = self.max / self.multiple_of;
        (last + 1).saturating_sub(first)
    }
}

/// Search parameters for the depth-limited strategies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search horizon in plies.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 5 }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Candidate generation.
    pub candidates: CandidateConfig,

    /// Search horizon.
    pub search: SearchConfig,

    /// Session seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the search horizon.
    #[must_use]
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search.depth = depth;
        self
    }

    /// Set the number of candidates per session.
    #[must_use]
    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidates.count = count;
        self
    }

    /// Set the inclusive candidate range.
    #[must_use]
    pub fn with_candidate_range(mut self, min: u64, max: u64) -> Self {
        self.candidates.min = min;
        self.candidates.max = max;
        self
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.candidates;
        if c.multiple_of == 0 || c.multiple_of % 6 != 0 {
            return Err(ConfigError::Validation(
                "candidates.multiple_of must be a positive multiple of 6".into(),
            ));
        }
        if c.min < 6 {
            return Err(ConfigError::Validation("candidates.min must be >= 6".into()));
        }
        if c.min > c.max {
            return Err(ConfigError::Validation(
                "candidates.min must be <= candidates.max".into(),
            ));
        }
        if c.count == 0 {
            return Err(ConfigError::Validation("candidates.count must be > 0".into()));
        }
        if c.count as u64 > c.qualifying_count() {
            return Err(ConfigError::Validation(format!(
                "candidates.count ({}) exceeds the {} qualifying numbers in range",
                c.count,
                c.qualifying_count()
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be > 0".into()));
        }
        Ok(())
    }
}
