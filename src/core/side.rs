//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The game is strictly two-sided: the human `Player` and the `Computer`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::GameError;

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human side, driven by externally supplied moves.
    Player,
    /// The computer side, driven by a `SearchStrategy`.
    Computer,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Computer];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Slot index used by `SideMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }

    /// Is this the computer-controlled side?
    #[must_use]
    pub const fn is_computer(self) -> bool {
        matches!(self, Side::Computer)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

impl FromStr for Side {
    type Err = GameError;

    /// Parses `"Player"`, `"Human"` or `"Computer"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" | "human" => Ok(Side::Player),
            "computer" => Ok(Side::Computer),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown starting side '{other}'"
            ))),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use divide_game::core::{Side, SideMap};
///
/// let mut scores: SideMap<i64> = SideMap::with_value(0);
/// scores[Side::Computer] -= 1;
///
/// assert_eq!(scores[Side::Player], 0);
/// assert_eq!(scores[Side::Computer], -1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Computer)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
