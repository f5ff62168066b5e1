//! Move representation: the divisor applied to the current number.
//!
//! Only 2 and 3 are ever legal divisors. A divisor is legal for a number
//! exactly when it divides that number evenly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{GameError, MoveRejection};
use super::side::Side;

/// A single move: divide the current number by 2 or by 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Divisor {
    /// Divide by 2.
    Two,
    /// Divide by 3.
    Three,
}

impl Divisor {
    /// Both divisors in search order. Trying 2 first makes 2 win ties.
    pub const ALL: [Divisor; 2] = [Divisor::Two, Divisor::Three];

    /// The numeric value of the divisor.
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Divisor::Two => 2,
            Divisor::Three => 3,
        }
    }

    /// Does this divisor divide `number` evenly?
    #[must_use]
    pub const fn divides(self, number: u64) -> bool {
        number % self.value() == 0
    }

    /// Divide `number`, or `None` if the division would leave a remainder.
    #[must_use]
    pub const fn apply(self, number: u64) -> Option<u64> {
        if self.divides(number) {
            Some(number / self.value())
        } else {
            None
        }
    }
}

impl std::fmt::Display for Divisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u64> for Divisor {
    type Error = GameError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Divisor::Two),
            3 => Ok(Divisor::Three),
            other => Err(GameError::InvalidMove(MoveRejection::UnsupportedDivisor(other))),
        }
    }
}

/// Legal divisors for `number`, in search order.
///
/// Empty when the number is divisible by neither 2 nor 3. This does not
/// consider 2 and 3 themselves terminal; see `rules::is_terminal` for that.
///
/// ```
/// use divide_game::core::{legal_divisors, Divisor};
///
/// assert_eq!(legal_divisors(12).as_slice(), &[Divisor::Two, Divisor::Three]);
/// assert_eq!(legal_divisors(9).as_slice(), &[Divisor::Three]);
/// assert!(legal_divisors(25).is_empty());
/// ```
#[must_use]
pub fn legal_divisors(number: u64) -> SmallVec<[Divisor; 2]> {
    Divisor::ALL
        .into_iter()
        .filter(|d| d.divides(number))
        .collect()
}

/// A recorded move, kept in the match history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number within the match (starts at 1).
    pub ply: u32,

    /// The side that moved.
    pub mover: Side,

    /// The divisor applied.
    pub divisor: Divisor,

    /// Number before the move.
    pub from: u64,

    /// Number after the move.
    pub to: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_values() {
        assert_eq!(Divisor::Two.value(), 2);
        assert_eq!(Divisor::Three.value(), 3);
        assert_eq!(format!("{}", Divisor::Three), "3");
    }

    #[test]
    fn test_divisor_apply() {
        assert_eq!(Divisor::Two.apply(18), Some(9));
        assert_eq!(Divisor::Three.apply(18), Some(6));
        assert_eq!(Divisor::Two.apply(9), None);
        assert_eq!(Divisor::Three.apply(10), None);
    }

    #[test]
    fn test_divisor_try_from() {
        assert_eq!(Divisor::try_from(2).unwrap(), Divisor::Two);
        assert_eq!(Divisor::try_from(3).unwrap(), Divisor::Three);
        assert_eq!(
            Divisor::try_from(5),
            Err(GameError::InvalidMove(MoveRejection::UnsupportedDivisor(5)))
        );
    }

    #[test]
    fn test_legal_divisors() {
        assert_eq!(legal_divisors(6).as_slice(), &[Divisor::Two, Divisor::Three]);
        assert_eq!(legal_divisors(8).as_slice(), &[Divisor::Two]);
        assert_eq!(legal_divisors(27).as_slice(), &[Divisor::Three]);
        assert!(legal_divisors(35).is_empty());
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            ply: 1,
            mover: Side::Player,
            divisor: Divisor::Two,
            from: 18,
            to: 9,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
