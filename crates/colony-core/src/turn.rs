//! Discrete simulation time.
//!
//! A `Turn` is one synchronous step in which every unfinished ant is
//! evaluated once.  Turn 0 is the state before any ant has left the start
//! room; the first turn that can produce moves is turn 1.

use std::fmt;
use std::ops::Add;

/// A monotonically increasing turn counter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    /// The state before the first move.
    pub const ZERO: Turn = Turn(0);

    /// The turn that follows this one.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
