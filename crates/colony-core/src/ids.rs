//! Typed identifiers for ants, rooms, and selected paths.
//!
//! Each id is a `u32` index into a dense table owned by some other crate
//! (the ant table in `colony-sim`, the room table in `colony-graph`, the
//! route list in `colony-sim`).  Mixing them up is a type error.

use std::fmt;

/// Declare an index newtype.  The string literal is the `Display` prefix.
macro_rules! index_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($repr:ty) => $prefix:literal;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $repr);

        impl $name {
            /// Placeholder for "not assigned".
            pub const INVALID: $name = $name(<$repr>::MAX);

            /// Position in the owning table.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.index()
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(index: usize) -> Result<Self, Self::Error> {
                Ok($name(<$repr>::try_from(index)?))
            }
        }
    };
}

index_id! {
    /// An ant, 0-based in departure priority order.
    pub struct AntId(u32) => "ant";
}

index_id! {
    /// A room of a colony graph.
    pub struct RoomId(u32) => "room";
}

index_id! {
    /// A route in the scheduler's selected path list.
    pub struct PathId(u32) => "path";
}

impl AntId {
    /// The 1-based number used when reporting this ant (`L1`, `L2`, …).
    #[inline]
    pub fn label(self) -> u32 {
        self.0 + 1
    }
}
