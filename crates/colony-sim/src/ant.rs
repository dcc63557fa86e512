//! Per-ant movement state.

use colony_core::{AntId, PathId, RoomId};

/// Where an ant is in its lifecycle.
///
/// ```text
/// AtStart ──depart──▶ InTransit ──step…──▶ AtEnd
///    └────────depart on a direct path────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    /// Waiting in the start room with no path assigned.
    AtStart,

    /// Walking `path`; `cursor` indexes the ant's current room in it.
    InTransit { path: PathId, cursor: usize },

    /// Reached the end room.  Terminal.
    AtEnd { path: PathId },
}

/// One ant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    pub id:       AntId,
    /// Current room.
    pub position: RoomId,
    pub state:    AntState,
}

impl Ant {
    /// A fresh ant waiting in `start`.
    #[inline]
    pub fn at_start(id: AntId, start: RoomId) -> Self {
        Self { id, position: start, state: AntState::AtStart }
    }

    /// The path assigned on departure, if the ant has left the start room.
    pub fn path(&self) -> Option<PathId> {
        match self.state {
            AntState::AtStart => None,
            AntState::InTransit { path, .. } | AntState::AtEnd { path } => Some(path),
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, AntState::AtEnd { .. })
    }

    #[inline]
    pub fn in_transit(&self) -> bool {
        matches!(self.state, AntState::InTransit { .. })
    }
}
