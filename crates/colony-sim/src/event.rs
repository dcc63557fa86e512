//! Per-turn output records.

use colony_core::{AntId, RoomId, Turn};

/// Something that happened to one ant during one turn.
///
/// `Moved` and `Held` are both reported as "ant X is now in room N".  They
/// are kept apart so callers can tell a blocked ant from a moving one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The ant stepped into `room` (not the end room).
    Moved { ant: AntId, room: RoomId },

    /// The ant is in transit but could not step this turn.
    Held { ant: AntId, room: RoomId },

    /// The ant stepped into the end room.
    Arrived { ant: AntId },
}

impl TurnEvent {
    pub fn ant(&self) -> AntId {
        match *self {
            TurnEvent::Moved { ant, .. }
            | TurnEvent::Held { ant, .. }
            | TurnEvent::Arrived { ant } => ant,
        }
    }

    /// The room the ant occupies after the event; `end` for arrivals.
    pub fn room(&self, end: RoomId) -> RoomId {
        match *self {
            TurnEvent::Moved { room, .. } | TurnEvent::Held { room, .. } => room,
            TurnEvent::Arrived { .. } => end,
        }
    }
}

/// All events of one turn, in ascending ant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn:   Turn,
    pub events: Vec<TurnEvent>,
}
