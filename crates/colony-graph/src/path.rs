//! Simple paths through a colony.

use colony_core::RoomId;

use crate::Colony;

/// An ordered sequence of rooms `[start, r1, …, end]` with no repeated room.
///
/// Always at least two rooms long.  Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    rooms: Box<[RoomId]>,
}

impl Path {
    /// Wrap a room sequence.
    ///
    /// The enumerator only produces sequences of two or more rooms.
    /// Hand-built paths are checked by [`is_route`](Self::is_route) before
    /// the scheduler accepts them; the endpoint accessors panic on shorter
    /// sequences.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms: rooms.into_boxed_slice() }
    }

    /// `true` if the path has at least two rooms and runs from `from` to `to`.
    pub fn is_route(&self, from: RoomId, to: RoomId) -> bool {
        matches!(&*self.rooms, [first, .., last] if *first == from && *last == to)
    }

    /// All rooms, endpoints included.
    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of moves needed to walk the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }

    pub fn first(&self) -> RoomId {
        self.rooms[0]
    }

    pub fn last(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// The room one step past the start.
    #[inline]
    pub fn entry(&self) -> RoomId {
        self.rooms[1]
    }

    /// Rooms strictly between the endpoints.
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    /// `true` for a single start–end tunnel (no interior rooms).
    pub fn is_direct(&self) -> bool {
        self.rooms.len() == 2
    }

    /// Room names joined with `-`, e.g. `"start-a-end"`.
    pub fn describe(&self, colony: &Colony) -> String {
        self.rooms
            .iter()
            .map(|&r| colony.label(r))
            .collect::<Vec<_>>()
            .join("-")
    }
}
