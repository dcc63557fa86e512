//! Colony graph representation and builder.
//!
//! # Data layout
//!
//! Rooms are interned to sequential `RoomId`s.  Tunnels are undirected; each
//! one is stored as two directed halves in **Compressed Sparse Row (CSR)**
//! form.  Given a `RoomId r`, its neighbors occupy the slice:
//!
//! ```text
//! tunnel_to[ room_out_start[r] .. room_out_start[r+1] ]
//! ```
//!
//! The halves are sorted by source room with a *stable* sort, so each room's
//! neighbor slice keeps the order in which its tunnels were added.  Path
//! discovery order depends on it.

use rustc_hash::FxHashMap;
use tracing::debug;

use colony_core::RoomId;

use crate::{GraphError, GraphResult};

// ── Colony ────────────────────────────────────────────────────────────────────

/// Undirected room graph in CSR format with designated start and end rooms.
///
/// Immutable once built.  Do not construct directly; use [`ColonyBuilder`].
#[derive(Debug, Clone)]
pub struct Colony {
    // ── Room data ─────────────────────────────────────────────────────────
    /// Name of each room.  Indexed by `RoomId`.
    labels: Vec<String>,

    /// Reverse lookup from name to `RoomId`.
    index: FxHashMap<String, RoomId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Neighbors of room `r` are at positions
    /// `room_out_start[r] .. room_out_start[r+1]` of `tunnel_to`.
    /// Length = `room_count + 1`.
    room_out_start: Vec<u32>,

    /// Destination room of each directed tunnel half.
    tunnel_to: Vec<RoomId>,

    start: RoomId,
    end:   RoomId,
}

impl Colony {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected tunnels (duplicates included).
    pub fn tunnel_count(&self) -> usize {
        self.tunnel_to.len() / 2
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn end(&self) -> RoomId {
        self.end
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Name of `room`.
    ///
    /// # Panics
    ///
    /// If `room` does not belong to this colony.
    pub fn label(&self, room: RoomId) -> &str {
        &self.labels[room.index()]
    }

    /// `RoomId` of the room called `label`, if any.
    pub fn room(&self, label: &str) -> Option<RoomId> {
        self.index.get(label).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `room` in tunnel insertion order.  A room joined by two
    /// tunnels appears twice.
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        let start = self.room_out_start[room.index()] as usize;
        let end   = self.room_out_start[room.index() + 1] as usize;
        &self.tunnel_to[start..end]
    }

    /// `true` if at least one tunnel joins `a` and `b`.
    pub fn has_tunnel(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── ColonyBuilder ─────────────────────────────────────────────────────────────

/// Construct a [`Colony`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use colony_graph::ColonyBuilder;
///
/// let mut b = ColonyBuilder::new();
/// let s = b.add_room("start");
/// let a = b.add_room("a");
/// let e = b.add_room("end");
/// b.add_tunnel(s, a);
/// b.add_tunnel(a, e);
/// b.set_start(s);
/// b.set_end(e);
/// let colony = b.build().unwrap();
/// assert_eq!(colony.room_count(), 3);
/// assert_eq!(colony.tunnel_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ColonyBuilder {
    labels:      Vec<String>,
    index:       FxHashMap<String, RoomId>,
    raw_tunnels: Vec<(RoomId, RoomId)>,
    start:       Option<RoomId>,
    end:         Option<RoomId>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    ///
    /// Adding a label that already exists returns the existing id.
    pub fn add_room(&mut self, label: impl Into<String>) -> RoomId {
        let label = label.into();
        if let Some(&id) = self.index.get(&label) {
            return id;
        }
        let id = RoomId(self.labels.len() as u32);
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        id
    }

    /// Look up a room added earlier.
    pub fn room(&self, label: &str) -> Option<RoomId> {
        self.index.get(label).copied()
    }

    /// Add an undirected tunnel.  `b` is appended to `a`'s neighbors and `a`
    /// to `b`'s.  Duplicate tunnels are kept as separate entries.
    pub fn add_tunnel(&mut self, a: RoomId, b: RoomId) {
        self.raw_tunnels.push((a, b));
        self.raw_tunnels.push((b, a));
    }

    /// Convenience: add a tunnel between two rooms by name, creating either
    /// room if it does not exist yet.
    pub fn add_tunnel_by_label(&mut self, a: &str, b: &str) -> (RoomId, RoomId) {
        let a = self.add_room(a);
        let b = self.add_room(b);
        self.add_tunnel(a, b);
        (a, b)
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start = Some(room);
    }

    pub fn set_end(&mut self, room: RoomId) {
        self.end = Some(room);
    }

    pub fn room_count(&self) -> usize { self.labels.len() }
    pub fn tunnel_count(&self) -> usize { self.raw_tunnels.len() / 2 }

    /// Validate and consume the builder, producing a [`Colony`].
    ///
    /// Fails if start or end is missing, if they are the same room, if any
    /// tunnel joins a room to itself, or if any id was not issued by
    /// [`add_room`](Self::add_room).
    pub fn build(self) -> GraphResult<Colony> {
        let room_count = self.labels.len();
        let known = |r: RoomId| r.index() < room_count;

        let start = self.start.ok_or(GraphError::MissingStart)?;
        let end   = self.end.ok_or(GraphError::MissingEnd)?;
        for room in [start, end] {
            if !known(room) {
                return Err(GraphError::UnknownRoom(room));
            }
        }
        if start == end {
            return Err(GraphError::StartIsEnd(self.labels[start.index()].clone()));
        }

        for &(from, to) in &self.raw_tunnels {
            if !known(from) {
                return Err(GraphError::UnknownRoom(from));
            }
            if !known(to) {
                return Err(GraphError::UnknownRoom(to));
            }
            if from == to {
                return Err(GraphError::SelfLoop(self.labels[from.index()].clone()));
            }
        }

        // Stable sort keeps each room's tunnels in insertion order.
        let mut raw = self.raw_tunnels;
        raw.sort_by_key(|&(from, _)| from.0);

        let tunnel_to: Vec<RoomId> = raw.iter().map(|&(_, to)| to).collect();

        let mut room_out_start = vec![0u32; room_count + 1];
        for &(from, _) in &raw {
            room_out_start[from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_out_start[i] += room_out_start[i - 1];
        }
        debug_assert_eq!(room_out_start[room_count] as usize, tunnel_to.len());

        debug!(rooms = room_count, tunnels = tunnel_to.len() / 2, "colony built");

        Ok(Colony {
            labels: self.labels,
            index: self.index,
            room_out_start,
            tunnel_to,
            start,
            end,
        })
    }
}
