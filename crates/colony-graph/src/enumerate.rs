//! Path enumeration trait and default depth-first implementation.
//!
//! # Pluggability
//!
//! `colony-sim` asks for candidate paths through the [`PathEnumerator`]
//! trait, so applications can swap in a bounded or heuristic search without
//! touching the scheduler.  The default [`DfsEnumerator`] is exhaustive.

use tracing::debug;

use colony_core::RoomId;

use crate::{Colony, GraphError, GraphResult, Path};

// ── PathEnumerator trait ──────────────────────────────────────────────────────

/// Produces candidate paths between two rooms.
pub trait PathEnumerator: Send + Sync {
    /// Every path from `from` to `to` this enumerator is willing to offer.
    ///
    /// Returns [`GraphError::Unreachable`] if there are none.
    fn enumerate(&self, colony: &Colony, from: RoomId, to: RoomId) -> GraphResult<Vec<Path>>;
}

// ── DfsEnumerator ─────────────────────────────────────────────────────────────

/// Exhaustive depth-first search with backtracking.
///
/// Produces every simple path exactly once per distinct sequence of tunnel
/// entries, in neighbor insertion order.  Duplicate tunnels therefore yield
/// duplicate paths.
///
/// Runtime is exponential in the worst case; colonies are expected to be
/// small enough for exhaustive search.
pub struct DfsEnumerator;

impl PathEnumerator for DfsEnumerator {
    fn enumerate(&self, colony: &Colony, from: RoomId, to: RoomId) -> GraphResult<Vec<Path>> {
        let n = colony.room_count();
        if from.index() >= n {
            return Err(GraphError::UnknownRoom(from));
        }
        if to.index() >= n {
            return Err(GraphError::UnknownRoom(to));
        }

        let mut search = Search {
            colony,
            to,
            visited: vec![false; n],
            buf:     Vec::with_capacity(n),
            found:   Vec::new(),
        };
        search.visit(from);

        debug!(paths = search.found.len(), %from, %to, "path enumeration finished");

        if search.found.is_empty() {
            return Err(GraphError::Unreachable { from, to });
        }
        Ok(search.found)
    }
}

// ── DFS internals ─────────────────────────────────────────────────────────────

/// Mutable state shared by every frame of the recursive search.
struct Search<'a> {
    colony:  &'a Colony,
    to:      RoomId,
    /// `visited[r]` is true while `r` is on the current path.
    visited: Vec<bool>,
    /// The current path, start first.
    buf:     Vec<RoomId>,
    found:   Vec<Path>,
}

impl Search<'_> {
    fn visit(&mut self, room: RoomId) {
        self.visited[room.index()] = true;
        self.buf.push(room);

        if room == self.to {
            // A single-room "path" (from == to) is not a route.
            if self.buf.len() >= 2 {
                self.found.push(Path::new(self.buf.clone()));
            }
        } else {
            let colony = self.colony;
            for &next in colony.neighbors(room) {
                if !self.visited[next.index()] {
                    self.visit(next);
                }
            }
        }

        // Release the claim so sibling branches may pass through `room`.
        self.buf.pop();
        self.visited[room.index()] = false;
    }
}
