//! The `Sim` struct and its turn loop.

use rustc_hash::FxHashSet;
use tracing::{info, trace};

use colony_core::{PathId, RoomId, SimConfig, Turn};
use colony_graph::{Colony, Path};

use crate::{Ant, AntState, SimObserver, TurnEvent, TurnRecord};

// ── SimSummary ────────────────────────────────────────────────────────────────

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    /// Number of turns that produced events.
    pub turns:   Turn,
    pub ants:    usize,
    /// Ants in the end room when the loop stopped.
    pub arrived: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The turn-based scheduler.
///
/// Owns the ant table and the per-turn occupancy set.  The colony and the
/// selected paths are read-only for the whole run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim {
    pub config: SimConfig,

    /// The colony graph.  Never mutated after build.
    pub colony: Colony,

    /// Selected paths in the order departing ants try them.  `PathId(i)`
    /// refers to `paths[i]`.
    pub paths: Vec<Path>,

    /// One entry per ant, indexed by `AntId`.
    pub ants: Vec<Ant>,

    /// The last turn that produced events.
    pub turn: Turn,

    /// Rooms claimed by a moving ant during the current turn.  Cleared at
    /// the top of every turn.
    occupied: FxHashSet<RoomId>,

    /// Set once a turn passes with no movement.
    finished: bool,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, colony: Colony, paths: Vec<Path>, ants: Vec<Ant>) -> Self {
        Self {
            config,
            colony,
            paths,
            ants,
            turn: Turn::ZERO,
            occupied: FxHashSet::default(),
            finished: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run turns until no ant moves.
    ///
    /// Calls observer hooks at every turn boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimSummary {
        observer.on_sim_start(&self.colony, &self.paths);
        while let Some(record) = self.step() {
            observer.on_turn_end(&record, &self.colony);
        }
        let summary = self.summary();
        info!(
            turns   = summary.turns.0,
            ants    = summary.ants,
            arrived = summary.arrived,
            routes  = self.paths.len(),
            "simulation complete"
        );
        observer.on_sim_end(&summary);
        summary
    }

    /// Advance one turn.
    ///
    /// Returns the turn's record, or `None` once a turn passes with no
    /// events.  After the first turn with no movement every later call
    /// returns `None`.
    pub fn step(&mut self) -> Option<TurnRecord> {
        if self.finished {
            return None;
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let paths    = self.paths.as_slice();
        let end      = self.colony.end();
        let occupied = &mut self.occupied;

        occupied.clear();
        let mut moved  = false;
        let mut events = Vec::new();

        for ant in self.ants.iter_mut() {
            match ant.state {
                AntState::AtEnd { .. } => {}
                AntState::AtStart => {
                    // An ant that cannot leave the source is not reported.
                    if let Some(event) = depart(ant, paths, end, occupied) {
                        moved = true;
                        events.push(event);
                    }
                }
                AntState::InTransit { path, cursor } => {
                    let (event, stepped) = advance(ant, path, cursor, paths, end, occupied);
                    moved |= stepped;
                    events.push(event);
                }
            }
        }

        if !moved {
            self.finished = true;
        }
        if events.is_empty() {
            return None;
        }

        self.turn = self.turn.next();
        trace!(turn = self.turn.0, events = events.len(), "turn complete");
        Some(TurnRecord { turn: self.turn, events })
    }

    /// `true` once the loop has stopped.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn arrived(&self) -> usize {
        self.ants.iter().filter(|a| a.is_finished()).count()
    }

    pub fn summary(&self) -> SimSummary {
        SimSummary {
            turns:   self.turn,
            ants:    self.ants.len(),
            arrived: self.arrived(),
        }
    }
}

// ── Per-ant transitions ───────────────────────────────────────────────────────

/// Put a waiting ant on the first selected path whose entry room is free.
///
/// Returns `None` if every entry room is taken this turn.  Departing ants
/// always carry higher ids than in-transit ones, so claiming the end room
/// here never holds back an arrival.
fn depart(
    ant:      &mut Ant,
    paths:    &[Path],
    end:      RoomId,
    occupied: &mut FxHashSet<RoomId>,
) -> Option<TurnEvent> {
    let (index, entry) = paths
        .iter()
        .map(Path::entry)
        .enumerate()
        .find(|(_, entry)| !occupied.contains(entry))?;

    let path = PathId(index as u32);
    ant.position = entry;
    // Claimed even when it is the end room: one departure per path per turn.
    occupied.insert(entry);

    // Direct start–end path: the ant is done on departure.
    if entry == end {
        ant.state = AntState::AtEnd { path };
        return Some(TurnEvent::Arrived { ant: ant.id });
    }

    ant.state = AntState::InTransit { path, cursor: 1 };
    Some(TurnEvent::Moved { ant: ant.id, room: entry })
}

/// Step an in-transit ant one room forward if that room is free.
///
/// Returns the event to report and whether the ant actually moved.
fn advance(
    ant:      &mut Ant,
    path:     PathId,
    cursor:   usize,
    paths:    &[Path],
    end:      RoomId,
    occupied: &mut FxHashSet<RoomId>,
) -> (TurnEvent, bool) {
    let held = TurnEvent::Held { ant: ant.id, room: ant.position };

    let rooms = paths[path.index()].rooms();
    let Some(&next) = rooms.get(cursor + 1) else {
        return (held, false);
    };
    if occupied.contains(&next) {
        return (held, false);
    }

    ant.position = next;
    if next == end {
        ant.state = AntState::AtEnd { path };
        return (TurnEvent::Arrived { ant: ant.id }, true);
    }

    occupied.insert(next);
    ant.state = AntState::InTransit { path, cursor: cursor + 1 };
    (TurnEvent::Moved { ant: ant.id, room: next }, true)
}
