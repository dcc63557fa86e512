//! Selection of a conflict-free subset of candidate paths.
//!
//! Ants on different selected paths never compete for a room: only the
//! start (unbounded source) and end (unbounded sink) are shared.

use rustc_hash::FxHashSet;
use tracing::debug;

use colony_core::RoomId;

use crate::{Colony, GraphError, GraphResult, Path, PathEnumerator};

// ── PathSelector trait ────────────────────────────────────────────────────────

/// Chooses which candidate paths the scheduler may route ants over.
pub trait PathSelector: Send + Sync {
    /// Pick a subset of `paths`, in the order the scheduler should try them.
    ///
    /// Returns [`GraphError::NoRouting`] if `paths` is empty.
    fn select(&self, paths: Vec<Path>) -> GraphResult<Vec<Path>>;
}

// ── DisjointSelector ──────────────────────────────────────────────────────────

/// Greedy shortest-first selection of interior-disjoint paths.
///
/// 1. Stable sort by room count, so equal-length paths keep discovery order.
/// 2. Keep the shortest path.
/// 3. Keep each later path whose interior shares no room with the interior
///    of any path kept so far.  Rejected paths are dropped for good.
///
/// A direct start–end path has no interior and never blocks another path.
pub struct DisjointSelector;

impl PathSelector for DisjointSelector {
    fn select(&self, mut paths: Vec<Path>) -> GraphResult<Vec<Path>> {
        if paths.is_empty() {
            return Err(GraphError::NoRouting);
        }
        let candidates = paths.len();

        paths.sort_by_key(Path::len);

        let mut claimed: FxHashSet<RoomId> = FxHashSet::default();
        let mut selected = Vec::new();
        for path in paths {
            if path.interior().iter().any(|r| claimed.contains(r)) {
                continue;
            }
            claimed.extend(path.interior().iter().copied());
            selected.push(path);
        }

        debug!(
            candidates,
            selected = selected.len(),
            rejected = candidates - selected.len(),
            "path selection finished"
        );
        Ok(selected)
    }
}

// ── Convenience ───────────────────────────────────────────────────────────────

/// Enumerate candidate paths from the colony's start to its end, then select
/// the routes ants will use.
pub fn plan_routes<E, S>(colony: &Colony, enumerator: &E, selector: &S) -> GraphResult<Vec<Path>>
where
    E: PathEnumerator + ?Sized,
    S: PathSelector + ?Sized,
{
    let candidates = enumerator.enumerate(colony, colony.start(), colony.end())?;
    selector.select(candidates)
}
