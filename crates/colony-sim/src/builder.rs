//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use colony_core::{AntId, SimConfig};
use colony_graph::{
    Colony, DfsEnumerator, DisjointSelector, GraphError, Path, PathEnumerator, PathSelector,
    plan_routes,
};

use crate::{Ant, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: ant count
/// - [`Colony`]: the validated room graph
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                         |
/// |-------------------|-------------------------------------------------|
/// | `.paths(v)`       | enumerate + select with the components below    |
/// | `.enumerator(e)`  | [`DfsEnumerator`]                               |
/// | `.selector(s)`    | [`DisjointSelector`]                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(3), colony)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<E: PathEnumerator = DfsEnumerator, S: PathSelector = DisjointSelector> {
    config:     SimConfig,
    colony:     Colony,
    paths:      Option<Vec<Path>>,
    enumerator: E,
    selector:   S,
}

impl SimBuilder {
    /// Create a builder with all required inputs and the default planners.
    pub fn new(config: SimConfig, colony: Colony) -> Self {
        Self {
            config,
            colony,
            paths:      None,
            enumerator: DfsEnumerator,
            selector:   DisjointSelector,
        }
    }
}

impl<E: PathEnumerator, S: PathSelector> SimBuilder<E, S> {
    /// Supply already-selected paths, skipping enumeration and selection.
    ///
    /// Paths are tried by departing ants in the given order.  Each must have
    /// at least two rooms and run from the colony's start room to its end
    /// room.
    pub fn paths(mut self, paths: Vec<Path>) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Replace the path enumerator used when no paths are supplied.
    pub fn enumerator<E2: PathEnumerator>(self, enumerator: E2) -> SimBuilder<E2, S> {
        SimBuilder {
            config:   self.config,
            colony:   self.colony,
            paths:    self.paths,
            enumerator,
            selector: self.selector,
        }
    }

    /// Replace the path selector used when no paths are supplied.
    pub fn selector<S2: PathSelector>(self, selector: S2) -> SimBuilder<E, S2> {
        SimBuilder {
            config:     self.config,
            colony:     self.colony,
            paths:      self.paths,
            enumerator: self.enumerator,
            selector,
        }
    }

    /// Validate inputs, plan routes if needed, and return a ready-to-run
    /// [`Sim`] with every ant in the start room.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        // ── Resolve routes ────────────────────────────────────────────────
        let paths = match self.paths {
            Some(p) => {
                if p.is_empty() {
                    return Err(GraphError::NoRouting.into());
                }
                let (start, end) = (self.colony.start(), self.colony.end());
                if let Some(index) = p.iter().position(|path| !path.is_route(start, end)) {
                    return Err(SimError::PathMismatch { index });
                }
                p
            }
            None => plan_routes(&self.colony, &self.enumerator, &self.selector)?,
        };

        debug!(
            routes = paths.len(),
            ants = self.config.ant_count,
            "routes ready"
        );

        // ── Place ants ────────────────────────────────────────────────────
        let start = self.colony.start();
        let ants = (0..self.config.ant_count)
            .map(|i| Ant::at_start(AntId(i as u32), start))
            .collect();

        Ok(Sim::new(self.config, self.colony, paths, ants))
    }
}
