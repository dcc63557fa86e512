//! `colony-sim`: turn loop orchestrator for the ant colony simulator.
//!
//! # Turn loop
//!
//! ```text
//! loop:
//!   ① Reset:    clear the per-turn occupancy set.
//!   ② Evaluate: for each ant in ascending AntId order:
//!                  AtStart    → depart on the first selected path whose
//!                               entry room is free this turn
//!                  InTransit  → step to the next room if it is free,
//!                               otherwise hold in place
//!                  AtEnd      → skip
//!   ③ Report:   hand the turn's events to the observer.
//!   ④ Stop:     when no ant moved this turn.
//! ```
//!
//! Only the start room (unbounded source) and end room (unbounded sink) may
//! hold more than one ant.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use colony_core::SimConfig;
//! use colony_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::new(10), colony).build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod ant;
pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use ant::{Ant, AntState};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{TurnEvent, TurnRecord};
pub use observer::{NoopObserver, RecordingObserver, SimObserver};
pub use sim::{Sim, SimSummary};
