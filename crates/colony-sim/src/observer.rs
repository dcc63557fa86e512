//! Simulation observer trait for reporting and data collection.

use colony_graph::{Colony, Path};

use crate::{SimSummary, TurnRecord};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: line printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_turn_end(&mut self, record: &TurnRecord, _colony: &Colony) {
///         println!("turn {}: {} events", record.turn, record.events.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first turn with the routes ants will use.
    fn on_sim_start(&mut self, _colony: &Colony, _paths: &[Path]) {}

    /// Called after every turn that produced at least one event.
    ///
    /// `colony` resolves the record's `RoomId`s to room names.
    fn on_turn_end(&mut self, _record: &TurnRecord, _colony: &Colony) {}

    /// Called once after the final turn.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every turn record in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub records: Vec<TurnRecord>,
    pub summary: Option<SimSummary>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for RecordingObserver {
    fn on_turn_end(&mut self, record: &TurnRecord, _colony: &Colony) {
        self.records.push(record.clone());
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        self.summary = Some(*summary);
    }
}
