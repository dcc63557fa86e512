//! The `OutputWriter` trait implemented by all backend writers.

use colony_graph::Colony;
use colony_sim::TurnRecord;

use crate::OutputResult;

/// Trait implemented by the line, CSV, and SQLite writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one turn.  `colony` resolves room ids to names.
    fn write_turn(&mut self, record: &TurnRecord, colony: &Colony) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
