//! Observer that streams turn records into an [`OutputWriter`].

use colony_graph::Colony;
use colony_sim::{SimObserver, SimSummary, TurnRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Feeds every reported turn to `W` and flushes it when the run ends.
///
/// Observer hooks cannot fail, so the first writer error is parked here and
/// later writes still go through.  Call [`take_error`](Self::take_error)
/// once `Sim::run` has returned.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    turns:       u64,
    first_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, turns: 0, first_error: None }
    }

    /// The first error the writer returned, if any.  Clears it.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    /// Number of turns handed to the writer.
    pub fn turns_written(&self) -> u64 {
        self.turns
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, result: OutputResult<()>) {
        if let Err(err) = result {
            if self.first_error.is_none() {
                self.first_error = Some(err);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_turn_end(&mut self, record: &TurnRecord, colony: &Colony) {
        self.turns += 1;
        let written = self.writer.write_turn(record, colony);
        self.record(written);
    }

    fn on_sim_end(&mut self, _summary: &SimSummary) {
        let flushed = self.writer.finish();
        self.record(flushed);
    }
}
