//! CSV output backend.
//!
//! Creates `moves.csv` in the configured output directory with one row per
//! ant event: `turn,ant,room,kind`.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use colony_graph::Colony;
use colony_sim::TurnRecord;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult};

/// Writes simulation output to a CSV file.
pub struct CsvWriter {
    moves:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `moves.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        // Header written by hand so an empty run still yields a valid file.
        let mut moves = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join("moves.csv"))?;
        moves.write_record(["turn", "ant", "room", "kind"])?;

        Ok(Self { moves, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_turn(&mut self, record: &TurnRecord, colony: &Colony) -> OutputResult<()> {
        for row in MoveRow::from_record(record, colony) {
            self.moves.serialize(row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.moves.flush()?;
        Ok(())
    }
}
