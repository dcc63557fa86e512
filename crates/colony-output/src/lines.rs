//! Plain-text line backend.
//!
//! One line per turn, one space-separated token per event:
//!
//! ```text
//! L1-a L2-b
//! L1-sink L2-sink L3-a
//! ```
//!
//! An arriving ant is printed at the end room under that room's own name
//! (`sink` above), never a fixed `end` literal.  A held ant is printed at its
//! current room, just like a moving one.

use std::io::Write;

use colony_graph::Colony;
use colony_sim::TurnRecord;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Render one turn as a line (without the trailing newline).
pub fn format_turn(record: &TurnRecord, colony: &Colony) -> String {
    let end = colony.end();
    record
        .events
        .iter()
        .map(|e| format!("L{}-{}", e.ant().label(), colony.label(e.room(end))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes one line per turn to any [`Write`] sink.
pub struct LineWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for LineWriter<W> {
    fn write_turn(&mut self, record: &TurnRecord, colony: &Colony) -> OutputResult<()> {
        if record.events.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", format_turn(record, colony))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
