//! SQLite backend (feature `sqlite`).
//!
//! `output.db` holds one table, recreated on every run so a rerun into the
//! same directory replaces the previous moves:
//!
//! ```sql
//! moves(turn, ant, room, kind)   -- primary key (turn, ant)
//! ```

use std::path::Path;

use rusqlite::{Connection, params};

use colony_graph::Colony;
use colony_sim::TurnRecord;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult};

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous  = NORMAL;
    DROP TABLE IF EXISTS moves;
    CREATE TABLE moves (
        turn INTEGER NOT NULL,
        ant  INTEGER NOT NULL,
        room TEXT    NOT NULL,
        kind TEXT    NOT NULL,
        PRIMARY KEY (turn, ant)
    );";

const INSERT: &str = "INSERT INTO moves (turn, ant, room, kind) VALUES (?1, ?2, ?3, ?4)";

/// Appends every ant event to the `moves` table, one transaction per turn.
pub struct SqliteWriter {
    db:       Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open or create `dir/output.db` and start an empty `moves` table.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let db = Connection::open(dir.join("output.db"))?;
        db.execute_batch(SCHEMA)?;
        Ok(Self { db, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_turn(&mut self, record: &TurnRecord, colony: &Colony) -> OutputResult<()> {
        let rows = MoveRow::from_record(record, colony);
        if rows.is_empty() {
            return Ok(());
        }

        let tx = self.db.unchecked_transaction()?;
        {
            let mut insert = tx.prepare_cached(INSERT)?;
            for row in &rows {
                insert.execute(params![row.turn as i64, row.ant, row.room, row.kind.as_str()])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.db.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        }
        Ok(())
    }
}
