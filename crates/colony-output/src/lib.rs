//! `colony-output`: turn-record writers for the ant colony simulator.
//!
//! Three backends are provided:
//!
//! | Feature   | Backend     | Output                                        |
//! |-----------|-------------|-----------------------------------------------|
//! | *(none)*  | Lines       | one `L<ant>-<room> …` line per turn to any `Write` |
//! | *(none)*  | CSV         | `moves.csv`                                   |
//! | `sqlite`  | SQLite      | `output.db`                                   |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `colony_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use colony_output::{LineWriter, SimOutputObserver};
//!
//! let mut obs = SimOutputObserver::new(LineWriter::new(std::io::stdout().lock()));
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod lines;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use lines::{LineWriter, format_turn};
pub use observer::SimOutputObserver;
pub use row::{MoveKind, MoveRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
