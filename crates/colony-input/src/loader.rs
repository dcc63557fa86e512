//! Ant-farm text loader.
//!
//! # Format
//!
//! ```text
//! 3            ← ant count (first non-comment line)
//! ##start
//! s 0 0        ← room: name x y
//! ##end
//! e 4 0
//! a 2 0
//! s-a          ← tunnel: name-name
//! a-e
//! # comment
//! ```
//!
//! | Line             | Meaning                                          |
//! |------------------|--------------------------------------------------|
//! | `##start`        | the next room line is the start room             |
//! | `##end`          | the next room line is the end room               |
//! | `#…`             | comment (unknown `##` commands are comments too) |
//! | `name x y`       | room; coordinates must be integers, then dropped |
//! | `a-b`            | tunnel between two rooms declared earlier        |
//!
//! Blank lines are ignored.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use colony_core::{RoomId, SimConfig};
use colony_graph::{Colony, ColonyBuilder};

use crate::{InputError, InputResult};

const START: &str = "##start";
const END: &str = "##end";

// ── Public API ────────────────────────────────────────────────────────────────

/// A parsed ant farm: how many ants, and the colony they cross.
#[derive(Debug, Clone)]
pub struct ColonyInput {
    pub ant_count: usize,
    pub colony:    Colony,
}

impl ColonyInput {
    /// Run configuration for this farm.
    pub fn config(&self) -> SimConfig {
        SimConfig::new(self.ant_count)
    }
}

/// Load an ant farm from a file.
pub fn load_colony_path(path: &Path) -> InputResult<ColonyInput> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_colony_reader(file)
}

/// Like [`load_colony_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_colony_reader<R: Read>(reader: R) -> InputResult<ColonyInput> {
    let mut parser = Parser::default();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parser.line(i + 1, &line?)?;
    }
    parser.finish()
}

// ── Parser ────────────────────────────────────────────────────────────────────

/// Which command, if any, applies to the next room line.
#[derive(Clone, Copy)]
enum Pending {
    Start { line: usize },
    End { line: usize },
}

#[derive(Default)]
struct Parser {
    ant_count: Option<usize>,
    builder:   ColonyBuilder,
    start:     Option<RoomId>,
    end:       Option<RoomId>,
    pending:   Option<Pending>,
    last_line: usize,
}

impl Parser {
    fn line(&mut self, line: usize, raw: &str) -> InputResult<()> {
        self.last_line = line;
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }

        // ── Commands and comments ─────────────────────────────────────────
        if text == START || text == END {
            return self.command(line, text == START);
        }
        if text.starts_with('#') {
            return Ok(());
        }

        // ── Ant count ─────────────────────────────────────────────────────
        if self.ant_count.is_none() {
            let count = text
                .parse::<i64>()
                .ok()
                .filter(|&n| n > 0)
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| InputError::InvalidAntCount { line, value: text.to_owned() })?;
            self.ant_count = Some(count);
            return Ok(());
        }

        // ── Rooms and tunnels ─────────────────────────────────────────────
        let fields: Vec<&str> = text.split_whitespace().collect();
        match fields.as_slice() {
            [name, x, y] => self.room(line, name, x, y),
            [tunnel] if tunnel.contains('-') => {
                self.check_dangling()?;
                self.tunnel(line, tunnel)
            }
            _ => Err(InputError::Malformed { line, content: text.to_owned() }),
        }
    }

    fn command(&mut self, line: usize, is_start: bool) -> InputResult<()> {
        self.check_dangling()?;
        let (already, command) = if is_start {
            (self.start.is_some(), START)
        } else {
            (self.end.is_some(), END)
        };
        if already {
            return Err(InputError::DuplicateCommand { line, command });
        }
        self.pending = Some(if is_start { Pending::Start { line } } else { Pending::End { line } });
        Ok(())
    }

    fn room(&mut self, line: usize, name: &str, x: &str, y: &str) -> InputResult<()> {
        if name.starts_with('L') || name.contains('-') {
            return Err(InputError::InvalidRoomName { line, name: name.to_owned() });
        }
        for value in [x, y] {
            if value.parse::<i64>().is_err() {
                return Err(InputError::InvalidCoordinate {
                    line,
                    room:  name.to_owned(),
                    value: value.to_owned(),
                });
            }
        }
        if self.builder.room(name).is_some() {
            return Err(InputError::DuplicateRoom { line, name: name.to_owned() });
        }

        let id = self.builder.add_room(name);
        match self.pending.take() {
            Some(Pending::Start { .. }) => self.start = Some(id),
            Some(Pending::End { .. }) => self.end = Some(id),
            None => {}
        }
        Ok(())
    }

    fn tunnel(&mut self, line: usize, text: &str) -> InputResult<()> {
        let malformed = || InputError::Malformed { line, content: text.to_owned() };
        let (a, b) = text.split_once('-').ok_or_else(malformed)?;
        if a.is_empty() || b.is_empty() || b.contains('-') {
            return Err(malformed());
        }
        if a == b {
            return Err(InputError::SelfLoop { line, name: a.to_owned() });
        }

        let lookup = |name: &str| {
            self.builder
                .room(name)
                .ok_or_else(|| InputError::UnknownRoom { line, name: name.to_owned() })
        };
        let (a, b) = (lookup(a)?, lookup(b)?);
        self.builder.add_tunnel(a, b);
        Ok(())
    }

    /// A `##start`/`##end` must be followed directly by a room line.
    fn check_dangling(&self) -> InputResult<()> {
        match self.pending {
            Some(Pending::Start { line }) => Err(InputError::DanglingCommand { line, command: START }),
            Some(Pending::End { line }) => Err(InputError::DanglingCommand { line, command: END }),
            None => Ok(()),
        }
    }

    fn finish(mut self) -> InputResult<ColonyInput> {
        self.check_dangling()?;
        let ant_count = self.ant_count.ok_or(InputError::MissingAntCount)?;
        let start = self.start.ok_or(InputError::MissingStart)?;
        let end = self.end.ok_or(InputError::MissingEnd)?;

        self.builder.set_start(start);
        self.builder.set_end(end);
        let colony = self.builder.build()?;

        debug!(
            ants    = ant_count,
            rooms   = colony.room_count(),
            tunnels = colony.tunnel_count(),
            lines   = self.last_line,
            "ant farm loaded"
        );
        Ok(ColonyInput { ant_count, colony })
    }
}
