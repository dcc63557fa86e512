//! Plain data row types written by the tabular backends.

use serde::Serialize;

use colony_graph::Colony;
use colony_sim::{TurnEvent, TurnRecord};

/// What happened to the ant in a [`MoveRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Moved,
    Held,
    Arrived,
}

impl MoveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Moved => "moved",
            MoveKind::Held => "held",
            MoveKind::Arrived => "arrived",
        }
    }
}

/// One ant's event in one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    pub turn: u64,
    /// 1-based ant label.
    pub ant:  u32,
    /// Room name after the event; the end room's name for arrivals.
    pub room: String,
    pub kind: MoveKind,
}

impl MoveRow {
    /// Flatten a turn record into rows, preserving ant order.
    pub fn from_record(record: &TurnRecord, colony: &Colony) -> Vec<MoveRow> {
        let end = colony.end();
        record
            .events
            .iter()
            .map(|event| MoveRow {
                turn: record.turn.0,
                ant:  event.ant().label(),
                room: colony.label(event.room(end)).to_owned(),
                kind: match event {
                    TurnEvent::Moved { .. } => MoveKind::Moved,
                    TurnEvent::Held { .. } => MoveKind::Held,
                    TurnEvent::Arrived { .. } => MoveKind::Arrived,
                },
            })
            .collect()
    }
}
