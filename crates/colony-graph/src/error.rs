//! Graph-subsystem error type.

use thiserror::Error;

use colony_core::RoomId;

/// Errors produced by `colony-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("no start room designated")]
    MissingStart,

    #[error("no end room designated")]
    MissingEnd,

    #[error("start and end are the same room {0:?}")]
    StartIsEnd(String),

    #[error("tunnel from room {0:?} to itself")]
    SelfLoop(String),

    #[error("room {0} not found in colony")]
    UnknownRoom(RoomId),

    #[error("no path from {from} to {to}")]
    Unreachable { from: RoomId, to: RoomId },

    #[error("no viable routing: the candidate path list is empty")]
    NoRouting,
}

pub type GraphResult<T> = Result<T, GraphError>;
