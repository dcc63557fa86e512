use colony_graph::GraphError;
use thiserror::Error;

/// Errors produced while reading an ant-farm description.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is empty: expected an ant count")]
    MissingAntCount,

    #[error("line {line}: invalid ant count {value:?}: expected a positive integer")]
    InvalidAntCount { line: usize, value: String },

    #[error("line {line}: invalid coordinate {value:?} for room {room:?}")]
    InvalidCoordinate { line: usize, room: String, value: String },

    #[error("line {line}: invalid room name {name:?}")]
    InvalidRoomName { line: usize, name: String },

    #[error("line {line}: room {name:?} declared twice")]
    DuplicateRoom { line: usize, name: String },

    #[error("line {line}: tunnel references undeclared room {name:?}")]
    UnknownRoom { line: usize, name: String },

    #[error("line {line}: tunnel from room {name:?} to itself")]
    SelfLoop { line: usize, name: String },

    #[error("line {line}: {command} given more than once")]
    DuplicateCommand { line: usize, command: &'static str },

    #[error("line {line}: {command} must be followed by a room")]
    DanglingCommand { line: usize, command: &'static str },

    #[error("line {line}: cannot parse {content:?}")]
    Malformed { line: usize, content: String },

    #[error("no ##start room")]
    MissingStart,

    #[error("no ##end room")]
    MissingEnd,

    #[error("invalid colony: {0}")]
    Graph(#[from] GraphError),
}

pub type InputResult<T> = Result<T, InputError>;
