use colony_core::CoreError;
use colony_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("routing error: {0}")]
    Routing(#[from] GraphError),

    #[error("path {index} does not run from the colony's start room to its end room")]
    PathMismatch { index: usize },
}

pub type SimResult<T> = Result<T, SimError>;
