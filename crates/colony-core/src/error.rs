//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `colony-core` validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid ant count {0}: at least one ant is required")]
    InvalidAntCount(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `colony-core`.
pub type CoreResult<T> = Result<T, CoreError>;
