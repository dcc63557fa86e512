//! `colony-core`: foundational types for the ant colony simulator.
//!
//! This crate is a dependency of every other `colony-*` crate.  It has no
//! `colony-*` dependencies and only `thiserror` (plus optional `serde`)
//! from outside.
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `AntId`, `RoomId`, `PathId`                |
//! | [`turn`]   | `Turn`                                     |
//! | [`config`] | `SimConfig`                                |
//! | [`error`]  | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AntId, PathId, RoomId};
pub use turn::Turn;
