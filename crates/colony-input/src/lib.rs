//! `colony-input`: ant-farm text loader.
//!
//! # Crate layout
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`loader`] | `ColonyInput`, `load_colony_path`, `load_colony_reader` |
//! | [`error`]  | `InputError`, `InputResult<T>`                  |

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{ColonyInput, load_colony_path, load_colony_reader};
