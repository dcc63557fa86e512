//! `colony-graph`: colony graph, path enumeration, and path selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`colony`]    | `Colony` (CSR adjacency), `ColonyBuilder`              |
//! | [`path`]      | `Path`                                                 |
//! | [`enumerate`] | `PathEnumerator` trait, `DfsEnumerator`                |
//! | [`select`]    | `PathSelector` trait, `DisjointSelector`, `plan_routes`|
//! | [`error`]     | `GraphError`, `GraphResult<T>`                         |
//!
//! # Pipeline
//!
//! ```text
//! ColonyBuilder ──build──▶ Colony ──enumerate──▶ Vec<Path> ──select──▶ routes
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Propagates serde derives to `colony-core` types.   |

pub mod colony;
pub mod enumerate;
pub mod error;
pub mod path;
pub mod select;


pub use colony::{Colony, ColonyBuilder};
pub use enumerate::{DfsEnumerator, PathEnumerator};
pub use error::{GraphError, GraphResult};
pub use path::Path;
pub use select::{DisjointSelector, PathSelector, plan_routes};
