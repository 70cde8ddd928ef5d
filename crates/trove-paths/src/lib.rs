//! Breadth-first pathfinding for grid games.
//!
//! - **Nearest-target paths** ([`PathFinder::nearest_path`]): shortest
//!   4-connected path from a start cell to the closest of many goals.
//! - **Distance maps** ([`PathFinder::distances`]): unweighted step counts
//!   from a start cell to everything it can reach.
//!
//! Passability comes from a [`Pather`] implementation; [`push_cardinal`]
//! enumerates candidates in the fixed up, down, left, right order that
//! makes tie-breaks between equidistant goals deterministic.

mod bfs;
mod neighbors;
mod traits;

pub use bfs::{PathFinder, UNREACHABLE};
pub use neighbors::push_cardinal;
pub use traits::Pather;
