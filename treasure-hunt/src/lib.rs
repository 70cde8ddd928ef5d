//! Treasure hunt on a square grid.
//!
//! [`GridState`] owns the board and the treasure bookkeeping, boards come
//! from [`GridState::generate`] or [`GridState::from_layout`], and
//! [`nearest_treasure_path`] computes the hint shown by [`HuntModel`].

pub mod config;
pub mod error;
pub mod hint;
pub mod layout;
pub mod model;
pub mod placement;
pub mod state;
pub mod tile;

pub use config::{DEFAULT_SIZE, DEFAULT_TREASURES, GameConfig};
pub use error::{GameError, Result};
pub use hint::{BoardPather, nearest_treasure_path};
pub use model::HuntModel;
pub use placement::{MAX_PLACEMENT_ATTEMPTS, seeded_rng};
pub use state::{GameStatus, GridState};
pub use tile::Tile;
