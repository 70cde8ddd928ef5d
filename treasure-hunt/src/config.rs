//! Game setup parameters.

use crate::error::{GameError, Result};

/// Default side length of the square grid.
pub const DEFAULT_SIZE: i32 = 10;
/// Default number of treasures to find.
pub const DEFAULT_TREASURES: usize = 3;

/// Parameters fixed at construction; nothing here changes during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square grid.
    pub size: i32,
    /// Number of treasures placed, and needed to win.
    pub treasures: usize,
    /// Seed for the placement RNG; `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            treasures: DEFAULT_TREASURES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Total number of cells.
    pub fn cells(&self) -> usize {
        let side = self.size.max(0) as usize;
        side * side
    }

    /// Obstacle placements attempted during generation. Placements may land
    /// on the same cell, so the final obstacle count can be lower.
    pub fn obstacle_count(&self) -> usize {
        self.cells() / 10
    }

    /// Reject parameters that could never produce a playable grid.
    pub fn validate(&self) -> Result<()> {
        if self.size < 1 {
            return Err(GameError::InvalidSize(self.size));
        }
        if self.treasures == 0 {
            return Err(GameError::NoTreasures);
        }
        // One cell stays free for the player.
        if self.treasures >= self.cells() {
            return Err(GameError::TooManyTreasures {
                requested: self.treasures,
                free: self.cells(),
            });
        }
        Ok(())
    }
}
