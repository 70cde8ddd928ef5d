//! Text layouts: build a [`GridState`] from a picture of the board.
//!
//! ```text
//! @..#
//! .#..
//! ..$.
//! $...
//! ```
//!
//! `.` empty, `#` obstacle, `$` treasure, `@` player. Blank lines and
//! leading/trailing whitespace on each line are ignored, so layouts can be
//! indented inside string literals.

use trove_core::{Grid, Position};

use crate::error::{GameError, Result};
use crate::state::GridState;
use crate::tile::Tile;

impl GridState {
    /// Parse a square layout. Every `$` is a treasure to find.
    pub fn from_layout(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(GameError::InvalidSize(0));
        }
        let cols = rows[0].len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GameError::RaggedLayout {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        if cols != size {
            return Err(GameError::NotSquare { rows: size, cols });
        }

        let side = i32::try_from(size).map_err(|_| GameError::InvalidSize(i32::MAX))?;
        let mut grid: Grid<Tile> = Grid::new(side, side);
        let mut players = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                let tile = match Tile::from_rune(ch) {
                    Some(Tile::CollectedTreasure) | None => {
                        return Err(GameError::UnknownGlyph { ch, row: r, col: c });
                    }
                    Some(tile) => tile,
                };
                let p = Position::new(r as i32, c as i32);
                if tile == Tile::Player {
                    players.push(p);
                }
                grid.set(p, tile);
            }
        }

        let player = match players.as_slice() {
            [p] => *p,
            _ => return Err(GameError::PlayerCount(players.len())),
        };
        if grid.count(|&t| t == Tile::Treasure) == 0 {
            return Err(GameError::NoTreasures);
        }

        log::debug!("loaded {side}x{side} layout, player at {player}");
        Ok(GridState::from_grid(grid, player))
    }
}
