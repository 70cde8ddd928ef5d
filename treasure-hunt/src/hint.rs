//! The pathfinding hint: shortest route to the nearest uncollected
//! treasure.

use trove_core::{Grid, Position};
use trove_paths::{PathFinder, Pather, push_cardinal};

use crate::state::GridState;
use crate::tile::Tile;

/// Walks a tile grid: every in-bounds, non-obstacle cell is passable.
pub struct BoardPather<'a> {
    grid: &'a Grid<Tile>,
}

impl<'a> BoardPather<'a> {
    pub fn new(grid: &'a Grid<Tile>) -> Self {
        Self { grid }
    }
}

impl Pather for BoardPather<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        push_cardinal(p, |n| self.grid.at(n).is_some_and(Tile::passable), buf);
    }
}

/// Path from the player to the closest uncollected treasure, both ends
/// included, or `None` when every treasure is walled off or none are left.
///
/// Equally close treasures are resolved by expanding neighbours up, down,
/// left, right, so the answer is stable for an unchanged board.
pub fn nearest_treasure_path(state: &GridState) -> Option<Vec<Position>> {
    let pather = BoardPather::new(state.grid());
    PathFinder::new(state.bounds()).nearest_path(&pather, state.player(), state.treasures())
}
