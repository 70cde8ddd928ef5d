//! The grid state machine: tiles, player position and treasure progress.

use std::collections::BTreeSet;
use std::fmt;

use trove_core::{Bounds, Direction, Grid, Position};

use crate::tile::Tile;

/// Progress of a game. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Playing,
    Won,
}

/// Owns the square grid and the treasure bookkeeping.
///
/// Exactly one cell holds [`Tile::Player`] at any time. The grid size never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    grid: Grid<Tile>,
    player: Position,
    /// Cells still holding an uncollected treasure.
    treasures: BTreeSet<Position>,
    /// Collected cells that clear their marker when stepped on again.
    collected: BTreeSet<Position>,
    treasures_found: usize,
    total_treasures: usize,
}

impl GridState {
    /// Assemble a state from a grid whose treasures and player are already
    /// marked. Every `Treasure` tile counts toward the total.
    pub(crate) fn from_grid(grid: Grid<Tile>, player: Position) -> Self {
        debug_assert_eq!(grid.at(player), Some(Tile::Player));
        let treasures: BTreeSet<Position> = grid.positions(|&t| t == Tile::Treasure).collect();
        let total_treasures = treasures.len();
        Self {
            grid,
            player,
            treasures,
            collected: BTreeSet::new(),
            treasures_found: 0,
            total_treasures,
        }
    }

    /// Move the player one step. Returns `true` exactly when this move
    /// collected the last treasure.
    ///
    /// Steps out of bounds or into an obstacle are ignored. Stepping onto a
    /// previously collected cell clears its marker instead of collecting it
    /// again; the found counter never goes down. The winning step leaves the
    /// player where it stood, with the last treasure marked collected.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        let target = self.player.step(dir);
        let tile = match self.grid.at(target) {
            None | Some(Tile::Obstacle) => {
                log::trace!("move {dir} from {} blocked", self.player);
                return false;
            }
            Some(tile) => tile,
        };

        if self.collected.remove(&target) {
            self.grid.set(target, Tile::Empty);
            log::debug!("cleared collected marker at {target}");
        } else if tile == Tile::Treasure {
            self.treasures.remove(&target);
            self.collected.insert(target);
            self.treasures_found += 1;
            self.grid.set(target, Tile::CollectedTreasure);
            log::info!(
                "treasure found at {target} ({}/{})",
                self.treasures_found,
                self.total_treasures
            );
            if self.treasures_found == self.total_treasures {
                log::info!("all {} treasures collected", self.total_treasures);
                return true;
            }
        }

        self.grid.set(self.player, Tile::Empty);
        self.grid.set(target, Tile::Player);
        self.player = target;
        log::trace!("player moved {dir} to {target}");
        false
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.grid.rows()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    #[inline]
    pub fn player(&self) -> Position {
        self.player
    }

    /// Tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn tile_at(&self, p: Position) -> Option<Tile> {
        self.grid.at(p)
    }

    #[inline]
    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    /// Positions of the treasures not yet collected.
    #[inline]
    pub fn treasures(&self) -> &BTreeSet<Position> {
        &self.treasures
    }

    /// Collected positions that still carry a marker.
    #[inline]
    pub fn collected(&self) -> &BTreeSet<Position> {
        &self.collected
    }

    #[inline]
    pub fn treasures_found(&self) -> usize {
        self.treasures_found
    }

    #[inline]
    pub fn total_treasures(&self) -> usize {
        self.total_treasures
    }

    pub fn status(&self) -> GameStatus {
        if self.treasures_found >= self.total_treasures {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

impl fmt::Display for GridState {
    /// One line of tile runes per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let tile = self.grid.at(Position::new(row, col)).unwrap_or_default();
                write!(f, "{}", tile.rune())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn state(pic: &str) -> GridState {
        GridState::from_layout(pic).unwrap()
    }

    fn obstacles(s: &GridState) -> usize {
        s.grid().count(|&t| t == Tile::Obstacle)
    }

    fn players(s: &GridState) -> usize {
        s.grid().count(|&t| t == Tile::Player)
    }

    #[test]
    fn plain_move_relocates_player() {
        let mut s = state(
            "
            @..
            ...
            ..$",
        );
        assert!(!s.move_player(Right));
        assert_eq!(s.player(), Position::new(0, 1));
        assert_eq!(s.tile_at(Position::new(0, 0)), Some(Tile::Empty));
        assert_eq!(s.tile_at(Position::new(0, 1)), Some(Tile::Player));
        assert_eq!(players(&s), 1);
    }

    #[test]
    fn out_of_bounds_moves_are_ignored() {
        let mut s = state(
            "
            @.
            .$",
        );
        let before = s.clone();
        assert!(!s.move_player(Up));
        assert!(!s.move_player(Left));
        assert_eq!(s, before);
    }

    #[test]
    fn obstacle_moves_are_ignored() {
        let mut s = state(
            "
            @#.
            #..
            ..$",
        );
        let before = s.clone();
        assert!(!s.move_player(Right));
        assert!(!s.move_player(Down));
        assert_eq!(s, before);
        assert_eq!(obstacles(&s), 2);
    }

    #[test]
    fn boxed_in_player_cannot_move() {
        let mut s = state(
            "
            $#..
            #@#.
            .#..
            ....",
        );
        let before = s.clone();
        for d in Direction::ALL {
            assert!(!s.move_player(d));
        }
        assert_eq!(s, before);
    }

    #[test]
    fn collecting_counts_and_marks() {
        let mut s = state(
            "
            @$.
            ...
            ..$",
        );
        assert!(!s.move_player(Right));
        assert_eq!(s.treasures_found(), 1);
        assert_eq!(s.player(), Position::new(0, 1));
        assert!(s.collected().contains(&Position::new(0, 1)));
        assert!(!s.treasures().contains(&Position::new(0, 1)));
        assert_eq!(s.treasures().len(), 1);
        assert_eq!(s.status(), GameStatus::Playing);
    }

    #[test]
    fn reentering_collected_cell_clears_marker_but_keeps_count() {
        let mut s = state(
            "
            @$.
            ...
            ..$",
        );
        let spot = Position::new(0, 1);
        s.move_player(Right);
        s.move_player(Right);
        assert!(s.collected().contains(&spot));
        assert_eq!(s.tile_at(spot), Some(Tile::Empty));

        assert!(!s.move_player(Left));
        assert_eq!(s.player(), spot);
        assert!(s.collected().is_empty());
        assert_eq!(s.treasures_found(), 1);

        // Third visit is an ordinary empty cell.
        s.move_player(Left);
        s.move_player(Right);
        assert_eq!(s.treasures_found(), 1);
        assert!(s.collected().is_empty());
    }

    #[test]
    fn last_treasure_wins_exactly_once() {
        let mut s = state(
            "
            @$$
            ...
            ...",
        );
        assert!(!s.move_player(Right));
        assert!(s.move_player(Right));
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.treasures_found(), 2);
        // The winning step does not move the player.
        assert_eq!(s.player(), Position::new(0, 1));
        assert_eq!(s.tile_at(Position::new(0, 2)), Some(Tile::CollectedTreasure));
        assert!(s.treasures().is_empty());

        // Nothing afterwards reports a second win.
        for d in [Right, Left, Right, Down, Up, Right] {
            assert!(!s.move_player(d));
        }
        assert_eq!(s.treasures_found(), 2);
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn player_stays_inside_and_off_obstacles() {
        let mut s = state(
            "
            .#..$
            ..#..
            #@...
            ...#.
            $....",
        );
        let walk = [
            Up, Up, Up, Left, Left, Left, Down, Down, Down, Down, Right, Right, Right, Right,
            Right, Up, Up, Up, Up, Up, Left, Down, Right, Up,
        ];
        for d in walk {
            s.move_player(d);
            assert!(s.bounds().contains(s.player()));
            assert_eq!(s.tile_at(s.player()), Some(Tile::Player));
            assert_eq!(players(&s), 1);
            assert_eq!(obstacles(&s), 4);
        }
    }

    #[test]
    fn display_prints_runes() {
        let s = state(
            "
            @#
            .$",
        );
        assert_eq!(s.to_string(), "@#\n.$\n");
    }
}
