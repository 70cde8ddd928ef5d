//! Tile kinds and their display runes.

/// What occupies one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Obstacle,
    Treasure,
    Player,
    CollectedTreasure,
}

impl Tile {
    /// Everything but an obstacle can be walked on, treasures included.
    #[inline]
    pub fn passable(self) -> bool {
        self != Tile::Obstacle
    }

    /// Character used in text layouts and on screen.
    pub fn rune(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Obstacle => '#',
            Tile::Treasure => '$',
            Tile::Player => '@',
            Tile::CollectedTreasure => '+',
        }
    }

    /// Inverse of [`rune`](Tile::rune).
    pub fn from_rune(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Obstacle),
            '$' => Some(Tile::Treasure),
            '@' => Some(Tile::Player),
            '+' => Some(Tile::CollectedTreasure),
            _ => None,
        }
    }
}
