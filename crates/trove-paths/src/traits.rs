use trove_core::Position;

/// Minimal pathfinding interface: neighbour enumeration.
///
/// Implementors decide passability. The order in which neighbours are
/// appended is the order a breadth-first search expands them, so it fixes
/// which of several equally distant goals is found first.
pub trait Pather {
    /// Append the passable neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}
