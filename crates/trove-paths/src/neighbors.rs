use trove_core::Position;

/// Append the cardinal neighbours of `p` accepted by `keep` into `buf`,
/// in [`Position::neighbors_4`] order (up, down, left, right).
///
/// Meant for [`Pather`](crate::Pather) implementations, which receive the
/// buffer from the search.
pub fn push_cardinal(p: Position, keep: impl Fn(Position) -> bool, buf: &mut Vec<Position>) {
    buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
}
