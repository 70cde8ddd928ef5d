use std::collections::{BTreeSet, VecDeque};

use trove_core::{Bounds, Grid, Position};

use crate::traits::Pather;

/// Sentinel distance for cells a search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

// Parent slot of a cell not yet discovered.
const UNSEEN: usize = usize::MAX;

/// Breadth-first search over a grid rectangle.
///
/// `PathFinder` holds only the bounds it searches; every query allocates
/// its own frontier and parent table, so nothing carries over between
/// calls and results always reflect the pather's current layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinder {
    bounds: Bounds,
}

impl PathFinder {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Shortest path from `start` to the nearest member of `targets`.
    ///
    /// The path includes both endpoints; a `start` that is itself a target
    /// yields `[start]`. Returns `None` when `targets` is empty, `start` is
    /// outside the bounds, or no target is reachable.
    ///
    /// Among equally distant targets the one discovered first wins, which
    /// follows the neighbour order of `pather`.
    pub fn nearest_path<P: Pather>(
        &self,
        pather: &P,
        start: Position,
        targets: &BTreeSet<Position>,
    ) -> Option<Vec<Position>> {
        if targets.is_empty() {
            return None;
        }
        self.nearest_path_where(pather, start, |p| targets.contains(&p))
    }

    /// Like [`nearest_path`](Self::nearest_path) with targets given as a
    /// predicate.
    pub fn nearest_path_where<P: Pather>(
        &self,
        pather: &P,
        start: Position,
        is_target: impl Fn(Position) -> bool,
    ) -> Option<Vec<Position>> {
        let start_idx = self.bounds.index(start)?;

        let mut parent = vec![UNSEEN; self.bounds.len()];
        parent[start_idx] = start_idx;
        let mut queue: VecDeque<usize> = VecDeque::from([start_idx]);
        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let cp = self.bounds.position(ci);
            if is_target(cp) {
                return Some(self.trace(&parent, start_idx, ci));
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                if parent[ni] != UNSEEN {
                    continue;
                }
                parent[ni] = ci;
                queue.push_back(ni);
            }
        }

        log::trace!("no target reachable from {start}");
        None
    }

    /// Breadth-first distance from `start` to every cell, [`UNREACHABLE`]
    /// for cells not reached. A `start` outside the bounds reaches nothing.
    pub fn distances<P: Pather>(&self, pather: &P, start: Position) -> Grid<i32> {
        let mut dist = Grid::filled(self.bounds.rows, self.bounds.cols, UNREACHABLE);
        if !dist.set(start, 0) {
            return dist;
        }

        let mut queue: VecDeque<(Position, i32)> = VecDeque::from([(start, 0)]);
        let mut nbuf = Vec::with_capacity(4);

        while let Some((cp, d)) = queue.pop_front() {
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            for &np in nbuf.iter() {
                if let Some(slot) = dist.get_mut(np) {
                    if *slot == UNREACHABLE {
                        *slot = d + 1;
                        queue.push_back((np, d + 1));
                    }
                }
            }
        }
        dist
    }

    /// Walk parent links from `goal_idx` back to the start, then reverse.
    fn trace(&self, parent: &[usize], start_idx: usize, goal_idx: usize) -> Vec<Position> {
        let mut path = vec![self.bounds.position(goal_idx)];
        let mut i = goal_idx;
        while i != start_idx {
            i = parent[i];
            path.push(self.bounds.position(i));
        }
        path.reverse();
        path
    }
}
