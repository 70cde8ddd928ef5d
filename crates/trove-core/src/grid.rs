//! The [`Grid`] type, an owned 2D array indexed by [`Position`], and the
//! [`Frame`] diff used to flush only changed glyphs.

use crate::geom::{Bounds, BoundsIter, Position};
use crate::glyph::Glyph;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size, row-major grid of `T`.
///
/// The dimensions are chosen at construction and never change. Reads and
/// writes outside the bounds are rejected rather than panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    bounds: Bounds,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: i32, cols: i32, value: T) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![value; bounds.len()],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid filled with `T::default()`.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Borrow the cell at `p`, or `None` outside the bounds.
    #[inline]
    pub fn get(&self, p: Position) -> Option<&T> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, p: Position) -> Option<&mut T> {
        self.bounds.index(p).map(|i| &mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and changes nothing) when `p`
    /// is outside the bounds.
    pub fn set(&mut self, p: Position, value: T) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Number of cells satisfying `f`.
    pub fn count(&self, mut f: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|c| f(c)).count()
    }

    /// Row-major iterator over `(Position, &T)` pairs.
    pub fn iter(&self) -> GridIter<'_, T> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Positions whose cell satisfies `f`, in row-major order.
    pub fn positions(&self, mut f: impl FnMut(&T) -> bool) -> impl Iterator<Item = Position> {
        self.iter().filter_map(move |(p, c)| f(c).then_some(p))
    }
}

impl<T: Copy> Grid<T> {
    /// Copy of the cell at `p`, or `None` outside the bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<T> {
        self.get(p).copied()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Position, &T)` pairs of a [`Grid`].
pub struct GridIter<'a, T> {
    grid: &'a Grid<T>,
    inner: BoundsIter,
}

impl<'a, T> Iterator for GridIter<'a, T> {
    type Item = (Position, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let idx = self.grid.bounds.index(p)?;
        Some((p, &self.grid.cells[idx]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (Position, &'a T);
    type IntoIter = GridIter<'a, T>;

    fn into_iter(self) -> GridIter<'a, T> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between two canvases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Position,
    pub glyph: Glyph,
}

/// The set of glyph changes between two draws.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub bounds: Bounds,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Diff two same-sized canvases, keeping only the glyphs that differ.
pub fn compute_frame(prev: &Grid<Glyph>, curr: &Grid<Glyph>) -> Frame {
    let cells = curr
        .iter()
        .filter(|&(p, g)| prev.get(p) != Some(g))
        .map(|(pos, &glyph)| FrameCell { pos, glyph })
        .collect();
    Frame {
        cells,
        bounds: curr.bounds(),
    }
}
