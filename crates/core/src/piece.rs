//! Piece module - the active (or lookahead) piece
//!
//! A piece is a catalog shape placed at a grid offset with a rotation index. It
//! carries no validity logic of its own: callers mutate it and ask
//! [`crate::collision::is_valid`] whether the result may stand.

use arrayvec::ArrayVec;

use crate::catalog::{Catalog, Shape};
use crate::rng::SimpleRng;
use crate::types::{Position, Rgb, ShapeKind};

/// Occupied cells of one rotation state (every catalog shape has four)
pub type PieceCells = ArrayVec<Position, 4>;

/// A shape at a position and rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'c> {
    pub shape: &'c Shape,
    /// Column of the matrix origin
    pub x: i8,
    /// Row of the matrix origin; negative while entering from above
    pub y: i8,
    pub rotation: usize,
}

impl<'c> Piece<'c> {
    pub fn new(shape: &'c Shape, x: i8, y: i8) -> Self {
        Self {
            shape,
            x,
            y,
            rotation: 0,
        }
    }

    /// Place a uniformly chosen catalog shape at `(x, y)` in its spawn orientation
    pub fn spawn(catalog: &'c Catalog, rng: &mut SimpleRng, x: i8, y: i8) -> Self {
        let shape = &catalog.shapes()[rng.pick(catalog.len())];
        Self::new(shape, x, y)
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind
    }

    pub fn color(&self) -> Rgb {
        self.shape.color
    }

    /// Advance to the next rotation state.
    ///
    /// There is no inverse; undoing a rotation takes `rotation_count - 1` more
    /// calls (three always works for every catalog shape).
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    /// Cell offsets of the current rotation state, relative to the origin
    pub fn offsets(&self) -> PieceCells {
        let mut cells = PieceCells::new();
        for (dy, row) in self.shape.matrix(self.rotation).iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v == 1 {
                    cells.push((dx as i8, dy as i8));
                }
            }
        }
        cells
    }

    /// Absolute grid coordinates of every occupied cell, row-major.
    ///
    /// Cells whose coordinates do not fit in an `i8` are left out; see
    /// [`Piece::checked_cells`].
    pub fn active_cells(&self) -> PieceCells {
        self.offsets()
            .into_iter()
            .filter_map(|offset| self.cell_at(offset))
            .collect()
    }

    /// Like [`Piece::active_cells`], but `None` if any cell is unrepresentable
    pub fn checked_cells(&self) -> Option<PieceCells> {
        self.offsets()
            .into_iter()
            .map(|offset| self.cell_at(offset))
            .collect()
    }

    fn cell_at(&self, (dx, dy): Position) -> Option<Position> {
        Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}
