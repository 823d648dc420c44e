//! Grid module - settled cells and the per-tick grid snapshot
//!
//! Two structures live here:
//!
//! - [`LockedCells`]: the authoritative sparse record of settled cells, keyed by
//!   `(column, row)`. It only changes when a piece locks or rows are cleared.
//! - [`Grid`]: a dense 10x20 snapshot rebuilt from the locked cells every tick, with
//!   the active piece composited on top for rendering. It is never the source of
//!   truth for settled state.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to
//! bottom).

use std::collections::BTreeMap;

use crate::piece::Piece;
use crate::types::{Cell, Position, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Settled cells and their colors.
///
/// Each coordinate appears at most once. Rows above the grid (negative) are
/// accepted so that a piece locking while partially off-grid is recorded in full;
/// such entries end the game on the next loss check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: BTreeMap<Position, Rgb>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settled cell, replacing any color already there
    pub fn insert(&mut self, pos: Position, color: Rgb) {
        self.cells.insert(pos, color);
    }

    pub fn get(&self, pos: Position) -> Option<Rgb> {
        self.cells.get(&pos).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Remove a cell and return its color; `None` when nothing was there
    pub fn remove(&mut self, pos: Position) -> Option<Rgb> {
        self.cells.remove(&pos)
    }

    /// Remove a cell if present. Absent cells are a no-op.
    pub fn remove_if_present(&mut self, pos: Position) {
        if self.cells.contains_key(&pos) {
            self.cells.remove(&pos);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Rgb)> + '_ {
        self.cells.iter().map(|(&pos, &color)| (pos, color))
    }
}

impl FromIterator<(Position, Rgb)> for LockedCells {
    fn from_iter<T: IntoIterator<Item = (Position, Rgb)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The renderable grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Build the grid from settled cells; entries outside the grid are skipped
    pub fn from_locked(locked: &LockedCells) -> Self {
        let mut grid = Self::new();
        for ((x, y), color) in locked.iter() {
            grid.set(x, y, Some(color));
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is on the grid and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True if (x, y) is on the grid and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        self.row(y as usize).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y` (must be in range)
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * GRID_WIDTH as usize;
        &self.cells[start..start + GRID_WIDTH as usize]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_WIDTH as usize)
    }

    /// Paint a piece's on-grid cells in its color
    pub fn overlay(&mut self, piece: &Piece<'_>) {
        let color = piece.color();
        for (x, y) in piece.active_cells() {
            if y >= 0 {
                self.set(x, y, Some(color));
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
