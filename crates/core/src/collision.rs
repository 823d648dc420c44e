//! Spatial validation of piece placements.

use crate::grid::Grid;
use crate::piece::Piece;

/// True if the piece may occupy its current position on `grid`.
///
/// A cell is acceptable when it is an empty on-grid cell, or when its row is
/// above the grid (negative): pieces enter from the top, so off-grid rows are
/// not checked until they come into view. Anything else (side walls, floor,
/// occupied cells, coordinates outside `i8`) rejects the whole placement.
pub fn is_valid(piece: &Piece<'_>, grid: &Grid) -> bool {
    piece.checked_cells().is_some_and(|cells| {
        cells
            .iter()
            .all(|&(x, y)| y < 0 || grid.is_empty_at(x, y))
    })
}
