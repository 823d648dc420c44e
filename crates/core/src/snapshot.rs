use crate::grid::Grid;
use crate::piece::{Piece, PieceCells};
use crate::types::{Rgb, ShapeKind};

/// The lookahead piece as shown in a preview slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSnapshot {
    pub kind: ShapeKind,
    pub color: Rgb,
    /// Offsets relative to the matrix origin, spawn orientation
    pub cells: PieceCells,
}

impl From<&Piece<'_>> for NextSnapshot {
    fn from(value: &Piece<'_>) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            cells: value.offsets(),
        }
    }
}

impl Default for NextSnapshot {
    fn default() -> Self {
        Self {
            kind: ShapeKind::I,
            color: Rgb::default(),
            cells: PieceCells::new(),
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub rows_cleared: u32,
    pub next: NextSnapshot,
    pub game_over: bool,
}
