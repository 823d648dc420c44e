//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the game core, the terminal renderer and the input layer.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: column 5, row 0
//!
//! Rows grow downwards. A piece may briefly sit with part of its shape above the
//! grid (negative rows) while it enters the playfield.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 270 | Time between automatic one-row drops |
//! | `SCORE_PER_ROW` | 10 | Points awarded for each cleared row |
//! | `FRAME_MS` | 16 | Host frame pacing (~60 FPS) |
//! | `CELL_COLS` x `CELL_ROWS` | 2 x 1 | Terminal characters per grid cell |
//!
//! None of these are runtime-configurable.
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Key, InputEvent, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//!
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! assert_eq!(ShapeKind::T.as_str(), "t");
//!
//! let event = InputEvent::KeyDown(Key::Left);
//! assert_eq!(event.key(), Some(Key::Left));
//! assert_eq!(InputEvent::Quit.key(), None);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Interval between automatic one-row drops of the active piece
pub const FALL_INTERVAL_MS: u32 = 270;

/// Spawn column of the shape matrix origin
pub const SPAWN_COLUMN: i8 = 5;

/// Spawn row of the shape matrix origin
pub const SPAWN_ROW: i8 = 0;

/// Points per cleared row (awarded per clear event as `rows * SCORE_PER_ROW`)
pub const SCORE_PER_ROW: u32 = 10;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Terminal columns used to draw one grid cell.
///
/// Two columns per cell keeps cells roughly square with typical glyph aspect ratios.
pub const CELL_COLS: u16 = 2;

/// Terminal rows used to draw one grid cell
pub const CELL_ROWS: u16 = 1;

/// Color of the frame drawn around the grid
pub const BORDER_COLOR: Rgb = Rgb::new(255, 255, 255);

/// Color of empty grid cells
pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 0, 0);


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece variants, in catalog order.
///
/// - **I**: 4-long bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**, **Z**: skew pieces
/// - **J**, **L**: hook pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Position of this kind in the catalog
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_str(), "i");
    /// assert_eq!(ShapeKind::L.as_str(), "l");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move one column left
    Left,
    /// Move one column right
    Right,
    /// Soft drop: move one row down (no score)
    Down,
    /// Rotate to the next rotation state
    Up,
}

/// Events delivered by the host on each poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    pub fn key(&self) -> Option<Key> {
        match self {
            InputEvent::KeyDown(key) => Some(*key),
            InputEvent::Quit => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}

/// Grid coordinate `(column, row)`.
///
/// Rows may be negative for cells above the visible grid.
pub type Position = (i8, i8);

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(Rgb)`: occupied, drawn in the given color
pub type Cell = Option<Rgb>;
