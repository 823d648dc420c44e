//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and nothing else. It has no
//! dependencies on terminals, input devices or files, so it runs the same in the
//! terminal binary, in tests and in benchmarks.
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven shapes, their pre-rotated matrices and colors
//! - [`piece`]: a shape placed on the grid, with rotation and cell expansion
//! - [`grid`]: the locked-cell map and the per-tick grid snapshot
//! - [`collision`]: placement validity against the grid
//! - [`clear`]: full-row removal and compaction of the locked cells
//! - [`game_state`]: the tick state machine, scoring and loss detection
//! - [`rng`]: seedable uniform shape selection
//! - [`snapshot`]: the read-only view handed to renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at column 5, row 0, chosen uniformly from the catalog
//! - Gravity moves the active piece one row every 270ms
//! - Left/right/down moves and rotations that do not fit are silently reverted
//! - A piece locks when gravity cannot move it and it is inside the grid
//! - Each cleared row scores 10 points; soft drops score nothing
//! - The game ends once any settled cell sits in the top row
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Catalog, GameConfig, GameState};
//! use tui_blockfall_types::{Key, FALL_INTERVAL_MS};
//!
//! let catalog = Catalog::standard();
//! let mut game = GameState::new(&catalog, GameConfig::default(), 12345);
//!
//! assert_eq!(game.active().x, 5);
//! game.tick(0, &[Key::Left]);
//! assert_eq!(game.active().x, 4);
//!
//! game.tick(FALL_INTERVAL_MS, &[]);
//! assert_eq!(game.active().y, 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod catalog;
pub mod clear;
pub mod collision;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, Matrix, Shape};
pub use clear::{clear_rows, full_rows};
pub use collision::is_valid;
pub use game_state::{is_lost, GameConfig, GameState, LockEvent, Phase, TickOutcome};
pub use grid::{Grid, LockedCells};
pub use piece::{Piece, PieceCells};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, NextSnapshot};
