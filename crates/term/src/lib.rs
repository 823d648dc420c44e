//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a
//! framebuffer of styled characters ([`GameView`]), which a
//! [`TerminalRenderer`] flushes to the terminal.
//!
//! - `core` stays free of I/O; this crate only reads [`core::GameSnapshot`]s
//! - drawing and flushing are separate, so the view is testable without a tty

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
