//! Falling-block puzzle game for the terminal (workspace facade crate).
//!
//! The game rules live in `tui_blockfall_core`, terminal input and drawing in
//! `tui_blockfall_input` and `tui_blockfall_term`. This crate re-exports them under
//! `tui_blockfall::{core,input,term,types}` and adds the session loop that ties
//! them together.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod session;
