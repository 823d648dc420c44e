//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`]s and drains them
//! without blocking the game loop.

pub mod map;
pub mod poll;

pub use tui_blockfall_types as types;

pub use map::{map_event, map_key, should_quit};
pub use poll::{drain_events, EventBatch, MAX_EVENTS_PER_DRAIN};
