//! Non-blocking event draining.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Upper bound on events returned per drain; extra events stay queued for the
/// next frame.
pub const MAX_EVENTS_PER_DRAIN: usize = 32;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_DRAIN>;

/// Wait up to `wait` for the first event, then take everything already queued.
///
/// With `wait == Duration::ZERO` this never blocks. Unmapped events are dropped.
pub fn drain_events(wait: Duration) -> Result<EventBatch> {
    let mut batch = EventBatch::new();
    if !event::poll(wait)? {
        return Ok(batch);
    }

    while !batch.is_full() && event::poll(Duration::ZERO)? {
        if let Some(ev) = map_event(&event::read()?) {
            batch.push(ev);
        }
    }
    Ok(batch)
}
