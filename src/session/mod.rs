//! Drive loop: input, tick, draw, until the player quits or the game ends.
//!
//! The loop talks to the outside world through [`Host`], so the terminal binary
//! and the tests run the same code.

mod config;
mod log;

pub use config::SessionConfig;
pub use log::{LogRecord, SessionLog};

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::core::{Catalog, GameConfig, GameSnapshot, GameState};
use crate::types::{InputEvent, Key};

/// Keys accepted per frame; anything beyond is dropped.
const MAX_KEYS_PER_FRAME: usize = 32;

/// Platform side of a session.
pub trait Host {
    /// Input received since the previous call, in arrival order.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;

    /// Milliseconds since the previous call.
    fn tick_clock(&mut self) -> u32;

    fn draw(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// Called once when the loop ends, whatever the reason.
    fn quit(&mut self, last: &GameSnapshot) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u32,
    pub rows_cleared: u32,
    pub pieces_locked: u32,
    pub ticks: u64,
}

/// Play one game to the end.
pub fn run<H: Host>(
    host: &mut H,
    catalog: &Catalog,
    config: &SessionConfig,
    log: &mut SessionLog,
) -> Result<SessionSummary> {
    let mut game = GameState::new(catalog, GameConfig::default(), config.seed);
    let mut snap = GameSnapshot::default();
    log.record(&LogRecord::SessionStart { seed: config.seed });

    let result = drive(host, &mut game, &mut snap, log);

    log.flush();
    let quit = host.quit(&snap);
    let summary = result?;
    quit?;
    Ok(summary)
}

fn drive<H: Host>(
    host: &mut H,
    game: &mut GameState<'_>,
    snap: &mut GameSnapshot,
    log: &mut SessionLog,
) -> Result<SessionSummary> {
    let mut ticks: u64 = 0;
    let mut keys: ArrayVec<Key, MAX_KEYS_PER_FRAME> = ArrayVec::new();

    game.snapshot_into(snap);
    host.draw(snap)?;

    let end = loop {
        let events = host.poll_events()?;
        if events.iter().any(InputEvent::is_quit) {
            log.record(&LogRecord::Quit {
                score: game.score(),
            });
            break SessionEnd::Quit;
        }

        keys.clear();
        for key in events.iter().filter_map(InputEvent::key) {
            if keys.try_push(key).is_err() {
                break;
            }
        }

        let elapsed = host.tick_clock();
        let outcome = game.tick(elapsed, &keys);
        ticks += 1;

        if let Some(lock) = &outcome.lock {
            log.record(&LogRecord::from(lock));
        }

        game.snapshot_into(snap);
        host.draw(snap)?;

        if outcome.game_over {
            log.record(&LogRecord::GameOver {
                score: game.score(),
                rows_cleared: game.rows_cleared(),
                pieces: game.pieces_locked(),
            });
            break SessionEnd::GameOver;
        }
    };

    Ok(SessionSummary {
        end,
        score: game.score(),
        rows_cleared: game.rows_cleared(),
        pieces_locked: game.pieces_locked(),
        ticks,
    })
}
