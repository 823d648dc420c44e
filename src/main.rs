//! Terminal runner (default binary).
//!
//! Raw-mode crossterm input, framebuffer rendering, one session per run.

use std::time::{Duration, Instant};

use anyhow::Result;

use tui_blockfall::core::{Catalog, GameSnapshot};
use tui_blockfall::input::drain_events;
use tui_blockfall::session::{self, Host, SessionConfig, SessionEnd, SessionLog};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::InputEvent;

/// How long the final frame stays up after game over, unless a key is pressed.
const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

struct TerminalHost {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    frame: Duration,
    last_tick: Instant,
    last_poll: Instant,
}

impl TerminalHost {
    fn new(frame_ms: u32) -> Self {
        let now = Instant::now();
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            frame: Duration::from_millis(u64::from(frame_ms)),
            last_tick: now,
            last_poll: now,
        }
    }
}

impl Host for TerminalHost {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let wait = self.frame.saturating_sub(self.last_poll.elapsed());
        let batch = drain_events(wait)?;

        // Keep a steady frame rate even when input arrives early.
        let rest = self.frame.saturating_sub(self.last_poll.elapsed());
        if !rest.is_zero() && !batch.iter().any(InputEvent::is_quit) {
            std::thread::sleep(rest);
        }
        self.last_poll = Instant::now();
        Ok(batch.into_iter().collect())
    }

    fn tick_clock(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_millis();
        self.last_tick = now;
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }

    fn quit(&mut self, last: &GameSnapshot) -> Result<()> {
        if last.game_over {
            let deadline = Instant::now() + GAME_OVER_HOLD;
            while let Some(wait) = deadline.checked_duration_since(Instant::now()) {
                if wait.is_zero() || !drain_events(wait)?.is_empty() {
                    break;
                }
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let config = SessionConfig::from_env();

    let (mut log, log_err) = match config.log_path.as_deref() {
        Some(path) => match SessionLog::open(path) {
            Ok(log) => (log, None),
            Err(e) => (SessionLog::disabled(), Some(e)),
        },
        None => (SessionLog::disabled(), None),
    };

    let catalog = Catalog::standard();
    let mut host = TerminalHost::new(config.frame_ms);

    let result = host
        .term
        .enter()
        .and_then(|()| session::run(&mut host, &catalog, &config, &mut log));

    // Always try to restore terminal state.
    let _ = host.term.exit();

    if let Some(e) = log_err {
        eprintln!("[Game] session log disabled: {e:#}");
    }

    let summary = result?;
    let how = match summary.end {
        SessionEnd::Quit => "quit",
        SessionEnd::GameOver => "game over",
    };
    eprintln!(
        "[Game] {how}: score {} ({} rows, {} pieces)",
        summary.score, summary.rows_cleared, summary.pieces_locked
    );
    Ok(())
}
