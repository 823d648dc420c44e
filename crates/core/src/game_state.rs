//! Game state module - the per-tick state machine
//!
//! Ties together the catalog, pieces, grid, validator and row clearer. One
//! [`GameState`] owns everything a session needs: the locked-cell map, the active
//! and lookahead pieces, the fall timer and the score.
//!
//! Each call to [`GameState::tick`] runs one frame:
//!
//! 1. rebuild the grid snapshot from the locked cells
//! 2. apply the queued keys, reverting any move the validator rejects
//! 3. advance the fall timer; on expiry move down one row, locking if that fails
//!    once the piece is inside the grid
//! 4. composite the active piece onto the snapshot
//! 5. on lock: commit the piece, promote the lookahead, spawn a new lookahead,
//!    clear rows and score them
//! 6. check for loss

use crate::catalog::Catalog;
use crate::clear::clear_rows;
use crate::collision::is_valid;
use crate::grid::{Grid, LockedCells};
use crate::piece::{Piece, PieceCells};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, NextSnapshot};
use crate::types::*;

/// Fixed game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub fall_interval_ms: u32,
    pub spawn: Position,
    pub score_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            spawn: (SPAWN_COLUMN, SPAWN_ROW),
            score_per_row: SCORE_PER_ROW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// Emitted when the active piece locks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    /// Where the piece settled (before any row shift)
    pub cells: PieceCells,
    pub rows_cleared: u32,
    /// Score after this lock was scored
    pub score: u32,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub lock: Option<LockEvent>,
    pub game_over: bool,
}

/// True if any settled cell reached the top row (or above it)
pub fn is_lost(locked: &LockedCells) -> bool {
    locked.positions().any(|(_, y)| y < 1)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<'c> {
    catalog: &'c Catalog,
    config: GameConfig,
    rng: SimpleRng,
    locked: LockedCells,
    grid: Grid,
    active: Piece<'c>,
    next: Piece<'c>,
    fall_timer_ms: u32,
    score: u32,
    rows_cleared: u32,
    pieces_locked: u32,
    phase: Phase,
}

impl<'c> GameState<'c> {
    /// Start a game: spawn the active piece, then the lookahead
    pub fn new(catalog: &'c Catalog, config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let (x, y) = config.spawn;
        let active = Piece::spawn(catalog, &mut rng, x, y);
        let next = Piece::spawn(catalog, &mut rng, x, y);
        let locked = LockedCells::new();
        let mut grid = Grid::from_locked(&locked);
        grid.overlay(&active);

        Self {
            catalog,
            config,
            rng,
            locked,
            grid,
            active,
            next,
            fall_timer_ms: 0,
            score: 0,
            rows_cleared: 0,
            pieces_locked: 0,
            phase: Phase::Falling,
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn active(&self) -> &Piece<'c> {
        &self.active
    }

    pub fn next(&self) -> &Piece<'c> {
        &self.next
    }

    /// Grid snapshot from the last tick (active piece included)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn locked(&self) -> &LockedCells {
        &self.locked
    }

    /// Direct access to the settled cells, for scripted setups.
    ///
    /// Changes show up in the grid on the next tick.
    pub fn locked_mut(&mut self) -> &mut LockedCells {
        &mut self.locked
    }

    /// Replace the active piece, for scripted setups
    pub fn set_active(&mut self, piece: Piece<'c>) {
        self.active = piece;
    }

    /// Run one frame.
    ///
    /// `elapsed_ms` is the time since the previous tick; `keys` are the key presses
    /// drained since then, applied in order. Ticks after game over do nothing.
    pub fn tick(&mut self, elapsed_ms: u32, keys: &[Key]) -> TickOutcome {
        if self.game_over() {
            return TickOutcome {
                lock: None,
                game_over: true,
            };
        }

        self.grid = Grid::from_locked(&self.locked);

        for &key in keys {
            self.apply_key(key);
        }

        let mut locking = false;
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= self.config.fall_interval_ms {
            self.fall_timer_ms = 0;
            locking = self.fall();
        }

        self.grid.overlay(&self.active);

        let lock = if locking {
            Some(self.lock_active())
        } else {
            None
        };

        if is_lost(&self.locked) {
            self.phase = Phase::GameOver;
        }

        TickOutcome {
            lock,
            game_over: self.game_over(),
        }
    }

    /// Apply one key against the current grid snapshot.
    ///
    /// Returns false when the move was rejected (and reverted).
    pub fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Left => self.try_shift(-1, 0),
            Key::Right => self.try_shift(1, 0),
            // Soft drop moves one row and scores nothing.
            Key::Down => self.try_shift(0, 1),
            Key::Up => self.try_rotate(),
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.active.x.checked_add(dx), self.active.y.checked_add(dy))
        else {
            return false;
        };
        let moved = Piece { x, y, ..self.active };
        if !is_valid(&moved, &self.grid) {
            return false;
        }
        self.active = moved;
        true
    }

    fn try_rotate(&mut self) -> bool {
        self.active.rotate();
        if is_valid(&self.active, &self.grid) {
            return true;
        }
        for _ in 0..3 {
            self.active.rotate();
        }
        false
    }

    /// Gravity step. Returns true when the piece has to lock.
    ///
    /// A rejected fall only locks once the piece is inside the grid (row > 0).
    /// At row <= 0 the piece keeps the rejected position and gravity tries again
    /// on the next interval.
    fn fall(&mut self) -> bool {
        let Some(y) = self.active.y.checked_add(1) else {
            return true;
        };
        self.active.y = y;
        if !is_valid(&self.active, &self.grid) && self.active.y > 0 {
            self.active.y -= 1;
            return true;
        }
        false
    }

    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        let cells = piece.active_cells();
        for &pos in &cells {
            self.locked.insert(pos, piece.color());
        }
        self.pieces_locked += 1;

        let (x, y) = self.config.spawn;
        self.active = self.next;
        self.next = Piece::spawn(self.catalog, &mut self.rng, x, y);

        let rows = clear_rows(&self.grid, &mut self.locked);
        self.rows_cleared += rows;
        self.score += rows * self.config.score_per_row;

        LockEvent {
            kind: piece.kind(),
            cells,
            rows_cleared: rows,
            score: self.score,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.next = NextSnapshot::from(&self.next);
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
