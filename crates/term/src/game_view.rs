//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the grid sits inside a one-character white frame, centered in the
//! viewport. Every grid cell is a solid block of `cell_cols` x `cell_rows`
//! characters in the cell's color (black when empty). A side panel to the right
//! shows the score, the rows cleared and the lookahead piece.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BACKGROUND_COLOR, BORDER_COLOR, CELL_COLS, CELL_ROWS, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Minimum panel width worth drawing
const PANEL_MIN_W: u16 = 10;

pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_cols: u16,
    /// Grid cell height in terminal rows.
    cell_rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(CELL_COLS, CELL_ROWS)
    }
}

impl GameView {
    pub fn new(cell_cols: u16, cell_rows: u16) -> Self {
        Self {
            cell_cols: cell_cols.max(1),
            cell_rows: cell_rows.max(1),
        }
    }

    /// Frame size including the border
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_cols + 2,
            GRID_HEIGHT as u16 * self.cell_rows + 2,
        )
    }

    /// Top-left corner of the frame within the viewport
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Terminal position of the top-left character of grid cell `(x, y)`
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let (fx, fy) = self.frame_origin(viewport);
        (
            fx + 1 + x * self.cell_cols,
            fy + 1 + y * self.cell_rows,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (fx, fy) = self.frame_origin(viewport);
        let (frame_w, frame_h) = self.frame_size();

        self.draw_border(fb, fx, fy, frame_w, frame_h);

        for (y, row) in snap.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let color = cell.unwrap_or(BACKGROUND_COLOR);
                let (px, py) = self.cell_origin(viewport, x as u16, y as u16);
                self.fill_block(fb, px, py, color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, fx + frame_w + 2, fy);

        if snap.game_over {
            let text = "GAME OVER";
            let text_w = text.len() as u16;
            let x = fx + frame_w.saturating_sub(text_w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND_COLOR).bold();
            fb.put_str(x, fy + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_block(&self, fb: &mut FrameBuffer, px: u16, py: u16, color: Rgb) {
        let block = Cell::new(' ', CellStyle::solid(color));
        fb.fill_rect(px, py, self.cell_cols, self.cell_rows, block);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(BORDER_COLOR, BACKGROUND_COLOR).bold();
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.set(x, y, Cell::new('┌', style));
        fb.set(right, y, Cell::new('┐', style));
        fb.set(x, bottom, Cell::new('└', style));
        fb.set(right, bottom, Cell::new('┘', style));
        for cx in x + 1..right {
            fb.set(cx, y, Cell::new('─', style));
            fb.set(cx, bottom, Cell::new('─', style));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, Cell::new('│', style));
            fb.set(right, cy, Cell::new('│', style));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if viewport.width.saturating_sub(panel_x) < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(panel_x, top, "SCORE", label);
        fb.put_str(panel_x, top + 1, &snap.score.to_string(), value);

        fb.put_str(panel_x, top + 3, "ROWS", label);
        fb.put_str(panel_x, top + 4, &snap.rows_cleared.to_string(), value);

        fb.put_str(panel_x, top + 6, "NEXT", label);
        let preview_y = top + 7;
        for &(dx, dy) in &snap.next.cells {
            let px = panel_x + dx as u16 * self.cell_cols;
            let py = preview_y + dy as u16 * self.cell_rows;
            self.fill_block(fb, px, py, snap.next.color);
        }
    }
}
