//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActivePiece, GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::score::ScoreDisplay;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(0x22, 0x22, 0x22);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Share of each color channel left visible under the game-over panel.
const OVERLAY_KEEP: u8 = 51;
/// Rows covered by the game-over panel.
const OVERLAY_ROWS: u16 = 5;

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

/// Draws the well, the falling piece, the side panel and the game-over panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Block unit of `cell_w x cell_h` characters; zero is raised to one.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells and empty well.
        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (x, y) = (col as u16, row as u16);
                match cell {
                    Some(kind) => self.draw_block(fb, start_x, start_y, x, y, *kind),
                    None => self.draw_empty(fb, start_x, start_y, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_piece(fb, start_x, start_y, &active);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Cells above row 0 are not drawn.
    fn draw_piece(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, piece: &ActivePiece) {
        for (row, col) in piece.cells() {
            if row < 0 || col < 0 || row >= BOARD_HEIGHT as i8 || col >= BOARD_WIDTH as i8 {
                continue;
            }
            self.draw_block(fb, start_x, start_y, col as u16, row as u16, piece.kind);
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(0x11, 0x11, 0x11), WELL_BG);
        self.fill_block(fb, start_x, start_y, x, y, ' ', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), WELL_BG);
        self.fill_block(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        ScoreDisplay::draw(fb, panel_x, y, snap.score, label, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y.saturating_add(1), snap.lines, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next);
    }

    /// Next piece in spawn orientation, one block unit per cell.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = Shape::of(kind);
        let style = CellStyle::new(piece_color(kind), PANEL_BG);
        for (r, c) in shape.cells() {
            fb.fill_rect(
                x + c as u16 * self.cell_w,
                y + r as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    /// Translucent band across the middle of the well with the restart prompt.
    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, w: u16, h: u16) {
        let band_h = OVERLAY_ROWS.min(h);
        let band_y = start_y + (h - band_h) / 2;
        fb.shade_rect(start_x, band_y, w, band_h, OVERLAY_KEEP);

        let mid_y = band_y + band_h / 2;
        let title = CellStyle::new(Rgb::new(255, 255, 255), WELL_BG.darken(OVERLAY_KEEP)).bold();
        let hint = CellStyle::new(Rgb::new(255, 255, 255), WELL_BG.darken(OVERLAY_KEEP));
        self.put_centered(fb, start_x, w, mid_y.saturating_sub(1), "GAME OVER", title);
        self.put_centered(fb, start_x, w, mid_y.saturating_add(1), "Press R to Restart", hint);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(tx, y, text, style);
    }
}

/// Display color of each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
        PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
        PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
        PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
        PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
        PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
        PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
    }
}
