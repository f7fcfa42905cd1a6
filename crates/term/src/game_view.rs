//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::color_of;
use crate::types::ColorId;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_MIN_WIDTH: u16 = 12;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame_for(&self, rows: u16, columns: u16, viewport: Viewport) -> Frame {
        let w = columns.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        let panel = PANEL_MIN_WIDTH + 2;

        let x = viewport.width.saturating_sub(w.saturating_add(panel)) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let frame = self.frame_for(snap.rows, snap.columns, viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );
        fb.draw_box(
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        // Locked cells.
        for row in 0..snap.rows {
            for col in 0..snap.columns {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, frame, row, col, color),
                    None => self.draw_empty(fb, frame, row, col),
                }
            }
        }

        // Active piece; cells above the top are not drawn.
        if let Some(active) = &snap.active {
            for (row, col) in active.cells() {
                if row < 0 || col < 0 || row >= snap.rows as i32 || col >= snap.columns as i32 {
                    continue;
                }
                self.draw_block(fb, frame, row as u16, col as u16, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER", "R to restart");
        } else if snap.paused {
            self.draw_overlay(fb, frame, "PAUSED", "P to resume");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title screen shown before the first game.
    pub fn render_title_into(&self, rows: u16, columns: u16, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::default()));

        let frame = self.frame_for(rows, columns, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, border);

        let inner_x = frame.x + 1;
        let inner_w = frame.w - 2;
        let mid = frame.y.saturating_add(frame.h / 2);

        let title = CellStyle::new(color_of(ColorId(1)), SCREEN_BG).bold();
        let play = CellStyle::new(SCREEN_BG, color_of(ColorId(7))).bold();
        let hint = CellStyle::new(Rgb::new(160, 160, 160), SCREEN_BG).dim();

        fb.put_str_centered(inner_x, mid.saturating_sub(3), inner_w, "POLYTRIS", title);
        fb.put_str_centered(inner_x, mid, inner_w, " PLAY ", play);
        fb.put_str_centered(inner_x, mid.saturating_add(2), inner_w, "Enter / Space", hint);
        fb.put_str_centered(inner_x, mid.saturating_add(3), inner_w, "Q to quit", hint);
    }

    pub fn render_title(&self, rows: u16, columns: u16, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_title_into(rows, columns, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 85), WELL_BG).dim();
        let (x, y) = self.cell_origin(frame, row, col);
        fb.put_char(x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, color: ColorId) {
        let rgb = color_of(color);
        let style = CellStyle::new(rgb, rgb.darken()).bold();
        let (x, y) = self.cell_origin(frame, row, col);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '█', style);
    }

    fn cell_origin(&self, frame: Frame, row: u16, col: u16) -> (u16, u16) {
        (
            frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h)),
        )
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", label);
        let end = fb.put_u32(panel_x, y.saturating_add(1), snap.tick_interval_ms, value);
        fb.put_str(end, y.saturating_add(1), "ms", value);
        y = y.saturating_add(3);

        let help = CellStyle::new(Rgb::new(140, 140, 140), SCREEN_BG).dim();
        for line in ["←→  move", "↑   rotate", "↓   drop", "P   pause", "R   restart", "Q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, text: &str, hint: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let hint_style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.put_str_centered(frame.x, mid_y, frame.w, text, style);
        fb.put_str_centered(frame.x, mid_y.saturating_add(1), frame.w, hint, hint_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;
    use crate::types::Command;

    fn screen_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn panel_shows_counters() {
        let snap = GameEngine::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        let text = screen_text(&fb);

        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains("LINES"));
        assert!(text.contains("1000ms"));
    }

    #[test]
    fn overlays_follow_status() {
        let mut engine = GameEngine::new(1);
        let view = GameView::default();

        engine.apply(Command::TogglePause);
        let text = screen_text(&view.render(&engine.snapshot(), Viewport::new(60, 24)));
        assert!(text.contains("PAUSED"));
        assert!(!text.contains("GAME OVER"));

        engine.apply(Command::TogglePause);
        let text = screen_text(&view.render(&engine.snapshot(), Viewport::new(60, 24)));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let snap = GameEngine::new(4).snapshot();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(60, 24));

        let active = snap.active.expect("spawned piece");
        let frame = view.frame_for(snap.rows, snap.columns, Viewport::new(60, 24));
        let (row, col) = active.cells().next().expect("non-empty shape");
        let (x, y) = view.cell_origin(frame, row as u16, col as u16);

        let cell = fb.get(x, y).expect("inside viewport");
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_of(active.color));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameEngine::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.cells().len(), 15);
    }

    #[test]
    fn title_has_play_prompt() {
        let fb = GameView::default().render_title(20, 10, Viewport::new(60, 24));
        let text = screen_text(&fb);
        assert!(text.contains("POLYTRIS"));
        assert!(text.contains("PLAY"));
    }
}
