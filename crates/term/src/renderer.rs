//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. After that only runs of changed cells are written.

use std::io::{self, Write};
use std::mem;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// Frame currently on screen; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer. Raw mode is only touched by [`Self::enter`].
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            raw: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.raw = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        self.raw = false;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller is expected to overwrite;
    /// this avoids cloning a frame every draw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf).context("write frame")?;
        self.out.flush().context("flush terminal")?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells that differ between two equally sized frames.
///
/// Returns the number of runs written; nothing is written when the frames match.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let mut style: Option<CellStyle> = None;
    let mut runs = 0;

    for (x, y, len) in changed_runs(prev, next) {
        runs += 1;
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    if runs > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(runs)
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` for each horizontal run of changed cells.
///
/// A size mismatch marks every row dirty.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let resized = prev.width() != next.width() || prev.height() != next.height();
    let w = next.width();

    (0..next.height()).flat_map(move |y| {
        let mut runs = Vec::new();
        if resized {
            runs.push((0, y, w));
            return runs;
        }
        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < w {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
        runs
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn put(fb: &mut FrameBuffer, x: u16, y: u16, ch: char) {
        fb.set(x, y, Cell::new(ch, CellStyle::default()));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(8, 2);
        let mut b = FrameBuffer::new(8, 2);
        for x in 1..=3 {
            put(&mut b, x, 0, 'X');
        }
        put(&mut b, 6, 0, 'Y');
        put(&mut b, 0, 1, 'Z');

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (6, 0, 1), (0, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        assert_eq!(encode_diff_into(&a, &a.clone(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn diff_contains_only_changed_text() {
        let a = FrameBuffer::new(10, 1);
        let mut b = a.clone();
        put(&mut b, 4, 0, 'Q');

        let mut out = Vec::new();
        assert_eq!(encode_diff_into(&a, &b, &mut out).unwrap(), 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('Q'));
    }

    #[test]
    fn draw_swap_is_full_then_incremental() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(6, 2);
        put(&mut fb, 0, 0, 'A');
        r.draw_swap(&mut fb).unwrap();
        let first = r.writer().len();
        assert!(first > 0);

        // Same content again: nothing new is written.
        fb.clear(Cell::default());
        put(&mut fb, 0, 0, 'A');
        r.draw_swap(&mut fb).unwrap();
        assert_eq!(r.writer().len(), first);

        fb.clear(Cell::default());
        put(&mut fb, 0, 0, 'B');
        r.draw_swap(&mut fb).unwrap();
        assert!(r.writer().len() > first);
    }

    #[test]
    fn style_conversion() {
        assert_eq!(
            to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
