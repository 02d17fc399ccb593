//! Canvas: paints logical points into a terminal with cursor moves.
//!
//! Every operation queues escape sequences into an internal buffer. Nothing
//! reaches the output until [`Canvas::flush`], which writes the whole buffer in
//! one `write_all` so a frame never shows up half drawn.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use log::debug;

use crate::commands::{CursorHome, MoveToCell, RestoreScreen, SaveScreen};
use crate::core::PointSink;
use crate::types::{Bounds, Config, Glyphs, Point2};

/// Affine map from the logical window onto the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub bounds: Bounds,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, bounds: Bounds) -> Self {
        Self { cols, rows, bounds }
    }

    /// Map a logical point to a `(column, row)` cell.
    ///
    /// Results are truncated toward zero and not clamped: points outside the
    /// window land outside the grid. The map runs from `right` to `left`
    /// (and `bot` to `top`), so larger coordinates give smaller cells.
    pub fn cell_of(&self, p: Point2) -> (i32, i32) {
        let b = &self.bounds;
        let col = ((p.x + (b.left - b.right) / 2.0) / (b.left - b.right)) * self.cols as f32;
        let row = ((p.y + (b.top - b.bot) / 2.0) / (b.top - b.bot)) * self.rows as f32;
        (col as i32, row as i32)
    }
}

pub struct Canvas<W: Write> {
    out: W,
    buf: Vec<u8>,
    viewport: Viewport,
    glyphs: Glyphs,
    cell_width: u16,
}

impl<W: Write> Canvas<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            viewport: Viewport::new(config.cols, config.rows, config.bounds),
            glyphs: config.glyphs,
            cell_width: config.cell_width,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Bytes queued since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Save the screen, hide the cursor and switch to the alternate buffer.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.queue(SaveScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.flush()?;
        debug!(
            "canvas entered ({}x{} cells)",
            self.viewport.cols, self.viewport.rows
        );
        Ok(())
    }

    /// Undo [`Canvas::enter`]. Anything still pending is written first.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.buf.queue(RestoreScreen)?;
        self.flush()?;
        debug!("canvas restored");
        Ok(())
    }

    /// Erase the screen and home the cursor.
    pub fn clear(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(CursorHome)?;
        Ok(())
    }

    pub fn move_to(&mut self, col: i32, row: i32) -> Result<()> {
        self.buf.queue(MoveToCell { col, row })?;
        Ok(())
    }

    fn put(&mut self, col: i32, row: i32, glyph: &str) -> Result<()> {
        self.move_to(col, row)?;
        self.buf.queue(Print(glyph))?;
        Ok(())
    }

    /// Paint one logical point with the pixel glyph.
    pub fn paint(&mut self, p: Point2) -> Result<()> {
        let (col, row) = self.viewport.cell_of(p);
        let pixel = self.glyphs.pixel;
        for dx in 0..self.cell_width as i32 {
            self.put(col + dx, row, pixel)?;
        }
        Ok(())
    }

    /// Frame the whole grid.
    pub fn draw_border(&mut self) -> Result<()> {
        let last_col = self.viewport.cols as i32 - 1;
        let last_row = self.viewport.rows as i32 - 1;
        let g = self.glyphs;

        for i in 1..last_col {
            self.put(i, 0, g.horizontal)?;
            self.put(i, last_row, g.horizontal)?;
        }
        for j in 1..last_row {
            self.put(0, j, g.vertical)?;
            self.put(last_col, j, g.vertical)?;
        }

        self.put(0, 0, g.top_left)?;
        self.put(last_col, 0, g.top_right)?;
        self.put(0, last_row, g.bot_left)?;
        self.put(last_col, last_row, g.bot_right)?;
        Ok(())
    }

    /// Write everything queued so far and flush the output.
    ///
    /// The queue is emptied even when the write fails; a frame that could not
    /// be written is dropped rather than replayed.
    pub fn flush(&mut self) -> Result<()> {
        let written = self.out.write_all(&self.buf);
        self.buf.clear();
        written?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> PointSink for Canvas<W> {
    type Error = anyhow::Error;

    fn plot(&mut self, p: Point2) -> Result<()> {
        self.paint(p)
    }
}
