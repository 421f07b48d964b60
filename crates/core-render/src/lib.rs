//! Full-screen rendering.
//!
//! One frame per processed command: clear, print every buffer line with the
//! token-coloring pass applied, then park the terminal cursor at the editing
//! position. Draw commands are queued and flushed once per frame — no
//! mid-frame flushing.

use anyhow::Result;
use core_text::{Buffer, Cursor};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};
use tracing::trace;

pub mod highlight;

pub struct Renderer {
    out: Stdout,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    /// Repaint the whole screen from `buffer` and leave the terminal cursor
    /// at `cursor`'s position.
    pub fn draw(&mut self, buffer: &Buffer, cursor: &Cursor) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for (row, line) in buffer.lines().enumerate() {
            queue!(self.out, MoveTo(0, clamp_coord(row)))?;
            for span in highlight::highlight_line(line) {
                match highlight::color_for(span.kind) {
                    Some(color) => queue!(
                        self.out,
                        SetForegroundColor(color),
                        Print(span.text),
                        ResetColor
                    )?,
                    None => queue!(self.out, Print(span.text))?,
                }
            }
        }
        queue!(
            self.out,
            MoveTo(clamp_coord(cursor.col), clamp_coord(cursor.row))
        )?;
        self.out.flush()?;
        trace!(
            target: "render",
            lines = buffer.line_count(),
            cursor_row = cursor.row,
            cursor_col = cursor.col,
            "frame"
        );
        Ok(())
    }
}

/// Terminal coordinates are `u16`; positions beyond that saturate (there is
/// no viewport model — the terminal clips whatever falls off-screen).
fn clamp_coord(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_saturate_at_u16_range() {
        assert_eq!(clamp_coord(0), 0);
        assert_eq!(clamp_coord(70_000), u16::MAX);
    }
}
