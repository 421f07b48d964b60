//! Cursor position with boundary clamping.
//!
//! A cursor is only meaningful relative to a specific buffer snapshot: every
//! directional move takes the current buffer as context and returns a fresh,
//! already-clamped value. Nothing here mutates in place — clamping is a final
//! explicit step, never interleaved with field updates.
//!
//! There is deliberately no cross-line wrap: moving left at column 0 stays at
//! column 0 rather than jumping to the end of the previous line. Clamping only
//! bounds the raw row/column arithmetic within the current row.

use crate::Buffer;

/// A (row, column) position, valid for the buffer it was last clamped
/// against. Column may equal the line length, meaning "after the last
/// character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The (0, 0) position, valid in every buffer.
    pub fn origin() -> Self {
        Self::default()
    }

    pub fn up(self, buffer: &Buffer) -> Self {
        Self::new(self.row.saturating_sub(1), self.col).clamp(buffer)
    }

    pub fn down(self, buffer: &Buffer) -> Self {
        Self::new(self.row + 1, self.col).clamp(buffer)
    }

    pub fn left(self, buffer: &Buffer) -> Self {
        Self::new(self.row, self.col.saturating_sub(1)).clamp(buffer)
    }

    pub fn right(self, buffer: &Buffer) -> Self {
        Self::new(self.row, self.col + 1).clamp(buffer)
    }

    /// Set the column directly. The result is NOT clamped by this call;
    /// callers clamp against the buffer they pair it with before storing.
    pub fn move_to_col(self, col: usize) -> Self {
        Self::new(self.row, col)
    }

    /// Saturate this position into the valid range for `buffer`:
    /// `row' = min(row, line_count - 1)`, then `col' = min(col,
    /// line_len(row'))`. Never fails.
    pub fn clamp(self, buffer: &Buffer) -> Self {
        let row = self.row.min(buffer.line_count() - 1);
        let col = self.col.min(buffer.line_len(row));
        Self::new(row, col)
    }
}
