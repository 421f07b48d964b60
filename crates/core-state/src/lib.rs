//! Editor state: current buffer, cursor, and undo history.
//!
//! [`EditorState`] owns the buffer and cursor by value; the history holds
//! copies, never aliases, of prior versions. The dispatcher in `core-actions`
//! is the only writer: it saves a snapshot before a mutation and commits the
//! new (buffer, cursor) pair produced by the pure buffer/cursor operations.

use core_text::{Buffer, Cursor};
use std::path::PathBuf;

pub mod history;

pub use history::{History, Snapshot};

#[derive(Debug)]
pub struct EditorState {
    buffer: Buffer,
    pub cursor: Cursor,
    history: History,
    /// Path the buffer was loaded from, if any. Used for display only; quill
    /// never writes it back.
    pub file_name: Option<PathBuf>,
}

impl EditorState {
    /// State with an unbounded undo history and the cursor at the origin.
    pub fn new(buffer: Buffer) -> Self {
        Self::with_history_limit(buffer, None)
    }

    /// State with an optional cap on undo depth (oldest snapshot evicted
    /// first when exceeded).
    pub fn with_history_limit(buffer: Buffer, limit: Option<usize>) -> Self {
        Self {
            buffer,
            cursor: Cursor::origin(),
            history: History::with_limit(limit),
            file_name: None,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// Capture the current (buffer, cursor) pair. Called immediately before a
    /// mutating command applies its effect.
    pub fn save_snapshot(&mut self) {
        self.history.save(&self.buffer, self.cursor);
    }

    /// Pop and reinstate the most recent snapshot. Returns `false` (leaving
    /// current state untouched) when the history is empty.
    pub fn restore_snapshot(&mut self) -> bool {
        match self.history.restore() {
            Some(Snapshot { buffer, cursor }) => {
                self.buffer = buffer;
                self.cursor = cursor;
                true
            }
            None => false,
        }
    }

    /// Replace buffer and cursor with the result of an edit. The cursor must
    /// already be clamped against `buffer`.
    pub fn commit(&mut self, buffer: Buffer, cursor: Cursor) {
        debug_assert_eq!(
            cursor.clamp(&buffer),
            cursor,
            "committed cursor must be valid for the committed buffer"
        );
        self.buffer = buffer;
        self.cursor = cursor;
    }
}
