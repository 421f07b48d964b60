//! Editing actions: key translation and dispatch.
//!
//! `translate_key` maps one normalized key event to at most one [`Action`];
//! `dispatch` applies an action to [`core_state::EditorState`] using the pure
//! buffer/cursor operations from `core-text`. The dispatcher is the sole
//! guardian of the buffer's index preconditions: every coordinate it passes
//! down has been clamped or boundary-checked first.

pub mod dispatcher;
mod key_translator;

pub use dispatcher::{DispatchOptions, DispatchResult, dispatch};
pub use key_translator::translate_key;

/// Cursor movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
}

/// Buffer-mutating commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Insert one printable character at the cursor.
    InsertChar(char),
    /// Insert a run of spaces at the cursor (width from [`DispatchOptions`]).
    InsertTab,
    /// Split the current line at the cursor column.
    SplitLine,
    /// Delete the character left of the cursor; no-op at column 0.
    Backspace,
}

/// A decoded editing command, the unit the dispatcher consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Undo,
    Quit,
}
