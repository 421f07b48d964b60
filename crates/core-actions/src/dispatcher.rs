//! Dispatcher applying an [`Action`] to editor state.
//!
//! The dispatcher is a pure function of (current state, action): look up the
//! transition, optionally push a snapshot, compute the new buffer and/or
//! cursor from the pure `core-text` operations, commit. Snapshot policy:
//! saved immediately before any buffer mutation (insertion, deletion, line
//! split, indentation), never for cursor movement or undo itself.
//!
//! Boundary policy upholding the buffer's index contracts:
//! * backspace at column 0 is a silent no-op — there is deliberately no
//!   line-joining behavior;
//! * every committed cursor has been clamped against the buffer it is paired
//!   with.

use crate::{Action, EditKind, MotionKind};
use core_state::EditorState;
use tracing::trace;

/// Knobs the dispatcher reads from configuration.
#[derive(Debug, Clone, Copy)]
pub struct DispatchOptions {
    /// Number of spaces a tab inserts. At least 1.
    pub tab_width: usize,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

/// Result of dispatching a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Buffer or cursor changed (the caller repaints every cycle regardless;
    /// this feeds logging and tests).
    pub dirty: bool,
    /// The loop should exit without rendering again.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            quit: true,
        }
    }
}

/// Apply `action` to `state`.
pub fn dispatch(action: Action, state: &mut EditorState, opts: &DispatchOptions) -> DispatchResult {
    match action {
        Action::Motion(kind) => handle_motion(kind, state),
        Action::Edit(kind) => handle_edit(kind, state, opts),
        Action::Undo => handle_undo(state),
        Action::Quit => {
            trace!(target: "actions.dispatch", "quit");
            DispatchResult::quit()
        }
    }
}

fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let buffer = state.buffer();
    let next = match kind {
        MotionKind::Up => before.up(buffer),
        MotionKind::Down => before.down(buffer),
        MotionKind::Left => before.left(buffer),
        MotionKind::Right => before.right(buffer),
    };
    state.cursor = next;
    if before != next {
        trace!(
            target: "actions.dispatch",
            motion = ?kind,
            row = before.row,
            col = before.col,
            to_row = next.row,
            to_col = next.col,
            "motion"
        );
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

fn handle_edit(kind: EditKind, state: &mut EditorState, opts: &DispatchOptions) -> DispatchResult {
    let cursor = state.cursor;
    match kind {
        EditKind::InsertChar(c) => {
            state.save_snapshot();
            let mut utf8 = [0u8; 4];
            let buffer = state
                .buffer()
                .insert(c.encode_utf8(&mut utf8), cursor.row, cursor.col);
            let next = cursor.right(&buffer);
            state.commit(buffer, next);
            trace!(target: "actions.dispatch", op = "insert_char", row = cursor.row, col = cursor.col, "edit");
            DispatchResult::dirty()
        }
        EditKind::InsertTab => {
            state.save_snapshot();
            let width = opts.tab_width.max(1);
            let spaces = " ".repeat(width);
            let buffer = state.buffer().insert(&spaces, cursor.row, cursor.col);
            let next = cursor
                .right(&buffer)
                .move_to_col(cursor.col + width)
                .clamp(&buffer);
            state.commit(buffer, next);
            trace!(target: "actions.dispatch", op = "insert_tab", width, row = cursor.row, col = cursor.col, "edit");
            DispatchResult::dirty()
        }
        EditKind::SplitLine => {
            state.save_snapshot();
            let buffer = state.buffer().split_line(cursor.row, cursor.col);
            let next = cursor.down(&buffer).move_to_col(0);
            state.commit(buffer, next);
            trace!(target: "actions.dispatch", op = "split_line", row = cursor.row, col = cursor.col, "edit");
            DispatchResult::dirty()
        }
        EditKind::Backspace => {
            if cursor.col == 0 {
                // No line joining: this boundary check is what upholds the
                // buffer's delete precondition.
                trace!(target: "actions.dispatch", op = "backspace", row = cursor.row, "noop_at_column_zero");
                return DispatchResult::clean();
            }
            state.save_snapshot();
            let buffer = state.buffer().delete(cursor.row, cursor.col - 1);
            let next = cursor.left(&buffer);
            state.commit(buffer, next);
            trace!(target: "actions.dispatch", op = "backspace", row = cursor.row, col = cursor.col, "edit");
            DispatchResult::dirty()
        }
    }
}

fn handle_undo(state: &mut EditorState) -> DispatchResult {
    if state.restore_snapshot() {
        trace!(target: "actions.dispatch", op = "undo", "restored");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Cursor};

    fn state(lines: &[&str]) -> EditorState {
        EditorState::new(Buffer::from_lines(lines.iter().map(|l| l.to_string())))
    }

    fn opts() -> DispatchOptions {
        DispatchOptions::default()
    }

    #[test]
    fn printable_char_inserts_and_advances() {
        let mut state = state(&["hello"]);
        state.cursor = Cursor::new(0, 5);
        let res = dispatch(
            Action::Edit(EditKind::InsertChar('!')),
            &mut state,
            &opts(),
        );
        assert!(res.dirty && !res.quit);
        assert_eq!(state.buffer().line(0), "hello!");
        assert_eq!(state.cursor, Cursor::new(0, 6));
        assert_eq!(state.history_depth(), 1);
    }

    #[test]
    fn enter_splits_line_and_moves_to_next_line_start() {
        let mut state = state(&["abc"]);
        state.cursor = Cursor::new(0, 3);
        dispatch(Action::Edit(EditKind::SplitLine), &mut state, &opts());
        assert_eq!(state.buffer().line_count(), 2);
        assert_eq!(state.buffer().line(0), "abc");
        assert_eq!(state.buffer().line(1), "");
        assert_eq!(state.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn enter_mid_line_carries_suffix_down() {
        let mut state = state(&["hello world"]);
        state.cursor = Cursor::new(0, 5);
        dispatch(Action::Edit(EditKind::SplitLine), &mut state, &opts());
        assert_eq!(state.buffer().line(0), "hello");
        assert_eq!(state.buffer().line(1), " world");
        assert_eq!(state.cursor, Cursor::new(1, 0));
    }

    #[test]
    fn undo_restores_buffer_and_cursor_together() {
        let mut state = state(&["abc"]);
        state.cursor = Cursor::new(0, 3);
        dispatch(Action::Edit(EditKind::SplitLine), &mut state, &opts());
        let res = dispatch(Action::Undo, &mut state, &opts());
        assert!(res.dirty);
        assert_eq!(state.buffer().line_count(), 1);
        assert_eq!(state.buffer().line(0), "abc");
        assert_eq!(state.cursor, Cursor::new(0, 3));
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut state = state(&["abc"]);
        state.cursor = Cursor::new(0, 1);
        let res = dispatch(Action::Undo, &mut state, &opts());
        assert_eq!(res, DispatchResult::clean());
        assert_eq!(state.buffer().line(0), "abc");
        assert_eq!(state.cursor, Cursor::new(0, 1));
    }

    #[test]
    fn backspace_at_column_zero_is_silent_noop() {
        let mut state = state(&["ab"]);
        let res = dispatch(Action::Edit(EditKind::Backspace), &mut state, &opts());
        assert_eq!(res, DispatchResult::clean());
        assert_eq!(state.buffer().line(0), "ab");
        assert_eq!(state.cursor, Cursor::origin());
        assert_eq!(state.history_depth(), 0, "no snapshot for a no-op");
    }

    #[test]
    fn backspace_deletes_left_of_cursor() {
        let mut state = state(&["abc"]);
        state.cursor = Cursor::new(0, 2);
        dispatch(Action::Edit(EditKind::Backspace), &mut state, &opts());
        assert_eq!(state.buffer().line(0), "ac");
        assert_eq!(state.cursor, Cursor::new(0, 1));
    }

    #[test]
    fn tab_inserts_spaces_and_lands_after_them() {
        let mut state = state(&["ab"]);
        state.cursor = Cursor::new(0, 1);
        dispatch(Action::Edit(EditKind::InsertTab), &mut state, &opts());
        assert_eq!(state.buffer().line(0), "a    b");
        assert_eq!(state.cursor, Cursor::new(0, 5));
    }

    #[test]
    fn tab_width_comes_from_options() {
        let mut state = state(&[""]);
        let options = DispatchOptions { tab_width: 2 };
        dispatch(Action::Edit(EditKind::InsertTab), &mut state, &options);
        assert_eq!(state.buffer().line(0), "  ");
        assert_eq!(state.cursor, Cursor::new(0, 2));
    }

    #[test]
    fn motion_never_snapshots() {
        let mut state = state(&["abc", "def"]);
        for kind in [
            MotionKind::Right,
            MotionKind::Down,
            MotionKind::Left,
            MotionKind::Up,
        ] {
            dispatch(Action::Motion(kind), &mut state, &opts());
        }
        assert_eq!(state.history_depth(), 0);
    }

    #[test]
    fn motion_clamps_at_edges_and_reports_clean() {
        let mut state = state(&["ab"]);
        let res = dispatch(Action::Motion(MotionKind::Up), &mut state, &opts());
        assert_eq!(res, DispatchResult::clean());
        let res = dispatch(Action::Motion(MotionKind::Left), &mut state, &opts());
        assert_eq!(res, DispatchResult::clean());
        assert_eq!(state.cursor, Cursor::origin());
    }

    #[test]
    fn vertical_motion_clamps_column_to_target_line() {
        let mut state = state(&["abcdef", "ab"]);
        state.cursor = Cursor::new(0, 6);
        dispatch(Action::Motion(MotionKind::Down), &mut state, &opts());
        assert_eq!(state.cursor, Cursor::new(1, 2));
    }

    #[test]
    fn quit_requests_exit_without_touching_state() {
        let mut state = state(&["abc"]);
        let res = dispatch(Action::Quit, &mut state, &opts());
        assert!(res.quit);
        assert_eq!(state.buffer().line(0), "abc");
    }

    #[test]
    fn repeated_undo_walks_back_through_history() {
        let mut state = state(&[""]);
        for c in ['h', 'i'] {
            dispatch(Action::Edit(EditKind::InsertChar(c)), &mut state, &opts());
        }
        assert_eq!(state.buffer().line(0), "hi");
        assert_eq!(state.history_depth(), 2);

        dispatch(Action::Undo, &mut state, &opts());
        assert_eq!(state.buffer().line(0), "h");
        dispatch(Action::Undo, &mut state, &opts());
        assert_eq!(state.buffer().line(0), "");
        // Walked past the beginning: nothing left to restore.
        assert_eq!(
            dispatch(Action::Undo, &mut state, &opts()),
            DispatchResult::clean()
        );
    }
}
