//! Snapshot-based undo history.
//!
//! Buffer and cursor are captured together as one typed [`Snapshot`] and
//! restored together; the stack can never hold an orphaned half-pair. A
//! snapshot is taken *before* a mutating command applies its effect, never for
//! pure cursor movement, so repeated undo walks back through edits one command
//! at a time. There is no redo direction.

use core_text::{Buffer, Cursor};
use tracing::trace;

/// A paired (buffer, cursor) capture used for undo.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub buffer: Buffer,
    pub cursor: Cursor,
}

/// LIFO stack of snapshots.
///
/// Unbounded by default, matching the interactive-editor trade-off of keeping
/// every edit reachable for the life of the process. An optional `limit`
/// evicts the oldest snapshot once the stack would exceed it.
#[derive(Debug, Default)]
pub struct History {
    stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History capped at `limit` snapshots; `None` means unbounded.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a snapshot of the given buffer and cursor.
    pub fn save(&mut self, buffer: &Buffer, cursor: Cursor) {
        self.stack.push(Snapshot {
            buffer: buffer.clone(),
            cursor,
        });
        trace!(target: "state.history", depth = self.stack.len(), "push_snapshot");
        if let Some(limit) = self.limit
            && self.stack.len() > limit
        {
            self.stack.remove(0);
            trace!(target: "state.history", limit, "history_trimmed");
        }
    }

    /// Pop the most recent snapshot, or `None` when there is nothing to
    /// restore.
    pub fn restore(&mut self) -> Option<Snapshot> {
        let snapshot = self.stack.pop();
        match snapshot {
            Some(_) => trace!(target: "state.history", depth = self.stack.len(), "pop_snapshot"),
            None => trace!(target: "state.history", "restore_on_empty_noop"),
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> Buffer {
        Buffer::from_lines(lines.iter().map(|l| l.to_string()))
    }

    #[test]
    fn restore_pops_in_lifo_order() {
        let mut history = History::new();
        let first = buf(&["one"]);
        let second = buf(&["two"]);
        history.save(&first, Cursor::new(0, 1));
        history.save(&second, Cursor::new(0, 2));

        let top = history.restore().expect("second snapshot");
        assert_eq!(top.buffer, second);
        assert_eq!(top.cursor, Cursor::new(0, 2));

        let bottom = history.restore().expect("first snapshot");
        assert_eq!(bottom.buffer, first);
        assert_eq!(bottom.cursor, Cursor::new(0, 1));

        assert!(history.restore().is_none(), "third restore is a no-op");
    }

    #[test]
    fn snapshot_is_a_copy_not_an_alias() {
        let mut history = History::new();
        let original = buf(&["abc"]);
        history.save(&original, Cursor::origin());
        // Edit after saving; the stored snapshot must still hold "abc".
        let edited = original.insert("x", 0, 0);
        assert_eq!(edited.line(0), "xabc");
        assert_eq!(history.restore().unwrap().buffer.line(0), "abc");
    }

    #[test]
    fn limit_evicts_oldest_first() {
        let mut history = History::with_limit(Some(2));
        for text in ["a", "b", "c"] {
            history.save(&buf(&[text]), Cursor::origin());
        }
        assert_eq!(history.depth(), 2);
        assert_eq!(history.restore().unwrap().buffer.line(0), "c");
        assert_eq!(history.restore().unwrap().buffer.line(0), "b");
        assert!(history.restore().is_none());
    }

    #[test]
    fn unbounded_by_default() {
        let mut history = History::new();
        for i in 0..500 {
            history.save(&buf(&[&i.to_string()]), Cursor::origin());
        }
        assert_eq!(history.depth(), 500);
    }
}
