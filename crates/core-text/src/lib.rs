//! Immutable line-based text buffer.
//!
//! `Buffer` is a value: every edit operation returns a new buffer and leaves
//! `self` untouched, so a buffer handed to the undo history can never be
//! mutated behind its back. Operations are line-local and index-based rather
//! than cursor-relative, which lets the cursor and history layers be built and
//! tested against the buffer contract alone.
//!
//! Invariants:
//! * at least one line always exists (an empty buffer is one empty line);
//! * no line contains a line terminator;
//! * row indices are `0..line_count()`, column indices `0..=line_len(row)`
//!   (a column equal to the line length addresses the slot after the last
//!   character).
//!
//! Columns are counted in `char`s. Index preconditions are caller contracts:
//! violating them panics rather than producing a half-edited buffer.

pub mod cursor;

pub use cursor::Cursor;

/// Immutable snapshot of all text lines at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    /// Build a buffer from initial file content.
    ///
    /// Content is split on line terminators (`\n` or `\r\n`); empty input
    /// yields a single empty line so the at-least-one-line invariant holds
    /// from the start.
    pub fn from_content(content: &str) -> Self {
        let mut lines: Vec<String> = content.lines().map(str::to_owned).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Build a buffer directly from owned lines. Lines must not contain
    /// terminators; an empty collection becomes one empty line.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let lines: Vec<String> = lines.into_iter().collect();
        debug_assert!(
            lines.iter().all(|l| !l.contains(['\n', '\r'])),
            "buffer lines must not contain line terminators"
        );
        if lines.is_empty() {
            return Self {
                lines: vec![String::new()],
            };
        }
        Self { lines }
    }

    /// Total number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of line `row` in chars.
    ///
    /// # Panics
    /// Panics if `row >= line_count()`.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    /// Content of line `row`.
    ///
    /// # Panics
    /// Panics if `row >= line_count()`.
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Return a new buffer with `text` inserted into line `row` at column
    /// `col`: the line becomes `prefix + text + suffix`, every other line is
    /// unchanged, and the line count stays the same.
    ///
    /// # Panics
    /// Panics if `row >= line_count()`, if `col > line_len(row)`, or if
    /// `text` contains a line terminator (use [`Buffer::split_line`] to add
    /// lines).
    pub fn insert(&self, text: &str, row: usize, col: usize) -> Buffer {
        assert!(
            !text.contains(['\n', '\r']),
            "insert text must not contain line terminators"
        );
        let mut lines = self.lines.clone();
        let at = byte_offset(&lines[row], col);
        lines[row].insert_str(at, text);
        Buffer { lines }
    }

    /// Return a new buffer with exactly one char removed at column `col` of
    /// line `row`.
    ///
    /// # Panics
    /// Panics if `row >= line_count()` or `col >= line_len(row)`. Callers
    /// boundary-check before invoking (backspace at column 0 never reaches
    /// this call).
    pub fn delete(&self, row: usize, col: usize) -> Buffer {
        let mut lines = self.lines.clone();
        let at = byte_offset(&lines[row], col);
        assert!(
            at < lines[row].len(),
            "delete column {col} out of range for line {row}"
        );
        lines[row].remove(at);
        Buffer { lines }
    }

    /// Return a new buffer with line `row` split at column `col`: line `row`
    /// keeps `content[..col]`, a fresh line `row + 1` holds `content[col..]`.
    /// The line count increases by exactly one.
    ///
    /// # Panics
    /// Panics if `row >= line_count()` or `col > line_len(row)`.
    pub fn split_line(&self, row: usize, col: usize) -> Buffer {
        let mut lines = self.lines.clone();
        let at = byte_offset(&lines[row], col);
        let rest = lines[row].split_off(at);
        lines.insert(row + 1, rest);
        Buffer { lines }
    }
}

/// Byte index of char column `col` in `line`. `col == char count` maps to the
/// end of the line.
///
/// # Panics
/// Panics if `col` exceeds the line's char count.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(col)
        .unwrap_or_else(|| {
            panic!(
                "column {col} out of range for line of {} chars",
                line.chars().count()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn buf(lines: &[&str]) -> Buffer {
        Buffer::from_lines(lines.iter().map(|l| l.to_string()))
    }

    #[test]
    fn empty_content_yields_single_empty_line() {
        let b = Buffer::from_content("");
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line(0), "");
    }

    #[test]
    fn from_content_splits_and_strips_terminators() {
        let b = Buffer::from_content("one\ntwo\r\nthree\n");
        assert_eq!(b.line_count(), 3);
        assert_eq!(b.line(0), "one");
        assert_eq!(b.line(1), "two");
        assert_eq!(b.line(2), "three");
    }

    #[test]
    fn insert_builds_prefix_text_suffix() {
        let b = buf(&["hello world"]);
        let edited = b.insert("brave ", 0, 6);
        assert_eq!(edited.line(0), "hello brave world");
        // the original value is untouched
        assert_eq!(b.line(0), "hello world");
        assert_eq!(edited.line_count(), b.line_count());
    }

    #[test]
    fn insert_at_line_end_appends() {
        let b = buf(&["abc"]);
        assert_eq!(b.insert("!", 0, 3).line(0), "abc!");
    }

    #[test]
    fn insert_delete_round_trips_single_char() {
        let b = buf(&["hello"]);
        for col in 0..=b.line_len(0) {
            let restored = b.insert("x", 0, col).delete(0, col);
            assert_eq!(restored.line(0), b.line(0), "round trip at col {col}");
        }
    }

    #[test]
    fn delete_removes_exactly_one_char() {
        let b = buf(&["abc", "def"]);
        let edited = b.delete(1, 1);
        assert_eq!(edited.line(0), "abc");
        assert_eq!(edited.line(1), "df");
        assert_eq!(b.line(1), "def");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn delete_at_line_end_is_contract_violation() {
        buf(&["abc"]).delete(0, 3);
    }

    #[test]
    fn split_line_rejoins_to_original() {
        let b = buf(&["hello world", "tail"]);
        for col in 0..=b.line_len(0) {
            let split = b.split_line(0, col);
            assert_eq!(split.line_count(), b.line_count() + 1);
            let rejoined = format!("{}{}", split.line(0), split.line(1));
            assert_eq!(rejoined, b.line(0));
            assert_eq!(split.line(2), "tail");
        }
    }

    #[test]
    fn split_at_line_end_creates_empty_line() {
        let b = buf(&["abc"]);
        let split = b.split_line(0, 3);
        assert_eq!(split.line(0), "abc");
        assert_eq!(split.line(1), "");
    }

    #[test]
    fn multibyte_columns_count_chars_not_bytes() {
        let b = buf(&["héllo"]);
        assert_eq!(b.line_len(0), 5);
        assert_eq!(b.insert("x", 0, 2).line(0), "héxllo");
        assert_eq!(b.delete(0, 1).line(0), "hllo");
        let split = b.split_line(0, 1);
        assert_eq!(split.line(0), "h");
        assert_eq!(split.line(1), "éllo");
    }

    proptest! {
        #[test]
        fn prop_insert_then_delete_restores_line(
            line in "[a-zA-Z0-9 ]{0,24}",
            ch in proptest::char::range('a', 'z'),
            col_seed in 0usize..32,
        ) {
            let b = Buffer::from_lines([line.clone()]);
            let col = col_seed % (b.line_len(0) + 1);
            let restored = b.insert(&ch.to_string(), 0, col).delete(0, col);
            prop_assert_eq!(restored.line(0), line.as_str());
        }

        #[test]
        fn prop_split_preserves_content_and_adds_one_line(
            line in "[a-zA-Z0-9 ]{0,24}",
            col_seed in 0usize..32,
        ) {
            let b = Buffer::from_lines([line.clone()]);
            let col = col_seed % (b.line_len(0) + 1);
            let split = b.split_line(0, col);
            prop_assert_eq!(split.line_count(), 2);
            prop_assert_eq!(format!("{}{}", split.line(0), split.line(1)), line);
        }
    }
}
