//! Word boundary search over a single row.
//!
//! A fixed separator class partitions each row into alternating word and
//! separator runs. The backward search skips separators and then the word
//! run; the forward search jumps to the next separator and then skips a run
//! of that *same* separator character only. The asymmetry is long-standing
//! behaviour that callers (Ctrl+Left / Ctrl+Right) depend on, and it is pinned
//! by tests below.

use crate::line_buffer::LineBuffer;
use crate::types::Position;

/// The built-in separator class: whitespace plus common punctuation.
pub const DEFAULT_SEPARATORS: &str = " \t(){}[],.;:'\"!@#$%^&/*-+";

/// A set of characters that delimit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorClass {
    chars: Vec<char>,
}

impl SeparatorClass {
    /// Builds a class from every character in `separators`.
    pub fn new(separators: &str) -> Self {
        let mut chars: Vec<char> = separators.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }
}

impl Default for SeparatorClass {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

/// Finds the start of the word at or before `pos`.
///
/// At column 0 the boundary is the end of the previous row, or `pos` itself
/// on the first row. `pos` is clamped first.
pub fn find_prev_word(buf: &LineBuffer, seps: &SeparatorClass, pos: Position) -> Position {
    let pos = buf.clamp(pos);
    if pos.column == 0 {
        if pos.row == 0 {
            return pos;
        }
        let prev = pos.row - 1;
        return Position::new(prev, buf.line_length(prev));
    }

    let text = &buf.line_text(pos.row)[..pos.column];
    let mut chars = text.char_indices().rev().peekable();

    // Skip separators immediately left of the cursor
    while chars.next_if(|&(_, ch)| seps.contains(ch)).is_some() {}
    // Then the word run itself, stopping just past the separator before it
    let mut column = 0;
    for (idx, ch) in chars {
        if seps.contains(ch) {
            column = idx + ch.len_utf8();
            break;
        }
    }
    Position::new(pos.row, column)
}

/// Finds the boundary after the next separator run following `pos`.
///
/// Locates the first separator at or after `pos.column` and skips every
/// consecutive repeat of that same character. When the row has no separator
/// left, the boundary is column 0 of the next row, or `pos` itself on the last
/// row. `pos` is clamped first.
pub fn find_next_word(buf: &LineBuffer, seps: &SeparatorClass, pos: Position) -> Position {
    let pos = buf.clamp(pos);
    let line = buf.line_text(pos.row);
    let rest = &line[pos.column..];

    let Some((offset, sep)) = rest.char_indices().find(|&(_, ch)| seps.contains(ch)) else {
        if pos.row + 1 < buf.row_count() {
            return Position::new(pos.row + 1, 0);
        }
        return pos;
    };

    let run: usize = rest[offset..]
        .chars()
        .take_while(|&ch| ch == sep)
        .map(char::len_utf8)
        .sum();
    Position::new(pos.row, pos.column + offset + run)
}

/// Returns the column range of the word (or same-character separator run)
/// containing `pos`. Used for double-click selection.
///
/// At the end of a row the run ending there is used. Returns an empty range
/// on an empty row.
pub fn word_range_at(
    buf: &LineBuffer,
    seps: &SeparatorClass,
    pos: Position,
) -> std::ops::Range<usize> {
    let pos = buf.clamp(pos);
    let line = buf.line_text(pos.row);
    if line.is_empty() {
        return 0..0;
    }

    let anchor_col = if pos.column >= line.len() {
        line.char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx)
    } else {
        pos.column
    };
    let anchor = line[anchor_col..].chars().next().unwrap_or(' ');

    let same_run = |ch: char| {
        if seps.contains(anchor) {
            ch == anchor
        } else {
            !seps.contains(ch)
        }
    };

    let start = line[..anchor_col]
        .char_indices()
        .rev()
        .take_while(|&(_, ch)| same_run(ch))
        .last()
        .map_or(anchor_col, |(idx, _)| idx);
    let end = anchor_col
        + line[anchor_col..]
            .chars()
            .take_while(|&ch| same_run(ch))
            .map(char::len_utf8)
            .sum::<usize>();
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(text: &str, row: usize, col: usize) -> Position {
        let buf = LineBuffer::from_str(text);
        find_next_word(&buf, &SeparatorClass::default(), Position::new(row, col))
    }

    fn prev(text: &str, row: usize, col: usize) -> Position {
        let buf = LineBuffer::from_str(text);
        find_prev_word(&buf, &SeparatorClass::default(), Position::new(row, col))
    }

    // ==================== Separator class ====================

    #[test]
    fn default_class_membership() {
        let seps = SeparatorClass::default();
        for ch in " ()[]{},.;:'\"!@#$%^&/*-+".chars() {
            assert!(seps.contains(ch), "{ch:?} should be a separator");
        }
        assert!(!seps.contains('a'));
        assert!(!seps.contains('_'));
        assert!(!seps.contains('9'));
    }

    // ==================== find_next_word ====================

    #[test]
    fn next_word_from_start_of_foo_bar() {
        assert_eq!(next("foo bar", 0, 0), Position::new(0, 4));
    }

    #[test]
    fn next_word_skips_run_of_same_separator() {
        assert_eq!(next("foo   bar", 0, 1), Position::new(0, 6));
    }

    #[test]
    fn next_word_stops_at_different_separator() {
        // Only the repeated ' ' is skipped; the '(' after it is not.
        assert_eq!(next("foo  (bar", 0, 0), Position::new(0, 5));
    }

    #[test]
    fn next_word_at_end_of_row_goes_to_next_row() {
        assert_eq!(next("foo\nbar", 0, 3), Position::new(1, 0));
        assert_eq!(next("foo\nbar", 0, 1), Position::new(1, 0));
    }

    #[test]
    fn next_word_on_last_row_without_separator_is_unchanged() {
        assert_eq!(next("foo bar", 0, 5), Position::new(0, 5));
    }

    #[test]
    fn word_search_clamps_out_of_range_positions() {
        assert_eq!(next("foo bar", 5, 0), Position::new(0, 4));
        assert_eq!(prev("foo bar", 0, 99), Position::new(0, 4));
        // Column 2 is inside 'é'
        assert_eq!(prev("aé b", 0, 2), Position::new(0, 0));
        assert_eq!(next("aé b", 0, 2), Position::new(0, 4));
    }

    // ==================== find_prev_word ====================

    #[test]
    fn prev_word_from_end_of_foo_bar() {
        assert_eq!(prev("foo bar", 0, 7), Position::new(0, 4));
    }

    #[test]
    fn prev_word_skips_mixed_separators() {
        // Unlike the forward search, any separator-class run is skipped.
        assert_eq!(prev("foo  (bar", 0, 6), Position::new(0, 0));
    }

    #[test]
    fn prev_word_at_column_zero_goes_to_previous_row_end() {
        assert_eq!(prev("foo\nbar", 1, 0), Position::new(0, 3));
    }

    #[test]
    fn prev_word_at_document_start_is_unchanged() {
        assert_eq!(prev("foo", 0, 0), Position::new(0, 0));
    }

    #[test]
    fn prev_word_handles_multibyte() {
        assert_eq!(prev("añb çd", 0, 7), Position::new(0, 5));
    }

    // ==================== word_range_at ====================

    #[test]
    fn word_range_inside_word() {
        let buf = LineBuffer::from_str("hello world");
        let seps = SeparatorClass::default();
        assert_eq!(word_range_at(&buf, &seps, Position::new(0, 8)), 6..11);
    }

    #[test]
    fn word_range_on_separator_run() {
        let buf = LineBuffer::from_str("a   b");
        let seps = SeparatorClass::default();
        assert_eq!(word_range_at(&buf, &seps, Position::new(0, 2)), 1..4);
    }

    #[test]
    fn word_range_at_row_end_uses_last_run() {
        let buf = LineBuffer::from_str("one two");
        let seps = SeparatorClass::default();
        assert_eq!(word_range_at(&buf, &seps, Position::new(0, 7)), 4..7);
    }
}
