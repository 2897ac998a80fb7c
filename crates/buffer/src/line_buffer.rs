//! The ordered sequence of text rows that makes up a document.
//!
//! `LineBuffer` is deliberately dumb storage: one `String` per row, no
//! trailing newline stored anywhere. It owns the two invariants every other
//! component leans on:
//!
//! - the row sequence is never empty (an erased document is one empty row)
//! - [`LineBuffer::clamp`] is the only way a raw position becomes a valid one
//!
//! The splice primitive lives here too, so that row bookkeeping stays in one
//! place; cursor and selection rules are layered on top by `TextBuffer`.

use crate::types::{Position, Range};

/// Splits `text` into rows on line feeds.
///
/// Carriage returns are ordinary row content. The result always has at least
/// one element.
pub(crate) fn split_rows(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Returns the largest `char` boundary of `text` that is `<= column`.
pub(crate) fn floor_char_boundary(text: &str, column: usize) -> usize {
    if column >= text.len() {
        return text.len();
    }
    let mut col = column;
    while !text.is_char_boundary(col) {
        col -= 1;
    }
    col
}

/// An ordered, never-empty sequence of text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    rows: Vec<String>,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }

    /// Creates a buffer from text, splitting on line feeds.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but splitting a string into rows cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self {
            rows: split_rows(text),
        }
    }

    /// Replaces the whole document with `text`.
    pub fn set_text(&mut self, text: &str) {
        self.rows = split_rows(text);
    }

    /// Joins all rows with `\n`.
    ///
    /// For any `s` without carriage returns, `set_text(s)` followed by
    /// `text()` yields `s` again.
    pub fn text(&self) -> String {
        self.rows.join("\n")
    }

    /// Number of rows. Always at least 1.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the document is a single empty row.
    pub fn is_empty(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].is_empty()
    }

    /// Byte length of `row`, or 0 if `row` is out of range.
    pub fn line_length(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, String::len)
    }

    /// Text of `row`, or `""` if `row` is out of range.
    pub fn line_text(&self, row: usize) -> &str {
        self.rows.get(row).map_or("", String::as_str)
    }

    /// Iterates over all rows in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// The position just past the last character of the document.
    pub fn end_position(&self) -> Position {
        let last = self.rows.len() - 1;
        Position::new(last, self.rows[last].len())
    }

    /// Clamps a position into the document.
    ///
    /// `row` is clamped to `[0, row_count - 1]`, then `column` to
    /// `[0, line_length(row)]` and snapped down to a `char` boundary.
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.rows.len() - 1);
        let column = floor_char_boundary(&self.rows[row], pos.column);
        Position::new(row, column)
    }

    /// Clamps both endpoints of a range, keeping it ordered.
    pub fn clamp_range(&self, range: Range) -> Range {
        Range::new(self.clamp(range.first), self.clamp(range.last))
    }

    /// Returns the text covered by `range`, rows joined with `\n`.
    pub fn slice(&self, range: Range) -> String {
        let Range { first, last } = self.clamp_range(range);
        if first.row == last.row {
            return self.rows[first.row][first.column..last.column].to_owned();
        }

        let mut out = String::new();
        out.push_str(&self.rows[first.row][first.column..]);
        for row in &self.rows[first.row + 1..last.row] {
            out.push('\n');
            out.push_str(row);
        }
        out.push('\n');
        out.push_str(&self.rows[last.row][..last.column]);
        out
    }

    /// Replaces the text covered by `range` with `replacement` rows.
    ///
    /// `replacement` must be non-empty (it is the output of splitting a string
    /// on line feeds). Returns the position immediately after the inserted
    /// text.
    pub(crate) fn splice(&mut self, range: Range, replacement: &[String]) -> Position {
        debug_assert!(!replacement.is_empty());
        let Range { first, last } = self.clamp_range(range);

        if replacement.len() == 1 && first.row == last.row {
            // Splice directly into the one affected row
            let row = &mut self.rows[first.row];
            row.replace_range(first.column..last.column, &replacement[0]);
            return Position::new(first.row, first.column + replacement[0].len());
        }

        let head = &self.rows[first.row][..first.column];
        let tail = &self.rows[last.row][last.column..];
        let n = replacement.len();

        let mut new_rows = Vec::with_capacity(n);
        if n == 1 {
            new_rows.push(format!("{head}{}{tail}", replacement[0]));
        } else {
            new_rows.push(format!("{head}{}", replacement[0]));
            new_rows.extend(replacement[1..n - 1].iter().cloned());
            new_rows.push(format!("{}{tail}", replacement[n - 1]));
        }

        let cursor = if n == 1 {
            Position::new(first.row, first.column + replacement[0].len())
        } else {
            Position::new(first.row + n - 1, replacement[n - 1].len())
        };

        // `new_rows` is never empty, so the buffer keeps at least one row
        self.rows.splice(first.row..=last.row, new_rows).for_each(drop);
        debug_assert!(!self.rows.is_empty());
        cursor
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
