//! Boundary helpers for cursor movement and single-character deletion.
//!
//! Columns are byte offsets into a row. Two granularities matter:
//!
//! - **codepoints**, for Backspace/Delete, which remove exactly one scalar
//!   value (a lead byte plus its continuation bytes)
//! - **grapheme clusters**, for arrow-key movement, so the cursor never lands
//!   between a base character and its combining marks or inside a ZWJ emoji
//!   sequence such as 👨‍👩‍👧

use unicode_segmentation::GraphemeCursor;

use crate::line_buffer::floor_char_boundary;

/// Byte offset of the codepoint boundary before `column`, or 0.
///
/// Like every helper here, a `column` past the row or inside a codepoint is
/// first snapped down to a boundary.
pub fn prev_char_boundary(line: &str, column: usize) -> usize {
    line[..floor_char_boundary(line, column)]
        .char_indices()
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

/// Byte offset of the codepoint boundary after `column`, or `line.len()`.
pub fn next_char_boundary(line: &str, column: usize) -> usize {
    let column = floor_char_boundary(line, column);
    line[column..]
        .chars()
        .next()
        .map_or(line.len(), |ch| column + ch.len_utf8())
}

/// Byte offset of the grapheme cluster boundary before `column`.
///
/// Returns 0 at the start of the row.
pub fn grapheme_boundary_left(line: &str, column: usize) -> usize {
    let column = floor_char_boundary(line, column);
    if column == 0 {
        return 0;
    }
    // ASCII before the cursor is always its own cluster
    if line.as_bytes()[column - 1].is_ascii() {
        return column - 1;
    }

    let mut cursor = GraphemeCursor::new(column, line.len(), true);
    match cursor.prev_boundary(line, 0) {
        Ok(Some(boundary)) => boundary,
        Ok(None) => 0,
        // The whole row is supplied as one chunk, so this is unreachable in
        // practice; stepping one codepoint keeps the cursor valid regardless.
        Err(_) => prev_char_boundary(line, column),
    }
}

/// Byte offset of the grapheme cluster boundary after `column`.
///
/// Returns `line.len()` at the end of the row.
pub fn grapheme_boundary_right(line: &str, column: usize) -> usize {
    let column = floor_char_boundary(line, column);
    if column >= line.len() {
        return line.len();
    }
    let bytes = line.as_bytes();
    // ASCII followed by ASCII (or end of row) cannot start a longer cluster.
    // "\r\n" is the one ASCII pair that forms a single cluster.
    if bytes[column].is_ascii()
        && bytes[column] != b'\r'
        && bytes.get(column + 1).map_or(true, u8::is_ascii)
    {
        return column + 1;
    }

    let mut cursor = GraphemeCursor::new(column, line.len(), true);
    match cursor.next_boundary(line, 0) {
        Ok(Some(boundary)) => boundary,
        Ok(None) => line.len(),
        Err(_) => next_char_boundary(line, column),
    }
}
