//! TextBuffer is the main public API for text editing operations.
//!
//! It combines a [`LineBuffer`] (row storage) with a [`SelectionState`]
//! (cursor + ordered selection) and routes every content change through a
//! single primitive, [`TextBuffer::replace_selection`]. Typing, Enter,
//! Backspace, Delete, paste and cut all reduce to "replace the selection with
//! this text", differing only in how the selection is set up beforehand.
//!
//! Each mutation operation returns `DirtyLines` indicating which rows changed,
//! enabling the owning control to minimize repaints.

use crate::grapheme::{
    grapheme_boundary_left, grapheme_boundary_right, next_char_boundary, prev_char_boundary,
};
use crate::line_buffer::{split_rows, LineBuffer};
use crate::selection::SelectionState;
use crate::types::{DirtyLines, Position, Range};
use crate::word::{self, SeparatorClass};

/// Replacement text at or above this many bytes is logged at debug level.
const LARGE_EDIT_BYTES: usize = 10_000;

/// A text document with cursor, selection and dirty row reporting.
///
/// The buffer maintains:
/// - Row storage (never empty)
/// - Cursor and selection, always clamped to the document
/// - The separator class used for word navigation
///
/// All mutation operations return `DirtyLines` to enable efficient repaints.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: LineBuffer,
    state: SelectionState,
    separators: SeparatorClass,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextBuffer {
    /// Creates a buffer holding one empty row, cursor at (0, 0).
    pub fn new() -> Self {
        Self::with_separators(SeparatorClass::default())
    }

    /// Creates an empty buffer that uses a custom separator class for word
    /// navigation.
    pub fn with_separators(separators: SeparatorClass) -> Self {
        Self {
            lines: LineBuffer::new(),
            state: SelectionState::new(),
            separators,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a buffer initialized with the given content, cursor at (0, 0).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buf = Self::new();
        buf.lines.set_text(content);
        buf
    }

    // ==================== Accessors ====================

    /// Joins all rows with `\n`.
    pub fn text(&self) -> String {
        self.lines.text()
    }

    /// Number of rows. Always at least 1.
    pub fn row_count(&self) -> usize {
        self.lines.row_count()
    }

    /// Byte length of `row` (0 when out of range).
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.line_length(row)
    }

    /// Text of `row` (`""` when out of range).
    pub fn line_text(&self, row: usize) -> &str {
        self.lines.line_text(row)
    }

    /// Read access to the underlying rows.
    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    /// Returns true if the document is a single empty row.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clamp(&self, pos: Position) -> Position {
        self.lines.clamp(pos)
    }

    pub fn end_position(&self) -> Position {
        self.lines.end_position()
    }

    pub fn separators(&self) -> &SeparatorClass {
        &self.separators
    }

    // ==================== Cursor & Selection ====================

    pub fn cursor(&self) -> Position {
        self.state.cursor()
    }

    /// The current selection, always ordered. Empty when collapsed.
    pub fn selection(&self) -> Range {
        self.state.selection()
    }

    /// Returns true if the selection covers at least one character.
    pub fn has_selection(&self) -> bool {
        self.state.is_active()
    }

    /// Returns the selected text, or `""` when the selection is collapsed.
    pub fn selected_text(&self) -> String {
        self.lines.slice(self.state.selection())
    }

    /// Moves the cursor to `pos` (clamped), extending the selection from its
    /// fixed end when `extend` is set.
    pub fn set_cursor_pos(&mut self, pos: Position, extend: bool) {
        self.state.set_cursor_pos(&self.lines, pos, extend);
    }

    /// Selects `range`, cursor on its last endpoint.
    pub fn select(&mut self, range: Range) {
        self.state.select(&self.lines, range, true);
    }

    /// Selects the whole document, cursor at the end.
    pub fn select_all(&mut self) {
        let all = Range::new(Position::new(0, 0), self.lines.end_position());
        self.state.select(&self.lines, all, true);
    }

    /// Selects the word (or run of one separator character) under `pos`.
    pub fn select_word_at(&mut self, pos: Position) {
        let pos = self.lines.clamp(pos);
        let cols = word::word_range_at(&self.lines, &self.separators, pos);
        let range = Range::new(
            Position::new(pos.row, cols.start),
            Position::new(pos.row, cols.end),
        );
        self.state.select(&self.lines, range, true);
    }

    // ==================== Word Boundaries ====================

    /// Start of the word at or before `pos` (see [`word::find_prev_word`]).
    pub fn find_prev_word(&self, pos: Position) -> Position {
        word::find_prev_word(&self.lines, &self.separators, self.lines.clamp(pos))
    }

    /// Boundary after the next separator run (see [`word::find_next_word`]).
    pub fn find_next_word(&self, pos: Position) -> Position {
        word::find_next_word(&self.lines, &self.separators, self.lines.clamp(pos))
    }

    // ==================== Cursor Movement ====================

    /// Moves left by one grapheme cluster, wrapping to the end of the
    /// previous row. No-op at the start of the document.
    pub fn move_left(&mut self, extend: bool) {
        let pos = self.cursor();
        let target = if pos.column > 0 {
            let col = grapheme_boundary_left(self.lines.line_text(pos.row), pos.column);
            Position::new(pos.row, col)
        } else if pos.row > 0 {
            Position::new(pos.row - 1, self.lines.line_length(pos.row - 1))
        } else {
            pos
        };
        self.set_cursor_pos(target, extend);
    }

    /// Moves right by one grapheme cluster, wrapping to the start of the next
    /// row. No-op at the end of the document.
    pub fn move_right(&mut self, extend: bool) {
        let pos = self.cursor();
        let len = self.lines.line_length(pos.row);
        let target = if pos.column < len {
            let col = grapheme_boundary_right(self.lines.line_text(pos.row), pos.column);
            Position::new(pos.row, col)
        } else if pos.row + 1 < self.row_count() {
            Position::new(pos.row + 1, 0)
        } else {
            pos
        };
        self.set_cursor_pos(target, extend);
    }

    pub fn move_word_left(&mut self, extend: bool) {
        let target = self.find_prev_word(self.cursor());
        self.set_cursor_pos(target, extend);
    }

    pub fn move_word_right(&mut self, extend: bool) {
        let target = self.find_next_word(self.cursor());
        self.set_cursor_pos(target, extend);
    }

    /// Moves up one row keeping the byte column (clamped). No-op on row 0.
    ///
    /// Controls with font metrics should prefer pixel-based vertical movement.
    pub fn move_up(&mut self, extend: bool) {
        let pos = self.cursor();
        if pos.row > 0 {
            self.set_cursor_pos(Position::new(pos.row - 1, pos.column), extend);
        }
    }

    /// Moves down one row keeping the byte column (clamped). No-op on the
    /// last row.
    pub fn move_down(&mut self, extend: bool) {
        let pos = self.cursor();
        if pos.row + 1 < self.row_count() {
            self.set_cursor_pos(Position::new(pos.row + 1, pos.column), extend);
        }
    }

    pub fn move_to_line_start(&mut self, extend: bool) {
        let row = self.cursor().row;
        self.set_cursor_pos(Position::new(row, 0), extend);
    }

    pub fn move_to_line_end(&mut self, extend: bool) {
        let row = self.cursor().row;
        self.set_cursor_pos(Position::new(row, self.lines.line_length(row)), extend);
    }

    pub fn move_to_document_start(&mut self, extend: bool) {
        self.set_cursor_pos(Position::new(0, 0), extend);
    }

    pub fn move_to_document_end(&mut self, extend: bool) {
        self.set_cursor_pos(self.lines.end_position(), extend);
    }

    // ==================== Validation ====================

    /// Debug assertion: cursor and selection are clamped, ordered, and the
    /// cursor sits on a selection endpoint.
    ///
    /// Checks every 16th mutation so tight editing loops stay fast.
    #[cfg(debug_assertions)]
    fn assert_state_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 16 != 0 {
            return;
        }
        let sel = self.state.selection();
        let cursor = self.state.cursor();
        assert!(self.lines.row_count() >= 1, "line buffer became empty");
        assert!(sel.first <= sel.last, "selection out of order: {sel:?}");
        assert_eq!(self.lines.clamp(sel.first), sel.first, "unclamped first");
        assert_eq!(self.lines.clamp(sel.last), sel.last, "unclamped last");
        assert!(
            cursor == sel.first || cursor == sel.last,
            "cursor {cursor:?} detached from selection {sel:?}"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_state_consistent(&mut self) {}

    // ==================== Mutations ====================

    /// Replaces the whole document, resetting cursor and selection to (0, 0).
    pub fn set_text(&mut self, text: &str) -> DirtyLines {
        if text.len() >= LARGE_EDIT_BYTES {
            tracing::debug!(len = text.len(), "set_text with large content");
        }
        self.lines.set_text(text);
        self.state = SelectionState::new();
        self.assert_state_consistent();
        DirtyLines::FromLineToEnd(0)
    }

    /// Replaces the current selection with `new_text`.
    ///
    /// This is the single primitive all content changes go through. The
    /// cursor ends up immediately after the inserted text and the selection
    /// collapses there. Replacing a collapsed selection with `""` is a no-op.
    pub fn replace_selection(&mut self, new_text: &str) -> DirtyLines {
        let sel = self.lines.clamp_range(self.state.selection());
        if sel.is_empty() && new_text.is_empty() {
            // Nothing removed, nothing inserted; only fix a stale selection
            self.state.reclamp(&self.lines);
            return DirtyLines::None;
        }

        let replacement = split_rows(new_text);
        let spans_rows = sel.is_multiline() || replacement.len() > 1;
        if spans_rows || new_text.len() >= LARGE_EDIT_BYTES {
            tracing::debug!(
                first_row = sel.first.row,
                last_row = sel.last.row,
                inserted_rows = replacement.len(),
                inserted_bytes = new_text.len(),
                "splice"
            );
        }

        let end = self.lines.splice(sel, &replacement);
        self.state.collapse_to(&self.lines, end);
        self.assert_state_consistent();

        if spans_rows {
            DirtyLines::FromLineToEnd(sel.first.row)
        } else {
            DirtyLines::Single(sel.first.row)
        }
    }

    /// Inserts a character at the cursor, replacing any selection.
    pub fn insert_char(&mut self, ch: char) -> DirtyLines {
        let mut buf = [0u8; 4];
        self.replace_selection(ch.encode_utf8(&mut buf))
    }

    /// Inserts a string at the cursor, replacing any selection.
    pub fn insert_str(&mut self, s: &str) -> DirtyLines {
        self.replace_selection(s)
    }

    /// Enter: replaces any selection with a line feed, splitting the row at
    /// the cursor.
    pub fn insert_newline(&mut self) -> DirtyLines {
        self.replace_selection("\n")
    }

    /// Backspace.
    ///
    /// - active selection: deletes it
    /// - column 0 of row > 0: joins with the previous row, cursor at the old
    ///   end of that row
    /// - column 0 of row 0: no-op
    /// - elsewhere: deletes one codepoint to the left
    pub fn delete_backward(&mut self) -> DirtyLines {
        if self.has_selection() {
            return self.replace_selection("");
        }

        let pos = self.cursor();
        let start = if pos.column > 0 {
            let col = prev_char_boundary(self.lines.line_text(pos.row), pos.column);
            Position::new(pos.row, col)
        } else if pos.row > 0 {
            Position::new(pos.row - 1, self.lines.line_length(pos.row - 1))
        } else {
            return DirtyLines::None;
        };

        self.state.select(&self.lines, Range::new(start, pos), false);
        self.replace_selection("")
    }

    /// Delete (forward).
    ///
    /// - active selection: deletes it
    /// - end of a row with a following row: joins the next row upward
    /// - end of the last row: no-op
    /// - elsewhere: deletes one codepoint to the right
    pub fn delete_forward(&mut self) -> DirtyLines {
        if self.has_selection() {
            return self.replace_selection("");
        }

        let pos = self.cursor();
        let len = self.lines.line_length(pos.row);
        let end = if pos.column < len {
            let col = next_char_boundary(self.lines.line_text(pos.row), pos.column);
            Position::new(pos.row, col)
        } else if pos.row + 1 < self.row_count() {
            Position::new(pos.row + 1, 0)
        } else {
            return DirtyLines::None;
        };

        self.state.select(&self.lines, Range::new(pos, end), false);
        self.replace_selection("")
    }

    /// Deletes back to the previous word boundary (Ctrl+Backspace).
    /// Deletes the selection instead when one is active.
    pub fn delete_word_backward(&mut self) -> DirtyLines {
        if !self.has_selection() {
            let target = self.find_prev_word(self.cursor());
            self.set_cursor_pos(target, true);
        }
        self.replace_selection("")
    }

    /// Deletes forward to the next word boundary (Ctrl+Delete).
    /// Deletes the selection instead when one is active.
    pub fn delete_word_forward(&mut self) -> DirtyLines {
        if !self.has_selection() {
            let target = self.find_next_word(self.cursor());
            self.set_cursor_pos(target, true);
        }
        self.replace_selection("")
    }

    /// Erases the whole document, leaving one empty row.
    pub fn clear(&mut self) -> DirtyLines {
        self.select_all();
        self.replace_selection("")
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
