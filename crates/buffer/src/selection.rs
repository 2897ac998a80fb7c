//! Cursor and selection state.
//!
//! The selection is always an ordered [`Range`] and the cursor is always one
//! of its endpoints. There are exactly two states:
//!
//! - **collapsed**: `first == last == cursor`
//! - **active**: `first < last`, cursor at either end
//!
//! Extending keeps the opposite endpoint fixed, which is what gives
//! shift+arrow and shift+click their "grow from the fixed end" feel.

use crate::line_buffer::LineBuffer;
use crate::types::{Position, Range};

/// Cursor plus selection for one text control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    cursor: Position,
    selection: Range,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> Range {
        self.selection
    }

    /// Returns true if the selection covers at least one character.
    pub fn is_active(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The endpoint opposite the cursor, if the selection is active.
    pub fn anchor(&self) -> Option<Position> {
        if !self.is_active() {
            None
        } else if self.cursor == self.selection.last {
            Some(self.selection.first)
        } else {
            Some(self.selection.last)
        }
    }

    /// Moves the cursor, optionally extending the selection.
    ///
    /// `raw` is clamped against `buf` first. Without `extend` the selection
    /// collapses onto the new cursor. With `extend`, the endpoint the cursor
    /// currently sits on moves and the other stays fixed; if the cursor sits
    /// on neither endpoint the selection restarts at the new position.
    pub fn set_cursor_pos(&mut self, buf: &LineBuffer, raw: Position, extend: bool) {
        let new_pos = buf.clamp(raw);

        self.selection = if !extend {
            Range::collapsed(new_pos)
        } else if self.cursor == self.selection.last {
            Range::new(self.selection.first, new_pos)
        } else if self.cursor == self.selection.first {
            Range::new(new_pos, self.selection.last)
        } else {
            Range::collapsed(new_pos)
        };
        self.cursor = new_pos;

        tracing::trace!(
            row = new_pos.row,
            column = new_pos.column,
            extend,
            active = self.is_active(),
            "cursor moved"
        );
    }

    /// Sets the selection directly. The cursor goes on `last` when
    /// `cursor_at_last` is true, otherwise on `first`. Both endpoints are clamped.
    pub fn select(&mut self, buf: &LineBuffer, range: Range, cursor_at_last: bool) {
        self.selection = buf.clamp_range(range);
        self.cursor = if cursor_at_last {
            self.selection.last
        } else {
            self.selection.first
        };
    }

    /// Collapses to `pos` (clamped).
    pub fn collapse_to(&mut self, buf: &LineBuffer, pos: Position) {
        self.set_cursor_pos(buf, pos, false);
    }

    /// Re-clamps cursor and selection after the buffer changed underneath.
    pub fn reclamp(&mut self, buf: &LineBuffer) {
        let cursor_at_last = self.cursor == self.selection.last;
        self.selection = buf.clamp_range(self.selection);
        self.cursor = if cursor_at_last {
            self.selection.last
        } else {
            self.selection.first
        };
    }
}
