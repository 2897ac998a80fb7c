//! textkit-buffer: the document model behind textkit text controls.
//!
//! This crate holds everything about a text control that does not depend on
//! fonts, pixels or events: the rows of text, the cursor and selection, word
//! boundaries, and the edit primitive that every keystroke reduces to.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - Clamped cursor placement and shift-style selection extension
//! - Character, grapheme and word-wise movement
//! - A single splice primitive, [`TextBuffer::replace_selection`]
//! - Dirty row tracking to minimize repaints
//!
//! # Example
//!
//! ```
//! use textkit_buffer::{DirtyLines, Position, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_str("ab\ncd");
//!
//! // Enter at the end of the first row
//! buffer.set_cursor_pos(Position::new(0, 2), false);
//! let dirty = buffer.insert_newline();
//! assert_eq!(dirty, DirtyLines::FromLineToEnd(0));
//! assert_eq!(buffer.text(), "ab\n\ncd");
//! assert_eq!(buffer.cursor(), Position::new(1, 0));
//!
//! // Backspace joins the rows again
//! buffer.delete_backward();
//! assert_eq!(buffer.text(), "ab\ncd");
//! assert_eq!(buffer.cursor(), Position::new(0, 2));
//! ```
//!
//! # Dirty Line Tracking
//!
//! Each mutation operation returns a [`DirtyLines`] value indicating which rows
//! were affected:
//!
//! - `DirtyLines::None` - No visual change (e.g., Backspace at (0, 0))
//! - `DirtyLines::Single(row)` - Only one row changed
//! - `DirtyLines::FromLineToEnd(row)` - All rows from `row` to the end changed
//!   (used when rows are split or joined)

mod grapheme;
mod line_buffer;
mod selection;
mod text_buffer;
mod types;
mod word;

pub use grapheme::{
    grapheme_boundary_left, grapheme_boundary_right, next_char_boundary, prev_char_boundary,
};
pub use line_buffer::LineBuffer;
pub use selection::SelectionState;
pub use text_buffer::TextBuffer;
pub use types::{DirtyLines, Position, Range};
pub use word::{find_next_word, find_prev_word, word_range_at, SeparatorClass, DEFAULT_SEPARATORS};
