//! Rendering collaborator.
//!
//! The control does not draw. On each paint it assembles a [`Frame`] that
//! borrows its state and hands it to a [`Painter`] supplied by the host.
//! Painting is read-only: nothing in a frame can mutate the control.

use std::ops::Range as RowRange;

use textkit_buffer::{LineBuffer, Position, Range};
use textkit_input::Point;

use crate::viewport::ViewportOffset;

/// Draws a frame of a text control.
pub trait Painter {
    fn paint(&mut self, frame: &Frame<'_>);
}

/// Everything needed to draw the visible part of a control.
///
/// All x/y values are document-space pixels; subtract `offset` to get view
/// coordinates.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub lines: &'a LineBuffer,
    pub selection: Range,
    pub cursor: Position,
    /// Top-left of the caret
    pub caret: Point,
    pub caret_width: f32,
    pub offset: ViewportOffset,
    pub line_height: f32,
    /// Document rows intersecting the view
    pub visible_rows: RowRange<usize>,
    /// X origin of each visible row, indexed from `visible_rows.start`
    pub row_origins: Vec<f32>,
}

impl<'a> Frame<'a> {
    /// Iterates over visible rows as `(row, text, origin_x, top_y)`.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a str, f32, f32)> + '_ {
        self.visible_rows
            .clone()
            .zip(self.row_origins.iter().copied())
            .map(move |(row, origin)| {
                (
                    row,
                    self.lines.line_text(row),
                    origin,
                    row as f32 * self.line_height,
                )
            })
    }

    /// Byte columns of `row` covered by the selection, if any.
    ///
    /// A row fully inside a multi-row selection reports its whole length; the
    /// row break itself is left to the painter.
    pub fn selection_span(&self, row: usize) -> Option<RowRange<usize>> {
        let Range { first, last } = self.selection;
        if first == last || row < first.row || row > last.row {
            return None;
        }
        let start = if row == first.row { first.column } else { 0 };
        let end = if row == last.row {
            last.column
        } else {
            self.lines.line_length(row)
        };
        Some(start..end)
    }
}
