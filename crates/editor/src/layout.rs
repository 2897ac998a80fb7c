//! Document-space layout: where each line and caret sits, in pixels, before
//! any scrolling is applied.
//!
//! ```text
//! origin_x(row)       = align.origin_x(text_width(line[row]), available_width)
//! caret(row, col)     = (origin_x(row) + text_width(line[row][..col]), row * line_height)
//! position_at(x, y)   = (clamp_row(floor(y / line_height)), first prefix wider than x - origin)
//! ```
//!
//! `LineLayout` borrows everything it needs and holds no state of its own, so
//! it is rebuilt on every query and can never go stale.

use textkit_buffer::{grapheme_boundary_right, LineBuffer, Position};

use crate::align::AlignStrategy;
use crate::font::FontMetrics;

/// Width and height of the laid-out document in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

/// Stateless layout calculator over a borrowed line buffer.
#[derive(Clone, Copy)]
pub struct LineLayout<'a> {
    lines: &'a LineBuffer,
    metrics: &'a dyn FontMetrics,
    align: &'a dyn AlignStrategy,
    /// Width lines are aligned within (view width minus caret width)
    available_width: f32,
}

impl<'a> LineLayout<'a> {
    pub fn new(
        lines: &'a LineBuffer,
        metrics: &'a dyn FontMetrics,
        align: &'a dyn AlignStrategy,
        available_width: f32,
    ) -> Self {
        Self {
            lines,
            metrics,
            align,
            available_width: available_width.max(0.0),
        }
    }

    #[inline]
    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }

    /// Measured width of `row`.
    pub fn line_width(&self, row: usize) -> f32 {
        self.metrics.text_width(self.lines.line_text(row))
    }

    /// X origin of `row` in document pixels.
    pub fn origin_x(&self, row: usize) -> f32 {
        self.align.origin_x(self.line_width(row), self.available_width)
    }

    /// Top-left corner of the caret at `pos`, in document pixels.
    ///
    /// `pos` is clamped first.
    pub fn caret_point(&self, pos: Position) -> (f32, f32) {
        let pos = self.lines.clamp(pos);
        let line = self.lines.line_text(pos.row);
        let x = self.origin_x(pos.row) + self.metrics.text_width(&line[..pos.column]);
        let y = pos.row as f32 * self.line_height();
        (x, y)
    }

    /// Row under document-space `y`, clamped into the document.
    pub fn row_at_y(&self, y: f32) -> usize {
        let line_height = self.line_height();
        if y <= 0.0 || line_height <= 0.0 {
            return 0;
        }
        let row = (y / line_height).floor() as usize;
        row.min(self.lines.row_count() - 1)
    }

    /// Column within `row` for document-space `x`.
    ///
    /// Scans increasing prefixes of the line, one grapheme cluster at a time,
    /// and returns the offset preceding the first prefix whose width meets or
    /// exceeds `x`. Past the end of the line this is the line length.
    pub fn column_at_x(&self, row: usize, x: f32) -> usize {
        let line = self.lines.line_text(row);
        let x = x - self.origin_x(row);

        let mut prev = 0;
        while prev < line.len() {
            let next = grapheme_boundary_right(line, prev);
            if self.metrics.text_width(&line[..next]) >= x {
                return prev;
            }
            prev = next;
        }
        line.len()
    }

    /// Column within `row` whose caret stop lies closest to document-space
    /// `x`, ties going to the earlier stop. Used for vertical movement so a
    /// caret keeps its horizontal position across rows.
    pub fn column_nearest_x(&self, row: usize, x: f32) -> usize {
        let line = self.lines.line_text(row);
        let x = x - self.origin_x(row);

        let mut best = 0;
        let mut best_dist = x.abs();
        let mut col = 0;
        while col < line.len() {
            col = grapheme_boundary_right(line, col);
            let dist = (self.metrics.text_width(&line[..col]) - x).abs();
            if dist < best_dist {
                best = col;
                best_dist = dist;
            }
        }
        best
    }

    /// Document position under document-space point `(x, y)`.
    pub fn position_at(&self, x: f32, y: f32) -> Position {
        let row = self.row_at_y(y);
        Position::new(row, self.column_at_x(row, x))
    }

    /// Size of the whole document: the widest line (plus the caret that can
    /// sit after it) by `row_count * line_height`.
    pub fn content_extent(&self, caret_width: f32) -> Extent {
        let widest = (0..self.lines.row_count())
            .map(|row| self.origin_x(row) + self.line_width(row))
            .fold(0.0_f32, f32::max);
        Extent {
            width: widest + caret_width,
            height: self.lines.row_count() as f32 * self.line_height(),
        }
    }
}
