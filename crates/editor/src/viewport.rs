//! Viewport abstraction for mapping document coordinates to view coordinates
//!
//! The viewport is the window into the laid-out document. It owns:
//! - `offset`: how far the document is scrolled, in pixels, on both axes
//! - `width` / `height`: the size of the view in pixels
//!
//! Conversions:
//! - view point → document point: add the offset
//! - `visible_rows()` returns which document rows intersect the view
//! - `dirty_lines_to_region()` converts buffer `DirtyLines` to screen `DirtyRegion`
//!
//! The offset is never negative. Explicit scrolls are additionally clamped so
//! the view never shows space past the end of the content; cursor-following
//! scrolls move by the minimal amount needed and never overshoot.

use std::ops::Range;

use textkit_buffer::DirtyLines;
use textkit_input::Point;

use crate::dirty_region::DirtyRegion;
use crate::layout::Extent;

/// How much of the document is scrolled out of view, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportOffset {
    pub x: f32,
    pub y: f32,
}

/// A viewport representing the visible portion of a document
#[derive(Debug, Clone)]
pub struct Viewport {
    offset: ViewportOffset,
    width: f32,
    height: f32,
    line_height: f32,
}

impl Viewport {
    /// Creates a new viewport with the given line height
    ///
    /// The viewport starts unscrolled with a zero size.
    /// Call `update_size()` once the view has been laid out.
    pub fn new(line_height: f32) -> Self {
        Self {
            offset: ViewportOffset::default(),
            width: 0.0,
            height: 0.0,
            line_height,
        }
    }

    pub fn offset(&self) -> ViewportOffset {
        self.offset
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Number of rows that fit fully in the view.
    pub fn visible_lines(&self) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        (self.height / self.line_height).floor() as usize
    }

    /// Converts a view-space point to document space.
    pub fn to_document(&self, pt: Point) -> (f32, f32) {
        (pt.x + self.offset.x, pt.y + self.offset.y)
    }

    /// Converts a document-space point to view space.
    pub fn to_view(&self, x: f32, y: f32) -> Point {
        Point::new(x - self.offset.x, y - self.offset.y)
    }

    /// Updates the view size and re-clamps the offset to the new valid bounds.
    ///
    /// Returns `true` if the offset changed.
    pub fn update_size(&mut self, width: f32, height: f32, content: Extent) -> bool {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.scroll_to(self.offset.x, self.offset.y, content)
    }

    /// Largest offset on each axis that still keeps the view filled.
    fn max_offset(&self, content: Extent) -> ViewportOffset {
        ViewportOffset {
            x: (content.width - self.width).max(0.0),
            y: (content.height - self.height).max(0.0),
        }
    }

    /// Scrolls so the document point `(x, y)` sits at the view's top-left,
    /// clamped to `[0, content - view]` on each axis.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_to(&mut self, x: f32, y: f32, content: Extent) -> bool {
        let max = self.max_offset(content);
        let new = ViewportOffset {
            x: x.clamp(0.0, max.x),
            y: y.clamp(0.0, max.y),
        };
        self.set_offset(new)
    }

    /// Scrolls by a relative amount (positive = right / down), clamped like
    /// [`Viewport::scroll_to`].
    pub fn scroll_by(&mut self, dx: f32, dy: f32, content: Extent) -> bool {
        self.scroll_to(self.offset.x + dx, self.offset.y + dy, content)
    }

    /// Adjusts the offset by the minimal amount that brings a caret at
    /// document point `caret` (top-left), `caret_width` wide and one line tall,
    /// fully into view.
    ///
    /// Returns `true` if the offset changed.
    pub fn make_visible(&mut self, caret: (f32, f32), caret_width: f32) -> bool {
        let (cx, cy) = caret;
        let mut new = self.offset;

        // A caret larger than the view is pinned to its leading edge
        if caret_width >= self.width {
            new.x = cx;
        } else if cx < new.x {
            new.x = cx;
        } else if cx + caret_width > new.x + self.width {
            new.x = cx + caret_width - self.width;
        }

        if self.line_height >= self.height {
            new.y = cy;
        } else if cy < new.y {
            new.y = cy;
        } else if cy + self.line_height > new.y + self.height {
            new.y = cy + self.line_height - self.height;
        }

        new.x = new.x.max(0.0);
        new.y = new.y.max(0.0);
        self.set_offset(new)
    }

    fn set_offset(&mut self, new: ViewportOffset) -> bool {
        if new == self.offset {
            return false;
        }
        tracing::trace!(x = new.x, y = new.y, "viewport scrolled");
        self.offset = new;
        true
    }

    /// Returns the range of document rows that intersect the view
    ///
    /// Partially visible rows at the top and bottom edges are included.
    pub fn visible_rows(&self, row_count: usize) -> Range<usize> {
        if self.line_height <= 0.0 {
            return 0..0;
        }
        let first = (self.offset.y / self.line_height).floor() as usize;
        let end = self.screen_end().min(row_count);
        first.min(end)..end
    }

    /// One past the last document row the view can show, ignoring the
    /// document's length.
    fn screen_end(&self) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        ((self.offset.y + self.height) / self.line_height).ceil() as usize
    }

    /// Converts buffer-space DirtyLines to screen-space DirtyRegion
    ///
    /// Rows outside the view produce no dirty region. Any horizontal
    /// scroll offset is irrelevant here since whole rows are repainted.
    pub fn dirty_lines_to_region(&self, dirty: &DirtyLines, row_count: usize) -> DirtyRegion {
        let visible = self.visible_rows(row_count);
        let (visible_start, visible_end) = (visible.start, visible.end);

        match *dirty {
            DirtyLines::None => DirtyRegion::None,

            DirtyLines::Single(line) => {
                if visible.contains(&line) {
                    DirtyRegion::row(line - visible_start)
                } else {
                    DirtyRegion::None
                }
            }

            DirtyLines::Range { from, to } => {
                let dirty_start = from.max(visible_start);
                let dirty_end = to.min(visible_end);
                if dirty_start < dirty_end {
                    DirtyRegion::rows(dirty_start - visible_start..dirty_end - visible_start)
                } else {
                    DirtyRegion::None
                }
            }

            DirtyLines::FromLineToEnd(line) => {
                if line <= visible_start {
                    // Rows shifted under the whole view
                    DirtyRegion::FullViewport
                } else if line < visible_end {
                    // Everything from the dirty row to the bottom of the view,
                    // including rows that were blank before a split
                    DirtyRegion::rows(line - visible_start..self.screen_end() - visible_start)
                } else {
                    DirtyRegion::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32, height: f32) -> Viewport {
        let mut vp = Viewport::new(20.0);
        vp.update_size(width, height, Extent::default());
        vp
    }

    const CONTENT: Extent = Extent {
        width: 500.0,
        height: 1000.0,
    };

    // ==================== Basic construction ====================

    #[test]
    fn test_new() {
        let vp = Viewport::new(16.0);
        assert_eq!(vp.offset(), ViewportOffset::default());
        assert_eq!(vp.visible_lines(), 0);
        assert_eq!(vp.line_height(), 16.0);
    }

    #[test]
    fn test_visible_lines() {
        assert_eq!(viewport(100.0, 205.0).visible_lines(), 10);
    }

    // ==================== Explicit scrolling ====================

    #[test]
    fn test_scroll_to_clamps_to_content() {
        let mut vp = viewport(100.0, 200.0);
        assert!(vp.scroll_to(1000.0, 5000.0, CONTENT));
        assert_eq!(vp.offset(), ViewportOffset { x: 400.0, y: 800.0 });

        assert!(vp.scroll_to(-10.0, -10.0, CONTENT));
        assert_eq!(vp.offset(), ViewportOffset::default());
    }

    #[test]
    fn test_scroll_to_same_offset_reports_no_change() {
        let mut vp = viewport(100.0, 200.0);
        assert!(!vp.scroll_to(0.0, 0.0, CONTENT));
    }

    #[test]
    fn test_scroll_by_accumulates() {
        let mut vp = viewport(100.0, 200.0);
        vp.scroll_by(0.0, 30.0, CONTENT);
        vp.scroll_by(5.0, 30.0, CONTENT);
        assert_eq!(vp.offset(), ViewportOffset { x: 5.0, y: 60.0 });
    }

    #[test]
    fn test_small_content_cannot_scroll() {
        let mut vp = viewport(100.0, 200.0);
        let small = Extent {
            width: 50.0,
            height: 60.0,
        };
        assert!(!vp.scroll_by(30.0, 30.0, small));
        assert_eq!(vp.offset(), ViewportOffset::default());
    }

    #[test]
    fn test_update_size_reclamps() {
        let mut vp = viewport(100.0, 200.0);
        vp.scroll_to(0.0, 800.0, CONTENT);
        assert!(vp.update_size(100.0, 400.0, CONTENT));
        assert_eq!(vp.offset().y, 600.0);
    }

    // ==================== make_visible ====================

    #[test]
    fn test_make_visible_noop_when_inside() {
        let mut vp = viewport(100.0, 200.0);
        assert!(!vp.make_visible((50.0, 40.0), 1.0));
    }

    #[test]
    fn test_make_visible_below_scrolls_minimally() {
        let mut vp = viewport(100.0, 200.0);
        // Caret row 12 spans y 240..260; view bottom must reach 260
        assert!(vp.make_visible((0.0, 240.0), 1.0));
        assert_eq!(vp.offset().y, 60.0);
    }

    #[test]
    fn test_make_visible_above_scrolls_to_caret_top() {
        let mut vp = viewport(100.0, 200.0);
        vp.scroll_to(0.0, 300.0, CONTENT);
        vp.make_visible((0.0, 100.0), 1.0);
        assert_eq!(vp.offset().y, 100.0);
    }

    #[test]
    fn test_make_visible_horizontal() {
        let mut vp = viewport(100.0, 200.0);
        vp.make_visible((150.0, 0.0), 2.0);
        assert_eq!(vp.offset().x, 52.0);

        vp.make_visible((10.0, 0.0), 2.0);
        assert_eq!(vp.offset().x, 10.0);
    }

    #[test]
    fn test_make_visible_in_view_shorter_than_a_line_is_stable() {
        let mut vp = viewport(100.0, 10.0);
        assert!(vp.make_visible((0.0, 40.0), 1.0));
        assert_eq!(vp.offset().y, 40.0);
        for _ in 0..3 {
            assert!(!vp.make_visible((0.0, 40.0), 1.0));
            assert_eq!(vp.offset().y, 40.0);
        }
    }

    #[test]
    fn test_make_visible_in_view_narrower_than_caret_is_stable() {
        let mut vp = viewport(1.0, 200.0);
        assert!(vp.make_visible((30.0, 0.0), 2.0));
        assert_eq!(vp.offset().x, 30.0);
        assert!(!vp.make_visible((30.0, 0.0), 2.0));
    }

    // ==================== Visible rows ====================

    #[test]
    fn test_visible_rows_includes_partial_rows() {
        let mut vp = viewport(100.0, 100.0);
        vp.scroll_to(0.0, 30.0, CONTENT);
        // y 30..130 touches rows 1 (20..40) through 6 (120..140)
        assert_eq!(vp.visible_rows(50), 1..7);
    }

    #[test]
    fn test_visible_rows_short_document() {
        let vp = viewport(100.0, 100.0);
        assert_eq!(vp.visible_rows(3), 0..3);
    }

    // ==================== DirtyLines → DirtyRegion ====================

    #[test]
    fn test_dirty_single_visible_line() {
        let mut vp = viewport(100.0, 200.0);
        vp.scroll_to(0.0, 100.0, CONTENT);
        let region = vp.dirty_lines_to_region(&DirtyLines::Single(7), 50);
        assert_eq!(region, DirtyRegion::row(2));
    }

    #[test]
    fn test_dirty_single_offscreen_line() {
        let vp = viewport(100.0, 200.0);
        let region = vp.dirty_lines_to_region(&DirtyLines::Single(30), 50);
        assert_eq!(region, DirtyRegion::None);
    }

    #[test]
    fn test_dirty_range_intersects_view() {
        let vp = viewport(100.0, 200.0);
        let region = vp.dirty_lines_to_region(&DirtyLines::Range { from: 8, to: 20 }, 50);
        assert_eq!(region, DirtyRegion::Lines { from: 8, to: 10 });
    }

    #[test]
    fn test_dirty_from_line_to_end_above_view_is_full() {
        let mut vp = viewport(100.0, 200.0);
        vp.scroll_to(0.0, 100.0, CONTENT);
        let region = vp.dirty_lines_to_region(&DirtyLines::FromLineToEnd(2), 50);
        assert_eq!(region, DirtyRegion::FullViewport);
    }

    #[test]
    fn test_dirty_from_line_to_end_inside_view() {
        let vp = viewport(100.0, 200.0);
        let region = vp.dirty_lines_to_region(&DirtyLines::FromLineToEnd(3), 50);
        assert_eq!(region, DirtyRegion::Lines { from: 3, to: 10 });
    }
}
