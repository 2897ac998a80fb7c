//! Which rows of the view need repainting.
//!
//! Rows here are counted from the top edge of the view, not from the start of
//! the document. [`Viewport::dirty_lines_to_region`] translates the document
//! rows reported by the buffer into this form.
//!
//! [`Viewport::dirty_lines_to_region`]: crate::Viewport::dirty_lines_to_region

use std::ops::Range;

/// Repaint request in view rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyRegion {
    /// Nothing visible changed
    #[default]
    None,
    /// View rows `from..to`
    Lines { from: usize, to: usize },
    /// Everything, e.g. after a scroll
    FullViewport,
}

impl DirtyRegion {
    /// One view row.
    pub fn row(row: usize) -> Self {
        Self::rows(row..row + 1)
    }

    /// A span of view rows. An empty span is `None`.
    pub fn rows(span: Range<usize>) -> Self {
        if span.is_empty() {
            DirtyRegion::None
        } else {
            DirtyRegion::Lines {
                from: span.start,
                to: span.end,
            }
        }
    }

    pub fn is_none(&self) -> bool {
        *self == DirtyRegion::None
    }

    /// True if view row `row` must be repainted.
    pub fn contains(&self, row: usize) -> bool {
        match *self {
            DirtyRegion::None => false,
            DirtyRegion::Lines { from, to } => (from..to).contains(&row),
            DirtyRegion::FullViewport => true,
        }
    }

    /// Smallest region covering both `self` and `other`. Gaps between two
    /// spans are included.
    pub fn union(self, other: DirtyRegion) -> DirtyRegion {
        use DirtyRegion::{FullViewport, Lines, None};
        match (self, other) {
            (FullViewport, _) | (_, FullViewport) => FullViewport,
            (None, region) | (region, None) => region,
            (Lines { from: a, to: b }, Lines { from: c, to: d }) => Lines {
                from: a.min(c),
                to: b.max(d),
            },
        }
    }

    /// Accumulates `other` into `self`.
    pub fn merge(&mut self, other: DirtyRegion) {
        *self = self.union(other);
    }
}
