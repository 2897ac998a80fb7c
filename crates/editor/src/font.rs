//! Font metrics collaborator.
//!
//! The control never rasterizes text itself. It only needs two measurements
//! from whatever renders it: the pixel width of a run of text and the height
//! of one line. Hosts implement [`FontMetrics`] over their real font stack.
//!
//! [`MonospaceMetrics`] is the built-in implementation for fixed-pitch fonts.
//! For a monospace font, layout is trivial:
//! - x = display_columns(prefix) * advance_width
//! - y = row * line_height

use unicode_width::UnicodeWidthStr;

/// Measures text for layout and hit-testing.
///
/// Both methods must be infallible and deterministic for the duration of a
/// frame; the control assumes `text_width` is monotonic in prefix length.
pub trait FontMetrics {
    /// Width of `text` in pixels when drawn on one line.
    fn text_width(&self, text: &str) -> f32;

    /// Height of one line in pixels.
    fn line_height(&self) -> f32;
}

// =============================================================================
// MonospaceMetrics
// =============================================================================

/// Metrics for a fixed-pitch font.
///
/// Widths are measured in display cells via `unicode-width`, so CJK and
/// emoji glyphs occupy two cells and combining marks occupy none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Width of a single cell
    pub advance_width: f32,
    /// Height of a line (ascent + descent + leading)
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(advance_width: f32, line_height: f32) -> Self {
        Self {
            advance_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    /// 8x16 cells, a common bitmap terminal font size.
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.width() as f32 * self.advance_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
