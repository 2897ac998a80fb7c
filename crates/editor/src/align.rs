//! Horizontal alignment of lines inside the view.
//!
//! The configured [`Alignment`] is turned into an [`AlignStrategy`] once, when
//! the control is built. Every layout query (hit-testing, caret placement,
//! painting) asks the strategy for a line's x origin; nothing else in the
//! control branches on alignment.

use serde::{Deserialize, Serialize};

/// Alignment variants selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Builds the strategy object for this variant.
    pub fn strategy(self) -> Box<dyn AlignStrategy> {
        match self {
            Alignment::Left => Box::new(LeftAlign),
            Alignment::Center => Box::new(CenterAlign),
            Alignment::Right => Box::new(RightAlign),
        }
    }
}

/// Computes where a line starts horizontally.
pub trait AlignStrategy: std::fmt::Debug {
    /// Returns the x origin, in document pixels, of a line `line_width` wide
    /// inside a view offering `available_width` pixels. Never negative: a line
    /// wider than the view starts at 0 and scrolls.
    fn origin_x(&self, line_width: f32, available_width: f32) -> f32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LeftAlign;

impl AlignStrategy for LeftAlign {
    fn origin_x(&self, _line_width: f32, _available_width: f32) -> f32 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CenterAlign;

impl AlignStrategy for CenterAlign {
    fn origin_x(&self, line_width: f32, available_width: f32) -> f32 {
        ((available_width - line_width) / 2.0).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RightAlign;

impl AlignStrategy for RightAlign {
    fn origin_x(&self, line_width: f32, available_width: f32) -> f32 {
        (available_width - line_width).max(0.0)
    }
}
