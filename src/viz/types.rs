//! Public types and constants for the visualization module.

use serde::{Deserialize, Serialize};

/// Opaque RGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
}

/// A point in device pixels (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Font used for all chart text. Family is always the registered sans-serif face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Size in device pixels (already multiplied by the output scale).
    pub size_px: f64,
}

/// Measured extent of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

/// Colors for everything that is not a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Whole canvas, behind the plot and the legend.
    pub background: Color,
    /// Plot rectangle fill.
    pub plot_background: Color,
    /// Gridlines and tick marks.
    pub line: Color,
    /// Axis and legend labels.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            plot_background: Color(0xe4, 0xe4, 0xe4),
            line: Color(0xc0, 0xc0, 0xc0),
            text: Color(0x33, 0x33, 0x33),
        }
    }
}

/// Derived per-render geometry. Computed once by [`crate::viz::LineChart::layout`]
/// and only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Device canvas width (nominal width × scale).
    pub width: u32,
    /// Device canvas height (nominal height × scale).
    pub height: u32,
    pub scale: f64,
    /// Space reserved left of the plot for Y labels.
    pub left_margin: f64,
    /// Space reserved at the bottom of the canvas for the legend (0 without legend).
    pub legend_height: f64,
    /// Area the series are drawn into.
    pub plot: Rect,
}

impl CanvasGeometry {
    /// Map a value on the Y axis to a device row. `ceiling` must be positive.
    pub fn value_to_y(&self, value: f64, ceiling: f64) -> f64 {
        let v = value.clamp(0.0, ceiling);
        self.plot.bottom() - (v / ceiling) * self.plot.height
    }
}

// Nominal (unscaled) layout constants in pixels.
pub(crate) const TOP_PADDING: f64 = 10.0;
pub(crate) const RIGHT_PADDING: f64 = 20.0;
/// Band under the plot reserved for X tick labels.
pub(crate) const X_AXIS_BAND: f64 = 40.0;
pub(crate) const Y_LABEL_OFFSET: f64 = 10.0;
pub(crate) const X_LABEL_OFFSET: f64 = 10.0;
pub(crate) const TICK_LENGTH: f64 = 5.0;
pub(crate) const GRID_STROKE: f64 = 1.0;
pub(crate) const SERIES_STROKE: f64 = 2.0;
