use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::viz::palette::Palette;
use crate::viz::types::Theme;

/// One named line on the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub name: String,
    /// One value per plotted point, in label order.
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Input of a render: category timestamps plus the series plotted against them.
///
/// Parsed from JSON such as
/// ```json
/// { "labels": ["2024-03-01T00:00:00Z", "2024-03-02T00:00:00Z"],
///   "series": [{ "name": "Files", "data": [3, 5] }],
///   "y_axis_formatter": "filesize" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<DateTime<Utc>>,
    pub series: Vec<Series>,
    /// Formatter token for Y labels; without one, values are shown as integers.
    #[serde(default)]
    pub y_axis_formatter: Option<String>,
}

impl ChartDataset {
    pub fn new(labels: Vec<DateTime<Utc>>, series: Vec<Series>) -> Self {
        Self {
            labels,
            series,
            y_axis_formatter: None,
        }
    }

    pub fn with_y_axis_formatter(mut self, token: impl Into<String>) -> Self {
        self.y_axis_formatter = Some(token.into());
        self
    }

    /// Check the preconditions of a render: at least one series, one label and one point.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        if self.labels.is_empty() {
            return Err(ChartError::NoLabels);
        }
        if self.series.iter().all(|s| s.data.is_empty()) {
            return Err(ChartError::NoDataPoints);
        }
        Ok(())
    }

    /// Largest finite value across all series.
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Earliest and latest label.
    pub fn label_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let min = self.labels.iter().min()?;
        let max = self.labels.iter().max()?;
        Some((*min, *max))
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Rendering options. Every field has a default, so a partial JSON object is enough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartOptions {
    /// Nominal output width in pixels.
    pub width: u32,
    /// Nominal output height in pixels.
    pub height: u32,
    /// Output density; the raster is `width*scale × height*scale`.
    pub scale: u32,
    /// Nominal label font size in pixels.
    pub font_px: f64,
    /// Offset applied to labels before formatting them as dates.
    pub utc_offset_minutes: i32,
    /// Locale tag for number formatting (`en`, `de`, …).
    pub locale: String,
    pub palette: Palette,
    pub theme: Theme,
}

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 300;
/// Largest raster side, in device pixels, a render may allocate.
pub const MAX_DEVICE_SIDE: u32 = 16_384;

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: 2,
            font_px: 12.0,
            utc_offset_minutes: 0,
            locale: "en".to_string(),
            palette: Palette::default(),
            theme: Theme::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Size of the raster actually drawn (nominal size times scale).
    ///
    /// Fails when either side exceeds [`MAX_DEVICE_SIDE`].
    pub fn device_size(&self) -> Result<(u32, u32)> {
        let side = |nominal: u32| {
            nominal
                .checked_mul(self.scale)
                .filter(|px| *px <= MAX_DEVICE_SIDE)
        };
        match (side(self.width), side(self.height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(ChartError::InvalidOptions(format!(
                "raster {}x{} at scale {} exceeds {} px per side",
                self.width, self.height, self.scale, MAX_DEVICE_SIDE
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidOptions(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.scale == 0 {
            return Err(ChartError::InvalidOptions("scale must be at least 1".into()));
        }
        self.device_size()?;
        if !self.font_px.is_finite() || self.font_px <= 0.0 {
            return Err(ChartError::InvalidOptions(format!(
                "font size must be positive, got {}",
                self.font_px
            )));
        }
        // chrono rejects offsets of a day or more
        if self.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ChartError::InvalidOptions(format!(
                "utc offset out of range: {} minutes",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}
