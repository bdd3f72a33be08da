//! Error type shared by layout, drawing and encoding.

use thiserror::Error;

/// Everything that can make a single render fail.
///
/// Precondition violations (`NoSeries`, `NoLabels`, `NoDataPoints`, `InvalidOptions`,
/// `CanvasTooSmall`) are reported before anything is drawn. Collaborator failures
/// (`Measure`, `Draw`, `Encode`, `Font`) carry the underlying message unchanged.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset has no series")]
    NoSeries,

    #[error("dataset has no labels")]
    NoLabels,

    #[error("dataset has no data points")]
    NoDataPoints,

    #[error("invalid chart options: {0}")]
    InvalidOptions(String),

    #[error("canvas {width}x{height} is too small to fit the plot area")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("text measurement failed: {0}")]
    Measure(String),

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("font error: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
