//! linechart_rs
//!
//! A headless line-chart rasterizer. Given timestamped labels and one or more
//! named series, it lays out the Y gridlines, X ticks, legend and polylines,
//! draws them onto an in-memory bitmap and returns a PNG ready to embed.
//!
//! ### Features
//! - Y axis with five gridlines and a left margin sized to the widest label
//! - X labels whose date format follows the time span (hours, days, months)
//! - Wrapped, centered legend under the plot (only for two or more series)
//! - Configurable palette and theme; output at 2× density by default
//! - Pure layout ([`LineChart::layout`]) testable without a canvas
//!
//! ### Example
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use linechart_rs::{ChartDataset, ChartOptions, LineChart, Series};
//!
//! let font = std::fs::read("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")?;
//! linechart_rs::register_font(Box::leak(font.into_boxed_slice()))?;
//! let labels = (1..=4).map(|d| Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()).collect();
//! let data = ChartDataset::new(labels, vec![Series::new("Processed", vec![1.0, 2.0, 3.0, 4.0])]);
//! let chart = LineChart::new(ChartOptions::default().with_size(400, 200))?;
//! let image = chart.render(&data)?;
//! println!("{}", image.img_tag());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod artifact;
pub mod error;
pub mod format;
pub mod models;
pub mod viz;

pub use artifact::ChartImage;
pub use error::{ChartError, Result};
pub use format::{StandardFormatter, ValueFormatter};
pub use models::{ChartDataset, ChartOptions, Series};
pub use viz::{ChartLayout, LineChart, register_font, render_line_chart};
