//! Line chart composition: layout first, then drawing.
//!
//! - [`LineChart::layout`] is pure: it measures text and produces a [`ChartLayout`]
//!   holding every position the chart needs (margins, gridlines, ticks, legend, series).
//! - [`LineChart::draw`] replays that layout onto any [`Canvas`] without recomputing it.
//! - [`LineChart::render`] does both on an in-memory bitmap and returns a PNG [`ChartImage`].

pub mod axis;
pub mod canvas;
pub mod legend;
pub mod palette;
pub mod series;
pub mod text;
pub mod types;

use chrono::FixedOffset;
use plotters::prelude::IntoDrawingArea;
use plotters_bitmap::BitMapBackend;

use crate::artifact::{self, ChartImage};
use crate::error::{ChartError, Result};
use crate::format::{StandardFormatter, ValueFormatter};
use crate::models::{ChartDataset, ChartOptions};

pub use axis::{DateFormat, XTick, YGridline};
pub use canvas::{Canvas, PlottersCanvas, register_font};
pub use legend::LegendLayout;
pub use palette::Palette;
pub use series::SeriesPath;
pub use text::{HeuristicMeasurer, TextMeasurer};
pub use types::{CanvasGeometry, Color, FontSpec, Point, Rect, TextSize, Theme};

use types::{RIGHT_PADDING, TOP_PADDING, X_AXIS_BAND};

/// Everything needed to draw one chart, in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub geometry: CanvasGeometry,
    /// Value at the top gridline; never zero.
    pub value_ceiling: f64,
    pub font: FontSpec,
    pub y_gridlines: Vec<YGridline>,
    pub x_format: DateFormat,
    pub x_ticks: Vec<XTick>,
    pub series: Vec<SeriesPath>,
    pub legend: LegendLayout,
}

/// A configured line chart renderer. Holds no per-render state, so one instance
/// can serve any number of renders, from any number of threads.
pub struct LineChart {
    options: ChartOptions,
    formatter: Box<dyn ValueFormatter>,
}

impl LineChart {
    pub fn new(options: ChartOptions) -> Result<Self> {
        options.validate()?;
        let formatter = Box::new(StandardFormatter::new(&options.locale));
        Ok(Self { options, formatter })
    }

    /// Replace the value formatter used for Y labels.
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Compute the full layout for `dataset`.
    ///
    /// Order matters: the left margin comes from the Y labels, the legend height
    /// from the canvas width, and only then is the plot rectangle fixed and the
    /// gridlines, ticks and series placed inside it.
    pub fn layout<M: TextMeasurer + ?Sized>(
        &self,
        dataset: &ChartDataset,
        measurer: &M,
    ) -> Result<ChartLayout> {
        dataset.validate()?;
        let opts = &self.options;
        let (width, height) = opts.device_size()?;
        let s = opts.scale as f64;
        let font = FontSpec {
            size_px: opts.font_px * s,
        };
        let offset = FixedOffset::east_opt(opts.utc_offset_minutes * 60).ok_or_else(|| {
            ChartError::InvalidOptions(format!(
                "utc offset out of range: {} minutes",
                opts.utc_offset_minutes
            ))
        })?;

        // 1) left margin from the widest Y label
        let ceiling = axis::value_ceiling(dataset);
        let token = dataset.y_axis_formatter.as_deref();
        let y_labels =
            axis::measure_y_labels(measurer, &font, ceiling, token, self.formatter.as_ref())?;
        let left_margin = axis::left_margin(&y_labels, s);

        // 2) legend band at the bottom, sized from the canvas width
        let legend = legend::layout_legend(
            measurer,
            &font,
            &dataset.series_names(),
            &opts.palette,
            width as f64,
            height as f64,
            s,
        )?;

        // 3) plot rectangle
        let plot = Rect::new(
            left_margin,
            TOP_PADDING * s,
            width as f64 - left_margin - RIGHT_PADDING * s,
            height as f64 - TOP_PADDING * s - X_AXIS_BAND * s - legend.height,
        );
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::CanvasTooSmall {
                width: opts.width,
                height: opts.height,
            });
        }
        let geometry = CanvasGeometry {
            width,
            height,
            scale: s,
            left_margin,
            legend_height: legend.height,
            plot,
        };
        log::debug!("chart geometry: {:?}", geometry);

        let y_gridlines = axis::y_gridlines(&geometry, ceiling, y_labels);
        let x_format = DateFormat::for_labels(&dataset.labels);
        let x_ticks = axis::x_ticks(measurer, &font, &dataset.labels, x_format, &offset, &plot)?;
        let series = dataset
            .series
            .iter()
            .enumerate()
            .map(|(i, ser)| series::series_path(i, ser, &geometry, ceiling, &opts.palette))
            .collect();

        Ok(ChartLayout {
            geometry,
            value_ceiling: ceiling,
            font,
            y_gridlines,
            x_format,
            x_ticks,
            series,
            legend,
        })
    }

    /// Lay out `dataset` with the canvas' own text metrics and draw it.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        dataset: &ChartDataset,
    ) -> Result<ChartLayout> {
        let layout = self.layout(dataset, &*canvas)?;
        self.draw_layout(canvas, &layout)?;
        Ok(layout)
    }

    /// Draw a finished layout: backgrounds, Y axis, X axis, series, legend.
    pub fn draw_layout<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: &ChartLayout,
    ) -> Result<()> {
        let theme = &self.options.theme;
        let g = &layout.geometry;
        canvas.fill_rect(
            Rect::new(0.0, 0.0, g.width as f64, g.height as f64),
            theme.background,
        )?;
        canvas.fill_rect(g.plot, theme.plot_background)?;
        axis::draw_y_axis(canvas, g, &layout.y_gridlines, &layout.font, theme.line, theme.text)?;
        axis::draw_x_axis(canvas, g, &layout.x_ticks, &layout.font, theme.line, theme.text)?;
        series::draw_series(canvas, &layout.series)?;
        legend::draw_legend(canvas, &layout.legend, &layout.font, theme.text)?;
        Ok(())
    }

    /// Render `dataset` to a PNG.
    ///
    /// A font must have been registered with [`register_font`] first; otherwise
    /// text measurement fails and the error is returned.
    pub fn render(&self, dataset: &ChartDataset) -> Result<ChartImage> {
        dataset.validate()?;
        let (width, height) = self.options.device_size()?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(3))
            .ok_or_else(|| {
                ChartError::InvalidOptions(format!("raster {width}x{height} too large"))
            })?;
        let mut buffer = vec![0u8; len];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            let mut canvas = PlottersCanvas::new(root);
            self.draw(&mut canvas, dataset)?;
            canvas.present()?;
        }
        artifact::encode_png(buffer, width, height, self.options.scale)
    }
}

/// Convenience: render with the given options and the default formatter.
pub fn render_line_chart(dataset: &ChartDataset, options: &ChartOptions) -> Result<ChartImage> {
    LineChart::new(options.clone())?.render(dataset)
}
