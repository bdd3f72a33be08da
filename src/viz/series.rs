//! Series geometry: data points to device coordinates, then strokes.

use super::canvas::Canvas;
use super::palette::Palette;
use super::types::{CanvasGeometry, Color, Point, SERIES_STROKE};
use crate::error::Result;
use crate::models::Series;

/// Device-space shape of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPath {
    pub series_index: usize,
    pub color: Color,
    pub stroke_width: f64,
    /// Straight segments between consecutive finite points.
    pub segments: Vec<(Point, Point)>,
    /// Finite points without a finite neighbour (e.g. a one-point series).
    pub dots: Vec<Point>,
}

/// Map every value of `series` onto the plot. Non-finite values map to `None`.
///
/// The horizontal step uses the series' own length, so series shorter or longer
/// than the label list still span the full plot width.
pub fn project_points(
    series: &Series,
    geometry: &CanvasGeometry,
    ceiling: f64,
) -> Vec<Option<Point>> {
    let plot = geometry.plot;
    let step = match series.data.len() {
        0 | 1 => 0.0,
        n => plot.width / (n - 1) as f64,
    };
    series
        .data
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.is_finite()
                .then(|| Point::new(plot.x + i as f64 * step, geometry.value_to_y(*v, ceiling)))
        })
        .collect()
}

pub fn series_path(
    index: usize,
    series: &Series,
    geometry: &CanvasGeometry,
    ceiling: f64,
    palette: &Palette,
) -> SeriesPath {
    let points = project_points(series, geometry, ceiling);

    let segments = points
        .windows(2)
        .filter_map(|w| match (w[0], w[1]) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect();

    let dots = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let p = (*p)?;
            let prev = i.checked_sub(1).and_then(|j| points[j]);
            let next = points.get(i + 1).copied().flatten();
            (prev.is_none() && next.is_none()).then_some(p)
        })
        .collect();

    SeriesPath {
        series_index: index,
        color: palette.color(index),
        stroke_width: SERIES_STROKE * geometry.scale,
        segments,
        dots,
    }
}

pub fn draw_series<C: Canvas + ?Sized>(canvas: &mut C, paths: &[SeriesPath]) -> Result<()> {
    for path in paths {
        log::trace!(
            "series {}: {} segments, {} dots",
            path.series_index,
            path.segments.len(),
            path.dots.len()
        );
        for (a, b) in &path.segments {
            canvas.draw_line(*a, *b, path.color, path.stroke_width)?;
        }
        for p in &path.dots {
            canvas.fill_ellipse(*p, path.stroke_width, path.color)?;
        }
    }
    Ok(())
}
