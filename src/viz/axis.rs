//! Axis layout: Y gridlines with their labels and the left margin they need,
//! X tick selection and the date format used for X labels.

use chrono::{DateTime, FixedOffset, Utc};

use super::canvas::Canvas;
use super::text::TextMeasurer;
use super::types::{
    CanvasGeometry, Color, FontSpec, GRID_STROKE, Point, Rect, TICK_LENGTH, TextSize,
    X_LABEL_OFFSET, Y_LABEL_OFFSET,
};
use crate::error::Result;
use crate::format::ValueFormatter;
use crate::models::ChartDataset;

/// Gridlines sit at `k/4` of the value ceiling for `k in 0..=4`.
pub const Y_DIVISIONS: usize = 4;
/// Upper bound on X labels drawn, whatever the label count.
pub const MAX_X_TICKS: usize = 10;

/// Largest finite value in the dataset, or `1.0` when that is not positive
/// (no finite values, all zero, all negative).
pub fn value_ceiling(dataset: &ChartDataset) -> f64 {
    match dataset.max_value() {
        Some(v) if v > 0.0 => v,
        _ => 1.0,
    }
}

/// Without a formatter token, axis values are shown as integers (ties to even).
pub fn axis_value(value: f64, token: Option<&str>) -> f64 {
    match token {
        Some(t) if !t.trim().is_empty() => value,
        _ => value.round_ties_even(),
    }
}

/// A formatted and measured Y label.
#[derive(Debug, Clone, PartialEq)]
pub struct YLabel {
    pub value: f64,
    pub text: String,
    pub size: TextSize,
}

/// Format and measure the labels for all gridlines, bottom (`k = 0`) first.
pub fn measure_y_labels<M: TextMeasurer + ?Sized>(
    measurer: &M,
    font: &FontSpec,
    ceiling: f64,
    token: Option<&str>,
    formatter: &dyn ValueFormatter,
) -> Result<Vec<YLabel>> {
    (0..=Y_DIVISIONS)
        .map(|k| {
            let value = (ceiling / Y_DIVISIONS as f64) * k as f64;
            let text = formatter.format(axis_value(value, token), token, true);
            let size = measurer.measure(&text, font)?;
            Ok(YLabel { value, text, size })
        })
        .collect()
}

/// Room left of the plot: widest label plus the label pad.
pub fn left_margin(labels: &[YLabel], scale: f64) -> f64 {
    let widest = labels.iter().map(|l| l.size.width).fold(0.0, f64::max);
    widest.ceil() + Y_LABEL_OFFSET * scale
}

/// One horizontal reference line.
#[derive(Debug, Clone, PartialEq)]
pub struct YGridline {
    pub value: f64,
    pub y: f64,
    /// `None` for the bottom line, whose label would collide with the X labels.
    pub label: Option<YLabel>,
}

pub fn y_gridlines(geometry: &CanvasGeometry, ceiling: f64, labels: Vec<YLabel>) -> Vec<YGridline> {
    labels
        .into_iter()
        .enumerate()
        .map(|(k, label)| YGridline {
            value: label.value,
            y: geometry.value_to_y(label.value, ceiling),
            label: (k > 0).then_some(label),
        })
        .collect()
}

/// How X labels are printed, chosen from the span of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `14:00`, for spans of at most a day.
    HourOfDay,
    /// `7 Mar`, up to 180 days.
    DayMonth,
    /// `Mar '24`, anything longer.
    MonthYear,
}

impl DateFormat {
    pub fn for_span_days(total_days: i64) -> Self {
        if total_days <= 1 {
            DateFormat::HourOfDay
        } else if total_days <= 180 {
            DateFormat::DayMonth
        } else {
            DateFormat::MonthYear
        }
    }

    /// Format for a set of labels; whole days between the earliest and latest one.
    pub fn for_labels(labels: &[DateTime<Utc>]) -> Self {
        let min = labels.iter().min();
        let max = labels.iter().max();
        let days = match (min, max) {
            (Some(a), Some(b)) => (*b - *a).num_days(),
            _ => 0,
        };
        Self::for_span_days(days)
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::HourOfDay => "%H:00",
            DateFormat::DayMonth => "%-d %b",
            DateFormat::MonthYear => "%b '%y",
        }
    }

    pub fn format(&self, ts: &DateTime<Utc>, offset: &FixedOffset) -> String {
        ts.with_timezone(offset).format(self.pattern()).to_string()
    }
}

/// Distance between labelled indices, chosen so at most [`MAX_X_TICKS`] labels are drawn.
pub fn tick_stride(label_count: usize) -> usize {
    label_count.div_ceil(MAX_X_TICKS).max(1)
}

pub fn tick_indices(label_count: usize) -> Vec<usize> {
    (0..label_count).step_by(tick_stride(label_count)).collect()
}

/// One labelled position on the X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct XTick {
    pub index: usize,
    pub x: f64,
    pub text: String,
    pub size: TextSize,
}

pub fn x_ticks<M: TextMeasurer + ?Sized>(
    measurer: &M,
    font: &FontSpec,
    labels: &[DateTime<Utc>],
    format: DateFormat,
    offset: &FixedOffset,
    plot: &Rect,
) -> Result<Vec<XTick>> {
    let step = if labels.len() > 1 {
        plot.width / (labels.len() - 1) as f64
    } else {
        0.0
    };
    tick_indices(labels.len())
        .into_iter()
        .map(|index| {
            let text = format.format(&labels[index], offset);
            let size = measurer.measure(&text, font)?;
            Ok(XTick {
                index,
                x: plot.x + index as f64 * step,
                text,
                size,
            })
        })
        .collect()
}

/// Gridlines across the plot, ticks left of it and right-aligned labels.
pub fn draw_y_axis<C: Canvas + ?Sized>(
    canvas: &mut C,
    geometry: &CanvasGeometry,
    gridlines: &[YGridline],
    font: &FontSpec,
    line: Color,
    text: Color,
) -> Result<()> {
    let s = geometry.scale;
    let plot = geometry.plot;
    for g in gridlines {
        canvas.draw_line(
            Point::new(plot.x, g.y),
            Point::new(plot.right(), g.y),
            line,
            GRID_STROKE * s,
        )?;
        let Some(label) = &g.label else { continue };
        canvas.draw_line(
            Point::new(plot.x - TICK_LENGTH * s, g.y),
            Point::new(plot.x, g.y),
            line,
            GRID_STROKE * s,
        )?;
        let origin = Point::new(
            plot.x - Y_LABEL_OFFSET * s - label.size.width,
            g.y - label.size.height / 2.0,
        );
        canvas.draw_text(&label.text, origin, font, text)?;
    }
    Ok(())
}

/// Short marks under the plot with a centered label below each.
pub fn draw_x_axis<C: Canvas + ?Sized>(
    canvas: &mut C,
    geometry: &CanvasGeometry,
    ticks: &[XTick],
    font: &FontSpec,
    line: Color,
    text: Color,
) -> Result<()> {
    let s = geometry.scale;
    let bottom = geometry.plot.bottom();
    for t in ticks {
        canvas.draw_line(
            Point::new(t.x, bottom),
            Point::new(t.x, bottom + TICK_LENGTH * s),
            line,
            GRID_STROKE * s,
        )?;
        let origin = Point::new(t.x - t.size.width / 2.0, bottom + X_LABEL_OFFSET * s);
        canvas.draw_text(&t.text, origin, font, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_caps_tick_count() {
        assert_eq!(tick_stride(0), 1);
        assert_eq!(tick_stride(4), 1);
        assert_eq!(tick_stride(10), 1);
        assert_eq!(tick_stride(19), 2);
        assert_eq!(tick_stride(1000), 100);
        for n in [1, 9, 10, 11, 15, 19, 99, 101, 1000, 1234] {
            assert!(tick_indices(n).len() <= MAX_X_TICKS, "{n} labels");
        }
    }

    #[test]
    fn integral_coercion_only_without_token() {
        assert_eq!(axis_value(2.5, None), 2.0);
        assert_eq!(axis_value(3.5, None), 4.0);
        assert_eq!(axis_value(2.5, Some("  ")), 2.0);
        assert_eq!(axis_value(2.5, Some("percent")), 2.5);
    }
}
