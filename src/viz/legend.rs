//! Legend layout and drawing.
//!
//! Entries (`● name`) flow left to right and wrap into rows that are each
//! centered on the canvas. The band sits at the bottom of the canvas and its
//! height is taken away from the plot before the axes are laid out.

use super::canvas::Canvas;
use super::palette::Palette;
use super::text::{TextMeasurer, truncate_to_width};
use super::types::{Color, FontSpec, Point, TextSize};
use crate::error::Result;

// Nominal layout constants (multiplied by the output scale).
const PADDING: f64 = 10.0;
const MARKER_DIAMETER: f64 = 10.0;
const ROW_SPACING: f64 = 5.0;
const MARKER_TO_TEXT_GAP: f64 = 3.0;
const ENTRY_SPACING: f64 = 10.0;
/// Gap kept free under the last row.
const BOTTOM_BUFFER: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series_index: usize,
    /// Series name, possibly truncated to fit a row.
    pub label: String,
    pub label_size: TextSize,
    pub color: Color,
    pub marker_center: Point,
    pub marker_radius: f64,
    /// Top-left corner of the label text.
    pub text_origin: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub entries: Vec<LegendEntry>,
    /// Left edge of the first marker to the end of the last label.
    pub width: f64,
    pub top: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegendLayout {
    pub rows: Vec<LegendRow>,
    /// Vertical space consumed at the bottom of the canvas, 0 without legend.
    pub height: f64,
}

impl LegendLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pack the legend for `names` onto a canvas of the given device size.
///
/// A single series needs no legend: fewer than two names yield an empty layout.
pub fn layout_legend<M: TextMeasurer + ?Sized>(
    measurer: &M,
    font: &FontSpec,
    names: &[&str],
    palette: &Palette,
    canvas_width: f64,
    canvas_height: f64,
    scale: f64,
) -> Result<LegendLayout> {
    if names.len() < 2 {
        return Ok(LegendLayout::default());
    }

    let padding = PADDING * scale;
    let diameter = MARKER_DIAMETER * scale;
    let gap = MARKER_TO_TEXT_GAP * scale;
    let spacing = ENTRY_SPACING * scale;
    let row_height = diameter + ROW_SPACING * scale;
    let max_text_w = (canvas_width - 2.0 * padding - diameter - gap).max(0.0);

    // Pass 1: greedy packing into rows
    let mut rows: Vec<Vec<(usize, String, TextSize)>> = Vec::new();
    let mut cur: Vec<(usize, String, TextSize)> = Vec::new();
    let mut x = padding;
    for (i, name) in names.iter().enumerate() {
        let label = truncate_to_width(measurer, name, font, max_text_w)?;
        let size = measurer.measure(&label, font)?;
        let entry_w = diameter + gap + size.width;
        if !cur.is_empty() && x + entry_w + padding > canvas_width {
            rows.push(std::mem::take(&mut cur));
            x = padding;
        }
        x += entry_w + spacing;
        cur.push((i, label, size));
    }
    if !cur.is_empty() {
        rows.push(cur);
    }

    let content_h = rows.len() as f64 * row_height + padding;
    let height = content_h.ceil() + BOTTOM_BUFFER * scale;
    let first_top = canvas_height - BOTTOM_BUFFER * scale - content_h + padding;

    // Pass 2: center each row on its own and place markers and labels
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(r, items)| {
            let width = items
                .iter()
                .map(|(_, _, size)| diameter + gap + size.width)
                .sum::<f64>()
                + spacing * items.len().saturating_sub(1) as f64;
            let top = first_top + r as f64 * row_height;
            let mut x = (canvas_width - width) / 2.0;
            let entries = items
                .into_iter()
                .map(|(series_index, label, label_size)| {
                    let entry = LegendEntry {
                        series_index,
                        color: palette.color(series_index),
                        marker_center: Point::new(x + diameter / 2.0, top + diameter / 2.0),
                        marker_radius: diameter / 2.0,
                        text_origin: Point::new(
                            x + diameter + gap,
                            top + (diameter - label_size.height) / 2.0,
                        ),
                        label,
                        label_size,
                    };
                    x += diameter + gap + label_size.width + spacing;
                    entry
                })
                .collect();
            LegendRow {
                entries,
                width,
                top,
            }
        })
        .collect();

    Ok(LegendLayout { rows, height })
}

pub fn draw_legend<C: Canvas + ?Sized>(
    canvas: &mut C,
    legend: &LegendLayout,
    font: &FontSpec,
    text: Color,
) -> Result<()> {
    for entry in legend.rows.iter().flat_map(|r| r.entries.iter()) {
        canvas.fill_ellipse(entry.marker_center, entry.marker_radius, entry.color)?;
        canvas.draw_text(&entry.label, entry.text_origin, font, text)?;
    }
    Ok(())
}
