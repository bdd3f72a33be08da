//! The drawing surface charts are rendered onto, and its plotters implementation.

use plotters::coord::Shift;
use std::sync::Mutex;

use plotters::prelude::{
    Circle, DrawingArea, DrawingBackend, PathElement, RGBColor, Rectangle, Text,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color as _, FontFamily, FontStyle, TextStyle};

use super::text::TextMeasurer;
use super::types::{Color, FontSpec, Point, Rect, TextSize};
use crate::error::{ChartError, Result};

/// Drawing primitives in device pixels. Text is positioned by its top-left corner.
pub trait Canvas: TextMeasurer {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;
    fn draw_line(&mut self, from: Point, to: Point, color: Color, stroke_width: f64) -> Result<()>;
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &FontSpec,
        color: Color,
    ) -> Result<()>;
    fn fill_ellipse(&mut self, center: Point, radius: f64, color: Color) -> Result<()>;
}

static FONT_REGISTERED: Mutex<bool> = Mutex::new(false);

/// Register the face used for all chart text. Call once at startup.
///
/// The `ab_glyph` text path does not discover system fonts, so the host has to
/// hand one over before rendering. Only the first valid face is kept: later
/// calls return `Ok` and leave the registry untouched, so every render
/// measures and draws with the same face.
pub fn register_font(bytes: &'static [u8]) -> Result<()> {
    let mut registered = FONT_REGISTERED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if *registered {
        log::debug!("font already registered, ignoring new face");
        return Ok(());
    }
    plotters::style::register_font("sans-serif", FontStyle::Normal, bytes)
        .map_err(|_| ChartError::Font("not a valid TrueType/OpenType font".into()))?;
    *registered = true;
    Ok(())
}

impl From<Color> for RGBColor {
    fn from(c: Color) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

#[inline]
fn px(v: f64) -> i32 {
    v.round() as i32
}

/// [`Canvas`] over any plotters drawing area.
pub struct PlottersCanvas<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
}

impl<DB: DrawingBackend> PlottersCanvas<DB> {
    pub fn new(area: DrawingArea<DB, Shift>) -> Self {
        Self { area }
    }

    /// Flush pending drawing to the backend.
    pub fn present(&self) -> Result<()> {
        self.area
            .present()
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))
    }

    fn text_style<'a>(font: &FontSpec, color: &'a RGBColor) -> TextStyle<'a> {
        TextStyle::from((FontFamily::SansSerif, font.size_px))
            .color(color)
            .pos(Pos::new(HPos::Left, VPos::Top))
    }
}

impl<DB: DrawingBackend> TextMeasurer for PlottersCanvas<DB> {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize> {
        let black = RGBColor(0, 0, 0);
        let style = Self::text_style(font, &black);
        let (w, h) = self
            .area
            .estimate_text_size(text, &style)
            .map_err(|e| ChartError::Measure(format!("{:?}", e)))?;
        Ok(TextSize {
            width: w as f64,
            height: h as f64,
        })
    }
}

impl<DB: DrawingBackend> Canvas for PlottersCanvas<DB> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.area
            .draw(&Rectangle::new(
                [(px(rect.x), px(rect.y)), (px(rect.right()), px(rect.bottom()))],
                RGBColor::from(color).filled(),
            ))
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, stroke_width: f64) -> Result<()> {
        let width = stroke_width.round().max(1.0) as u32;
        self.area
            .draw(&PathElement::new(
                vec![(px(from.x), px(from.y)), (px(to.x), px(to.y))],
                RGBColor::from(color).stroke_width(width),
            ))
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: &FontSpec,
        color: Color,
    ) -> Result<()> {
        let rgb = RGBColor::from(color);
        let style = Self::text_style(font, &rgb);
        self.area
            .draw(&Text::new(text, (px(origin.x), px(origin.y)), style))
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))
    }

    fn fill_ellipse(&mut self, center: Point, radius: f64, color: Color) -> Result<()> {
        self.area
            .draw(&Circle::new(
                (px(center.x), px(center.y)),
                px(radius).max(1),
                RGBColor::from(color).filled(),
            ))
            .map_err(|e| ChartError::Draw(format!("{:?}", e)))
    }
}
