//! Text measurement and truncation.

use super::types::{FontSpec, TextSize};
use crate::error::Result;

/// Measures rendered text. All layout code depends on this and nothing else
/// from the drawing stack, so layouts can be computed without a canvas.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize> {
        (**self).measure(text, font)
    }
}

/// Font-free estimate: every glyph is `em_ratio × size` wide, one line is `size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    pub em_ratio: f64,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self { em_ratio: 0.60 }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize> {
        Ok(TextSize {
            width: text.chars().count() as f64 * font.size_px * self.em_ratio,
            height: font.size_px,
        })
    }
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
///
/// The result never measures wider than `max_px`; if not even the ellipsis
/// fits, it is empty.
pub fn truncate_to_width<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: &FontSpec,
    max_px: f64,
) -> Result<String> {
    if measurer.measure(text, font)?.width <= max_px {
        return Ok(text.to_string());
    }
    if measurer.measure("…", font)?.width > max_px {
        return Ok(String::new());
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate = format!("{out}{ch}…");
        if measurer.measure(&candidate, font)?.width > max_px {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    Ok(out)
}
