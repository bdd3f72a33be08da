//! The finished chart: PNG bytes plus helpers to embed them in HTML.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ChartError, Result};

/// A rendered chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    /// Raster width in pixels (nominal width × scale).
    pub width: u32,
    /// Raster height in pixels (nominal height × scale).
    pub height: u32,
    /// Density factor the raster was drawn at.
    pub scale: u32,
    /// PNG-encoded image.
    pub png: Vec<u8>,
}

impl ChartImage {
    pub const MIME_TYPE: &'static str = "image/png";

    /// Size the image is meant to be displayed at.
    pub fn display_size(&self) -> (u32, u32) {
        let s = self.scale.max(1);
        (self.width / s, self.height / s)
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, BASE64.encode(&self.png))
    }

    /// Inline `<img>` tag, sized to the nominal dimensions so the denser raster stays sharp.
    pub fn img_tag(&self) -> String {
        let (w, h) = self.display_size();
        format!(
            "<img width=\"{}\" height=\"{}\" src=\"{}\" />",
            w,
            h,
            self.data_uri()
        )
    }
}

/// Encode a packed RGB buffer as PNG.
pub fn encode_png(rgb: Vec<u8>, width: u32, height: u32, scale: u32) -> Result<ChartImage> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ChartError::Encode(e.to_string()))?;
    Ok(ChartImage {
        width,
        height,
        scale,
        png,
    })
}
