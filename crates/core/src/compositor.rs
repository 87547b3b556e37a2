//! Texture stamping for sheet overlays.
//!
//! The compositor stretches a texture to a target rectangle and stamps it
//! onto a canvas the size of the base image. No I/O happens here: callers
//! pass encoded bytes or decoded images and receive PNG bytes back.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::hotspot::{HotspotTable, Rect};

/// Resampling filter used when stretching a texture to its target rectangle.
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// What the stamped texture is drawn onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeMode {
    /// Fully transparent canvas; the client layers it over the base image.
    #[default]
    Layer,
    /// Copy of the base image with the texture stamped in place.
    Flatten,
}

/// A finished overlay ready to be persisted.
#[derive(Debug, Clone)]
pub struct RenderedOverlay {
    /// Losslessly encoded RGBA PNG.
    pub png: Vec<u8>,
    /// Rectangle the texture was stamped into.
    pub rect: Rect,
    pub width: u32,
    pub height: u32,
}

/// Decode an image from encoded bytes (PNG, JPEG or WebP).
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CoreError> {
    image::load_from_memory(bytes).map_err(|e| CoreError::ImageDecode(e.to_string()))
}

/// Stamp `texture`, stretched to `rect`, onto a canvas sized like `base`.
///
/// The stamp replaces canvas pixels outright. Any part of the rectangle
/// that overhangs the canvas is clipped.
pub fn composite(
    base: &DynamicImage,
    texture: &DynamicImage,
    rect: Rect,
    mode: CompositeMode,
) -> Result<RgbaImage, CoreError> {
    if rect.area() == 0 {
        return Err(CoreError::Validation(format!(
            "Target rectangle is empty ({}x{}); base image too small for this hotspot",
            rect.width, rect.height
        )));
    }

    let (width, height) = base.dimensions();
    let stamp = imageops::resize(&texture.to_rgba8(), rect.width, rect.height, RESIZE_FILTER);

    let mut canvas = match mode {
        CompositeMode::Layer => RgbaImage::new(width, height),
        CompositeMode::Flatten => base.to_rgba8(),
    };
    imageops::replace(&mut canvas, &stamp, i64::from(rect.left), i64::from(rect.top));

    Ok(canvas)
}

/// Encode an RGBA canvas as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

/// Decode both inputs, resolve the hotspot and produce the encoded overlay.
pub fn render_overlay(
    base_bytes: &[u8],
    texture_bytes: &[u8],
    hotspots: &HotspotTable,
    hotspot_name: &str,
    mode: CompositeMode,
) -> Result<RenderedOverlay, CoreError> {
    let base = decode_image(base_bytes)?;
    let texture = decode_image(texture_bytes)?;
    let (width, height) = base.dimensions();

    let rect = hotspots.resolve(hotspot_name, width, height)?;
    let canvas = composite(&base, &texture, rect, mode)?;

    Ok(RenderedOverlay {
        png: encode_png(&canvas)?,
        rect,
        width,
        height,
    })
}
