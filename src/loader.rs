//! Source image loading.
//!
//! Decodes any format the `image` crate supports and converts it to the
//! engine's BGRA [`PixelBuffer`].

use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;
use resample_core::PixelBuffer;
use tracing::debug;

/// Extensions offered in help text. Other decodable formats still load.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png"];

/// Load and decode the image at `path`.
pub fn load_source(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path)
        .with_context(|| format!("Error loading image: {}", path.display()))?;
    let buffer = from_dynamic_image(&image)?;
    debug!(path = %path.display(), size = %buffer.size(), "loaded source image");
    Ok(buffer)
}

/// Convert a decoded image of any color type to 8-bit BGRA.
pub fn from_dynamic_image(image: &DynamicImage) -> Result<PixelBuffer> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba8(width, height, rgba.as_raw())
        .context("decoded image does not fit a BGRA buffer")
}
