//! PNG encoding of captured bitmaps.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

/// Encode an RGBA bitmap as PNG bytes
pub fn encode_png(bitmap: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        bitmap.as_raw(),
        bitmap.width(),
        bitmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}
