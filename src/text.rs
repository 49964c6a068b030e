//! Text measurement and rasterization shared by the scene layout and the
//! capture rasterizer.
//!
//! The font bytes come from egui's built-in proportional font, so captured
//! text uses the same typeface as the live view.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use bevy::prelude::*;
use bevy_egui::egui;
use image::GrayImage;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no proportional font is bundled with egui")]
    Missing,
    #[error("invalid font data: {0}")]
    Invalid(String),
}

/// Font used to lay out and rasterize scene text.
///
/// Cheap to clone; the font data is shared.
#[derive(Resource, Clone)]
pub struct GlyphFont {
    font: FontArc,
}

impl GlyphFont {
    /// Load the first proportional font of egui's default definitions
    pub fn from_egui_defaults() -> Result<Self, FontError> {
        let definitions = egui::FontDefinitions::default();
        let name = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .and_then(|names| names.first())
            .ok_or(FontError::Missing)?;
        let data = definitions.font_data.get(name).ok_or(FontError::Missing)?;
        Self::from_bytes(data.font.to_vec())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font =
            FontArc::try_from_vec(bytes).map_err(|e| FontError::Invalid(e.to_string()))?;
        Ok(Self { font })
    }

    /// Height of one line of text at `size` px
    pub fn line_height(&self, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        scaled.ascent() - scaled.descent()
    }

    /// Size of the single-line box `text` occupies at `size` px
    pub fn measure(&self, text: &str, size: f32) -> Vec2 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        Vec2::new(width, self.line_height(size))
    }

    /// Rasterize `text` into a coverage mask the size of [`GlyphFont::measure`]
    pub fn rasterize(&self, text: &str, size: f32) -> GrayImage {
        let extent = self.measure(text, size);
        let width = extent.x.ceil().max(1.0) as u32;
        let height = extent.y.ceil().max(1.0) as u32;
        let mut mask = GrayImage::new(width, height);

        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut caret = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let mut glyph = scaled.scaled_glyph(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, glyph.id);
            }
            glyph.position = point(caret, scaled.ascent());
            caret += scaled.h_advance(glyph.id);
            previous = Some(glyph.id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let px = bounds.min.x as i32 + x as i32;
                let py = bounds.min.y as i32 + y as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }
                let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let pixel = mask.get_pixel_mut(px as u32, py as u32);
                pixel.0[0] = pixel.0[0].max(value);
            });
        }

        mask
    }
}

/// Startup system loading the scene font
pub fn load_glyph_font(mut commands: Commands) {
    match GlyphFont::from_egui_defaults() {
        Ok(font) => {
            info!("Loaded scene font");
            commands.insert_resource(font);
        }
        Err(e) => error!("Failed to load scene font: {}", e),
    }
}

/// Fraction of covered pixels in a mask, used by tests
#[cfg(test)]
pub fn coverage_ratio(mask: &GrayImage) -> f32 {
    let covered = mask.pixels().filter(|p| p.0[0] > 0).count();
    covered as f32 / (mask.width() * mask.height()) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> GlyphFont {
        GlyphFont::from_egui_defaults().unwrap()
    }

    #[test]
    fn test_measure_grows_with_text() {
        let font = font();
        let short = font.measure("Low", 16.0);
        let long = font.measure("Low impact, Low uncertainty", 16.0);
        assert!(long.x > short.x);
        assert_eq!(short.y, long.y);
    }

    #[test]
    fn test_measure_empty_text() {
        let font = font();
        let size = font.measure("", 16.0);
        assert_eq!(size.x, 0.0);
        assert!(size.y > 0.0);
    }

    #[test]
    fn test_measure_scales_with_size() {
        let font = font();
        let small = font.measure("Impact", 12.0);
        let large = font.measure("Impact", 24.0);
        assert!((large.x / small.x - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_rasterize_draws_ink() {
        let font = font();
        let mask = font.rasterize("Uncertainty", 16.0);
        let extent = font.measure("Uncertainty", 16.0);
        assert_eq!(mask.width(), extent.x.ceil() as u32);
        assert!(coverage_ratio(&mask) > 0.05);
    }

    #[test]
    fn test_rasterize_whitespace_is_blank() {
        let font = font();
        let mask = font.rasterize("   ", 16.0);
        assert_eq!(coverage_ratio(&mask), 0.0);
    }

    #[test]
    fn test_invalid_font_bytes() {
        assert!(GlyphFont::from_bytes(vec![0, 1, 2, 3]).is_err());
    }
}
