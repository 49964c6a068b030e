//! Software rasterizer turning a scene into an RGBA bitmap.

use bevy::prelude::*;
use image::{GrayImage, Rgba, RgbaImage, imageops};

use crate::scene::{Scene, SceneNode, SceneTransform, TextOrientation};
use crate::text::GlyphFont;
use crate::theme::to_rgba8;

use super::error::CaptureError;
use super::region::CaptureRegion;

/// Largest bitmap edge the rasterizer accepts
pub const MAX_BITMAP_EDGE: u32 = 16_384;

/// Paint every node of `scene` into a bitmap covering `region`.
///
/// The scene's root transform is honored, so callers wanting natural-scale
/// output pass a normalized scene.
pub fn rasterize(
    scene: &Scene,
    region: &CaptureRegion,
    background: Color,
    font: &GlyphFont,
) -> Result<RgbaImage, CaptureError> {
    let UVec2 { x: width, y: height } = region.size;
    if width == 0 || height == 0 {
        return Err(CaptureError::Rasterize(format!(
            "empty capture region {}x{}",
            width, height
        )));
    }
    if width > MAX_BITMAP_EDGE || height > MAX_BITMAP_EDGE {
        return Err(CaptureError::Rasterize(format!(
            "capture region {}x{} exceeds {} px",
            width, height, MAX_BITMAP_EDGE
        )));
    }

    let mut canvas = Canvas {
        image: RgbaImage::from_pixel(width, height, Rgba(to_rgba8(background))),
        origin: region.origin,
        transform: scene.transform,
    };

    for node in &scene.nodes {
        match node {
            SceneNode::Rect { rect, fill, radius } => {
                canvas.fill_rounded_rect(*rect, *radius, *fill);
            }
            SceneNode::Border {
                rect,
                width,
                color,
                radius,
            } => canvas.stroke_rounded_rect(*rect, *width, *radius, *color),
            SceneNode::Line {
                from,
                to,
                width,
                color,
            } => canvas.line(*from, *to, *width, *color),
            SceneNode::Text {
                position,
                text,
                font_size,
                color,
                orientation,
                ..
            } => canvas.text(*position, text, *font_size, *orientation, *color, font),
            SceneNode::Cross { rect, width, color } => {
                canvas.line(rect.min, rect.max, *width, *color);
                canvas.line(
                    Vec2::new(rect.min.x, rect.max.y),
                    Vec2::new(rect.max.x, rect.min.y),
                    *width,
                    *color,
                );
            }
        }
    }

    Ok(canvas.image)
}

struct Canvas {
    image: RgbaImage,
    /// Root-space point of the top-left pixel (before the transform)
    origin: Vec2,
    transform: SceneTransform,
}

impl Canvas {
    /// Map a root point to bitmap pixel space
    fn to_pixel(&self, point: Vec2) -> Vec2 {
        self.transform.apply(point) - self.origin
    }

    /// Integer pixel range overlapping `rect` (in pixel space), clipped to the image
    fn pixel_span(&self, rect: Rect) -> Option<(UVec2, UVec2)> {
        let min = rect.min.floor().max(Vec2::ZERO);
        let max = rect
            .max
            .ceil()
            .min(Vec2::new(self.image.width() as f32, self.image.height() as f32));
        if min.x >= max.x || min.y >= max.y {
            return None;
        }
        Some((min.as_uvec2(), max.as_uvec2()))
    }

    fn blend(&mut self, x: u32, y: u32, color: [u8; 4], coverage: f32) {
        let alpha = (color[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let dst_alpha = dst.0[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        for channel in 0..3 {
            let src = color[channel] as f32;
            let below = dst.0[channel] as f32;
            let value = (src * alpha + below * dst_alpha * (1.0 - alpha)) / out_alpha;
            dst.0[channel] = value.round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = (out_alpha * 255.0).round() as u8;
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let rect = self.transform.apply_rect(rect);
        let rect = Rect::from_corners(rect.min - self.origin, rect.max - self.origin);
        let radius = radius * self.transform.scale;
        let rgba = to_rgba8(color);

        let Some((min, max)) = self.pixel_span(rect) else {
            return;
        };
        for y in min.y..max.y {
            for x in min.x..max.x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside_rounded_rect(center, rect, radius) {
                    self.blend(x, y, rgba, 1.0);
                }
            }
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, width: f32, radius: f32, color: Color) {
        let outer = self.transform.apply_rect(rect);
        let outer = Rect::from_corners(outer.min - self.origin, outer.max - self.origin);
        let width = width * self.transform.scale;
        let radius = radius * self.transform.scale;
        let inner = outer.inflate(-width);
        let inner_radius = (radius - width).max(0.0);
        let rgba = to_rgba8(color);

        let Some((min, max)) = self.pixel_span(outer) else {
            return;
        };
        for y in min.y..max.y {
            for x in min.x..max.x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside_rounded_rect(center, outer, radius)
                    && !inside_rounded_rect(center, inner, inner_radius)
                {
                    self.blend(x, y, rgba, 1.0);
                }
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let a = self.to_pixel(from);
        let b = self.to_pixel(to);
        let half = (width * self.transform.scale / 2.0).max(0.5);
        let rgba = to_rgba8(color);

        let bounds = Rect::from_corners(a, b).inflate(half + 1.0);
        let Some((min, max)) = self.pixel_span(bounds) else {
            return;
        };
        for y in min.y..max.y {
            for x in min.x..max.x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = half + 0.5 - distance_to_segment(center, a, b);
                if coverage > 0.0 {
                    self.blend(x, y, rgba, coverage);
                }
            }
        }
    }

    fn text(
        &mut self,
        position: Vec2,
        text: &str,
        font_size: f32,
        orientation: TextOrientation,
        color: Color,
        font: &GlyphFont,
    ) {
        let mask = font.rasterize(text, font_size * self.transform.scale);
        let mask = match orientation {
            TextOrientation::Horizontal => mask,
            TextOrientation::Vertical => imageops::rotate270(&mask),
        };
        let top_left = self.to_pixel(position).round();
        self.blit_mask(&mask, top_left, to_rgba8(color));
    }

    fn blit_mask(&mut self, mask: &GrayImage, top_left: Vec2, color: [u8; 4]) {
        let (width, height) = (self.image.width() as i64, self.image.height() as i64);
        let (left, top) = (top_left.x as i64, top_left.y as i64);
        for (mx, my, value) in mask.enumerate_pixels() {
            let coverage = value.0[0];
            if coverage == 0 {
                continue;
            }
            let x = left + mx as i64;
            let y = top + my as i64;
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            self.blend(x as u32, y as u32, color, coverage as f32 / 255.0);
        }
    }
}

fn inside_rounded_rect(point: Vec2, rect: Rect, radius: f32) -> bool {
    if !rect.contains(point) {
        return false;
    }
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    if radius == 0.0 {
        return true;
    }
    let dx = (rect.min.x + radius - point.x).max(point.x - (rect.max.x - radius)).max(0.0);
    let dy = (rect.min.y + radius - point.y).max(point.y - (rect.max.y - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let segment = b - a;
    let length_squared = segment.length_squared();
    if length_squared == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(segment) / length_squared).clamp(0.0, 1.0);
    point.distance(a + segment * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_rounded_rect_corners() {
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(inside_rounded_rect(Vec2::new(10.0, 10.0), rect, 4.0));
        assert!(inside_rounded_rect(Vec2::new(0.5, 0.5), rect, 0.0));
        assert!(!inside_rounded_rect(Vec2::new(0.5, 0.5), rect, 4.0));
        assert!(!inside_rounded_rect(Vec2::new(25.0, 10.0), rect, 4.0));
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(Vec2::new(-4.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Vec2::new(2.0, 2.0), a, a), 8f32.sqrt());
    }
}
