//! The rectangle of root space a capture covers.

use bevy::prelude::*;

use crate::config::CaptureSettings;
use crate::scene::Scene;

/// Region of the scene root that ends up in the bitmap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureRegion {
    /// Root-space point mapped to the bitmap's top-left pixel
    pub origin: Vec2,
    /// Bitmap size in pixels
    pub size: UVec2,
}

impl CaptureRegion {
    /// Region for `scene`: shifted by the configured offset and enlarged by
    /// the configured extra size so captions outside the box are included.
    ///
    /// Sizes round to whole pixels the way element scroll sizes do.
    pub fn for_scene(scene: &Scene, settings: &CaptureSettings) -> Self {
        let size = (scene.content_size() + settings.extra_size)
            .round()
            .max(Vec2::ZERO);
        Self {
            origin: settings.offset,
            size: size.as_uvec2(),
        }
    }
}
