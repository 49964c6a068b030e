//! The capture pipeline: rasterize, encode, publish.

use std::sync::Arc;

use bevy::log::debug;
use futures_lite::future;

use crate::config::CaptureSettings;
use crate::scene::Scene;
use crate::text::GlyphFont;

use super::clipboard::ClipboardSink;
use super::encode::encode_png;
use super::error::CaptureError;
use super::raster::rasterize;
use super::region::CaptureRegion;

/// Everything one capture needs, owned so it can run off the main thread
pub struct CaptureJob {
    /// Snapshot of the live scene, transform included
    pub scene: Scene,
    pub settings: CaptureSettings,
    pub font: GlyphFont,
    pub sink: Arc<dyn ClipboardSink>,
}

/// What a successful capture produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSummary {
    pub width: u32,
    pub height: u32,
    pub png_bytes: usize,
}

/// Run a capture to completion.
///
/// The live transform is dropped on a copy of the scene before rasterizing,
/// so the bitmap always shows natural-scale geometry. Control is yielded
/// between the rasterize, encode and clipboard stages.
pub async fn run_capture(job: CaptureJob) -> Result<CaptureSummary, CaptureError> {
    if !job.scene.transform.is_identity() {
        debug!(
            "Dropping live transform (scale {:.3}) for capture",
            job.scene.transform.scale
        );
    }
    let scene = job.scene.normalized();
    let region = CaptureRegion::for_scene(&scene, &job.settings);

    let bitmap = rasterize(&scene, &region, job.settings.background, &job.font)?;
    future::yield_now().await;

    let png = encode_png(&bitmap)?;
    future::yield_now().await;

    job.sink.write_png(&png)?;

    Ok(CaptureSummary {
        width: bitmap.width(),
        height: bitmap.height(),
        png_bytes: png.len(),
    })
}
