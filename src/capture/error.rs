//! Error type of the capture pipeline.

use super::clipboard::ClipboardError;

/// Anything that can stop a capture from reaching the clipboard
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("scene font is not loaded")]
    MissingFont,
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
