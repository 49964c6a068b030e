//! Clipboard boundary of the capture pipeline.
//!
//! The pipeline hands one PNG payload per capture to a [`ClipboardSink`].
//! [`SystemClipboard`] writes it to the platform clipboard through `arboard`,
//! which publishes it under the platform's image clipboard convention.

use std::borrow::Cow;
use std::sync::Mutex;

use image::ImageFormat;

/// Clipboard operation errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The platform clipboard.
///
/// The `arboard` handle is opened on first use and kept for the life of the
/// app: on X11 and Wayland the image is served by the handle's owner and
/// vanishes with it unless a clipboard manager took it over.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

#[cfg(test)]
impl SystemClipboard {
    /// Whether the platform clipboard has been opened
    pub fn is_open(&self) -> bool {
        self.handle.lock().is_ok_and(|handle| handle.is_some())
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_png(&self, png: &[u8]) -> Result<(), ClipboardError> {
        let decoded = image::load_from_memory_with_format(png, ImageFormat::Png)
            .map_err(|e| ClipboardError::InvalidImage(e.to_string()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();

        let mut handle = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;
        if handle.is_none() {
            *handle = Some(
                arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
            );
        }
        let Some(clipboard) = handle.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not open".to_string()));
        };

        clipboard
            .set_image(arboard::ImageData {
                width: width as usize,
                height: height as usize,
                bytes: Cow::Owned(decoded.into_raw()),
            })
            .map_err(|e| ClipboardError::Denied(e.to_string()))?;

        Ok(())
    }
}
