//! Capture of the matrix region to the clipboard.
//!
//! A capture snapshots the live scene, drops its on-screen transform on a
//! copy, rasterizes the copy into a bitmap slightly larger than the matrix
//! content, encodes it as PNG and publishes it on the clipboard. It runs on
//! the async compute pool and reports back with exactly one toast.
//!
//! ## Module Structure
//!
//! - [`state`] - Capture state, request message and task component
//! - [`region`] - Which part of the scene lands in the bitmap
//! - [`raster`] - Software rasterizer for scene nodes
//! - [`encode`] - PNG encoding
//! - [`clipboard`] - Clipboard sink trait and the system clipboard
//! - [`pipeline`] - The async capture pipeline
//! - [`systems`] - Systems starting and polling captures

mod clipboard;
mod encode;
mod error;
mod pipeline;
mod raster;
mod region;
mod state;
mod systems;


pub use state::{CaptureRequest, CaptureState};

use bevy::prelude::*;

use state::ClipboardBackend;

pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CaptureState>()
            .init_resource::<ClipboardBackend>()
            .add_message::<CaptureRequest>()
            .add_systems(
                Update,
                (
                    systems::start_capture_system.run_if(on_message::<CaptureRequest>),
                    systems::poll_capture_tasks,
                ),
            );
    }
}
