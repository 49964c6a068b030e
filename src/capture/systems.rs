//! Bevy systems starting and polling captures.

use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use futures_lite::future;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::scene::{LiveView, build_scene};
use crate::text::GlyphFont;
use crate::toasts::Toasts;

use super::error::CaptureError;
use super::pipeline::{CaptureJob, CaptureSummary, run_capture};
use super::state::{CapturePhase, CaptureRequest, CaptureState, CaptureTask, ClipboardBackend};

pub const CAPTURE_SUCCESS_MESSAGE: &str = "Screenshot copied to clipboard!";
pub const CAPTURE_FAILURE_MESSAGE: &str = "Failed to capture screenshot";

/// System to start a capture of the current board
#[allow(clippy::too_many_arguments)]
pub fn start_capture_system(
    mut commands: Commands,
    mut events: MessageReader<CaptureRequest>,
    mut state: ResMut<CaptureState>,
    mut toasts: ResMut<Toasts>,
    board: Res<Board>,
    config: Res<BoardConfig>,
    view: Res<LiveView>,
    backend: Res<ClipboardBackend>,
    font: Option<Res<GlyphFont>>,
    time: Res<Time>,
) {
    for _ in events.read() {
        // Don't start a new capture if one is already in progress
        if state.is_busy() {
            warn!("Capture already in progress, ignoring trigger");
            continue;
        }

        let Some(font) = font.as_deref() else {
            finish_capture(
                &mut state,
                &mut toasts,
                time.elapsed_secs(),
                Err(CaptureError::MissingFont),
            );
            continue;
        };

        // The task works on a snapshot, so the board stays free to change
        let scene =
            build_scene(board.list(), &config.matrix, font).with_transform(view.transform);
        let job = CaptureJob {
            scene,
            settings: config.capture,
            font: font.clone(),
            sink: backend.0.clone(),
        };

        state.phase = CapturePhase::Capturing;
        if board.is_empty() {
            debug!("Board is empty, capturing the bare matrix");
        }
        info!("Capturing matrix with {} tokens", board.len());

        let task = AsyncComputeTaskPool::get().spawn(run_capture(job));
        commands.spawn(CaptureTask(task));
    }
}

/// System to poll capture tasks
pub fn poll_capture_tasks(
    mut commands: Commands,
    mut state: ResMut<CaptureState>,
    mut toasts: ResMut<Toasts>,
    mut tasks: Query<(Entity, &mut CaptureTask)>,
    time: Res<Time>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            finish_capture(&mut state, &mut toasts, time.elapsed_secs(), result);
            commands.entity(entity).despawn();
        }
    }
}

/// Return to idle and emit the single notification for a capture attempt
pub fn finish_capture(
    state: &mut CaptureState,
    toasts: &mut Toasts,
    now: f32,
    result: Result<CaptureSummary, CaptureError>,
) {
    state.phase = CapturePhase::Idle;
    match result {
        Ok(summary) => {
            state.succeeded += 1;
            info!(
                "Copied {}x{} capture to clipboard ({} bytes)",
                summary.width, summary.height, summary.png_bytes
            );
            toasts.success(CAPTURE_SUCCESS_MESSAGE, now);
        }
        Err(e) => {
            state.failed += 1;
            error!("Capture failed: {}", e);
            toasts.error(CAPTURE_FAILURE_MESSAGE, now);
        }
    }
}
