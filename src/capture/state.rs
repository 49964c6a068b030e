//! Capture state resources, messages and task components.

use std::sync::Arc;

use bevy::prelude::*;
use bevy::tasks::Task;

use super::clipboard::{ClipboardSink, SystemClipboard};
use super::error::CaptureError;
use super::pipeline::CaptureSummary;

/// Message to capture the matrix to the clipboard
#[derive(Message)]
pub struct CaptureRequest;

/// Lifecycle of the capture pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Capturing,
}

/// State for the capture pipeline
#[derive(Resource, Debug, Default)]
pub struct CaptureState {
    pub phase: CapturePhase,
    /// Captures that reached the clipboard this session
    pub succeeded: u32,
    /// Captures that failed this session
    pub failed: u32,
}

impl CaptureState {
    pub fn is_busy(&self) -> bool {
        self.phase == CapturePhase::Capturing
    }
}

/// Where captured images are published
#[derive(Resource, Clone)]
pub struct ClipboardBackend(pub Arc<dyn ClipboardSink>);

impl Default for ClipboardBackend {
    fn default() -> Self {
        Self(Arc::new(SystemClipboard::default()))
    }
}

/// Background task running one capture
#[derive(Component)]
pub struct CaptureTask(pub Task<Result<CaptureSummary, CaptureError>>);
