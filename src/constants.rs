//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 960.0;

/// Natural (unscaled) width of the matrix box
pub const MATRIX_WIDTH: f32 = 1000.0;

/// Natural (unscaled) height of the matrix box, border included
pub const MATRIX_HEIGHT: f32 = 604.0;

/// Border width of the matrix box
pub const MATRIX_BORDER: f32 = 2.0;

/// Space reserved around the matrix in the live view for the axis captions
/// (left, top, right, bottom)
pub const MATRIX_VIEW_MARGIN: [f32; 4] = [100.0, 60.0, 100.0, 80.0];

/// Capture origin relative to the matrix root's top-left corner
pub const CAPTURE_OFFSET: (f32, f32) = (-100.0, -20.0);

/// Extra width added to the natural content width of a capture
pub const CAPTURE_EXTRA_WIDTH: f32 = 200.0;

/// Extra height added to the natural content height of a capture
pub const CAPTURE_EXTRA_HEIGHT: f32 = 40.0;

/// Longest token label, in characters. Keeps every token well inside the
/// largest bitmap a capture can produce.
pub const MAX_LABEL_CHARS: usize = 80;

/// Base font size used for captions and token labels
pub const BASE_FONT_SIZE: f32 = 16.0;

/// Font size of the quadrant descriptions
pub const DESCRIPTION_FONT_SIZE: f32 = 12.0;

/// Inner padding of a token box
pub const TOKEN_PADDING: f32 = 12.0;

/// Gap between a token label and its delete button
pub const TOKEN_GAP: f32 = 8.0;

/// Size of the square delete button on a token
pub const TOKEN_DELETE_SIZE: f32 = 18.0;

/// How long a toast stays on screen, in seconds
pub const TOAST_DURATION_SECS: f32 = 3.0;
