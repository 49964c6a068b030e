use bevy::prelude::*;

use crate::constants::{
    CAPTURE_EXTRA_HEIGHT, CAPTURE_EXTRA_WIDTH, CAPTURE_OFFSET, MATRIX_BORDER, MATRIX_HEIGHT,
    MATRIX_WIDTH,
};
use crate::theme::CAPTURE_BACKGROUND;

/// System set for config setup (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Natural geometry of the matrix box, before any on-screen scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixLayout {
    /// Outer width of the box, border included
    pub width: f32,
    /// Outer height of the box, border included
    pub height: f32,
    /// Border width on every side
    pub border: f32,
}

impl Default for MatrixLayout {
    fn default() -> Self {
        Self {
            width: MATRIX_WIDTH,
            height: MATRIX_HEIGHT,
            border: MATRIX_BORDER,
        }
    }
}

impl MatrixLayout {
    /// Outer rectangle of the box in root coordinates
    pub fn outer(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Area inside the border; token positions are relative to its top-left
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.border,
            self.border,
            self.width - self.border,
            self.height - self.border,
        )
    }

    /// Rectangle of legal top-left positions for a token of the given size.
    ///
    /// Tokens larger than the inner area collapse to the origin.
    pub fn token_bounds(&self, token_size: Vec2) -> Rect {
        let free = (self.inner().size() - token_size).max(Vec2::ZERO);
        Rect::from_corners(Vec2::ZERO, free)
    }
}

/// Fixed parameters of the clipboard capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureSettings {
    /// Capture origin relative to the matrix root's top-left
    pub offset: Vec2,
    /// Added to the natural content size to get the bitmap size
    pub extra_size: Vec2,
    /// Fill for areas nothing is drawn on
    pub background: Color,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            offset: Vec2::new(CAPTURE_OFFSET.0, CAPTURE_OFFSET.1),
            extra_size: Vec2::new(CAPTURE_EXTRA_WIDTH, CAPTURE_EXTRA_HEIGHT),
            background: CAPTURE_BACKGROUND,
        }
    }
}

/// Runtime configuration resource.
///
/// Nothing is read from or written to disk: the board lives only as long as
/// the process, and these values are not user-tunable.
#[derive(Resource, Debug, Clone, Default)]
pub struct BoardConfig {
    pub matrix: MatrixLayout,
    pub capture: CaptureSettings,
}

/// Startup system that reports the active configuration
fn log_config_system(config: Res<BoardConfig>) {
    info!(
        "Matrix {}x{} px, capture offset ({}, {}), extra size {}x{}",
        config.matrix.width,
        config.matrix.height,
        config.capture.offset.x,
        config.capture.offset.y,
        config.capture.extra_size.x,
        config.capture.extra_size.y
    );
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardConfig>()
            .add_systems(Startup, log_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_layout_default() {
        let layout = MatrixLayout::default();
        assert_eq!(layout.width, 1000.0);
        assert_eq!(layout.height, 604.0);
        assert_eq!(layout.inner().size(), Vec2::new(996.0, 600.0));
    }

    #[test]
    fn test_token_bounds_shrink_by_token_size() {
        let layout = MatrixLayout::default();
        let bounds = layout.token_bounds(Vec2::new(96.0, 40.0));
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(900.0, 560.0));
    }

    #[test]
    fn test_token_bounds_oversized_token() {
        let layout = MatrixLayout::default();
        let bounds = layout.token_bounds(Vec2::new(2000.0, 40.0));
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max.x, 0.0);
    }

    #[test]
    fn test_capture_settings_default() {
        let settings = CaptureSettings::default();
        assert_eq!(settings.offset, Vec2::new(-100.0, -20.0));
        assert_eq!(settings.extra_size, Vec2::new(200.0, 40.0));
        assert_eq!(settings.background, CAPTURE_BACKGROUND);
    }
}
