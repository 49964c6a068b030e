//! Scene node types: the drawable primitives of the matrix region.

use bevy::prelude::*;

use crate::board::TokenId;

/// Transform applied to the whole scene root when it is drawn.
///
/// Maps a root coordinate `p` to `translation + p * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTransform {
    pub scale: f32,
    pub translation: Vec2,
}

impl SceneTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.translation + point * self.scale
    }

    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_corners(self.apply(rect.min), self.apply(rect.max))
    }

    /// Map a screen point back into root coordinates
    pub fn invert(&self, point: Vec2) -> Vec2 {
        (point - self.translation) / self.scale
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for SceneTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Text orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOrientation {
    #[default]
    Horizontal,
    /// Rotated -90 degrees, reading bottom to top
    Vertical,
}

/// A single drawable primitive, in root coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        fill: Color,
        radius: f32,
    },
    /// Rectangle outline drawn inside `rect`
    Border {
        rect: Rect,
        width: f32,
        color: Color,
        radius: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        /// Top-left of the drawn box (after rotation)
        position: Vec2,
        /// Unrotated measured size of the text
        size: Vec2,
        text: String,
        font_size: f32,
        color: Color,
        orientation: TextOrientation,
    },
    /// The "✕" glyph of a delete button, drawn as two strokes
    Cross { rect: Rect, width: f32, color: Color },
}

impl SceneNode {
    /// Axis-aligned bounds of what this node draws
    pub fn bounds(&self) -> Rect {
        match self {
            SceneNode::Rect { rect, .. }
            | SceneNode::Border { rect, .. }
            | SceneNode::Cross { rect, .. } => *rect,
            SceneNode::Line { from, to, .. } => Rect::from_corners(*from, *to),
            SceneNode::Text {
                position,
                size,
                orientation,
                ..
            } => {
                let drawn = match orientation {
                    TextOrientation::Horizontal => *size,
                    TextOrientation::Vertical => Vec2::new(size.y, size.x),
                };
                Rect::from_corners(*position, *position + drawn)
            }
        }
    }
}

/// Hit areas of one token, used by the live view for dragging and deleting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenHitArea {
    pub id: TokenId,
    /// Whole token box in root coordinates
    pub rect: Rect,
    /// Delete button inside the token box
    pub delete_rect: Rect,
}
