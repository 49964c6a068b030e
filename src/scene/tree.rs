//! The scene tree of the matrix region.

use bevy::prelude::*;

use super::nodes::{SceneNode, SceneTransform, TokenHitArea};

/// Everything drawn for the matrix region, in paint order.
///
/// Coordinates are relative to the top-left corner of the matrix box (the
/// scene root). Captions sit outside the box at negative or overflowing
/// coordinates. `transform` is how the live view places the root on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Outer rectangle of the matrix box
    pub root: Rect,
    pub nodes: Vec<SceneNode>,
    pub tokens: Vec<TokenHitArea>,
    pub transform: SceneTransform,
}

impl Scene {
    pub fn with_transform(mut self, transform: SceneTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Natural size of the root's content, measured from the root origin.
    ///
    /// Like an element's scroll size: content overflowing to the right or
    /// bottom counts, content at negative coordinates does not, and the
    /// result is never smaller than the root itself.
    pub fn content_size(&self) -> Vec2 {
        self.nodes
            .iter()
            .map(|node| node.bounds().max)
            .fold(self.root.max, Vec2::max)
            .max(Vec2::ZERO)
    }

    /// Copy of this scene with the root transform removed.
    ///
    /// Only the copy is affected; the live scene keeps its transform.
    pub fn normalized(&self) -> Scene {
        Scene {
            transform: SceneTransform::IDENTITY,
            ..self.clone()
        }
    }
}

/// How the live view currently places the scene root on screen
#[derive(Resource, Debug, Default)]
pub struct LiveView {
    pub transform: SceneTransform,
}
