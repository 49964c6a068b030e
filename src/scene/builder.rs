//! Builds the scene tree from the board and the matrix layout.

use bevy::prelude::*;

use crate::board::Token;
use crate::config::MatrixLayout;
use crate::constants::{
    BASE_FONT_SIZE, DESCRIPTION_FONT_SIZE, TOKEN_DELETE_SIZE, TOKEN_GAP, TOKEN_PADDING,
};
use crate::text::GlyphFont;
use crate::theme::{
    MATRIX_FILL, MATRIX_LINE, QUADRANT_DESCRIPTION, QUADRANT_TITLE, TEXT_PRIMARY, TOKEN_SHADOW,
};

use super::nodes::{SceneNode, SceneTransform, TextOrientation, TokenHitArea};
use super::tree::Scene;

/// Corner radius of the matrix box and of tokens
const CORNER_RADIUS: f32 = 4.0;

/// Width of the quadrant grid lines
const GRID_LINE_WIDTH: f32 = 1.0;

/// Left edge of the vertical axis title
const Y_TITLE_LEFT: f32 = -100.0;

/// Left edge of the vertical axis ticks
const Y_TICKS_LEFT: f32 = -45.0;

/// Distance from the box bottom to the bottom of the horizontal axis title
const X_TITLE_BELOW: f32 = 60.0;

/// Distance from the box bottom to the bottom of the horizontal axis ticks
const X_TICKS_BELOW: f32 = 35.0;

/// Offset of the token drop shadow
const SHADOW_OFFSET: Vec2 = Vec2::new(0.0, 2.0);

/// The four regions of the matrix, derived from the box midpoints.
///
/// Purely a rendering concept: tokens never record which quadrant they are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub fn all() -> &'static [Quadrant] {
        &[
            Quadrant::TopLeft,
            Quadrant::TopRight,
            Quadrant::BottomLeft,
            Quadrant::BottomRight,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Fringe Events, Track Changes",
            Quadrant::TopRight => "Game Changers, Plan Ahead",
            Quadrant::BottomLeft => "Background Noise, Monitor Only",
            Quadrant::BottomRight => "Clear Threats, Act Now!",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Quadrant::TopLeft => "Low Impact, High Uncertainty",
            Quadrant::TopRight => "High impact, High uncertainty",
            Quadrant::BottomLeft => "Low impact, Low uncertainty",
            Quadrant::BottomRight => "High impact, Low uncertainty",
        }
    }

    /// Cell of this quadrant within `area`
    pub fn cell(&self, area: Rect) -> Rect {
        let center = area.center();
        match self {
            Quadrant::TopLeft => Rect::from_corners(area.min, center),
            Quadrant::TopRight => {
                Rect::from_corners(Vec2::new(center.x, area.min.y), Vec2::new(area.max.x, center.y))
            }
            Quadrant::BottomLeft => {
                Rect::from_corners(Vec2::new(area.min.x, center.y), Vec2::new(center.x, area.max.y))
            }
            Quadrant::BottomRight => Rect::from_corners(center, area.max),
        }
    }
}

/// Outer size of a token box for `label`
pub fn token_size(label: &str, font: &GlyphFont) -> Vec2 {
    let text = font.measure(label, BASE_FONT_SIZE);
    let content = Vec2::new(
        text.x + TOKEN_GAP + TOKEN_DELETE_SIZE,
        text.y.max(TOKEN_DELETE_SIZE),
    );
    content + Vec2::splat(TOKEN_PADDING * 2.0)
}

/// Build the scene for `tokens` laid out on `layout`, with no root transform
pub fn build_scene(tokens: &[Token], layout: &MatrixLayout, font: &GlyphFont) -> Scene {
    let mut nodes = Vec::new();
    let outer = layout.outer();
    let inner = layout.inner();

    push_axis_captions(&mut nodes, layout, font);

    // Box
    nodes.push(SceneNode::Rect {
        rect: outer,
        fill: MATRIX_FILL,
        radius: CORNER_RADIUS,
    });
    nodes.push(SceneNode::Border {
        rect: outer,
        width: layout.border,
        color: MATRIX_LINE,
        radius: CORNER_RADIUS,
    });

    // Grid lines at the midpoints
    let center = inner.center();
    nodes.push(SceneNode::Line {
        from: Vec2::new(center.x, inner.min.y),
        to: Vec2::new(center.x, inner.max.y),
        width: GRID_LINE_WIDTH,
        color: MATRIX_LINE,
    });
    nodes.push(SceneNode::Line {
        from: Vec2::new(inner.min.x, center.y),
        to: Vec2::new(inner.max.x, center.y),
        width: GRID_LINE_WIDTH,
        color: MATRIX_LINE,
    });

    for quadrant in Quadrant::all() {
        push_quadrant_label(&mut nodes, *quadrant, quadrant.cell(inner), font);
    }

    let mut hit_areas = Vec::with_capacity(tokens.len());
    for token in tokens {
        hit_areas.push(push_token(&mut nodes, token, inner.min, font));
    }

    Scene {
        root: outer,
        nodes,
        tokens: hit_areas,
        transform: SceneTransform::IDENTITY,
    }
}

fn text_node(text: &str, position: Vec2, size: Vec2, font_size: f32, color: Color) -> SceneNode {
    SceneNode::Text {
        position,
        size,
        text: text.to_string(),
        font_size,
        color,
        orientation: TextOrientation::Horizontal,
    }
}

fn push_axis_captions(nodes: &mut Vec<SceneNode>, layout: &MatrixLayout, font: &GlyphFont) {
    let outer = layout.outer();

    // Vertical axis title, rotated and centered on the box height
    let title = "Uncertainty";
    let size = font.measure(title, BASE_FONT_SIZE);
    nodes.push(SceneNode::Text {
        position: Vec2::new(Y_TITLE_LEFT, outer.center().y - size.x / 2.0),
        size,
        text: title.to_string(),
        font_size: BASE_FONT_SIZE,
        color: TEXT_PRIMARY,
        orientation: TextOrientation::Vertical,
    });

    // Vertical ticks spread from top to bottom
    let ticks = ["High", "Medium", "Low"];
    for (i, tick) in ticks.iter().enumerate() {
        let size = font.measure(tick, BASE_FONT_SIZE);
        let top = match i {
            0 => outer.min.y,
            1 => outer.center().y - size.y / 2.0,
            _ => outer.max.y - size.y,
        };
        nodes.push(text_node(
            tick,
            Vec2::new(Y_TICKS_LEFT, top),
            size,
            BASE_FONT_SIZE,
            TEXT_PRIMARY,
        ));
    }

    // Horizontal axis title, centered below the box
    let title = "Impact";
    let size = font.measure(title, BASE_FONT_SIZE);
    nodes.push(text_node(
        title,
        Vec2::new(
            outer.center().x - size.x / 2.0,
            outer.max.y + X_TITLE_BELOW - size.y,
        ),
        size,
        BASE_FONT_SIZE,
        TEXT_PRIMARY,
    ));

    // Horizontal ticks spread from left to right
    let ticks = ["Low", "Medium", "High"];
    for (i, tick) in ticks.iter().enumerate() {
        let size = font.measure(tick, BASE_FONT_SIZE);
        let left = match i {
            0 => outer.min.x,
            1 => outer.center().x - size.x / 2.0,
            _ => outer.max.x - size.x,
        };
        nodes.push(text_node(
            tick,
            Vec2::new(left, outer.max.y + X_TICKS_BELOW - size.y),
            size,
            BASE_FONT_SIZE,
            TEXT_PRIMARY,
        ));
    }
}

fn push_quadrant_label(
    nodes: &mut Vec<SceneNode>,
    quadrant: Quadrant,
    cell: Rect,
    font: &GlyphFont,
) {
    let title_size = font.measure(quadrant.title(), BASE_FONT_SIZE);
    let description_size = font.measure(quadrant.description(), DESCRIPTION_FONT_SIZE);
    let block_height = title_size.y + description_size.y;
    let top = cell.center().y - block_height / 2.0;

    nodes.push(text_node(
        quadrant.title(),
        Vec2::new(cell.center().x - title_size.x / 2.0, top),
        title_size,
        BASE_FONT_SIZE,
        QUADRANT_TITLE,
    ));
    nodes.push(text_node(
        quadrant.description(),
        Vec2::new(
            cell.center().x - description_size.x / 2.0,
            top + title_size.y,
        ),
        description_size,
        DESCRIPTION_FONT_SIZE,
        QUADRANT_DESCRIPTION,
    ));
}

fn push_token(
    nodes: &mut Vec<SceneNode>,
    token: &Token,
    origin: Vec2,
    font: &GlyphFont,
) -> TokenHitArea {
    let size = token_size(&token.label, font);
    let min = origin + token.position;
    let rect = Rect::from_corners(min, min + size);

    nodes.push(SceneNode::Rect {
        rect: Rect::from_corners(rect.min + SHADOW_OFFSET, rect.max + SHADOW_OFFSET),
        fill: TOKEN_SHADOW,
        radius: CORNER_RADIUS,
    });
    nodes.push(SceneNode::Rect {
        rect,
        fill: token.color,
        radius: CORNER_RADIUS,
    });

    let text_size = font.measure(&token.label, BASE_FONT_SIZE);
    let content_center_y = rect.center().y;
    nodes.push(text_node(
        &token.label,
        Vec2::new(
            rect.min.x + TOKEN_PADDING,
            content_center_y - text_size.y / 2.0,
        ),
        text_size,
        BASE_FONT_SIZE,
        TEXT_PRIMARY,
    ));

    let delete_min = Vec2::new(
        rect.max.x - TOKEN_PADDING - TOKEN_DELETE_SIZE,
        content_center_y - TOKEN_DELETE_SIZE / 2.0,
    );
    let delete_rect = Rect::from_corners(delete_min, delete_min + Vec2::splat(TOKEN_DELETE_SIZE));
    nodes.push(SceneNode::Cross {
        rect: delete_rect.inflate(-5.0),
        width: 1.5,
        color: TEXT_PRIMARY,
    });

    TokenHitArea {
        id: token.id,
        rect,
        delete_rect,
    }
}
