//! Live view of the matrix: paints the scene and turns pointer input on
//! tokens into board requests.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::board::{Board, RemoveTokenRequest, RepositionTokenRequest, TokenId};
use crate::config::{BoardConfig, MatrixLayout};
use crate::constants::MATRIX_VIEW_MARGIN;
use crate::scene::{LiveView, SceneNode, SceneTransform, TextOrientation, build_scene, token_size};
use crate::text::GlyphFont;
use crate::theme::{CAPTURE_BACKGROUND, bevy_to_egui};

/// Smallest scale the view shrinks the matrix to
const MIN_VIEW_SCALE: f32 = 0.25;

/// Token currently being dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub id: TokenId,
    /// Pointer position relative to the token's top-left, in root coordinates
    pub grab: Vec2,
    /// Where the token is drawn while the drag lasts
    pub position: Vec2,
}

#[derive(Resource, Debug, Default)]
pub struct DragState {
    pub active: Option<ActiveDrag>,
}

/// Scale and place the matrix (plus caption margins) inside `available`.
///
/// Never scales above natural size; extra width centers the matrix.
pub fn fit_transform(available: Rect, layout: &MatrixLayout) -> SceneTransform {
    let [left, top, right, bottom] = MATRIX_VIEW_MARGIN;
    let total = Vec2::new(layout.width + left + right, layout.height + top + bottom);
    let scale = (available.width() / total.x)
        .min(available.height() / total.y)
        .min(1.0)
        .max(MIN_VIEW_SCALE);
    let spare_x = (available.width() - total.x * scale).max(0.0);

    SceneTransform {
        scale,
        translation: available.min + Vec2::new(spare_x / 2.0 + left * scale, top * scale),
    }
}

/// Central panel showing the matrix
#[allow(clippy::too_many_arguments)]
pub fn matrix_view_ui(
    mut contexts: EguiContexts,
    board: Res<Board>,
    config: Res<BoardConfig>,
    font: Option<Res<GlyphFont>>,
    mut view: ResMut<LiveView>,
    mut drag: ResMut<DragState>,
    mut remove_events: MessageWriter<RemoveTokenRequest>,
    mut reposition_events: MessageWriter<RepositionTokenRequest>,
) -> Result {
    let Some(font) = font else {
        return Ok(());
    };

    // A token removed mid-drag never reports the drag end
    if drag.active.is_some_and(|active| board.get(active.id).is_none()) {
        drag.active = None;
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(bevy_to_egui(CAPTURE_BACKGROUND)))
        .show(contexts.ctx_mut()?, |ui| {
            let available = ui.available_rect_before_wrap();
            let transform = fit_transform(from_egui_rect(available), &config.matrix);
            view.transform = transform;

            let mut tokens = board.list().to_vec();
            if let Some(active) = drag.active
                && let Some(token) = tokens.iter_mut().find(|t| t.id == active.id)
            {
                token.position = active.position;
            }

            let scene = build_scene(&tokens, &config.matrix, &font).with_transform(transform);
            let painter = ui.painter_at(available);
            for node in &scene.nodes {
                paint_node(&painter, node, &transform);
            }

            for (area, token) in scene.tokens.iter().zip(&tokens) {
                let body = ui.interact(
                    to_egui_rect(transform.apply_rect(area.rect)),
                    ui.id().with(("token", area.id.0)),
                    egui::Sense::drag(),
                );
                // Registered after the body so it wins the pointer
                let delete = ui.interact(
                    to_egui_rect(transform.apply_rect(area.delete_rect)),
                    ui.id().with(("token_delete", area.id.0)),
                    egui::Sense::click(),
                );

                if delete.clicked() {
                    remove_events.write(RemoveTokenRequest { id: area.id });
                    continue;
                }
                if delete.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                } else if body.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
                }

                let pointer = body
                    .interact_pointer_pos()
                    .map(|p| transform.invert(Vec2::new(p.x, p.y)));
                let bounds = config.matrix.token_bounds(token_size(&token.label, &font));

                if body.drag_started()
                    && let Some(pointer) = pointer
                {
                    drag.active = Some(ActiveDrag {
                        id: area.id,
                        grab: pointer - token.position,
                        position: token.position,
                    });
                }

                if body.dragged()
                    && let Some(pointer) = pointer
                    && let Some(active) = drag.active.as_mut().filter(|a| a.id == area.id)
                {
                    active.position = (pointer - active.grab).clamp(bounds.min, bounds.max);
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                }

                if body.drag_stopped()
                    && let Some(active) = drag.active.take_if(|a| a.id == area.id)
                {
                    reposition_events.write(RepositionTokenRequest {
                        id: active.id,
                        position: active.position,
                        bounds,
                    });
                }
            }
        });
    Ok(())
}

fn paint_node(painter: &egui::Painter, node: &SceneNode, transform: &SceneTransform) {
    let scale = transform.scale;
    match node {
        SceneNode::Rect { rect, fill, radius } => {
            painter.rect_filled(
                to_egui_rect(transform.apply_rect(*rect)),
                corner_radius(*radius * scale),
                bevy_to_egui(*fill),
            );
        }
        SceneNode::Border {
            rect,
            width,
            color,
            radius,
        } => {
            painter.rect_stroke(
                to_egui_rect(transform.apply_rect(*rect)),
                corner_radius(*radius * scale),
                egui::Stroke::new(*width * scale, bevy_to_egui(*color)),
                egui::StrokeKind::Inside,
            );
        }
        SceneNode::Line {
            from,
            to,
            width,
            color,
        } => {
            painter.line_segment(
                [to_pos2(transform.apply(*from)), to_pos2(transform.apply(*to))],
                egui::Stroke::new(*width * scale, bevy_to_egui(*color)),
            );
        }
        SceneNode::Text {
            position,
            size,
            text,
            font_size,
            color,
            orientation,
        } => {
            let color = bevy_to_egui(*color);
            let galley = painter.layout_no_wrap(
                text.clone(),
                egui::FontId::proportional(*font_size * scale),
                color,
            );
            let top_left = transform.apply(*position);
            let shape = match orientation {
                TextOrientation::Horizontal => {
                    egui::epaint::TextShape::new(to_pos2(top_left), galley, color)
                }
                // Rotation pivots on the galley origin, which ends up bottom-left
                TextOrientation::Vertical => egui::epaint::TextShape::new(
                    to_pos2(top_left + Vec2::new(0.0, size.x * scale)),
                    galley,
                    color,
                )
                .with_angle(-FRAC_PI_2),
            };
            painter.add(shape);
        }
        SceneNode::Cross { rect, width, color } => {
            let rect = transform.apply_rect(*rect);
            let stroke = egui::Stroke::new(*width * scale, bevy_to_egui(*color));
            painter.line_segment([to_pos2(rect.min), to_pos2(rect.max)], stroke);
            painter.line_segment(
                [
                    egui::pos2(rect.max.x, rect.min.y),
                    egui::pos2(rect.min.x, rect.max.y),
                ],
                stroke,
            );
        }
    }
}

fn corner_radius(radius: f32) -> egui::CornerRadius {
    egui::CornerRadius::same(radius.round().clamp(0.0, u8::MAX as f32) as u8)
}

fn to_pos2(point: Vec2) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos2(rect.min), to_pos2(rect.max))
}

fn from_egui_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}
