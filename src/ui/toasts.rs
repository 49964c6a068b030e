use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::theme::ui::{TOAST_ERROR, TOAST_SUCCESS};
use crate::toasts::{ToastKind, Toasts};

/// Stack of toasts in the top-right corner, newest at the bottom
pub fn toast_overlay_ui(mut contexts: EguiContexts, toasts: Res<Toasts>) -> Result {
    if toasts.is_empty() {
        return Ok(());
    }

    egui::Area::new(egui::Id::new("toast_overlay"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            for toast in toasts.iter() {
                let fill = match toast.kind {
                    ToastKind::Success => TOAST_SUCCESS,
                    ToastKind::Error => TOAST_ERROR,
                };
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&toast.message)
                                .color(egui::Color32::WHITE)
                                .size(14.0),
                        );
                    });
                ui.add_space(6.0);
            }
        });
    Ok(())
}
