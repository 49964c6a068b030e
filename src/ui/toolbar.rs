use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::board::AddTokenRequest;
use crate::capture::{CaptureRequest, CaptureState};
use crate::constants::MAX_LABEL_CHARS;
use crate::theme::ui::{ADD_BUTTON, CAPTURE_BUTTON};

const INPUT_HINT: &str = "Enter Disruption or Disruptor";

/// Text typed into the toolbar input, kept across frames
#[derive(Resource, Default)]
pub struct TokenInput {
    pub text: String,
}

impl TokenInput {
    /// Take the typed label if it is worth submitting.
    ///
    /// Blank input is left in place and yields nothing.
    pub fn take_label(&mut self) -> Option<String> {
        if self.text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}

/// Top toolbar with the token input and the capture button
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut input: ResMut<TokenInput>,
    capture_state: Res<CaptureState>,
    mut add_events: MessageWriter<AddTokenRequest>,
    mut capture_events: MessageWriter<CaptureRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                let response = ui.add(
                    egui::TextEdit::singleline(&mut input.text)
                        .hint_text(INPUT_HINT)
                        .char_limit(MAX_LABEL_CHARS)
                        .desired_width(260.0),
                );
                // Enter makes a single-line edit lose focus
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let add_clicked = ui
                    .add(
                        egui::Button::new(
                            egui::RichText::new("Add").color(egui::Color32::WHITE).strong(),
                        )
                        .fill(ADD_BUTTON)
                        .min_size(egui::vec2(0.0, 24.0)),
                    )
                    .clicked();

                if submitted || add_clicked {
                    if let Some(label) = input.take_label() {
                        add_events.write(AddTokenRequest { label });
                    }
                    if submitted {
                        response.request_focus();
                    }
                }

                // Right-aligned capture button
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = ui.add_enabled(
                        !capture_state.is_busy(),
                        egui::Button::new(
                            egui::RichText::new("📸 Capture Matrix")
                                .color(egui::Color32::WHITE)
                                .strong(),
                        )
                        .fill(CAPTURE_BUTTON)
                        .min_size(egui::vec2(0.0, 24.0)),
                    );
                    if button.clicked() {
                        capture_events.write(CaptureRequest);
                    }
                    button
                        .on_hover_text(format!(
                            "Copy the matrix to the clipboard as PNG\n{} copied, {} failed",
                            capture_state.succeeded, capture_state.failed
                        ))
                        .on_disabled_hover_text("Capture in progress...");
                });
            });
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_label_clears_input() {
        let mut input = TokenInput {
            text: "Pandemic".to_string(),
        };
        assert_eq!(input.take_label(), Some("Pandemic".to_string()));
        assert!(input.text.is_empty());
    }

    #[test]
    fn test_take_label_keeps_blank_input() {
        let mut input = TokenInput {
            text: "   ".to_string(),
        };
        assert_eq!(input.take_label(), None);
        assert_eq!(input.text, "   ");
    }
}
