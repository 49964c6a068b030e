mod matrix_view;
mod toasts;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigLoaded;
use crate::scene::LiveView;
use crate::text::load_glyph_font;

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<toolbar::TokenInput>()
            .init_resource::<matrix_view::DragState>()
            .init_resource::<LiveView>()
            .add_systems(Startup, (spawn_camera, load_glyph_font.after(ConfigLoaded)))
            // Top panel must render before the central panel claims the rest
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    matrix_view::matrix_view_ui,
                    // Last: overlays
                    toasts::toast_overlay_ui,
                )
                    .chain(),
            );
    }
}
