//! Centralized color theme for the application.
//!
//! This module provides all colors used by the live matrix view and by the
//! capture rasterizer. Modify values here to change the board's look.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Token Palette
// ============================================================================

/// Number of colors in the token palette
pub const PALETTE_SIZE: usize = 8;

/// Pastel colors handed out to new tokens, in order
pub const TOKEN_PALETTE: [Color; PALETTE_SIZE] = [
    Color::srgb_u8(0xbf, 0xdb, 0xfe),
    Color::srgb_u8(0xbb, 0xf7, 0xd0),
    Color::srgb_u8(0xfe, 0xca, 0xca),
    Color::srgb_u8(0xfe, 0xd7, 0xaa),
    Color::srgb_u8(0xe9, 0xd5, 0xff),
    Color::srgb_u8(0xfd, 0xe6, 0x8a),
    Color::srgb_u8(0xdd, 0xd6, 0xfe),
    Color::srgb_u8(0x99, 0xf6, 0xe4),
];

/// Palette color for the token inserted when the board holds `count` tokens
pub fn palette_color(count: usize) -> Color {
    TOKEN_PALETTE[count % PALETTE_SIZE]
}

// ============================================================================
// Matrix Colors
// ============================================================================

/// Light neutral behind everything in a capture
pub const CAPTURE_BACKGROUND: Color = Color::srgb_u8(0xf3, 0xf4, 0xf6);

/// Fill of the matrix box
pub const MATRIX_FILL: Color = Color::WHITE;

/// Matrix border and quadrant grid lines
pub const MATRIX_LINE: Color = Color::srgb_u8(0xcc, 0xcc, 0xcc);

/// Axis captions and token labels
pub const TEXT_PRIMARY: Color = Color::srgb_u8(0x1f, 0x29, 0x37);

/// Quadrant titles
pub const QUADRANT_TITLE: Color = Color::srgb_u8(0x6b, 0x72, 0x80);

/// Quadrant descriptions
pub const QUADRANT_DESCRIPTION: Color = Color::srgb_u8(0x9c, 0xa3, 0xaf);

/// Soft drop shadow under tokens
pub const TOKEN_SHADOW: Color = Color::srgba(0.0, 0.0, 0.0, 0.1);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Blue "Add" button
    pub const ADD_BUTTON: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x82, 0xf6);

    /// Green "Capture" button
    pub const CAPTURE_BUTTON: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);

    /// Success toast background
    pub const TOAST_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x16, 0xa3, 0x4a);

    /// Failure toast background
    pub const TOAST_ERROR: egui::Color32 = egui::Color32::from_rgb(0xdc, 0x26, 0x26);
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let [r, g, b, a] = to_rgba8(color);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Convert a Bevy Color to straight (non-premultiplied) 8-bit sRGBA
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let srgba = color.to_srgba();
    [
        channel_to_u8(srgba.red),
        channel_to_u8(srgba.green),
        channel_to_u8(srgba.blue),
        channel_to_u8(srgba.alpha),
    ]
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), TOKEN_PALETTE[0]);
        assert_eq!(palette_color(7), TOKEN_PALETTE[7]);
        assert_eq!(palette_color(8), TOKEN_PALETTE[0]);
        assert_eq!(palette_color(19), TOKEN_PALETTE[3]);
    }

    #[test]
    fn test_to_rgba8_matches_hex() {
        assert_eq!(to_rgba8(TOKEN_PALETTE[0]), [0xbf, 0xdb, 0xfe, 0xff]);
        assert_eq!(to_rgba8(CAPTURE_BACKGROUND), [0xf3, 0xf4, 0xf6, 0xff]);
    }

    #[test]
    fn test_to_rgba8_keeps_alpha() {
        assert_eq!(to_rgba8(TOKEN_SHADOW)[3], 26);
    }

    #[test]
    fn test_bevy_to_egui_opaque() {
        let color = bevy_to_egui(MATRIX_LINE);
        assert_eq!(color, egui::Color32::from_rgb(0xcc, 0xcc, 0xcc));
    }
}
