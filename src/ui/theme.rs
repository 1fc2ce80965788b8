//! Theme constants for the GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(25, 25, 30);
pub const X_MARK_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const O_MARK: Color32 = Color32::from_rgb(250, 250, 252);
pub const O_MARK_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Translucent previews, alpha 80 (premultiplied)
pub const HOVER_PREVIEW_X: Color32 = Color32::from_rgba_premultiplied(6, 6, 6, 80);
pub const HOVER_PREVIEW_O: Color32 = Color32::from_rgba_premultiplied(75, 75, 75, 80);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const CARD_ACTIVE: Color32 = Color32::from_rgb(55, 60, 70);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const MARK_RADIUS_RATIO: f32 = 0.42;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Star point positions (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_previews_are_translucent() {
        assert_eq!(HOVER_PREVIEW_X.a(), 80);
        assert_eq!(HOVER_PREVIEW_O.a(), 80);
        // O's preview is the lighter of the two
        assert!(HOVER_PREVIEW_O.r() > HOVER_PREVIEW_X.r());
    }
}
