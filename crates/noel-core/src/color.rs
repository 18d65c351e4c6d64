//! Color utility functions shared by the scene and background layers.

use ratatui::style::Color;

/// Dim an RGB color toward black by `alpha` (0.0 = black, 1.0 = unchanged).
///
/// Terminal cells have no alpha channel, so translucency is approximated by
/// scaling the color components against the dark card background.
pub fn fade(color: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * alpha) as u8,
            (g as f32 * alpha) as u8,
            (b as f32 * alpha) as u8,
        ),
        other => other,
    }
}
