//! Plain RGB colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An opaque 24-bit color. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Mix `self` over `background` with the given opacity (0.0-1.0).
    pub fn blend_over(self, background: Rgb, alpha: f64) -> Rgb {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |fg: u8, bg: u8| -> u8 {
            (bg as f64 + (fg as f64 - bg as f64) * alpha).round() as u8
        };
        Rgb(
            mix(self.0, background.0),
            mix(self.1, background.1),
            mix(self.2, background.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}
