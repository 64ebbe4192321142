use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Per-channel trace colours
// ---------------------------------------------------------------------------

/// One distinct colour per stacked channel, evenly spaced hues.
///
/// Starts at blue for the first trace, then walks the wheel.
pub fn channel_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n.max(1) as f32) * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.7, 0.5).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
