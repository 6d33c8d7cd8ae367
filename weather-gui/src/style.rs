use eframe::egui::Color32;

// Palette carried over from the app's original look.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x3d, 0x40, 0x5b);
pub const TEXT: Color32 = Color32::from_rgb(0xf4, 0xf1, 0xde);
pub const ACCENT_WARM: Color32 = Color32::from_rgb(0xe0, 0x7a, 0x5f);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(0x81, 0xb2, 0x9a);

/// Width (logical points) below which the forecast wraps into a centered grid
/// instead of scrolling horizontally.
pub const NARROW_WIDTH: f32 = 600.0;

/// Fixed width of one forecast card, both layouts.
pub const FORECAST_CARD_WIDTH: f32 = 130.0;
