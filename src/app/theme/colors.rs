//! Color Constants for the Dashboard Theme
//!
//! Charcoal base with a rose accent, plus a fixed series palette for the
//! charts so a category keeps its color across views.

use eframe::egui::Color32;

/// Main window background - Near-black charcoal
pub const BG_DARK: Color32 = Color32::from_rgb(0x1C, 0x1B, 0x1F);

/// Panel background - Dark charcoal
pub const PANEL_BG: Color32 = Color32::from_rgb(0x24, 0x22, 0x28);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x2A, 0x27, 0x30);

/// Navigation rail background
pub const NAV_BG: Color32 = Color32::from_rgb(0x22, 0x20, 0x26);

/// Card background on the dashboard
pub const CARD_BG: Color32 = Color32::from_rgb(0x2E, 0x2B, 0x34);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEF, 0xEA, 0xF2);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9E, 0x96, 0xA8);

/// Accent - Rose
pub const ACCENT: Color32 = Color32::from_rgb(0xD4, 0x5D, 0x79);

/// Accent hover
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0xE0, 0x74, 0x8D);

/// Selected navigation item background
pub const SELECTED_ITEM: Color32 = Color32::from_rgb(0x3C, 0x30, 0x3A);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x3A, 0x36, 0x42);

/// Series palette for charts and pie slices
pub const CHART_SERIES: [Color32; 8] = [
    Color32::from_rgb(0xD4, 0x5D, 0x79),
    Color32::from_rgb(0x6C, 0x8E, 0xD4),
    Color32::from_rgb(0xE0, 0xB2, 0x5C),
    Color32::from_rgb(0x5C, 0xB8, 0x8A),
    Color32::from_rgb(0x9B, 0x72, 0xCF),
    Color32::from_rgb(0xD4, 0x8A, 0x5D),
    Color32::from_rgb(0x5C, 0xAE, 0xC4),
    Color32::from_rgb(0xC4, 0x5C, 0xA8),
];

/// Color for the i-th series, cycling through the palette
pub fn series_color(index: usize) -> Color32 {
    CHART_SERIES[index % CHART_SERIES.len()]
}
