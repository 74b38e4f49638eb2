//! Visual theme for the dashboard.

pub mod colors;

use eframe::egui;

/// Apply the dashboard theme to the egui context.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = colors::PANEL_BG;
    visuals.window_fill = colors::BG_DARK;
    visuals.selection.bg_fill = colors::ACCENT;
    visuals.hyperlink_color = colors::ACCENT_HOVER;
    ctx.set_visuals(visuals);
}
