use eframe::egui;

use crate::app::debug::{DebugCategory, DebugLevel};
use crate::app::state::AppState;
use crate::app::theme::colors;

/// In-app diagnostics log with a category filter.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("Logs").size(22.0).strong(),
        );

        egui::ComboBox::from_id_salt("logs_filter")
            .selected_text(match state.logs_filter {
                Some(category) => category.to_string(),
                None => "All".to_string(),
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut state.logs_filter, None, "All");
                for category in DebugCategory::ALL {
                    ui.selectable_value(
                        &mut state.logs_filter,
                        Some(category),
                        category.to_string(),
                    );
                }
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                state.logger.clear();
            }
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("{} entries", state.logger.count()),
            );
        });
    });
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in state.logger.get_entries() {
                if let Some(filter) = state.logs_filter {
                    if entry.category != filter {
                        continue;
                    }
                }
                let color = match entry.level {
                    DebugLevel::Error => colors::ERROR,
                    DebugLevel::Warn => colors::WARNING,
                    DebugLevel::Info => colors::TEXT_LIGHT,
                    DebugLevel::Debug => colors::TEXT_SECONDARY,
                };
                ui.label(
                    egui::RichText::new(entry.to_string())
                        .monospace()
                        .size(12.0)
                        .color(color),
                );
            }
        });
}
