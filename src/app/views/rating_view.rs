use eframe::egui;

use crate::app::fetch::Loadable;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::{self, charts};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut reload = views::view_header(
        ui,
        "Rating Distribution",
        "How customer ratings spread over the rating categories",
    );

    match &state.rating_distribution {
        Loadable::Idle => {
            if ui.button("Load data").clicked() {
                reload = true;
            }
        }
        Loadable::Loading => views::loading_indicator(ui),
        Loadable::Failed(message) => {
            if views::error_box(ui, message) {
                reload = true;
            }
        }
        Loadable::Loaded(rows) => {
            let slices: Vec<(String, f64)> = rows
                .iter()
                .map(|r| (r.rating_category.clone(), r.rating_count as f64))
                .collect();
            charts::pie_chart(ui, &slices);

            ui.add_space(12.0);
            egui::Grid::new("rating_table")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Category");
                    ui.colored_label(colors::TEXT_SECONDARY, "Ratings");
                    ui.colored_label(colors::TEXT_SECONDARY, "Share");
                    ui.end_row();
                    for row in rows {
                        ui.colored_label(colors::TEXT_LIGHT, &row.rating_category);
                        ui.colored_label(colors::TEXT_LIGHT, row.rating_count.to_string());
                        ui.colored_label(colors::TEXT_LIGHT, format!("{:.2}%", row.percentage));
                        ui.end_row();
                    }
                });
        }
    }

    if reload {
        state.load_rating_distribution();
    }
}
