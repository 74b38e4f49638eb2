use eframe::egui;

use crate::app::fetch::Loadable;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::{self, charts};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut reload = views::view_header(
        ui,
        "Clothing-Type Mix",
        "Share of total sales per clothing type",
    );

    match &state.clothing_type_sales {
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
            // The backend already computed each type's share; the pie uses
            // the raw sales so rounding in `percentage` cannot skew it.
            let slices: Vec<(String, f64)> = rows
                .iter()
                .map(|r| (r.clothing_type_name.clone(), r.total_sales))
                .collect();
            charts::pie_chart(ui, &slices);

            ui.add_space(12.0);
            egui::Grid::new("clothing_type_table")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Type");
                    ui.colored_label(colors::TEXT_SECONDARY, "Total sales");
                    ui.colored_label(colors::TEXT_SECONDARY, "Orders");
                    ui.colored_label(colors::TEXT_SECONDARY, "Share");
                    ui.end_row();
                    for row in rows {
                        ui.colored_label(colors::TEXT_LIGHT, &row.clothing_type_name);
                        ui.colored_label(colors::TEXT_LIGHT, format!("{:.2}", row.total_sales));
                        ui.colored_label(colors::TEXT_LIGHT, row.order_count.to_string());
                        ui.colored_label(colors::TEXT_LIGHT, format!("{:.2}%", row.percentage));
                        ui.end_row();
                    }
                });
        }
    }

    if reload {
        state.load_clothing_type_sales();
    }
}
