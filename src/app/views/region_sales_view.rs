use eframe::egui;

use crate::app::fetch::Loadable;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::{self, charts};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut reload = views::view_header(
        ui,
        "Regional Sales",
        "Total sales and order count per region, best-selling first",
    );

    match &state.region_sales {
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
            let bars: Vec<(String, f64)> = rows
                .iter()
                .map(|r| (r.region_name.clone(), r.total_sales))
                .collect();
            charts::bar_chart(ui, "region_sales", "Total sales", &bars);

            ui.add_space(12.0);
            egui::Grid::new("region_sales_table")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Region");
                    ui.colored_label(colors::TEXT_SECONDARY, "Total sales");
                    ui.colored_label(colors::TEXT_SECONDARY, "Orders");
                    ui.end_row();
                    for row in rows {
                        ui.colored_label(colors::TEXT_LIGHT, &row.region_name);
                        ui.colored_label(colors::TEXT_LIGHT, format!("{:.2}", row.total_sales));
                        ui.colored_label(colors::TEXT_LIGHT, row.order_count.to_string());
                        ui.end_row();
                    }
                });
        }
    }

    if reload {
        state.load_region_sales();
    }
}
