use eframe::egui;

use crate::app::fetch::Loadable;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::{self, charts};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut reload = views::view_header(
        ui,
        "Price Forecast",
        "Suggested price per clothing type, from current sales performance",
    );

    match &state.price_forecast {
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
                .map(|r| (r.clothing_type.clone(), r.forecasted_price))
                .collect();
            charts::bar_chart(ui, "price_forecast", "Suggested price", &bars);

            ui.add_space(12.0);
            egui::Grid::new("price_forecast_table")
                .striped(true)
                .min_col_width(140.0)
                .show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Clothing type");
                    ui.colored_label(colors::TEXT_SECONDARY, "Suggested price");
                    ui.end_row();
                    for row in rows {
                        ui.colored_label(colors::TEXT_LIGHT, &row.clothing_type);
                        ui.colored_label(
                            colors::TEXT_LIGHT,
                            format!("{:.2}", row.forecasted_price),
                        );
                        ui.end_row();
                    }
                });
        }
    }

    if reload {
        state.load_price_forecast();
    }
}
