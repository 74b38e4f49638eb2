use eframe::egui;

use crate::app::fetch::Loadable;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::{self, charts};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut reload = views::view_header(
        ui,
        "Sales Forecast",
        "Projected daily sales for the next 30 days",
    );

    match &state.sales_forecast {
        Loadable::Idle => {
            if ui.button("Load data").clicked() {
                reload = true;
            }
        }
        Loadable::Loading => views::loading_indicator(ui),
        // Covers both transport failures and the backend's 400 when it
        // holds fewer than 30 days of history; the message explains which.
        Loadable::Failed(message) => {
            if views::error_box(ui, message) {
                reload = true;
            }
        }
        Loadable::Loaded(points) => {
            let series: Vec<[f64; 2]> = points
                .iter()
                .enumerate()
                .map(|(i, p)| [i as f64, p.forecasted_sales])
                .collect();
            charts::line_chart(ui, "sales_forecast", "Forecasted sales", series);

            ui.add_space(12.0);
            egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                egui::Grid::new("sales_forecast_table")
                    .striped(true)
                    .min_col_width(140.0)
                    .show(ui, |ui| {
                        ui.colored_label(colors::TEXT_SECONDARY, "Date");
                        ui.colored_label(colors::TEXT_SECONDARY, "Forecasted sales");
                        ui.end_row();
                        for point in points {
                            ui.colored_label(
                                colors::TEXT_LIGHT,
                                point.date.format("%Y-%m-%d").to_string(),
                            );
                            ui.colored_label(
                                colors::TEXT_LIGHT,
                                format!("{:.2}", point.forecasted_sales),
                            );
                            ui.end_row();
                        }
                    });
            });
        }
    }

    if reload {
        state.load_sales_forecast();
    }
}
