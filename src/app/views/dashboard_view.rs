use eframe::egui;

use crate::app::router::{AnalysisTab, ForecastTab, Route};
use crate::app::state::AppState;
use crate::app::theme::colors;

/// Dashboard shell: greeting plus one card per data view.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut target: Option<Route> = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new("👗 Modalytics").size(40.0).strong(),
        );
        ui.add_space(8.0);

        let greeting = match state.session.user() {
            Some(user) => format!("Welcome back, {}!", user.display_name()),
            None => "Welcome back!".to_string(),
        };
        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(greeting).size(18.0));
        ui.add_space(30.0);

        card_row(
            ui,
            &mut target,
            &[
                (Route::Analysis(AnalysisTab::RegionSales), "📊 Regional Sales", "Sales totals per region"),
                (Route::Analysis(AnalysisTab::ClothingTypeSales), "🧥 Clothing Types", "Share of sales per type"),
                (Route::Analysis(AnalysisTab::PriceRangeSales), "💰 Price Ranges", "Volume per price bracket"),
            ],
        );
        ui.add_space(14.0);
        card_row(
            ui,
            &mut target,
            &[
                (Route::Analysis(AnalysisTab::RatingDistribution), "⭐ Ratings", "Customer rating spread"),
                (Route::Forecast(ForecastTab::Sales), "📈 Sales Forecast", "Next 30 days of sales"),
                (Route::Forecast(ForecastTab::Price), "🏷 Price Forecast", "Suggested prices per type"),
            ],
        );
    });

    if let Some(route) = target {
        state.navigate(route);
    }
}

fn card_row(
    ui: &mut egui::Ui,
    target: &mut Option<Route>,
    cards: &[(Route, &str, &str)],
) {
    ui.horizontal(|ui| {
        let card_width = 220.0;
        let total = card_width * cards.len() as f32 + 14.0 * (cards.len() as f32 - 1.0);
        ui.add_space((ui.available_width() - total).max(0.0) / 2.0);
        for (route, title, subtitle) in cards {
            let button = egui::Button::new(
                egui::RichText::new(format!("{}\n{}", title, subtitle))
                    .size(15.0)
                    .color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(card_width, 70.0))
            .fill(colors::CARD_BG);
            if ui.add(button).clicked() {
                *target = Some(*route);
            }
            ui.add_space(14.0);
        }
    });
}
