use eframe::egui;

use crate::app::router::{AnalysisTab, ForecastTab, Route};
use crate::app::state::AppState;
use crate::app::theme::colors;

pub mod auth_view;
pub mod charts;
pub mod clothing_type_view;
pub mod dashboard_view;
pub mod logs_view;
pub mod price_forecast_view;
pub mod price_range_view;
pub mod rating_view;
pub mod region_sales_view;
pub mod sales_forecast_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("👗 Modalytics").size(18.0).strong(),
                );
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    egui::RichText::new(state.route.title()).size(14.0),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.session.is_logged_in() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(user) = state.session.user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                        }
                    }
                });
            });
        });
}

/// Left navigation rail; only shown with a live session.
pub fn render_nav(ctx: &egui::Context, state: &mut AppState) {
    if !state.session.is_logged_in() {
        return;
    }

    let frame_style = egui::Frame::default()
        .fill(colors::NAV_BG)
        .inner_margin(egui::Margin::symmetric(10, 12));

    egui::SidePanel::left("nav_panel")
        .frame(frame_style)
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            let mut target: Option<Route> = None;

            nav_item(ui, state, &mut target, Route::Dashboard, "📋 Dashboard");

            ui.add_space(10.0);
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("ANALYSIS").size(11.0));
            nav_item(
                ui,
                state,
                &mut target,
                Route::Analysis(AnalysisTab::RegionSales),
                "📊 Regional Sales",
            );
            nav_item(
                ui,
                state,
                &mut target,
                Route::Analysis(AnalysisTab::ClothingTypeSales),
                "🧥 Clothing Types",
            );
            nav_item(
                ui,
                state,
                &mut target,
                Route::Analysis(AnalysisTab::PriceRangeSales),
                "💰 Price Ranges",
            );
            nav_item(
                ui,
                state,
                &mut target,
                Route::Analysis(AnalysisTab::RatingDistribution),
                "⭐ Ratings",
            );

            ui.add_space(10.0);
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("FORECAST").size(11.0));
            nav_item(
                ui,
                state,
                &mut target,
                Route::Forecast(ForecastTab::Sales),
                "📈 Sales Forecast",
            );
            nav_item(
                ui,
                state,
                &mut target,
                Route::Forecast(ForecastTab::Price),
                "🏷 Price Forecast",
            );

            ui.add_space(10.0);
            ui.separator();
            nav_item(ui, state, &mut target, Route::Logs, "🪵 Logs");

            if let Some(route) = target {
                state.navigate(route);
            }
        });
}

fn nav_item(
    ui: &mut egui::Ui,
    state: &AppState,
    target: &mut Option<Route>,
    route: Route,
    label: &str,
) {
    let selected = state.route == route;
    let text = egui::RichText::new(label).color(if selected {
        colors::TEXT_LIGHT
    } else {
        colors::TEXT_SECONDARY
    });
    if ui.selectable_label(selected, text).clicked() {
        *target = Some(route);
    }
}

pub fn render_main(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.route {
            Route::Login | Route::Register | Route::Home => auth_view::render(ui, state),
            Route::Dashboard => dashboard_view::render(ui, state),
            Route::Analysis(AnalysisTab::RegionSales) => region_sales_view::render(ui, state),
            Route::Analysis(AnalysisTab::ClothingTypeSales) => {
                clothing_type_view::render(ui, state)
            }
            Route::Analysis(AnalysisTab::PriceRangeSales) => price_range_view::render(ui, state),
            Route::Analysis(AnalysisTab::RatingDistribution) => rating_view::render(ui, state),
            Route::Forecast(ForecastTab::Sales) => sales_forecast_view::render(ui, state),
            Route::Forecast(ForecastTab::Price) => price_forecast_view::render(ui, state),
            Route::Logs => logs_view::render(ui, state),
        });
}

/// Header row shared by the data views: title, subtitle, reload button.
/// Returns true when a reload was requested.
pub(crate) fn view_header(ui: &mut egui::Ui, title: &str, subtitle: &str) -> bool {
    let mut reload = false;
    ui.horizontal(|ui| {
        ui.colored_label(
            colors::TEXT_LIGHT,
            egui::RichText::new(title).size(22.0).strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Reload").clicked() {
                reload = true;
            }
        });
    });
    ui.colored_label(colors::TEXT_SECONDARY, subtitle);
    ui.add_space(10.0);
    reload
}

pub(crate) fn loading_indicator(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
    });
}

/// Error box with a retry button; returns true when retry was clicked.
pub(crate) fn error_box(ui: &mut egui::Ui, message: &str) -> bool {
    let mut retry = false;
    ui.colored_label(colors::ERROR, message);
    ui.add_space(6.0);
    if ui.button("Retry").clicked() {
        retry = true;
    }
    retry
}
