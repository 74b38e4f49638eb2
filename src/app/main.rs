/**
 * Native Desktop App - Main Entry Point
 *
 * Entry point for the dashboard application. Implements eframe::App and
 * wires the frame loop to the central AppState.
 */
use eframe::egui;
use modalytics::app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modalytics=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Modalytics - Fashion Sales Analytics",
        options,
        Box::new(|cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::default()))
        }),
    )
}

/// Main application state
struct DashboardApp {
    state: AppState,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_nav(ctx, &mut self.state);
        views::render_main(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
