use eframe::egui;

use crate::app::router::Route;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let register_mode = state.route == Route::Register;

    // Fill the entire background first
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if register_mode { 360.0 } else { 290.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("👗 Modalytics")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Fashion sales analytics")
                    .size(14.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(16.0);

            ui.label(
                egui::RichText::new(if register_mode {
                    "Create Account"
                } else {
                    "Welcome Back"
                })
                .size(24.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            labelled_input(ui, available_rect.width(), label_width, input_width, "Username:", &mut state.username_input, false);
            ui.add_space(8.0);

            if register_mode {
                labelled_input(ui, available_rect.width(), label_width, input_width, "Email:", &mut state.email_input, false);
                ui.add_space(8.0);
            }

            labelled_input(ui, available_rect.width(), label_width, input_width, "Password:", &mut state.password_input, true);
            ui.add_space(8.0);

            if register_mode {
                labelled_input(ui, available_rect.width(), label_width, input_width, "Confirm:", &mut state.confirm_password_input, true);
                ui.add_space(8.0);
            }

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit = egui::Button::new(
                    egui::RichText::new(if register_mode { "Sign Up" } else { "Sign In" })
                        .color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui.add_sized([button_width, 32.0], submit).clicked() {
                    state.auth_error = None;
                    if register_mode {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle = egui::Button::new(
                    egui::RichText::new(if register_mode {
                        "Back to Sign In"
                    } else {
                        "Create Account"
                    })
                    .color(colors::TEXT_SECONDARY),
                );
                if ui.add_sized([button_width, 32.0], toggle).clicked() {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}

fn labelled_input(
    ui: &mut egui::Ui,
    available_width: f32,
    label_width: f32,
    input_width: f32,
    label: &str,
    value: &mut String,
    password: bool,
) {
    ui.horizontal(|ui| {
        ui.add_space((available_width - input_width - label_width - 20.0) / 2.0);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_LIGHT),
        );
    });
}
