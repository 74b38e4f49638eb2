//! Chart helpers shared by the analysis and forecast views.
//!
//! Bar and line charts go through `egui_plot`; the two share-of-total views
//! use a painter-drawn pie, since `egui_plot` has no pie primitive.

use eframe::egui::{self, Align2, FontId, Pos2, Sense, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::app::theme::colors;

/// Vertical bar chart with one bar per labelled category.
pub fn bar_chart(ui: &mut egui::Ui, id: &str, name: &str, rows: &[(String, f64)]) {
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, *value)
                .name(label.clone())
                .fill(colors::series_color(i))
        })
        .collect();
    let chart = BarChart::new(name.to_string(), bars);

    Plot::new(id)
        .height(320.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));

    category_legend(ui, rows.iter().map(|(label, _)| label.clone()));
}

/// Line chart over evenly spaced points.
pub fn line_chart(ui: &mut egui::Ui, id: &str, name: &str, points: Vec<[f64; 2]>) {
    let line = Line::new(name.to_string(), PlotPoints::from(points))
        .color(colors::ACCENT)
        .width(2.0);

    Plot::new(id)
        .height(320.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.line(line));
}

/// Painter-drawn pie with a legend to its right. Slices are drawn as a fan
/// of small triangles, which stays well-formed for slices past 180 degrees.
pub fn pie_chart(ui: &mut egui::Ui, slices: &[(String, f64)]) {
    let total: f64 = slices.iter().map(|(_, v)| v.max(0.0)).sum();
    let size = Vec2::new(ui.available_width().min(480.0), 280.0);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);

    if total <= 0.0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(16.0),
            colors::TEXT_SECONDARY,
        );
        return;
    }

    let radius = (rect.height() * 0.5 - 12.0).min(rect.width() * 0.3);
    let center = Pos2::new(rect.left() + radius + 12.0, rect.center().y);

    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (i, (_, value)) in slices.iter().enumerate() {
        let sweep = (value.max(0.0) / total) as f32 * std::f32::consts::TAU;
        let color = colors::series_color(i);
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        let step = sweep / steps as f32;
        for s in 0..steps {
            let a0 = angle + s as f32 * step;
            let a1 = a0 + step;
            let p0 = center + radius * Vec2::new(a0.cos(), a0.sin());
            let p1 = center + radius * Vec2::new(a1.cos(), a1.sin());
            painter.add(egui::Shape::convex_polygon(
                vec![center, p0, p1],
                color,
                Stroke::NONE,
            ));
        }
        angle += sweep;
    }

    let legend_x = center.x + radius + 28.0;
    let mut y = rect.top() + 16.0;
    for (i, (label, value)) in slices.iter().enumerate() {
        let color = colors::series_color(i);
        let swatch = egui::Rect::from_min_size(Pos2::new(legend_x, y - 6.0), Vec2::splat(12.0));
        painter.rect_filled(swatch, 2.0, color);
        let share = value.max(0.0) / total * 100.0;
        painter.text(
            Pos2::new(legend_x + 18.0, y),
            Align2::LEFT_CENTER,
            format!("{} ({:.1}%)", label, share),
            FontId::proportional(13.0),
            colors::TEXT_LIGHT,
        );
        y += 20.0;
        if y > rect.bottom() - 8.0 {
            break;
        }
    }
}

/// Color swatches mapping bar colors back to their category labels.
fn category_legend(ui: &mut egui::Ui, labels: impl Iterator<Item = String>) {
    ui.horizontal_wrapped(|ui| {
        for (i, label) in labels.enumerate() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, colors::series_color(i));
            ui.label(
                egui::RichText::new(label)
                    .color(colors::TEXT_SECONDARY)
                    .size(13.0),
            );
            ui.add_space(10.0);
        }
    });
}
