use crate::*;
use crate::chart::ChartState;

/// Draws every curve of `chart` into one plot. Title, axis labels, legend and grid are
/// set on each frame.
pub fn add_chart(ui: &mut egui::Ui, chart: &ChartState, size: egui::Vec2) {
    let heading_height = 40_f32;
    if size.x < 50_f32 || size.y < 50_f32 + heading_height {
        return;
    }

    egui::Frame::group(ui.style())
        .outer_margin(0_f32)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(constants::CHART_TITLE);
                });
                egui_plot::Plot::new("Johnson-Cook Curves")
                    .width(size.x)
                    .height(size.y - heading_height)
                    .x_axis_label(constants::STRAIN_AXIS_LABEL)
                    .y_axis_label(constants::STRESS_AXIS_LABEL)
                    .show_grid(true)
                    .label_formatter(|name, point| {
                        if name.is_empty() {
                            format!("{:.3}, {:.1} MPa", point.x, point.y)
                        } else {
                            format!("{}\n{:.3}, {:.1} MPa", name, point.x, point.y)
                        }
                    })
                    .legend(egui_plot::Legend::default())
                    .show(ui, |plot_ui| {
                        for (index, curve) in chart.curves().iter().enumerate() {
                            plot_ui.line(
                                egui_plot::Line::new(egui_plot::PlotPoints::new(
                                    curve.finite_points(),
                                ))
                                .name(curve.label.as_str())
                                .color(utils::curve_color(index)),
                            );
                        }
                    });
            });
        });
}
