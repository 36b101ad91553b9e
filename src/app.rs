use crate::*;
use crate::chart::ChartState;
use crate::error::ValidationError;
use crate::form::PlotForm;
use std::collections::VecDeque;

pub struct JohnsonCookPlotter {
    form: PlotForm,
    chart: ChartState,
    pending_errors: VecDeque<ValidationError>,
}

impl Default for JohnsonCookPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for JohnsonCookPlotter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut plot_requested = false;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                plot_requested = self.draw(ui);
            });

        if plot_requested && self.plot() {
            ctx.request_repaint();
        }
        self.show_error_dialog(ctx);
    }
}

impl JohnsonCookPlotter {
    pub fn new() -> Self {
        Self {
            form: PlotForm::default(),
            chart: ChartState::new(),
            pending_errors: VecDeque::new(),
        }
    }

    pub fn form_mut(&mut self) -> &mut PlotForm {
        &mut self.form
    }

    pub fn chart(&self) -> &ChartState {
        &self.chart
    }

    /// The error dialog currently shown, if any.
    pub fn pending_error(&self) -> Option<&ValidationError> {
        self.pending_errors.front()
    }

    /// Handles a click on the plot button. Returns true if a curve was added. On
    /// invalid input one error is queued per invalid field and the chart is left
    /// unchanged.
    pub fn plot(&mut self) -> bool {
        match plot::plot_into(&self.form, &mut self.chart) {
            Ok(_) => true,
            Err(_) => {
                self.pending_errors.extend(self.form.validation_errors());
                false
            }
        }
    }

    pub fn acknowledge_error(&mut self) {
        self.pending_errors.pop_front();
    }

    fn draw(&mut self, ui: &mut egui::Ui) -> bool {
        let ui_size = ui.available_size();
        let form_enabled = self.pending_errors.is_empty();
        ui.horizontal(|ui| {
            let plot_requested = ui
                .add_enabled_ui(form_enabled, |ui| {
                    control::add_form_controls(ui, constants::CONTROL_WIDTH, &mut self.form)
                })
                .inner;
            let chart_size = egui::Vec2::new(
                0.96_f32 * (ui_size.x - constants::CONTROL_WIDTH),
                ui_size.y,
            );
            plotter::add_chart(ui, &self.chart, chart_size);
            plot_requested && form_enabled
        })
        .inner
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = self.pending_error().copied() else {
            return;
        };
        let mut acknowledged = false;
        egui::Window::new(constants::ERROR_DIALOG_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(error.to_string());
                ui.add_space(8_f32);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });
        if acknowledged {
            self.acknowledge_error();
        }
    }
}
