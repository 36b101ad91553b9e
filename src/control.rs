use crate::*;
use crate::form::{Field, PlotForm};

/// Adds the parameter inputs and the plot button. Returns true if the button was clicked.
pub fn add_form_controls(ui: &mut egui::Ui, width: f32, form: &mut PlotForm) -> bool {
    let label_width = 0.55_f32 * width;
    let input_width = width - label_width - 20_f32;
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical(|ui| {
                egui::Grid::new("material_parameters")
                    .num_columns(2)
                    .min_col_width(label_width)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        for field in Field::ALL {
                            add_text_field(ui, field.label(), form.text_mut(field), input_width);
                        }
                        add_text_field(
                            ui,
                            constants::CURVE_NAME_LABEL,
                            &mut form.curve_name,
                            input_width,
                        );
                    });
                ui.add_space(10_f32);
                ui.vertical_centered(|ui| ui.button(constants::PLOT_BUTTON_TEXT).clicked())
                    .inner
            })
            .inner
        })
        .inner
}

fn add_text_field(ui: &mut egui::Ui, label: &str, text: &mut String, width: f32) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(text).desired_width(width));
    ui.end_row();
}
