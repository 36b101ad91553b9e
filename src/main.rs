#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use johnson_cook_plotter::*;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
    tracing::info!("starting {}", constants::APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                constants::INIT_WINDOW_SIZE[0] as f32,
                constants::INIT_WINDOW_SIZE[1] as f32,
            ])
            .with_title(constants::APP_TITLE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app::JohnsonCookPlotter::new()))),
    )
}
