#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use stroke_canvas::{CanvasConfig, StrokeCanvasApp};

const CONFIG_FILE: &str = "stroke_canvas.json";

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = CanvasConfig::load_or_default(CONFIG_FILE);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stroke Canvas")
            .with_inner_size([config.width as f32 + 240.0, config.height as f32 + 40.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stroke Canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(StrokeCanvasApp::new(cc, config)?))),
    )
}
