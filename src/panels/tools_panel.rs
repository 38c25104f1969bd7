use crate::command::Command;
use crate::components::ColorSwatch;
use crate::state::Mode;
use crate::StrokeCanvasApp;

pub fn tools_panel(app: &mut StrokeCanvasApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Brush");

            let state = app.session().state().clone();
            let palette = app.session().config().palette.clone();

            ui.horizontal_wrapped(|ui| {
                for color in palette {
                    let selected = color == state.stroke_color();
                    if ColorSwatch::new(color, selected).show(ui).clicked() {
                        app.execute_command(Command::SetColor(color));
                    }
                }
            });
            ui.separator();

            let (min, max) = {
                let config = app.session().config();
                (config.min_line_width, config.max_line_width)
            };
            let mut line_width = state.line_width();
            let slider = egui::Slider::new(&mut line_width, min..=max)
                .step_by(0.1)
                .text("Size");
            if ui.add(slider).changed() {
                app.execute_command(Command::SetLineWidth(line_width));
            }
            ui.separator();

            ui.horizontal(|ui| {
                // Shows the mode a click switches to
                let fill_label = if state.mode() == Mode::Fill { "PAINT" } else { "FILL" };
                if ui.button(fill_label).clicked() {
                    app.execute_command(Command::ToggleFill);
                }
                if ui.selectable_label(state.is_erasing(), "ERASE").clicked() {
                    app.execute_command(Command::ToggleErase);
                }
            });

            ui.horizontal(|ui| {
                if ui.button("CLEAR").clicked() {
                    app.execute_command(Command::Clear);
                }
                if ui.button("SAVE").clicked() {
                    app.execute_command(Command::Export);
                }
            });

            ui.separator();
            ui.label(format!("Mode: {}", state.mode().name()));
            ui.label(format!(
                "Strokes: {} ({} visible)",
                app.session().store().len(),
                app.session().store().visible_count()
            ));
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
