use egui::{pos2, vec2, Color32, Rect, Sense};

use crate::StrokeCanvasApp;

pub fn central_panel(app: &mut StrokeCanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (width, height) = {
            let config = app.session().config();
            (config.width as f32, config.height as f32)
        };
        let (response, painter) = ui.allocate_painter(vec2(width, height), Sense::click_and_drag());

        // Handle input before drawing so this frame shows its effect
        app.input_mut().set_canvas_rect(response.rect);
        let events = app.input_mut().process_input(ctx);
        for event in events {
            app.session_mut().handle_input(event);
        }

        if let Some(texture) = app.canvas_texture(ctx) {
            painter.image(
                texture.id(),
                response.rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    });
}
