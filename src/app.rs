use std::fs;

use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::command::{Command, CommandOutput};
use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::session::DrawingSession;

/// The window around one drawing session
pub struct StrokeCanvasApp {
    session: DrawingSession,
    input: InputHandler,
    // Canvas pixels on the GPU, plus the renderer version they were taken from
    texture: Option<(TextureHandle, u64)>,
    status: Option<String>,
}

impl StrokeCanvasApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> CanvasResult<Self> {
        Ok(Self::with_session(DrawingSession::new(config)?))
    }

    pub fn with_session(session: DrawingSession) -> Self {
        Self {
            session,
            input: InputHandler::new(egui::Rect::NOTHING),
            texture: None,
            status: None,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Message from the last save, shown under the toolbar
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn execute_command(&mut self, command: Command) {
        match self.session.execute(command) {
            Ok(CommandOutput::None) if command == Command::Export => {
                self.status = Some("Nothing to save".to_owned());
            }
            Ok(CommandOutput::None) => {}
            Ok(CommandOutput::Image(png)) => self.write_export(&png),
            Err(err) => {
                log::error!("Command {} failed: {}", command.name(), err);
                self.status = Some(err.to_string());
            }
        }
    }

    // Exported PNGs go to the configured file in the working directory
    fn write_export(&mut self, png: &[u8]) {
        let file_name = &self.session.config().export_file_name;
        self.status = Some(match fs::write(file_name, png) {
            Ok(()) => {
                log::info!("Saved canvas to {}", file_name);
                format!("Saved {}", file_name)
            }
            Err(err) => {
                log::error!("Failed to save {}: {}", file_name, err);
                format!("Save failed: {}", err)
            }
        });
    }

    /// Texture showing the current canvas, re-uploaded when the pixels changed
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> Option<&TextureHandle> {
        let renderer = self.session.renderer();
        let version = renderer.version();
        let surface = renderer.surface()?;

        match &mut self.texture {
            Some((_, uploaded)) if *uploaded == version => {}
            Some((handle, uploaded)) => {
                handle.set(surface.to_color_image(), TextureOptions::NEAREST);
                *uploaded = version;
            }
            None => {
                let image: ColorImage = surface.to_color_image();
                let handle = ctx.load_texture("stroke_canvas", image, TextureOptions::NEAREST);
                self.texture = Some((handle, version));
            }
        }
        self.texture.as_ref().map(|(handle, _)| handle)
    }
}

impl eframe::App for StrokeCanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
