use std::fs;
use std::path::Path;

use egui::{PointerButton, Pos2};

use crate::command::{Command, CommandOutput};
use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::geometry::HitTester;
use crate::input::InputEvent;
use crate::path_store::PathStore;
use crate::recorder::StrokeRecorder;
use crate::renderer::Renderer;
use crate::state::{DrawingState, Mode};
use crate::surface::Surface;

/// One canvas: its surface, strokes and brush settings.
///
/// Dispatches pointer events and toolbar commands to the recorder, hit
/// tester and renderer. Everything runs synchronously on the caller's thread,
/// one event at a time.
#[derive(Debug)]
pub struct DrawingSession {
    config: CanvasConfig,
    state: DrawingState,
    store: PathStore,
    recorder: StrokeRecorder,
    renderer: Renderer,
}

impl DrawingSession {
    pub fn new(config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        let surface = Surface::new(config.width, config.height, config.background_color)?;
        log::info!("Created {}x{} canvas", config.width, config.height);
        Ok(Self::with_renderer(config, Renderer::new(surface)))
    }

    /// A session without a drawing surface. Strokes are still recorded but
    /// nothing is painted and exports produce nothing.
    pub fn detached(config: CanvasConfig) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self::with_renderer(config, Renderer::detached()))
    }

    fn with_renderer(config: CanvasConfig, renderer: Renderer) -> Self {
        Self {
            state: DrawingState::new(&config),
            store: PathStore::new(),
            recorder: StrokeRecorder::new(),
            renderer,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn store(&self) -> &PathStore {
        &self.store
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.renderer.surface()
    }

    pub fn is_gesturing(&self) -> bool {
        self.recorder.is_gesturing()
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position, button } => {
                // The secondary button is reserved for the (suppressed) context menu
                if button == PointerButton::Primary {
                    self.pointer_down(position);
                }
            }
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.pointer_up();
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        match self.state.mode() {
            Mode::Erase => {
                self.recorder.begin();
                self.erase_at(pos);
            }
            Mode::Fill => {
                let color = self.state.stroke_color();
                self.renderer.fill_all(&mut self.state, color);
            }
            Mode::Paint => {
                self.recorder.begin();
                self.recorder
                    .dot(pos, &self.state, self.renderer.surface_mut());
            }
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.recorder.is_gesturing() {
            self.recorder.move_anchor(pos);
        } else if self.state.is_erasing() {
            self.erase_at(pos);
        } else {
            self.recorder
                .extend(pos, &self.state, self.renderer.surface_mut());
        }
    }

    /// Release or leave: ends the gesture, committing painted strokes
    pub fn pointer_up(&mut self) -> Option<usize> {
        self.recorder.end(&self.state, &mut self.store)
    }

    /// Hide every stroke under `pos` and repaint if anything disappeared.
    /// Returns how many strokes were newly hidden.
    pub fn erase_at(&mut self, pos: Pos2) -> usize {
        let hits = HitTester::new(self.state.line_width()).test_point(&self.store, pos);
        let hidden = hits
            .into_iter()
            .filter(|&index| self.store.hide(index))
            .count();

        if hidden > 0 {
            log::debug!("Eraser at {:?} hid {} strokes", pos, hidden);
            self.renderer.repaint(
                &self.store,
                self.state.background_color(),
                self.state.line_width(),
            );
        }
        hidden
    }

    pub fn execute(&mut self, command: Command) -> CanvasResult<CommandOutput> {
        log::debug!("Executing command {}", command.name());
        match command {
            Command::SetColor(color) => self.state.set_stroke_color(color),
            Command::SetLineWidth(width) => {
                let width = self.config.clamp_line_width(width);
                self.state.set_line_width(width);
            }
            Command::ToggleFill => self.state.toggle(Mode::Fill),
            Command::ToggleErase => self.state.toggle(Mode::Erase),
            Command::Clear => self.renderer.clear(self.config.background_color),
            Command::Export => {
                return Ok(match self.renderer.flatten_to_image()? {
                    Some(png) => {
                        log::info!("Exported canvas ({} bytes)", png.len());
                        CommandOutput::Image(png)
                    }
                    None => CommandOutput::None,
                });
            }
        }
        Ok(CommandOutput::None)
    }

    /// Export the canvas and write it to `path`. Returns false when there is
    /// no surface to export.
    pub fn save_image(&self, path: impl AsRef<Path>) -> CanvasResult<bool> {
        let Some(png) = self.renderer.flatten_to_image()? else {
            return Ok(false);
        };
        fs::write(path.as_ref(), png)?;
        log::info!("Saved canvas to {}", path.as_ref().display());
        Ok(true)
    }
}
