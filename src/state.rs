use egui::Color32;

use crate::config::CanvasConfig;

/// What a pointer press on the canvas does
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    #[default]
    Paint,
    Fill,
    Erase,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paint => "Paint",
            Self::Fill => "Fill",
            Self::Erase => "Erase",
        }
    }
}

/// Brush and background settings shared by the recorder, hit tester and renderer
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    mode: Mode,
    stroke_color: Color32,
    line_width: f32,
    background_color: Color32,
}

impl DrawingState {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            mode: Mode::Paint,
            stroke_color: config.initial_color,
            line_width: config.clamp_line_width(config.line_width),
            background_color: config.background_color,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("Mode changed: {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
    }

    /// Switch between `mode` and painting
    pub fn toggle(&mut self, mode: Mode) {
        if self.mode == mode {
            self.set_mode(Mode::Paint);
        } else {
            self.set_mode(mode);
        }
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == Mode::Erase
    }

    /// Brush color, also used for flood fills
    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f32) {
        self.line_width = line_width;
    }

    /// Last flood-fill color; erase repaints clear to it
    pub fn background_color(&self) -> Color32 {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.background_color = color;
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}
