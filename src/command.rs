use egui::Color32;

/// Discrete commands issued by the toolbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Change the brush (and fill) color
    SetColor(Color32),
    /// Change the brush width; clamped to the configured range
    SetLineWidth(f32),
    /// Switch between fill and paint mode
    ToggleFill,
    /// Switch between erase and paint mode
    ToggleErase,
    /// Paint the whole canvas with the default background
    Clear,
    /// Encode the canvas as PNG
    Export,
}

/// What executing a [`Command`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    None,
    /// PNG bytes from [`Command::Export`]
    Image(Vec<u8>),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetColor(_) => "SetColor",
            Self::SetLineWidth(_) => "SetLineWidth",
            Self::ToggleFill => "ToggleFill",
            Self::ToggleErase => "ToggleErase",
            Self::Clear => "Clear",
            Self::Export => "Export",
        }
    }
}
