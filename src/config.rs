use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

/// Canvas size, brush defaults and palette.
///
/// Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Brush color at startup
    pub initial_color: Color32,
    /// Brush width at startup
    pub line_width: f32,
    pub min_line_width: f32,
    pub max_line_width: f32,
    /// Color of a fresh or cleared canvas
    pub background_color: Color32,
    /// Swatches offered by the color picker
    pub palette: Vec<Color32>,
    /// File name used when saving the exported PNG
    pub export_file_name: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            initial_color: Color32::from_rgb(0x2c, 0x2c, 0x2c),
            line_width: 2.5,
            min_line_width: 0.1,
            max_line_width: 5.0,
            background_color: Color32::WHITE,
            palette: vec![
                Color32::from_rgb(0x2c, 0x2c, 0x2c),
                Color32::WHITE,
                Color32::from_rgb(0xff, 0x3b, 0x30),
                Color32::from_rgb(0xff, 0x95, 0x00),
                Color32::from_rgb(0xff, 0xcc, 0x00),
                Color32::from_rgb(0x4c, 0xd9, 0x63),
                Color32::from_rgb(0x5a, 0xc8, 0xfa),
                Color32::from_rgb(0x05, 0x79, 0xff),
                Color32::from_rgb(0x58, 0x56, 0xd6),
            ],
            export_file_name: "myPainting.png".to_owned(),
        }
    }
}

impl CanvasConfig {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings a session cannot start from
    pub fn validate(&self) -> CanvasResult<()> {
        let (min, max) = (self.min_line_width, self.max_line_width);
        // Also catches NaN bounds
        if !(min > 0.0 && min <= max) {
            return Err(CanvasError::InvalidLineWidthRange { min, max });
        }
        Ok(())
    }

    /// Read a JSON config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Using default canvas config ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Keep a brush width inside the configured range
    pub fn clamp_line_width(&self, line_width: f32) -> f32 {
        line_width.clamp(self.min_line_width, self.max_line_width)
    }
}
