use egui::Color32;

use crate::error::CanvasResult;
use crate::path_store::PathStore;
use crate::state::DrawingState;
use crate::surface::Surface;

/// Owns the drawing surface and performs full-surface operations on it.
///
/// The surface is optional: every operation on a renderer without one is a
/// silent no-op.
#[derive(Debug, Default)]
pub struct Renderer {
    surface: Option<Surface>,
    // Bumped on every change to the pixels, so callers know when to re-upload
    version: u64,
}

impl Renderer {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface: Some(surface),
            version: 0,
        }
    }

    /// A renderer with nothing to draw on
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Mutable access for incremental drawing; counts as a change
    pub fn surface_mut(&mut self) -> Option<&mut Surface> {
        if self.surface.is_some() {
            self.version += 1;
        }
        self.surface.as_mut()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Clear to `background` and redraw every visible stroke in insertion
    /// order. All strokes use `line_width`, the current brush width, since
    /// widths are not stored per stroke.
    pub fn repaint(&mut self, store: &PathStore, background: Color32, line_width: f32) {
        let Some(surface) = self.surface_mut() else {
            return;
        };
        surface.fill(background);
        for (color, path) in store.iter_visible() {
            surface.stroke_path(path, color, line_width);
        }
        log::debug!("Repainted {} visible strokes", store.visible_count());
    }

    /// Flood-fill the surface and remember `color` as the new background
    pub fn fill_all(&mut self, drawing: &mut DrawingState, color: Color32) {
        let Some(surface) = self.surface_mut() else {
            return;
        };
        surface.fill(color);
        drawing.set_background_color(color);
        log::info!("Filled canvas with {:?}", color);
    }

    /// Flood-fill the surface without touching any drawing state
    pub fn clear(&mut self, color: Color32) {
        if let Some(surface) = self.surface_mut() {
            surface.fill(color);
        }
    }

    /// PNG snapshot of the surface, `None` if there is no surface
    pub fn flatten_to_image(&self) -> CanvasResult<Option<Vec<u8>>> {
        self.surface.as_ref().map(Surface::encode_png).transpose()
    }
}
