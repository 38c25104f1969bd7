use egui::Pos2;

use crate::path_store::PathStore;
use crate::state::DrawingState;
use crate::stroke::{Primitive, StrokePath};
use crate::surface::Surface;

/// Whether a pointer gesture is in progress
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Gesturing,
}

/// Records the path of the current gesture and paints it as it grows.
///
/// Painting here is incremental: each call draws only what it just added.
/// Calls that are only meaningful during a gesture (`extend`, `dot`) are
/// ignored while idle.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    state: GestureState,
    current_path: StrokePath,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_gesturing(&self) -> bool {
        self.state == GestureState::Gesturing
    }

    /// The path being recorded
    pub fn current_path(&self) -> &StrokePath {
        &self.current_path
    }

    /// Start a gesture. The anchor set while hovering is kept so the first
    /// segment starts where the pointer was.
    pub fn begin(&mut self) {
        log::debug!("Gesture started at {:?}", self.current_path.current_point());
        self.state = GestureState::Gesturing;
    }

    /// Move the start point while hovering, without drawing
    pub fn move_anchor(&mut self, pos: Pos2) {
        if self.state == GestureState::Idle {
            self.current_path.move_to(pos);
        }
    }

    /// Add a line to `pos` and paint just that line
    pub fn extend(&mut self, pos: Pos2, drawing: &DrawingState, surface: Option<&mut Surface>) {
        if !self.is_gesturing() || drawing.is_erasing() {
            return;
        }
        let Some((from, to)) = self.current_path.line_to(pos) else {
            return;
        };
        if let Some(surface) = surface {
            surface.stroke_primitive(
                &Primitive::Line { from, to },
                drawing.stroke_color(),
                drawing.line_width(),
            );
        }
    }

    /// Mark a single click: a circle of radius width/4 stroked at half
    /// width, which fills a disc the size of the brush tip.
    pub fn dot(&mut self, pos: Pos2, drawing: &DrawingState, surface: Option<&mut Surface>) {
        if !self.is_gesturing() {
            return;
        }
        let radius = drawing.line_width() / 4.0;
        self.current_path.arc(pos, radius);
        if let Some(surface) = surface {
            surface.stroke_primitive(
                &Primitive::Arc { center: pos, radius },
                drawing.stroke_color(),
                drawing.line_width(),
            );
        }
    }

    /// Finish the gesture. Painted paths are committed with the current
    /// brush color and their store index returned; erase gestures commit
    /// nothing.
    pub fn end(&mut self, drawing: &DrawingState, store: &mut PathStore) -> Option<usize> {
        if !self.is_gesturing() {
            return None;
        }
        self.state = GestureState::Idle;

        if drawing.is_erasing() {
            log::debug!("Erase gesture ended");
            return None;
        }

        let path = std::mem::take(&mut self.current_path);
        store.commit(path, drawing.stroke_color());
        Some(store.len() - 1)
    }
}
