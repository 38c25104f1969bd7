use egui::Pos2;

use super::{distance_to_circle, distance_to_line_segment};
use crate::path_store::PathStore;
use crate::stroke::{Primitive, StrokePath};

/// Whether `point` lies inside the painted outline of a primitive stroked at
/// `line_width`. Lines use round caps; arcs are stroked at half the width.
///
/// The rasterizer paints exactly the pixels whose centers pass this test, so
/// what the eraser hits is what is on screen.
pub fn primitive_contains(primitive: &Primitive, point: Pos2, line_width: f32) -> bool {
    match *primitive {
        Primitive::Line { from, to } => {
            distance_to_line_segment(point, from, to) <= line_width / 2.0
        }
        Primitive::Arc { center, radius } => {
            distance_to_circle(point, center, radius) <= line_width / 4.0
        }
    }
}

/// Whether `point` lies inside the stroked outline of any part of `path`
pub fn path_contains(path: &StrokePath, point: Pos2, line_width: f32) -> bool {
    let Some(bounds) = path.bounds() else {
        return false;
    };
    // Cheap rejection before walking every segment
    if !bounds.expand(line_width / 2.0).contains(point) {
        return false;
    }
    path.primitives()
        .any(|primitive| primitive_contains(&primitive, point, line_width))
}

/// Finds the stored strokes an eraser sample touches
#[derive(Debug, Clone, Copy)]
pub struct HitTester {
    line_width: f32,
}

impl HitTester {
    /// Strokes are thickened by `line_width`, the brush width in effect now
    /// (widths are not stored per stroke).
    pub fn new(line_width: f32) -> Self {
        Self { line_width }
    }

    /// Indices of every stroke, hidden or not, whose outline contains `point`
    pub fn test_point(&self, store: &PathStore, point: Pos2) -> Vec<usize> {
        store
            .iter()
            .filter(|(_, stroke)| path_contains(stroke.path(), point, self.line_width))
            .map(|(index, _)| index)
            .collect()
    }
}
