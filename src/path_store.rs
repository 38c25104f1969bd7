use crate::stroke::{StoredStroke, StrokePath};
use egui::Color32;

/// Append-only collection of committed strokes.
///
/// Strokes are never removed, only hidden, so an index handed out by
/// [`PathStore::commit`] refers to the same stroke for the whole session.
/// Insertion order is the order strokes are redrawn in.
#[derive(Debug, Clone, Default)]
pub struct PathStore {
    strokes: Vec<StoredStroke>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished path with the color it was drawn in
    pub fn commit(&mut self, path: StrokePath, color: Color32) -> &StoredStroke {
        self.strokes.push(StoredStroke::new(path, color));
        let index = self.strokes.len() - 1;
        log::info!(
            "Committed stroke {} ({} segments)",
            index,
            self.strokes[index].path().segments().len()
        );
        &self.strokes[index]
    }

    /// Hide the stroke at `index`. Returns true only if this call changed it.
    pub fn hide(&mut self, index: usize) -> bool {
        match self.strokes.get_mut(index) {
            Some(stroke) => stroke.hide(),
            None => {
                log::warn!("Ignoring hide for unknown stroke index {}", index);
                false
            }
        }
    }

    /// Visible strokes in insertion order
    pub fn iter_visible(&self) -> impl Iterator<Item = (Color32, &StrokePath)> + '_ {
        self.strokes
            .iter()
            .filter(|stroke| stroke.is_visible())
            .map(|stroke| (stroke.color(), stroke.path()))
    }

    /// All strokes, hidden ones included, with their indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &StoredStroke)> + '_ {
        self.strokes.iter().enumerate()
    }

    pub fn get(&self, index: usize) -> Option<&StoredStroke> {
        self.strokes.get(index)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.strokes.iter().filter(|stroke| stroke.is_visible()).count()
    }
}
