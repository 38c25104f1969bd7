use egui::{Color32, Pos2, Rect};

/// One drawing instruction of a [`StrokePath`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Starts a new subpath without drawing
    MoveTo(Pos2),
    /// Straight line from the previous point
    LineTo(Pos2),
    /// Full circle, stroked at half the line width (used for dots)
    Arc { center: Pos2, radius: f32 },
}

/// A freehand path recorded during one gesture.
///
/// Mirrors the semantics of a 2D canvas path: a `line_to` with no current
/// point only sets the start, and repeated moves before any drawing collapse
/// into the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    segments: Vec<Segment>,
    current: Option<Pos2>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pen position without drawing
    pub fn move_to(&mut self, point: Pos2) {
        if let Some(Segment::MoveTo(last)) = self.segments.last_mut() {
            *last = point;
        } else {
            self.segments.push(Segment::MoveTo(point));
        }
        self.current = Some(point);
    }

    /// Append a line from the current point. Returns the drawn segment's
    /// endpoints, or `None` when there was no current point to draw from.
    pub fn line_to(&mut self, point: Pos2) -> Option<(Pos2, Pos2)> {
        match self.current {
            Some(from) => {
                self.segments.push(Segment::LineTo(point));
                self.current = Some(point);
                Some((from, point))
            }
            None => {
                self.move_to(point);
                None
            }
        }
    }

    /// Append a full circle. The pen stays at the circle's center.
    pub fn arc(&mut self, center: Pos2, radius: f32) {
        self.segments.push(Segment::Arc { center, radius });
        self.current = Some(center);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn current_point(&self) -> Option<Pos2> {
        self.current
    }

    /// True if the path contains anything that would put ink on the surface
    pub fn has_geometry(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !matches!(segment, Segment::MoveTo(_)))
    }

    /// Iterate over the drawable primitives with their resolved start points
    pub fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        let mut pen: Option<Pos2> = None;
        self.segments.iter().filter_map(move |segment| match *segment {
            Segment::MoveTo(point) => {
                pen = Some(point);
                None
            }
            Segment::LineTo(point) => {
                let from = pen.replace(point)?;
                Some(Primitive::Line { from, to: point })
            }
            Segment::Arc { center, radius } => {
                pen = Some(center);
                Some(Primitive::Arc { center, radius })
            }
        })
    }

    /// Bounding box of the path's centerline geometry (arcs included).
    /// `None` if the path draws nothing.
    pub fn bounds(&self) -> Option<Rect> {
        let mut rect = Rect::NOTHING;
        for primitive in self.primitives() {
            match primitive {
                Primitive::Line { from, to } => {
                    rect.extend_with(from);
                    rect.extend_with(to);
                }
                Primitive::Arc { center, radius } => {
                    rect = rect.union(Rect::from_center_size(
                        center,
                        egui::Vec2::splat(radius * 2.0),
                    ));
                }
            }
        }
        (!rect.is_negative()).then_some(rect)
    }
}

/// A resolved drawable piece of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line { from: Pos2, to: Pos2 },
    Arc { center: Pos2, radius: f32 },
}

/// A committed path together with the color it was drawn in
#[derive(Debug, Clone, PartialEq)]
pub struct StoredStroke {
    path: StrokePath,
    color: Color32,
    visible: bool,
}

impl StoredStroke {
    pub fn new(path: StrokePath, color: Color32) -> Self {
        Self {
            path,
            color,
            visible: true,
        }
    }

    pub fn path(&self) -> &StrokePath {
        &self.path
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // Visibility only ever goes from true to false
    pub(crate) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_line_to_without_current_point_moves() {
        let mut path = StrokePath::new();
        assert_eq!(path.line_to(pos2(10.0, 10.0)), None);
        assert_eq!(
            path.line_to(pos2(50.0, 10.0)),
            Some((pos2(10.0, 10.0), pos2(50.0, 10.0)))
        );

        let primitives: Vec<_> = path.primitives().collect();
        assert_eq!(
            primitives,
            vec![Primitive::Line {
                from: pos2(10.0, 10.0),
                to: pos2(50.0, 10.0)
            }]
        );
    }

    #[test]
    fn test_repeated_moves_collapse() {
        let mut path = StrokePath::new();
        for x in 0..100 {
            path.move_to(pos2(x as f32, 5.0));
        }
        assert_eq!(path.segments(), &[Segment::MoveTo(pos2(99.0, 5.0))]);
        assert!(!path.has_geometry());
        assert_eq!(path.bounds(), None);
    }

    #[test]
    fn test_arc_keeps_pen_at_center() {
        let mut path = StrokePath::new();
        path.move_to(pos2(3.0, 3.0));
        path.arc(pos2(20.0, 20.0), 2.5);
        assert_eq!(path.current_point(), Some(pos2(20.0, 20.0)));

        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.min, pos2(17.5, 17.5));
        assert_eq!(bounds.max, pos2(22.5, 22.5));
    }

    #[test]
    fn test_hide_reports_first_change_only() {
        let mut stroke = StoredStroke::new(StrokePath::new(), Color32::RED);
        assert!(stroke.hide());
        assert!(!stroke.hide());
        assert!(!stroke.is_visible());
    }
}
