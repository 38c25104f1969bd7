use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown { position: Pos2, button: PointerButton },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { position: Pos2 },
    /// Mouse button was released
    PointerUp { position: Pos2, button: PointerButton },
    /// Mouse left the canvas
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerMove { position }
            | Self::PointerUp { position, .. } => Some(*position),
            Self::PointerLeave => None,
        }
    }
}

/// Turns raw egui input into [`InputEvent`]s relative to the canvas rect
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input for this frame
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let hover = ctx.input(|input| input.pointer.hover_pos());
        let inside = hover.filter(|pos| self.canvas_rect.contains(*pos));

        let mut events = Vec::new();
        match inside {
            Some(pos) => {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_local(pos),
                    });
                }
                ctx.input(|input| {
                    for button in [PointerButton::Primary, PointerButton::Secondary] {
                        if input.pointer.button_pressed(button) {
                            events.push(InputEvent::PointerDown {
                                position: self.to_local(pos),
                                button,
                            });
                        }
                        if input.pointer.button_released(button) {
                            events.push(InputEvent::PointerUp {
                                position: self.to_local(pos),
                                button,
                            });
                        }
                    }
                });
            }
            None if self.last_pointer_pos.is_some() => events.push(InputEvent::PointerLeave),
            None => {}
        }
        self.last_pointer_pos = inside;

        events
    }
}
