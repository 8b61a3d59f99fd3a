use egui::{Context, Pos2, Rect};

mod router;
mod state;

pub use router::route_event;
pub use state::PointerSnapshot;

/// Pointer events in canvas coordinates (origin at the canvas' top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Pos2 },
    PointerMove { pos: Pos2 },
    PointerUp { pos: Pos2 },
}

impl InputEvent {
    pub fn pos(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { pos }
            | InputEvent::PointerMove { pos }
            | InputEvent::PointerUp { pos } => *pos,
        }
    }
}

/// Handles converting raw egui input into canvas [`InputEvent`]s.
///
/// A press only starts a gesture inside the canvas. Once started, moves and the
/// final release are reported even if the pointer leaves the canvas, so every
/// down is matched by exactly one up.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let snapshot = ctx.input(PointerSnapshot::from_egui);
        self.process_snapshot(snapshot)
    }

    pub fn process_snapshot(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = snapshot.pos.or(self.last_pointer_pos) else {
            return events;
        };
        let moved = self.last_pointer_pos != Some(pos);
        self.last_pointer_pos = Some(pos);

        if snapshot.pressed && !self.gesture_active && self.canvas_rect.contains(pos) {
            self.gesture_active = true;
            events.push(InputEvent::PointerDown {
                pos: self.to_canvas(pos),
            });
        } else if moved && self.gesture_active {
            events.push(InputEvent::PointerMove {
                pos: self.to_canvas(pos),
            });
        }

        if snapshot.released && self.gesture_active {
            self.gesture_active = false;
            events.push(InputEvent::PointerUp {
                pos: self.to_canvas(pos),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(pos2(100.0, 50.0), pos2(500.0, 450.0)))
    }

    fn snapshot(x: f32, y: f32, pressed: bool, released: bool) -> PointerSnapshot {
        PointerSnapshot {
            pos: Some(pos2(x, y)),
            pressed,
            released,
        }
    }

    #[test]
    fn test_drag_inside_canvas() {
        let mut handler = handler();
        assert_eq!(
            handler.process_snapshot(snapshot(110.0, 60.0, true, false)),
            vec![InputEvent::PointerDown { pos: pos2(10.0, 10.0) }]
        );
        assert_eq!(
            handler.process_snapshot(snapshot(150.0, 90.0, false, false)),
            vec![InputEvent::PointerMove { pos: pos2(50.0, 40.0) }]
        );
        assert_eq!(
            handler.process_snapshot(snapshot(150.0, 90.0, false, true)),
            vec![InputEvent::PointerUp { pos: pos2(50.0, 40.0) }]
        );
    }

    #[test]
    fn test_hover_produces_nothing() {
        let mut handler = handler();
        assert!(handler.process_snapshot(snapshot(120.0, 60.0, false, false)).is_empty());
        assert!(handler.process_snapshot(snapshot(130.0, 70.0, false, false)).is_empty());
        assert!(handler.process_snapshot(snapshot(130.0, 70.0, false, true)).is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        assert!(handler.process_snapshot(snapshot(20.0, 20.0, true, false)).is_empty());
        assert!(handler.process_snapshot(snapshot(120.0, 60.0, false, false)).is_empty());
        assert!(handler.process_snapshot(snapshot(120.0, 60.0, false, true)).is_empty());
    }

    #[test]
    fn test_release_outside_canvas_ends_gesture() {
        let mut handler = handler();
        handler.process_snapshot(snapshot(110.0, 60.0, true, false));
        let events = handler.process_snapshot(snapshot(600.0, 60.0, false, true));
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { pos: pos2(500.0, 10.0) },
                InputEvent::PointerUp { pos: pos2(500.0, 10.0) },
            ]
        );
    }

    #[test]
    fn test_click_in_one_frame() {
        let mut handler = handler();
        let events = handler.process_snapshot(snapshot(110.0, 60.0, true, true));
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
                InputEvent::PointerUp { pos: pos2(10.0, 10.0) },
            ]
        );
    }
}
