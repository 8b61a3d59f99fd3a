use crate::shape::ShapeGenerator;
use crate::state::EditorContext;

use super::InputEvent;

/// Routes a canvas input event to the editor's pointer handlers
pub fn route_event<G: ShapeGenerator>(event: &InputEvent, context: &mut EditorContext<G>) {
    match *event {
        InputEvent::PointerDown { pos } => context.on_pointer_down(pos),
        InputEvent::PointerMove { pos } => context.on_pointer_move(pos),
        InputEvent::PointerUp { pos } => context.on_pointer_up(pos),
    }
}
