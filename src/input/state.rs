use egui::{InputState, Pos2};

/// The parts of one frame's pointer input the canvas cares about
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Latest known pointer position in screen coordinates
    pub pos: Option<Pos2>,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(input: &InputState) -> Self {
        Self {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
        }
    }
}
