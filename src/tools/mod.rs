use std::fmt;

mod draw_shape_tool;
mod selection_tool;

pub use draw_shape_tool::DrawShapeTool;
pub use selection_tool::{SelectedShape, SelectionTool};

/// The user-selectable tools.
///
/// The active tool is an `Option<Tool>`: with no tool selected pointer-down
/// does nothing.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Tool {
    Line,
    Rectangle,
    Selection,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Line, Tool::Rectangle, Tool::Selection];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Selection => "selection",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Line => "📏",
            Tool::Rectangle => "◻",
            Tool::Selection => "✋",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
