//! The in-progress pointer action.
//!
//! ```text
//!            pointer-down                 pointer-move
//!          (line / rectangle)            ┌────────┐
//!   ┌──────┐ ───────────────────► ┌─────────┐ ◄─┘
//!   │      │ ◄─────────────────── │ Drawing │
//!   │ Idle │      pointer-up      └─────────┘
//!   │      │ ───────────────────► ┌─────────┐ ◄─┐
//!   └──────┘ ◄─────────────────── │ Moving  │   │
//!          pointer-down on a      └─────────┘ ──┘
//!          shape (selection)         pointer-move
//! ```
//!
//! Move and up events in `Idle` are ignored.
use crate::tools::SelectedShape;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<R> {
    /// No pointer action in progress
    Idle,
    /// Stretching a freshly created shape
    Drawing { shape_id: usize },
    /// Dragging a grabbed shape
    Moving { selected: SelectedShape<R> },
}

impl<R> Default for EditorState<R> {
    fn default() -> Self {
        EditorState::Idle
    }
}

impl<R> EditorState<R> {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::Drawing { .. } => "Drawing",
            EditorState::Moving { .. } => "Moving",
        }
    }

    /// Returns true if no action is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, EditorState::Moving { .. })
    }

    /// The grabbed shape while moving
    pub fn selected(&self) -> Option<&SelectedShape<R>> {
        match self {
            EditorState::Moving { selected } => Some(selected),
            _ => None,
        }
    }

    /// Id of the shape the current action is editing
    pub fn active_shape_id(&self) -> Option<usize> {
        match self {
            EditorState::Idle => None,
            EditorState::Drawing { shape_id } => Some(*shape_id),
            EditorState::Moving { selected } => Some(selected.id()),
        }
    }
}
