use egui::{Pos2, Vec2};

use crate::command::Command;
use crate::geometry::find_shape_at;
use crate::shape::{factory, Shape, ShapeGenerator};

/// A shape grabbed by the selection tool.
///
/// `shape` is a snapshot taken at grab time, not a reference into the
/// document; `offset` is the vector from the shape's anchor to the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedShape<R> {
    pub shape: Shape<R>,
    pub offset: Vec2,
}

impl<R> SelectedShape<R> {
    pub fn id(&self) -> usize {
        self.shape.id()
    }
}

/// Grabs the shape under the pointer and drags it with a fixed size.
pub struct SelectionTool;

impl SelectionTool {
    /// Snapshot the oldest shape under `pos`, if any
    pub fn grab<R: Clone>(pos: Pos2, shapes: &[Shape<R>]) -> Option<SelectedShape<R>> {
        let shape = find_shape_at(pos, shapes)?;
        Some(SelectedShape {
            offset: pos - shape.start(),
            shape: shape.clone(),
        })
    }

    /// Rebuild the grabbed shape so its anchor sits at `pos - offset`
    pub fn drag<G: ShapeGenerator>(
        selected: &SelectedShape<G::Renderable>,
        pos: Pos2,
        generator: &G,
    ) -> Command<G::Renderable> {
        let snapshot = &selected.shape;
        let start = pos - selected.offset;
        let end = start + snapshot.size();
        let shape = factory::create_shape(snapshot.id(), start, end, snapshot.kind(), generator);
        Command::ReplaceShape(shape)
    }
}
