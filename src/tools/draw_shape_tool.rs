use egui::Pos2;

use crate::command::Command;
use crate::document::Document;
use crate::shape::{factory, ShapeGenerator, ShapeKind};

/// Creates a shape on pointer-down and stretches its free point on every move.
///
/// Holds no state of its own: the shape being drawn is always the last one in
/// the document.
pub struct DrawShapeTool;

impl DrawShapeTool {
    /// Start a zero-length shape at `pos` with the next free id
    pub fn begin<G: ShapeGenerator>(
        pos: Pos2,
        kind: ShapeKind,
        doc: &Document<G::Renderable>,
        generator: &G,
    ) -> Command<G::Renderable> {
        let shape = factory::create_shape(doc.next_id(), pos, pos, kind, generator);
        Command::AddShape(shape)
    }

    /// Rebuild the last shape with its anchor kept and its free point at `pos`
    pub fn update<G: ShapeGenerator>(
        pos: Pos2,
        doc: &Document<G::Renderable>,
        generator: &G,
    ) -> Option<Command<G::Renderable>> {
        let current = doc.last()?;
        let shape = factory::create_shape(
            current.id(),
            current.start(),
            pos,
            current.kind(),
            generator,
        );
        Some(Command::ReplaceShape(shape))
    }
}
