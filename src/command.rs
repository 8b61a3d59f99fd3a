use crate::document::Document;
use crate::error::ShapeResult;
use crate::shape::Shape;

/// Mutations of the shape collection.
///
/// Both variants carry a fully constructed shape, so the renderable always
/// matches the geometry that is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<R> {
    /// Append a new shape at the end of the document
    AddShape(Shape<R>),
    /// Overwrite the shape with the same id
    ReplaceShape(Shape<R>),
}

impl<R> Command<R> {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddShape(_) => "AddShape",
            Command::ReplaceShape(_) => "ReplaceShape",
        }
    }

    /// Id of the shape this command touches
    pub fn shape_id(&self) -> usize {
        match self {
            Command::AddShape(shape) | Command::ReplaceShape(shape) => shape.id(),
        }
    }

    pub fn execute(self, document: &mut Document<R>) -> ShapeResult<()> {
        match self {
            Command::AddShape(shape) => document.push(shape),
            Command::ReplaceShape(shape) => document.replace(shape),
        }
    }
}
