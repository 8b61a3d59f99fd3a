use crate::error::{ShapeError, ShapeResult};
use crate::shape::Shape;

/// The ordered shape collection.
///
/// A shape's id is always its index here. Shapes are only ever appended or
/// overwritten in place, never removed or reordered.
#[derive(Debug, Clone)]
pub struct Document<R> {
    shapes: Vec<Shape<R>>,
    revision: u64,
}

impl<R> Default for Document<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Document<R> {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            revision: 0,
        }
    }

    /// The id the next appended shape must carry
    pub fn next_id(&self) -> usize {
        self.shapes.len()
    }

    pub fn push(&mut self, shape: Shape<R>) -> ShapeResult<()> {
        let expected = self.next_id();
        if shape.id() != expected {
            return Err(ShapeError::IdMismatch {
                expected,
                found: shape.id(),
            });
        }

        self.shapes.push(shape);
        self.revision += 1;
        Ok(())
    }

    /// Overwrite the slot at `shape.id()` with `shape`
    pub fn replace(&mut self, shape: Shape<R>) -> ShapeResult<()> {
        let id = shape.id();
        let slot = self
            .shapes
            .get_mut(id)
            .ok_or(ShapeError::UnknownShape { id })?;

        *slot = shape;
        self.revision += 1;
        Ok(())
    }

    pub fn get(&self, id: usize) -> Option<&Shape<R>> {
        self.shapes.get(id)
    }

    /// The most recently appended shape
    pub fn last(&self) -> Option<&Shape<R>> {
        self.shapes.last()
    }

    pub fn shapes(&self) -> &[Shape<R>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bumped on every push or replace
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
