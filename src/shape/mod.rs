use std::fmt;
use std::str::FromStr;

use egui::{Pos2, Vec2};

use crate::error::ShapeError;
use crate::tools::Tool;

mod generator;

pub use generator::ShapeGenerator;

/// The drawable shape kinds.
///
/// Adding a kind means extending this enum and the two places that match on it:
/// [`factory::create_shape`] and [`crate::geometry::is_within_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ShapeKind::Line),
            "rectangle" => Ok(ShapeKind::Rectangle),
            other => Err(ShapeError::UnsupportedKind(other.to_string())),
        }
    }
}

impl TryFrom<Tool> for ShapeKind {
    type Error = ShapeError;

    fn try_from(tool: Tool) -> Result<Self, Self::Error> {
        match tool {
            Tool::Line => Ok(ShapeKind::Line),
            Tool::Rectangle => Ok(ShapeKind::Rectangle),
            Tool::Selection => Err(ShapeError::UnsupportedKind(tool.name().to_string())),
        }
    }
}

/// A single shape on the canvas.
///
/// `start` is the anchor point (where the drag began) and `end` the free point.
/// The renderable is produced by a [`ShapeGenerator`] from the kind and the two
/// points; it is rebuilt whenever the geometry changes, never edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<R> {
    id: usize,
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    renderable: R,
}

impl<R> Shape<R> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    /// Signed extent from the anchor to the free point
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    /// Coordinates as `(x1, y1, x2, y2)`
    pub fn coords(&self) -> (f32, f32, f32, f32) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    pub fn renderable(&self) -> &R {
        &self.renderable
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use log::trace;

    /// Build a shape and ask the generator for its renderable.
    ///
    /// Rectangles are handed to the generator as `origin + size`, where the size
    /// is negative whenever the drag went left or up.
    pub fn create_shape<G: ShapeGenerator>(
        id: usize,
        start: Pos2,
        end: Pos2,
        kind: ShapeKind,
        generator: &G,
    ) -> Shape<G::Renderable> {
        let renderable = match kind {
            ShapeKind::Line => generator.line(start, end),
            ShapeKind::Rectangle => generator.rectangle(start, end - start),
        };
        trace!("created {} #{} {:?} -> {:?}", kind, id, start, end);

        Shape {
            id,
            kind,
            start,
            end,
            renderable,
        }
    }

    /// Like [`create_shape`], but for a raw tool value.
    ///
    /// Fails with [`ShapeError::UnsupportedKind`] when the tool does not draw
    /// shapes, in which case nothing must be added to the document.
    pub fn create_shape_for_tool<G: ShapeGenerator>(
        id: usize,
        start: Pos2,
        end: Pos2,
        tool: Tool,
        generator: &G,
    ) -> Result<Shape<G::Renderable>, ShapeError> {
        let kind = ShapeKind::try_from(tool)?;
        Ok(create_shape(id, start, end, kind, generator))
    }
}
