use egui::{Pos2, Vec2};

/// Turns shape geometry into something the rendering backend can paint.
///
/// The core never computes pixels itself; it only stores whatever handle the
/// generator returns and passes it back to a [`crate::render_bridge::Surface`].
pub trait ShapeGenerator {
    /// Opaque handle consumed by the surface that paints it
    type Renderable: Clone;

    /// Generate a straight line from `start` to `end`
    fn line(&self, start: Pos2, end: Pos2) -> Self::Renderable;

    /// Generate an axis-aligned rectangle.
    ///
    /// `size` may have negative components; implementations must normalize.
    fn rectangle(&self, origin: Pos2, size: Vec2) -> Self::Renderable;
}
