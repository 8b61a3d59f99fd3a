use egui::Pos2;

use super::is_within_element;
use crate::shape::Shape;

/// Find the shape under `point`.
///
/// Shapes are tested in ascending id order and the first match wins, so when
/// two shapes overlap the older one is picked even though the newer one is
/// painted on top of it.
pub fn find_shape_at<R>(point: Pos2, shapes: &[Shape<R>]) -> Option<&Shape<R>> {
    shapes.iter().find(|shape| is_within_element(point, shape))
}
