use egui::Pos2;

use crate::shape::{Shape, ShapeKind};

pub mod hit_testing;

pub use hit_testing::find_shape_at;

/// How far off the straight path a point may be and still count as on a line.
pub const LINE_HIT_TOLERANCE: f32 = 1.0;

/// Euclidean distance between two points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Test whether `point` lies on the given shape.
///
/// Rectangles use their normalized bounding box, so the drag direction does not
/// matter. The left/top edges are inside and the right/bottom edges are not.
///
/// Lines use the triangle slack `|AB - (AP + BP)| < 1`. This is not a true
/// point-to-segment distance: the slack grows with the square of the
/// perpendicular offset divided by the segment length, so long lines accept
/// points further from the segment than short ones do.
pub fn is_within_element<R>(point: Pos2, shape: &Shape<R>) -> bool {
    let (a, b) = (shape.start(), shape.end());
    match shape.kind() {
        ShapeKind::Rectangle => {
            let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
            let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
            point.x >= min_x && point.x < max_x && point.y >= min_y && point.y < max_y
        }
        ShapeKind::Line => line_slack(a, b, point) < LINE_HIT_TOLERANCE,
    }
}

/// Difference between the detour through `point` and the direct path `a`-`b`
pub(crate) fn line_slack(a: Pos2, b: Pos2, point: Pos2) -> f32 {
    (distance(a, b) - (distance(a, point) + distance(b, point))).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_distance() {
        assert_eq!(distance(pos2(0.0, 0.0), pos2(3.0, 4.0)), 5.0);
        assert_eq!(distance(pos2(2.0, 2.0), pos2(2.0, 2.0)), 0.0);
        assert_eq!(distance(pos2(-1.0, 0.0), pos2(1.0, 0.0)), 2.0);
    }

    #[test]
    fn test_line_slack() {
        // On the segment the detour is free
        assert!(line_slack(pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(4.0, 0.0)) < 1e-5);
        // Past the end the detour is twice the overshoot
        let slack = line_slack(pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(13.0, 0.0));
        assert!((slack - 6.0).abs() < 1e-5);
    }
}
