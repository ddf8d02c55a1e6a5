//! Point helpers used by handle dragging and pinch gestures.

use std::f64::consts::PI;

use crate::types::Point;

/// Euclidean distance between `a` and `b`.
pub fn get_distance_between_points(a: Point, b: Point) -> f64 {
    ((a.y - b.y).powi(2) + (a.x - b.x).powi(2)).sqrt()
}

/// Angle of the vector from `a` to `b` in degrees, in `(-180, 180]`.
pub fn get_rotation_between_points(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x) * 180.0 / PI
}

/// Midpoint of `a` and `b`.
pub fn get_center(a: Point, b: Point) -> Point {
    Point::new((b.x + a.x) / 2.0, (b.y + a.y) / 2.0)
}
