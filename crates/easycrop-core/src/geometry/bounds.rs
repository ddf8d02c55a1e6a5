//! Bounding boxes of rotated rectangles.
//!
//! A rectangle rotated about its own center is enclosed by the axis-aligned
//! box spanning its four rotated corners. With θ in radians:
//! ```text
//! x' = (x - cx) * cos(θ) - (y - cy) * sin(θ) + cx
//! y' = (x - cx) * sin(θ) + (y - cy) * cos(θ) + cy
//! ```

use std::f64::consts::PI;

use crate::types::Size;

/// Rotate `(x, y)` around `(x_mid, y_mid)` by `degrees`.
///
/// Positive angles turn clockwise in screen coordinates (y pointing down).
pub fn rotate_around_mid_point(x: f64, y: f64, x_mid: f64, y_mid: f64, degrees: f64) -> [f64; 2] {
    let radians = degrees * PI / 180.0;
    let (sin, cos) = radians.sin_cos();

    let dx = x - x_mid;
    let dy = y - y_mid;

    [dx * cos - dy * sin + x_mid, dx * sin + dy * cos + y_mid]
}

/// Compute the bounding size of a `width` x `height` rectangle rotated by
/// `rotation` degrees about its center.
///
/// Whole turns return the input size unchanged; quarter turns swap the
/// dimensions up to floating point error.
pub fn translate_size(width: f64, height: f64, rotation: f64) -> Size {
    // sin(2πk) is not exactly zero
    if rotation % 360.0 == 0.0 {
        return Size::new(width, height);
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let corners = [
        rotate_around_mid_point(0.0, 0.0, center_x, center_y, rotation),
        rotate_around_mid_point(width, 0.0, center_x, center_y, rotation),
        rotate_around_mid_point(width, height, center_x, center_y, rotation),
        rotate_around_mid_point(0.0, height, center_x, center_y, rotation),
    ];

    let [first_x, first_y] = corners[0];
    let (min_x, max_x, min_y, max_y) = corners.iter().skip(1).fold(
        (first_x, first_x, first_y, first_y),
        |(min_x, max_x, min_y, max_y), &[x, y]| {
            (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
        },
    );

    Size::new(max_x - min_x, max_y - min_y)
}
