//! Pan position clamping.

use super::bounds::translate_size;
use crate::types::{Point, Size};

/// Restrict a requested pan `position` so the crop window stays inside the
/// image at the given `zoom` and `rotation` (degrees).
///
/// `image_size` is the on-screen size before rotation. Each axis is bounded
/// independently to `[-max, max]` where `max = bounding * zoom / 2 - crop / 2`.
pub fn restrict_position(
    position: Point,
    image_size: Size,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Point {
    let bounds = translate_size(image_size.width, image_size.height, rotation);

    let restricted = Point::new(
        restrict_position_coord(position.x, bounds.width, crop_size.width, zoom),
        restrict_position_coord(position.y, bounds.height, crop_size.height, zoom),
    );
    if restricted != position {
        log::debug!(
            "pan ({}, {}) restricted to ({}, {})",
            position.x,
            position.y,
            restricted.x,
            restricted.y
        );
    }
    restricted
}

fn restrict_position_coord(position: f64, image_size: f64, crop_size: f64, zoom: f64) -> f64 {
    let max_position = (image_size * zoom) / 2.0 - crop_size / 2.0;
    // `f64::min`/`max` drop a NaN operand; a NaN input must stay NaN.
    if position.is_nan() || max_position.is_nan() {
        return f64::NAN;
    }
    // Not `clamp`: the bounds invert when the crop exceeds the zoomed image,
    // which pins the result to `max_position`.
    max_position.min(position.max(-max_position))
}
