//! Forward projection from on-screen crop state to the selected image area.
//!
//! # Algorithm
//!
//! 1. Express the crop window as percentages of the displayed image
//! 2. Scale the percentage size to natural pixels
//! 3. Rebuild one pixel side from the other so the result matches `aspect`
//!    exactly instead of drifting by a rounding step
//! 4. Scale the percentage offset to natural pixels
//!
//! When restriction is on, every step clamps into the image and pixel values
//! are rounded. When it is off, values pass through untouched, except the
//! side rebuilt in step 3 which is always rounded.

use crate::types::{Area, CroppedArea, ImageSize, Point, Size};

/// Rounding applied by [`limit_area`] before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep the value as computed.
    #[default]
    None,
    /// Round to the nearest integer, halves toward positive infinity.
    Nearest,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::None => value,
            Rounding::Nearest => round_half_up(value),
        }
    }
}

/// Bound `value` to `[0, max]` after optional rounding.
///
/// The lower bound is applied first, so an inverted range (`max < 0`)
/// returns `max`. NaN passes through unchanged. No tolerance is applied at
/// the boundaries.
pub fn limit_area(max: f64, value: f64, rounding: Rounding) -> f64 {
    let v = rounding.apply(value);
    let v = if v < 0.0 { 0.0 } else { v };
    if v > max {
        max
    } else {
        v
    }
}

/// Round half toward positive infinity (`-2.5` becomes `-2`).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Compute the area of the natural image selected by the crop window.
///
/// # Arguments
///
/// * `crop` - Pan position: offset of the image center from the crop window
///   center, in on-screen pixels
/// * `img_size` - Displayed and natural image size
/// * `crop_size` - On-screen crop window size
/// * `aspect` - Crop ratio (width / height), must be positive
/// * `zoom` - Zoom factor, must be positive
/// * `restrict` - Clamp the result into the image and round pixels
///
/// # Returns
///
/// The selection as percentages of the image (top-left `x`/`y`) and as
/// natural pixel coordinates. With `restrict` set the pixel rectangle lies
/// within `[0, natural_width] x [0, natural_height]`.
pub fn compute_cropped_area(
    crop: Point,
    img_size: ImageSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    restrict: bool,
) -> CroppedArea {
    let limit = |max: f64, value: f64, rounding: Rounding| {
        if restrict {
            limit_area(max, value, rounding)
        } else {
            value
        }
    };

    let percentages = Area {
        x: limit(
            100.0,
            (((img_size.width - crop_size.width / zoom) / 2.0 - crop.x / zoom) / img_size.width)
                * 100.0,
            Rounding::None,
        ),
        y: limit(
            100.0,
            (((img_size.height - crop_size.height / zoom) / 2.0 - crop.y / zoom)
                / img_size.height)
                * 100.0,
            Rounding::None,
        ),
        width: limit(
            100.0,
            ((crop_size.width / img_size.width) * 100.0) / zoom,
            Rounding::None,
        ),
        height: limit(
            100.0,
            ((crop_size.height / img_size.height) * 100.0) / zoom,
            Rounding::None,
        ),
    };

    let natural = img_size.natural();
    let width_px = limit(
        natural.width,
        (percentages.width * natural.width) / 100.0,
        Rounding::Nearest,
    );
    let height_px = limit(
        natural.height,
        (percentages.height * natural.height) / 100.0,
        Rounding::Nearest,
    );

    // A wide image fills the crop height at minimum zoom, so height is the
    // reliable side to derive from.
    let is_wide = natural.width >= natural.height * aspect;
    let size_px = if is_wide {
        log::trace!("pixel area derived from height");
        Size::new(round_half_up(height_px * aspect), height_px)
    } else {
        log::trace!("pixel area derived from width");
        Size::new(width_px, round_half_up(width_px / aspect))
    };

    let pixels = Area {
        x: limit(
            natural.width - size_px.width,
            (percentages.x * natural.width) / 100.0,
            Rounding::Nearest,
        ),
        y: limit(
            natural.height - size_px.height,
            (percentages.y * natural.height) / 100.0,
            Rounding::Nearest,
        ),
        width: size_px.width,
        height: size_px.height,
    };

    CroppedArea {
        percentages,
        pixels,
    }
}
