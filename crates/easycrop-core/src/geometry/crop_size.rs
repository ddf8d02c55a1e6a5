//! Crop window sizing under an aspect constraint.

use super::bounds::translate_size;
use crate::types::Size;

/// Compute the largest crop window of ratio `aspect` (width / height) that
/// fits the image once rotated by `rotation` degrees.
///
/// # Arguments
///
/// * `img_width` - On-screen image width
/// * `img_height` - On-screen image height
/// * `aspect` - Target crop ratio, must be positive
/// * `rotation` - Image rotation in degrees
///
/// # Behavior
///
/// The limiting dimension is picked by an ordered ladder; each rung assumes
/// every rung above it failed, so the order decides ties:
/// 1. image height, when the image is at least as wide as the crop needs
/// 2. image width, when only the rotated bounds are wide enough
/// 3. rotated bounding height
/// 4. rotated bounding width
pub fn get_crop_size(img_width: f64, img_height: f64, aspect: f64, rotation: f64) -> Size {
    let bounds = translate_size(img_width, img_height, rotation);
    let height_limited_width = img_height * aspect;

    if img_width >= height_limited_width && bounds.width > height_limited_width {
        log::trace!("crop size limited by image height");
        return Size::new(height_limited_width, img_height);
    }

    if bounds.width > height_limited_width {
        log::trace!("crop size limited by image width");
        return Size::new(img_width, img_width / aspect);
    }

    if bounds.width > bounds.height * aspect {
        log::trace!("crop size limited by bounding height");
        return Size::new(bounds.height * aspect, bounds.height);
    }

    log::trace!("crop size limited by bounding width");
    Size::new(bounds.width, bounds.width / aspect)
}
