//! Easycrop Core - crop window geometry
//!
//! This crate computes how a rectangular crop window relates to a panned,
//! zoomed and optionally rotated image, and maps between on-screen crop
//! state and the selected region of the natural image.
//!
//! Everything here is pure arithmetic over `f64`: no I/O, no shared state,
//! safe to call from any thread.
//!
//! # Modules
//!
//! - `geometry` - the raw operations (bounding boxes, clamping, crop sizing,
//!   forward and inverse projection, point helpers)
//! - `validate` - precondition checks and checked `try_` variants
//! - `config` - cropper settings that chain the operations per input event
//! - `types` - the value types passed between them

pub mod config;
pub mod error;
pub mod geometry;
pub mod types;
pub mod validate;

pub use config::{CropState, CropperConfig};
pub use error::GeometryError;
pub use geometry::{
    compute_cropped_area, get_center, get_crop_size, get_distance_between_points,
    get_initial_crop_from_cropped_area_pixels, get_rotation_between_points, restrict_position,
    rotate_around_mid_point, translate_size,
};
pub use types::{
    Area, CroppedArea, ImageSize, InitialCrop, Point, Size, DEFAULT_RESTRICT_POSITION,
    DEFAULT_ROTATION,
};

#[cfg(test)]
mod tests {
    use super::*;

    /// Full pipeline on a rotated image: size, clamp, project, restore.
    #[test]
    fn test_rotated_pipeline_stays_in_bounds() {
        let image = ImageSize::new(400.0, 300.0, 1600.0, 1200.0);
        let config = CropperConfig::with_aspect(1.0);
        let state = config.settle(
            CropState {
                crop: Point::new(1000.0, 1000.0),
                zoom: 1.5,
                rotation: 30.0,
            },
            &image,
        );

        let area = config.cropped_area(&state, &image);
        let px = area.pixels;
        assert!(px.x >= 0.0 && px.y >= 0.0);
        assert!(px.right() <= image.natural_width);
        assert!(px.bottom() <= image.natural_height);
        assert_eq!(px.width, px.height);
    }

    #[test]
    fn test_reexports_agree() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert_eq!(get_center(a, b), geometry::get_center(a, b));
        assert_eq!(translate_size(4.0, 2.0, 0.0), Size::new(4.0, 2.0));
    }
}
