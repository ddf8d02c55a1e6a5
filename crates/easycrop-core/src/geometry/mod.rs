//! Crop window geometry: how a crop rectangle relates to a panned, zoomed
//! and rotated image.
//!
//! # Unit Systems
//!
//! - Pan positions and crop sizes are in on-screen pixels
//! - Cropped areas are reported as percentages (0 to 100) and natural pixels
//! - Angles are degrees at every public boundary, radians only internally
//!
//! # Data Flow
//!
//! 1. [`get_crop_size`] sizes the crop window for the target aspect
//! 2. [`restrict_position`] keeps the pan inside the rotated image
//! 3. [`compute_cropped_area`] turns pan/zoom into a selected region
//! 4. [`get_initial_crop_from_cropped_area_pixels`] restores pan/zoom from it
//!
//! Every function is pure and total: invalid input yields NaN or infinity
//! rather than an error. See [`crate::validate`] for checked variants.

mod area;
mod bounds;
mod crop_size;
mod inverse;
mod points;
mod position;

pub use area::{compute_cropped_area, limit_area, Rounding};
pub use bounds::{rotate_around_mid_point, translate_size};
pub use crop_size::get_crop_size;
pub use inverse::get_initial_crop_from_cropped_area_pixels;
pub use points::{get_center, get_distance_between_points, get_rotation_between_points};
pub use position::restrict_position;
