//! Error types for checked geometry entry points.

use thiserror::Error;

/// Violated precondition of a geometry operation.
///
/// The raw operations in [`crate::geometry`] never fail; these errors come
/// only from [`crate::validate`] and [`crate::config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Aspect ratio is zero, negative, or not finite.
    #[error("Aspect ratio must be positive and finite, got {0}")]
    InvalidAspect(f64),

    /// Zoom is zero, negative, or not finite.
    #[error("Zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),

    /// Natural image size has a non-positive side.
    #[error("Natural image size must be positive, got {width}x{height}")]
    InvalidNaturalSize { width: f64, height: f64 },

    /// Zoom bounds are out of order or non-positive.
    #[error("Invalid zoom range: min {min}, max {max}")]
    InvalidZoomRange { min: f64, max: f64 },

    /// A named input is NaN or infinite.
    #[error("Value must be finite: {0}")]
    NonFinite(&'static str),
}
