//! Cropper configuration and the sampled interaction state it applies to.
//!
//! A [`CropperConfig`] carries the settings an interactive cropper keeps
//! fixed while the user pans and zooms. Its methods chain the geometry
//! operations in the order a cropper runs them on every input event:
//! size the crop window, clamp zoom, clamp pan, then project.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{
    compute_cropped_area, get_crop_size, get_initial_crop_from_cropped_area_pixels,
    restrict_position,
};
use crate::types::{Area, CroppedArea, ImageSize, Point, Size, DEFAULT_ROTATION};
use crate::validate::{validate_aspect, validate_finite};

/// Aspect ratio used when none is configured.
pub const DEFAULT_ASPECT: f64 = 4.0 / 3.0;
/// Smallest zoom allowed by default.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
/// Largest zoom allowed by default.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Settings of an interactive cropper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropperConfig {
    /// Crop ratio (width / height).
    pub aspect: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Keep the crop window inside the image.
    pub restrict_position: bool,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            aspect: DEFAULT_ASPECT,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            restrict_position: crate::types::DEFAULT_RESTRICT_POSITION,
        }
    }
}

/// Pan, zoom and rotation as sampled from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropState {
    pub crop: Point,
    pub zoom: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
}

impl Default for CropState {
    fn default() -> Self {
        Self {
            crop: Point::default(),
            zoom: 1.0,
            rotation: DEFAULT_ROTATION,
        }
    }
}

impl CropperConfig {
    /// Create a config for `aspect` with default zoom bounds.
    pub fn with_aspect(aspect: f64) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    /// Check the aspect ratio and zoom bounds.
    pub fn validate(&self) -> Result<(), GeometryError> {
        validate_aspect(self.aspect)?;
        validate_finite("min zoom", self.min_zoom)?;
        validate_finite("max zoom", self.max_zoom)?;
        if self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom {
            Ok(())
        } else {
            Err(GeometryError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            })
        }
    }

    /// Bound `zoom` to `[min_zoom, max_zoom]`.
    ///
    /// A NaN zoom is returned unchanged, never snapped to a bound.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_nan() {
            log::warn!("zoom is NaN");
            return zoom;
        }
        let clamped = self.max_zoom.min(zoom.max(self.min_zoom));
        if clamped != zoom {
            log::debug!("zoom {} clamped to {}", zoom, clamped);
        }
        clamped
    }

    /// Size of the crop window over the displayed image at `rotation` degrees.
    pub fn crop_size(&self, image: &ImageSize, rotation: f64) -> Size {
        get_crop_size(image.width, image.height, self.aspect, rotation)
    }

    /// Bring a sampled state back into range: zoom within bounds and, when
    /// restriction is on, the pan inside the rotated image.
    pub fn settle(&self, state: CropState, image: &ImageSize) -> CropState {
        let zoom = self.clamp_zoom(state.zoom);
        let crop = if self.restrict_position {
            restrict_position(
                state.crop,
                image.displayed(),
                self.crop_size(image, state.rotation),
                zoom,
                state.rotation,
            )
        } else {
            state.crop
        };

        CropState {
            crop,
            zoom,
            rotation: state.rotation,
        }
    }

    /// Area of the natural image selected by `state`.
    pub fn cropped_area(&self, state: &CropState, image: &ImageSize) -> CroppedArea {
        compute_cropped_area(
            state.crop,
            *image,
            self.crop_size(image, state.rotation),
            self.aspect,
            state.zoom,
            self.restrict_position,
        )
    }

    /// Rebuild an unrotated state that selects `pixels`, with zoom bounded.
    pub fn restore(&self, pixels: Area, image: &ImageSize) -> CropState {
        let initial = get_initial_crop_from_cropped_area_pixels(pixels, *image);
        CropState {
            crop: initial.crop,
            zoom: self.clamp_zoom(initial.zoom),
            rotation: DEFAULT_ROTATION,
        }
    }
}
