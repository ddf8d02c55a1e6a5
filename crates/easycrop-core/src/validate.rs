//! Precondition checks and checked variants of the geometry operations.
//!
//! The raw operations accept anything and return NaN or infinity for bad
//! input. Callers that take values from untrusted sources (deserialized
//! state, JavaScript) use the `try_` functions here instead.

use crate::error::GeometryError;
use crate::geometry::{
    compute_cropped_area, get_crop_size, get_initial_crop_from_cropped_area_pixels,
    restrict_position,
};
use crate::types::{Area, CroppedArea, ImageSize, InitialCrop, Point, Size};

/// Check that `aspect` is positive and finite.
pub fn validate_aspect(aspect: f64) -> Result<(), GeometryError> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidAspect(aspect))
    }
}

/// Check that `zoom` is positive and finite.
pub fn validate_zoom(zoom: f64) -> Result<(), GeometryError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidZoom(zoom))
    }
}

/// Check that the natural size is positive and every field is finite.
pub fn validate_image_size(image: &ImageSize) -> Result<(), GeometryError> {
    validate_finite("image width", image.width)?;
    validate_finite("image height", image.height)?;
    validate_finite("natural width", image.natural_width)?;
    validate_finite("natural height", image.natural_height)?;
    if image.natural_width > 0.0 && image.natural_height > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidNaturalSize {
            width: image.natural_width,
            height: image.natural_height,
        })
    }
}

pub(crate) fn validate_finite(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite(name))
    }
}

/// Checked [`get_crop_size`].
pub fn try_get_crop_size(
    img_width: f64,
    img_height: f64,
    aspect: f64,
    rotation: f64,
) -> Result<Size, GeometryError> {
    validate_finite("image width", img_width)?;
    validate_finite("image height", img_height)?;
    validate_aspect(aspect)?;
    validate_finite("rotation", rotation)?;
    Ok(get_crop_size(img_width, img_height, aspect, rotation))
}

/// Checked [`restrict_position`].
pub fn try_restrict_position(
    position: Point,
    image_size: Size,
    crop_size: Size,
    zoom: f64,
    rotation: f64,
) -> Result<Point, GeometryError> {
    validate_finite("position x", position.x)?;
    validate_finite("position y", position.y)?;
    validate_zoom(zoom)?;
    validate_finite("rotation", rotation)?;
    Ok(restrict_position(
        position, image_size, crop_size, zoom, rotation,
    ))
}

/// Checked [`compute_cropped_area`].
pub fn try_compute_cropped_area(
    crop: Point,
    img_size: ImageSize,
    crop_size: Size,
    aspect: f64,
    zoom: f64,
    restrict: bool,
) -> Result<CroppedArea, GeometryError> {
    validate_finite("crop x", crop.x)?;
    validate_finite("crop y", crop.y)?;
    validate_image_size(&img_size)?;
    validate_aspect(aspect)?;
    validate_zoom(zoom)?;
    Ok(compute_cropped_area(
        crop, img_size, crop_size, aspect, zoom, restrict,
    ))
}

/// Checked [`get_initial_crop_from_cropped_area_pixels`].
///
/// Besides the image size, the area must have a positive height so its
/// aspect ratio is defined.
pub fn try_get_initial_crop_from_cropped_area_pixels(
    cropped_area_pixels: Area,
    image_size: ImageSize,
) -> Result<InitialCrop, GeometryError> {
    validate_image_size(&image_size)?;
    validate_finite("area x", cropped_area_pixels.x)?;
    validate_finite("area y", cropped_area_pixels.y)?;
    validate_aspect(cropped_area_pixels.width / cropped_area_pixels.height)?;
    Ok(get_initial_crop_from_cropped_area_pixels(
        cropped_area_pixels,
        image_size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape() -> ImageSize {
        ImageSize::new(400.0, 300.0, 800.0, 600.0)
    }

    #[test]
    fn test_validate_aspect() {
        assert!(validate_aspect(1.5).is_ok());
        assert_eq!(validate_aspect(0.0), Err(GeometryError::InvalidAspect(0.0)));
        assert!(validate_aspect(-1.0).is_err());
        assert!(validate_aspect(f64::INFINITY).is_err());
        assert!(validate_aspect(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_zoom() {
        assert!(validate_zoom(1.0).is_ok());
        assert_eq!(validate_zoom(0.0), Err(GeometryError::InvalidZoom(0.0)));
        assert!(validate_zoom(-2.0).is_err());
    }

    #[test]
    fn test_validate_image_size() {
        assert!(validate_image_size(&landscape()).is_ok());

        let empty = ImageSize::new(400.0, 300.0, 0.0, 600.0);
        assert_eq!(
            validate_image_size(&empty),
            Err(GeometryError::InvalidNaturalSize {
                width: 0.0,
                height: 600.0
            })
        );

        let nan = ImageSize::new(f64::NAN, 300.0, 800.0, 600.0);
        assert_eq!(
            validate_image_size(&nan),
            Err(GeometryError::NonFinite("image width"))
        );
    }

    #[test]
    fn test_try_get_crop_size() {
        let size = try_get_crop_size(1000.0, 500.0, 1.0, 0.0).unwrap();
        assert_eq!(size, Size::new(500.0, 500.0));
        assert!(try_get_crop_size(1000.0, 500.0, 0.0, 0.0).is_err());
        assert_eq!(
            try_get_crop_size(1000.0, 500.0, 1.0, f64::NAN),
            Err(GeometryError::NonFinite("rotation"))
        );
    }

    #[test]
    fn test_try_restrict_position() {
        let pos = try_restrict_position(
            Point::new(500.0, 0.0),
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
            2.0,
            0.0,
        )
        .unwrap();
        assert_eq!(pos, Point::new(200.0, 0.0));

        assert!(try_restrict_position(
            Point::new(0.0, 0.0),
            Size::new(400.0, 300.0),
            Size::new(400.0, 300.0),
            0.0,
            0.0,
        )
        .is_err());
    }

    #[test]
    fn test_try_compute_cropped_area() {
        let area = try_compute_cropped_area(
            Point::new(0.0, 0.0),
            landscape(),
            Size::new(400.0, 300.0),
            4.0 / 3.0,
            1.0,
            true,
        )
        .unwrap();
        assert_eq!(area.pixels, Area::new(0.0, 0.0, 800.0, 600.0));

        let err = try_compute_cropped_area(
            Point::new(0.0, 0.0),
            landscape(),
            Size::new(400.0, 300.0),
            4.0 / 3.0,
            0.0,
            true,
        );
        assert_eq!(err, Err(GeometryError::InvalidZoom(0.0)));
    }

    #[test]
    fn test_try_initial_crop_rejects_flat_area() {
        let err = try_get_initial_crop_from_cropped_area_pixels(
            Area::new(0.0, 0.0, 800.0, 0.0),
            landscape(),
        );
        assert!(matches!(err, Err(GeometryError::InvalidAspect(_))));

        let ok = try_get_initial_crop_from_cropped_area_pixels(
            Area::new(0.0, 0.0, 800.0, 600.0),
            landscape(),
        )
        .unwrap();
        assert!((ok.zoom - 1.0).abs() < 1e-9);
    }
}
