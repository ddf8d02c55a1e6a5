//! Inverse projection: restore pan and zoom from a saved pixel area.

use crate::types::{Area, ImageSize, InitialCrop, Point};

/// Compute the pan position and zoom that reproduce `cropped_area_pixels`.
///
/// The aspect ratio is taken from the area itself. Zoom is measured against
/// the natural height for images at least as wide as that ratio, otherwise
/// against the natural width. This inverts the offset step of
/// [`compute_cropped_area`](super::compute_cropped_area), so feeding it an
/// unrestricted, unclamped area recovers the original pan and zoom.
pub fn get_initial_crop_from_cropped_area_pixels(
    cropped_area_pixels: Area,
    image_size: ImageSize,
) -> InitialCrop {
    let aspect = cropped_area_pixels.size().aspect();
    let natural = image_size.natural();
    let display_scale = image_size.display_scale();

    let is_height_max_size = natural.width >= natural.height * aspect;
    let zoom = if is_height_max_size {
        log::trace!("initial zoom measured on height");
        natural.height / cropped_area_pixels.height
    } else {
        log::trace!("initial zoom measured on width");
        natural.width / cropped_area_pixels.width
    };

    let crop_zoom = display_scale * zoom;
    let crop = Point::new(
        ((natural.width - cropped_area_pixels.width) / 2.0 - cropped_area_pixels.x) * crop_zoom,
        ((natural.height - cropped_area_pixels.height) / 2.0 - cropped_area_pixels.y) * crop_zoom,
    );

    InitialCrop { crop, zoom }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_cropped_area;
    use crate::types::Size;

    const EPS: f64 = 1e-9;

    fn landscape() -> ImageSize {
        ImageSize::new(400.0, 300.0, 800.0, 600.0)
    }

    #[test]
    fn test_full_image_restores_identity() {
        let initial =
            get_initial_crop_from_cropped_area_pixels(Area::new(0.0, 0.0, 800.0, 600.0), landscape());
        assert!((initial.zoom - 1.0).abs() < EPS);
        assert!(initial.crop.x.abs() < EPS);
        assert!(initial.crop.y.abs() < EPS);
    }

    #[test]
    fn test_round_trip_full_image() {
        let area = compute_cropped_area(
            Point::new(0.0, 0.0),
            landscape(),
            Size::new(400.0, 300.0),
            4.0 / 3.0,
            1.0,
            false,
        );
        assert!((area.pixels.width - 800.0).abs() < EPS);
        assert!((area.pixels.height - 600.0).abs() < EPS);

        let initial = get_initial_crop_from_cropped_area_pixels(area.pixels, landscape());
        assert!((initial.zoom - 1.0).abs() < EPS);
        assert!(initial.crop.x.abs() < EPS);
        assert!(initial.crop.y.abs() < EPS);
    }

    #[test]
    fn test_round_trip_zoomed_pan() {
        let crop = Point::new(100.0, -60.0);
        let area = compute_cropped_area(
            crop,
            landscape(),
            Size::new(400.0, 300.0),
            4.0 / 3.0,
            2.0,
            false,
        );
        let initial = get_initial_crop_from_cropped_area_pixels(area.pixels, landscape());
        assert!((initial.zoom - 2.0).abs() < EPS);
        assert!((initial.crop.x - crop.x).abs() < EPS);
        assert!((initial.crop.y - crop.y).abs() < EPS);
    }

    #[test]
    fn test_zoomed_area() {
        // Center quarter of the image: zoom 2, centered
        let initial = get_initial_crop_from_cropped_area_pixels(
            Area::new(200.0, 150.0, 400.0, 300.0),
            landscape(),
        );
        assert!((initial.zoom - 2.0).abs() < EPS);
        assert!(initial.crop.x.abs() < EPS);
        assert!(initial.crop.y.abs() < EPS);
    }

    #[test]
    fn test_top_left_area_pans_image_down_right() {
        let initial =
            get_initial_crop_from_cropped_area_pixels(Area::new(0.0, 0.0, 400.0, 300.0), landscape());
        // (800 - 400) / 2 * (0.5 * 2) = 200
        assert!((initial.crop.x - 200.0).abs() < EPS);
        assert!((initial.crop.y - 150.0).abs() < EPS);
    }

    #[test]
    fn test_tall_image_zoom_from_width() {
        let img = ImageSize::new(300.0, 400.0, 600.0, 800.0);
        let initial =
            get_initial_crop_from_cropped_area_pixels(Area::new(0.0, 100.0, 600.0, 600.0), img);
        assert!((initial.zoom - 1.0).abs() < EPS);
        assert!(initial.crop.x.abs() < EPS);
        assert!(initial.crop.y.abs() < EPS);
    }
}
