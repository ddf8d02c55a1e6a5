//! WASM bindings for the crop geometry operations.
//!
//! Every function keeps the camelCase name and argument order JavaScript
//! croppers already use. Objects go in and come out as plain JS objects
//! (`{ x, y }`, `{ width, height, naturalWidth, naturalHeight }`, ...).
//! Optional trailing arguments left `undefined` take their defaults:
//! `rotation = 0`, `shouldRestrict = true`.
//!
//! These calls never validate numeric preconditions; a zero aspect or zoom
//! yields NaN/Infinity fields just like the raw core operations. Malformed
//! objects throw.

use crate::convert::{from_js, restrict_or_default, rotation_or_default, to_js};
use easycrop_core::geometry;
use easycrop_core::{Area, ImageSize, Point, Size};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Largest crop of ratio `aspect` fitting the rotated image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const size = getCropSize(400, 300, 1); // { width: 300, height: 300 }
/// ```
#[wasm_bindgen(js_name = getCropSize)]
pub fn get_crop_size(
    img_width: f64,
    img_height: f64,
    aspect: f64,
    rotation: Option<f64>,
) -> Result<JsValue, JsValue> {
    to_js(&geometry::get_crop_size(
        img_width,
        img_height,
        aspect,
        rotation_or_default(rotation),
    ))
}

/// Keep a requested pan position inside the (rotated) image.
///
/// # Arguments
///
/// * `position` - `{ x, y }` requested pan
/// * `image_size` - `{ width, height }` on-screen image size
/// * `crop_size` - `{ width, height }` crop window size
/// * `zoom` - Current zoom
/// * `rotation` - Degrees, defaults to 0
#[wasm_bindgen(js_name = restrictPosition)]
pub fn restrict_position(
    position: JsValue,
    image_size: JsValue,
    crop_size: JsValue,
    zoom: f64,
    rotation: Option<f64>,
) -> Result<JsValue, JsValue> {
    let position: Point = from_js(position, "position")?;
    let image_size: Size = from_js(image_size, "image size")?;
    let crop_size: Size = from_js(crop_size, "crop size")?;

    to_js(&geometry::restrict_position(
        position,
        image_size,
        crop_size,
        zoom,
        rotation_or_default(rotation),
    ))
}

#[wasm_bindgen(js_name = getDistanceBetweenPoints)]
pub fn get_distance_between_points(a: JsValue, b: JsValue) -> Result<f64, JsValue> {
    let a: Point = from_js(a, "point a")?;
    let b: Point = from_js(b, "point b")?;
    Ok(geometry::get_distance_between_points(a, b))
}

/// Angle from `a` to `b` in degrees.
#[wasm_bindgen(js_name = getRotationBetweenPoints)]
pub fn get_rotation_between_points(a: JsValue, b: JsValue) -> Result<f64, JsValue> {
    let a: Point = from_js(a, "point a")?;
    let b: Point = from_js(b, "point b")?;
    Ok(geometry::get_rotation_between_points(a, b))
}

/// Selected area as `{ croppedAreaPercentages, croppedAreaPixels }`.
///
/// # Arguments
///
/// * `crop` - `{ x, y }` pan position
/// * `img_size` - `{ width, height, naturalWidth, naturalHeight }`
/// * `crop_size` - `{ width, height }` crop window size
/// * `aspect` - Crop ratio
/// * `zoom` - Current zoom
/// * `should_restrict` - Clamp to the image, defaults to true
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { croppedAreaPixels } = computeCroppedArea(
///   crop, mediaSize, cropSize, 4 / 3, zoom,
/// );
/// ```
#[wasm_bindgen(js_name = computeCroppedArea)]
pub fn compute_cropped_area(
    crop: JsValue,
    img_size: JsValue,
    crop_size: JsValue,
    aspect: f64,
    zoom: f64,
    should_restrict: Option<bool>,
) -> Result<JsValue, JsValue> {
    let crop: Point = from_js(crop, "crop")?;
    let img_size: ImageSize = from_js(img_size, "image size")?;
    let crop_size: Size = from_js(crop_size, "crop size")?;

    to_js(&geometry::compute_cropped_area(
        crop,
        img_size,
        crop_size,
        aspect,
        zoom,
        restrict_or_default(should_restrict),
    ))
}

/// Pan and zoom (`{ crop, zoom }`) that reproduce a saved pixel area.
#[wasm_bindgen(js_name = getInitialCropFromCroppedAreaPixels)]
pub fn get_initial_crop_from_cropped_area_pixels(
    cropped_area_pixels: JsValue,
    image_size: JsValue,
) -> Result<JsValue, JsValue> {
    let pixels: Area = from_js(cropped_area_pixels, "cropped area pixels")?;
    let image_size: ImageSize = from_js(image_size, "image size")?;
    to_js(&geometry::get_initial_crop_from_cropped_area_pixels(
        pixels, image_size,
    ))
}

#[wasm_bindgen(js_name = getCenter)]
pub fn get_center(a: JsValue, b: JsValue) -> Result<JsValue, JsValue> {
    let a: Point = from_js(a, "point a")?;
    let b: Point = from_js(b, "point b")?;
    to_js(&geometry::get_center(a, b))
}

/// Rotate a point around a midpoint; returns `[x, y]`.
#[wasm_bindgen(js_name = rotateAroundMidPoint)]
pub fn rotate_around_mid_point(x: f64, y: f64, x_mid: f64, y_mid: f64, degrees: f64) -> Array {
    let [xr, yr] = geometry::rotate_around_mid_point(x, y, x_mid, y_mid, degrees);
    Array::of2(&JsValue::from_f64(xr), &JsValue::from_f64(yr))
}

/// Bounding `{ width, height }` of a rotated rectangle.
#[wasm_bindgen(js_name = translateSize)]
pub fn translate_size(width: f64, height: f64, rotation: f64) -> Result<JsValue, JsValue> {
    to_js(&geometry::translate_size(width, height, rotation))
}
