//! Stateless cropper handle for JavaScript.
//!
//! `JsCropper` holds a validated [`CropperConfig`] so UI code can run the
//! per-event pipeline (settle, project, restore) without re-sending the
//! aspect and zoom bounds on every call.

use crate::convert::{error_to_js, from_js, rotation_or_default, to_js};
use easycrop_core::{Area, CropState, CropperConfig, GeometryError, ImageSize};
use wasm_bindgen::prelude::*;

/// JavaScript-accessible cropper configuration.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropper = new JsCropper({ aspect: 16 / 9, maxZoom: 5 });
///
/// // On every pointer move
/// state = cropper.settle({ crop, zoom, rotation }, mediaSize);
/// const { croppedAreaPixels } = cropper.croppedArea(state, mediaSize);
///
/// // Restoring a saved selection
/// state = cropper.restore(savedPixels, mediaSize);
///
/// cropper.free();
/// ```
#[wasm_bindgen]
pub struct JsCropper {
    config: CropperConfig,
}

#[wasm_bindgen]
impl JsCropper {
    /// Create a cropper from `{ aspect, minZoom, maxZoom, restrictPosition }`.
    ///
    /// Missing fields (or a missing object) take the defaults:
    /// aspect 4/3, zoom 1 to 3, restricted.
    ///
    /// # Errors
    /// Returns error if the object is malformed, the aspect is not positive,
    /// or the zoom bounds are out of order.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsCropper, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            from_js(config, "cropper config")?
        };
        JsCropper::from_config(config).map_err(error_to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn aspect(&self) -> f64 {
        self.config.aspect
    }

    #[wasm_bindgen(getter, js_name = minZoom)]
    pub fn min_zoom(&self) -> f64 {
        self.config.min_zoom
    }

    #[wasm_bindgen(getter, js_name = maxZoom)]
    pub fn max_zoom(&self) -> f64 {
        self.config.max_zoom
    }

    #[wasm_bindgen(getter, js_name = restrictPosition)]
    pub fn restrict_position(&self) -> bool {
        self.config.restrict_position
    }

    /// Bound a zoom to the configured range.
    #[wasm_bindgen(js_name = clampZoom)]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        self.config.clamp_zoom(zoom)
    }

    /// Crop window `{ width, height }` for the displayed image.
    #[wasm_bindgen(js_name = cropSize)]
    pub fn crop_size(&self, image: JsValue, rotation: Option<f64>) -> Result<JsValue, JsValue> {
        let image: ImageSize = from_js(image, "image size")?;
        to_js(&self.config.crop_size(&image, rotation_or_default(rotation)))
    }

    /// Clamp zoom and pan of `{ crop, zoom, rotation }`.
    pub fn settle(&self, state: JsValue, image: JsValue) -> Result<JsValue, JsValue> {
        let state: CropState = from_js(state, "crop state")?;
        let image: ImageSize = from_js(image, "image size")?;
        to_js(&self.config.settle(state, &image))
    }

    /// `{ croppedAreaPercentages, croppedAreaPixels }` selected by a state.
    #[wasm_bindgen(js_name = croppedArea)]
    pub fn cropped_area(&self, state: JsValue, image: JsValue) -> Result<JsValue, JsValue> {
        let state: CropState = from_js(state, "crop state")?;
        let image: ImageSize = from_js(image, "image size")?;
        to_js(&self.config.cropped_area(&state, &image))
    }

    /// State `{ crop, zoom, rotation }` reproducing a saved pixel area.
    pub fn restore(&self, pixels: JsValue, image: JsValue) -> Result<JsValue, JsValue> {
        let pixels: Area = from_js(pixels, "cropped area pixels")?;
        let image: ImageSize = from_js(image, "image size")?;
        to_js(&self.config.restore(pixels, &image))
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCropper {
    /// Wrap a config after validating it.
    pub(crate) fn from_config(config: CropperConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        log::debug!("cropper created with {:?}", config);
        Ok(Self { config })
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use easycrop_core::{CroppedArea, Point};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn landscape() -> JsValue {
        to_js(&ImageSize::new(400.0, 300.0, 800.0, 600.0)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_constructor_defaults_when_undefined() {
        let cropper = JsCropper::new(JsValue::UNDEFINED).unwrap();
        assert_eq!(cropper.max_zoom(), 3.0);
    }

    #[wasm_bindgen_test]
    fn test_constructor_partial_config() {
        let config = js_sys::JSON::parse(r#"{"aspect":1,"maxZoom":5}"#).unwrap();
        let cropper = JsCropper::new(config).unwrap();
        assert_eq!(cropper.aspect(), 1.0);
        assert_eq!(cropper.min_zoom(), 1.0);
        assert_eq!(cropper.max_zoom(), 5.0);
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_zero_aspect() {
        let config = js_sys::JSON::parse(r#"{"aspect":0}"#).unwrap();
        assert!(JsCropper::new(config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_settle_and_project() {
        let cropper = JsCropper::new(JsValue::UNDEFINED).unwrap();
        let state = to_js(&CropState {
            crop: Point::new(900.0, 0.0),
            zoom: 2.0,
            rotation: 0.0,
        })
        .unwrap();

        let settled = cropper.settle(state, landscape()).unwrap();
        let parsed: CropState = from_js(settled.clone(), "state").unwrap();
        assert_eq!(parsed.crop, Point::new(200.0, 0.0));

        let area: CroppedArea =
            from_js(cropper.cropped_area(settled, landscape()).unwrap(), "area").unwrap();
        assert_eq!(area.pixels, Area::new(0.0, 150.0, 400.0, 300.0));
    }
}
