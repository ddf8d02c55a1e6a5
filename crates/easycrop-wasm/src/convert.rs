//! Conversions between JavaScript values and core geometry types.

use easycrop_core::{GeometryError, DEFAULT_RESTRICT_POSITION, DEFAULT_ROTATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a JS object, naming the argument in the error.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Serialize a result into a plain JS object.
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) fn error_to_js(err: GeometryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `undefined` rotation means unrotated.
pub(crate) fn rotation_or_default(rotation: Option<f64>) -> f64 {
    rotation.unwrap_or(DEFAULT_ROTATION)
}

/// `undefined` restriction means restricted.
pub(crate) fn restrict_or_default(restrict: Option<bool>) -> bool {
    restrict.unwrap_or(DEFAULT_RESTRICT_POSITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_default() {
        assert_eq!(rotation_or_default(None), 0.0);
        assert_eq!(rotation_or_default(Some(90.0)), 90.0);
    }

    #[test]
    fn test_restrict_default() {
        assert!(restrict_or_default(None));
        assert!(!restrict_or_default(Some(false)));
    }
}
