//! Easycrop WASM - WebAssembly bindings for Easycrop
//!
//! This crate exposes the easycrop-core geometry to JavaScript/TypeScript
//! croppers, keeping the camelCase function names and object shapes those
//! components already use.
//!
//! # Module Structure
//!
//! - `geometry` - Free functions (`getCropSize`, `computeCroppedArea`, ...)
//! - `cropper` - `JsCropper`, a validated config running the per-event pipeline
//! - `convert` - JS value conversions and argument defaults
//! - `logger` - Routes core `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { getCropSize, computeCroppedArea } from '@easycrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const cropSize = getCropSize(mediaSize.width, mediaSize.height, aspect, rotation);
//! const { croppedAreaPixels } = computeCroppedArea(crop, mediaSize, cropSize, aspect, zoom);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod cropper;
mod geometry;
mod logger;

// Re-export public API
pub use cropper::JsCropper;
pub use geometry::{
    compute_cropped_area, get_center, get_crop_size, get_distance_between_points,
    get_initial_crop_from_cropped_area_pixels, get_rotation_between_points, restrict_position,
    rotate_around_mid_point, translate_size,
};
pub use logger::set_log_level;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the console logger at `warn`; use `setLogLevel` for more.
#[wasm_bindgen(start)]
pub fn init() {
    logger::init_logging(log::LevelFilter::Warn);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
