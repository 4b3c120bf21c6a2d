//! Grayscale binding.

use crate::types::JsRaster;
use geomorph_core::grayscale::to_grayscale as core_grayscale;
use wasm_bindgen::prelude::*;

/// Convert a raster to single-channel luminance (BT.601 weights).
///
/// Alpha is discarded; a gray input is returned unchanged.
#[wasm_bindgen]
pub fn to_grayscale(image: &JsRaster) -> JsRaster {
    JsRaster::from_raster(core_grayscale(image.as_raster()))
}
