//! Decoding and encoding bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png, png_mime_type } from '@geomorph/wasm';
//!
//! const raster = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const blob = new Blob([encode_png(raster)], { type: png_mime_type() });
//! ```

use crate::types::{to_js_error, JsRaster};
use geomorph_core::codec;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes.
///
/// # Errors
/// Throws for any other format or undecodable data.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    codec::decode_image(bytes)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Encode a raster as PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    codec::encode_png(image.as_raster()).map_err(to_js_error)
}

/// MIME type of the bytes returned by `encode_png`.
#[wasm_bindgen]
pub fn png_mime_type() -> String {
    codec::PNG_MIME_TYPE.to_string()
}

/// Check a file name against the accepted upload extensions.
#[wasm_bindgen]
pub fn is_supported_extension(file_name: &str) -> bool {
    codec::is_supported_extension(file_name)
}
