//! Geomorph WASM - WebAssembly bindings for Geomorph
//!
//! This crate exposes the geomorph-core operations to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - `JsRaster`, the wrapper passed between calls
//! - `codec` - PNG/JPEG decoding and PNG encoding
//! - `grayscale` - Luminance conversion
//! - `transform` - Scale, rotate, translate and shear pipeline
//! - `canvas` - Letterbox resize
//! - `process` - One-shot decode, operate, encode
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_transform, encode_png } from '@geomorph/wasm';
//!
//! await init();
//!
//! const raster = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const moved = apply_transform(raster, 1.2, 15, 20, 0, 0.1, 0, false);
//! const png = encode_png(moved);
//! ```

use wasm_bindgen::prelude::*;

mod canvas;
mod codec;
mod grayscale;
mod process;
mod transform;
mod types;

pub use canvas::resize_and_pad;
pub use codec::{decode_image, encode_png, is_supported_extension, png_mime_type};
pub use grayscale::to_grayscale;
pub use process::{process_image, JsProcessedImage};
pub use transform::{apply_transform, apply_transform_params};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
