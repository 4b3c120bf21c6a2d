//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core Geomorph
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use geomorph_core::{ProcessingError, Raster};
use wasm_bindgen::prelude::*;

/// A raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it into a
/// `Uint8Array`. Calling the generated `free()` releases a large raster
/// early; otherwise wasm-bindgen's finalizer does it.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions, channel count and interleaved pixels.
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `channels` - 1 (gray), 3 (RGB) or 4 (RGBA)
    /// * `pixels` - Row-major samples, `width * height * channels` bytes
    ///
    /// # Errors
    /// Throws if the size is zero, the channel count is unsupported or the
    /// buffer length does not match.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::from_channels(width, height, channels, pixels)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Samples per pixel: 1, 3 or 4
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns the pixel data as a Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn as_raster(&self) -> &Raster {
        &self.inner
    }
}

/// Convert a core error into a JavaScript `Error` carrying its message.
pub(crate) fn to_js_error(err: ProcessingError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
