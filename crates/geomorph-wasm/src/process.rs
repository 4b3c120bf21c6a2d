//! One-shot request binding: bytes and an operation in, PNG out.

use crate::types::to_js_error;
use geomorph_core::process::{process_image as core_process, Operation, ProcessedImage};
use wasm_bindgen::prelude::*;

/// Encoded output of `process_image`, ready for a download link.
#[wasm_bindgen]
pub struct JsProcessedImage {
    inner: ProcessedImage,
}

#[wasm_bindgen]
impl JsProcessedImage {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.to_string()
    }

    /// PNG bytes (a copy).
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }
}

/// Decode `bytes`, apply one operation and encode to PNG.
///
/// `operation` is `{ op: "grayscale" }` or
/// `{ op: "transform", zoom, angle, tx, ty, skewX, skewY }`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = process_image(bytes, { op: "transform", angle: 45 });
/// link.download = out.file_name;
/// ```
#[wasm_bindgen]
pub fn process_image(bytes: &[u8], operation: JsValue) -> Result<JsProcessedImage, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("Invalid operation: {}", e))))?;
    run(bytes, &operation).map_err(to_js_error)
}

fn run(bytes: &[u8], operation: &Operation) -> geomorph_core::Result<JsProcessedImage> {
    core_process(bytes, operation).map(|inner| JsProcessedImage { inner })
}
