//! WASM bindings for the geometric transform pipeline.
//!
//! Two entry points share the same core pipeline: one takes the slider
//! values as scalars, the other a plain JS object.

use crate::types::{to_js_error, JsRaster};
use geomorph_core::transform::{apply_transform_with, InterpolationFilter, TransformOptions};
use geomorph_core::TransformParameters;
use wasm_bindgen::prelude::*;

fn options(use_lanczos: bool) -> TransformOptions {
    TransformOptions {
        filter: if use_lanczos {
            InterpolationFilter::Lanczos3
        } else {
            InterpolationFilter::Bilinear
        },
    }
}

/// Apply scale, rotation, translation and shear in that order.
///
/// # Arguments
///
/// * `image` - Source raster
/// * `zoom` - Scale factor (> 0)
/// * `angle` - Degrees, positive = counter-clockwise
/// * `tx`, `ty` - White border added on each side (negative = none)
/// * `skew_x`, `skew_y` - Shear factors
/// * `use_lanczos` - Lanczos3 for rotate/shear sampling, otherwise bilinear
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = apply_transform(raster, 1.5, 30, 10, 0, 0.1, 0, false);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn apply_transform(
    image: &JsRaster,
    zoom: f64,
    angle: f64,
    tx: i32,
    ty: i32,
    skew_x: f64,
    skew_y: f64,
    use_lanczos: bool,
) -> Result<JsRaster, JsValue> {
    let params = TransformParameters {
        zoom,
        angle,
        tx,
        ty,
        skew_x,
        skew_y,
    };
    transform(image, &params, use_lanczos).map_err(to_js_error)
}

/// Apply the transform described by a JS object.
///
/// Missing fields take their identity values; `skewX`/`skewY` are accepted
/// alongside `skew_x`/`skew_y`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const out = apply_transform_params(raster, { zoom: 2, angle: -45, skewX: 0.2 }, true);
/// ```
#[wasm_bindgen]
pub fn apply_transform_params(
    image: &JsRaster,
    params: JsValue,
    use_lanczos: bool,
) -> Result<JsRaster, JsValue> {
    let params: TransformParameters = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("Invalid transform parameters: {}", e))))?;
    transform(image, &params, use_lanczos).map_err(to_js_error)
}

fn transform(
    image: &JsRaster,
    params: &TransformParameters,
    use_lanczos: bool,
) -> geomorph_core::Result<JsRaster> {
    apply_transform_with(image.as_raster(), params, &options(use_lanczos)).map(JsRaster::from_raster)
}
