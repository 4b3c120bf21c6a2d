//! Letterbox resize binding.

use crate::types::{to_js_error, JsRaster};
use geomorph_core::canvas::{resize_and_pad as core_resize_and_pad, CanvasTarget};
use geomorph_core::FillColor;
use wasm_bindgen::prelude::*;

/// Fit `image` inside `width x height` without cropping and center it on a
/// canvas of the given fill color.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Member photo card: 300x300 on white
/// const card = resize_and_pad(photo, 300, 300, 255, 255, 255, 255);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn resize_and_pad(
    image: &JsRaster,
    width: u32,
    height: u32,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<JsRaster, JsValue> {
    let target = CanvasTarget {
        width,
        height,
        fill: FillColor::rgba(r, g, b, a),
    };
    core_resize_and_pad(image.as_raster(), &target)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_card() {
        let img = JsRaster::new(60, 40, 3, vec![0u8; 60 * 40 * 3]).unwrap();
        let card = resize_and_pad(&img, 300, 300, 255, 255, 255, 255).unwrap();
        assert_eq!((card.width(), card.height()), (300, 300));
        assert_eq!(&card.pixels()[..3], &[255, 255, 255]);
    }
}
