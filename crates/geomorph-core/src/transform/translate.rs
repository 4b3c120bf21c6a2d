//! Translate stage: symmetric canvas growth.
//!
//! Translation here does not shift content inside a fixed canvas. It adds a
//! white border of `tx` pixels on the left and right and `ty` pixels on the
//! top and bottom, so the canvas grows by `2·tx` by `2·ty`.

use crate::canvas::{expand_border, Border};
use crate::error::Result;
use crate::raster::{FillColor, Raster};

/// Pad the canvas by `tx` horizontally and `ty` vertically on both sides.
///
/// Negative offsets are clamped to zero: that axis is left untouched and
/// the image is never cropped.
pub fn apply_translation(image: &Raster, tx: i32, ty: i32) -> Result<Raster> {
    let border = Border::symmetric(tx.max(0) as u32, ty.max(0) as u32);
    expand_border(image, border, FillColor::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::raster::{PixelLayout, MAX_DIMENSION};

    fn test_image(width: u32, height: u32) -> Raster {
        let pixels = (0..width * height * 3).map(|i| (i % 200) as u8).collect();
        Raster::new(width, height, PixelLayout::Rgb, pixels).unwrap()
    }

    #[test]
    fn test_horizontal_growth() {
        let result = apply_translation(&test_image(10, 10), 5, 0).unwrap();
        assert_eq!(result.dimensions(), (20, 10));
    }

    #[test]
    fn test_vertical_growth() {
        let result = apply_translation(&test_image(10, 10), 0, 3).unwrap();
        assert_eq!(result.dimensions(), (10, 16));
    }

    #[test]
    fn test_content_centered_with_white_border() {
        let img = test_image(4, 3);
        let result = apply_translation(&img, 2, 1).unwrap();

        assert_eq!(result.pixel(0, 0), &[255, 255, 255]);
        assert_eq!(result.pixel(1, 2), &[255, 255, 255]);
        assert_eq!(result.pixel(7, 4), &[255, 255, 255]);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(result.pixel(x + 2, y + 1), img.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_negative_offsets_clamped() {
        let img = test_image(10, 10);
        let clamped = apply_translation(&img, -5, -200).unwrap();
        let zero = apply_translation(&img, 0, 0).unwrap();
        assert_eq!(clamped, zero);
        assert_eq!(clamped, img);
    }

    #[test]
    fn test_mixed_sign_offsets() {
        let result = apply_translation(&test_image(10, 10), -5, 4).unwrap();
        assert_eq!(result.dimensions(), (10, 18));
    }

    #[test]
    fn test_rgba_border_is_opaque_white() {
        let img = Raster::new(1, 1, PixelLayout::Rgba, vec![0, 0, 0, 0]).unwrap();
        let result = apply_translation(&img, 1, 0).unwrap();
        assert_eq!(result.pixel(0, 0), &[255, 255, 255, 255]);
        assert_eq!(result.pixel(1, 0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_huge_offset_rejected() {
        let result = apply_translation(&test_image(2, 2), i32::MAX, 0);
        assert!(matches!(result, Err(ProcessingError::InvalidParameters(_))));

        let result = apply_translation(&test_image(2, 2), (MAX_DIMENSION / 2) as i32, 0);
        assert!(matches!(result, Err(ProcessingError::InvalidParameters(_))));
    }
}
