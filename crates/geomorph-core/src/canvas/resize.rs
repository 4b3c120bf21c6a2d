//! Resampling to exact and aspect-fitting dimensions.
//!
//! Provides resize operations using the `image` crate's algorithms.
//! All functions return new rasters without modifying the input.

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::raster::{check_canvas, Raster};

/// Filter type for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// The channel layout is preserved. Matching dimensions return a copy.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidParameters` if either target dimension
/// is zero or beyond the canvas limit.
pub fn resize(image: &Raster, width: u32, height: u32, filter: FilterType) -> Result<Raster> {
    check_canvas(width, height)?;

    if image.width() == width && image.height() == height {
        return Ok(image.clone());
    }

    let dynamic = image
        .to_dynamic()
        .ok_or_else(|| ProcessingError::InvalidImage("pixel buffer does not match dimensions".to_string()))?;

    let resized = dynamic.resize_exact(width, height, filter.to_image_filter());
    Raster::from_dynamic(resized)
}

/// Calculate the largest dimensions with the source aspect ratio that fit
/// inside `max_width x max_height`.
///
/// The constrained side is rounded half to even. Either side is at least
/// 1 pixel.
pub fn calculate_fit_dimensions(
    width: u32,
    height: u32,
    max_width: u32,
    max_height: u32,
) -> (u32, u32) {
    if width == 0 || height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;
    let target_ratio = max_width as f64 / max_height as f64;

    if ratio > target_ratio {
        // Relatively wider than the target: constrain by width
        let new_height =
            (height as f64 / width as f64 * max_width as f64).round_ties_even() as u32;
        (max_width, new_height.clamp(1, max_height))
    } else {
        // Relatively taller (or same shape): constrain by height
        let new_width =
            (width as f64 / height as f64 * max_height as f64).round_ties_even() as u32;
        (new_width.clamp(1, max_width), max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelLayout;

    fn create_test_image(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        Raster::new(width, height, PixelLayout::Rgb, pixels).unwrap()
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_resize_basic() {
        let resized = resize(&create_test_image(100, 50), 50, 25, FilterType::Bilinear).unwrap();
        assert_eq!(resized.dimensions(), (50, 25));
        assert_eq!(resized.pixels().len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        assert_eq!(resize(&img, 100, 50, FilterType::Lanczos3).unwrap(), img);
    }

    #[test]
    fn test_resize_preserves_layout() {
        for layout in [PixelLayout::Luma, PixelLayout::Rgb, PixelLayout::Rgba] {
            let img = Raster::new(4, 4, layout, vec![90u8; 16 * layout.channels()]).unwrap();
            let resized = resize(&img, 8, 2, FilterType::Lanczos3).unwrap();
            assert_eq!(resized.layout(), layout);
            assert_eq!(resized.dimensions(), (8, 2));
        }
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let img = Raster::new(6, 6, PixelLayout::Luma, vec![77u8; 36]).unwrap();
        let resized = resize(&img, 13, 9, FilterType::Lanczos3).unwrap();
        assert!(resized.pixels().iter().all(|&v| (v as i32 - 77).abs() <= 1));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);
        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);
        for filter in [FilterType::Nearest, FilterType::Bilinear, FilterType::Lanczos3] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.dimensions(), (50, 25));
        }
    }

    #[test]
    fn test_calculate_fit_dimensions_landscape() {
        assert_eq!(calculate_fit_dimensions(6000, 4000, 300, 300), (300, 200));
    }

    #[test]
    fn test_calculate_fit_dimensions_portrait() {
        assert_eq!(calculate_fit_dimensions(4000, 6000, 300, 300), (200, 300));
    }

    #[test]
    fn test_calculate_fit_dimensions_square() {
        assert_eq!(calculate_fit_dimensions(4000, 4000, 256, 256), (256, 256));
    }

    #[test]
    fn test_calculate_fit_dimensions_upscales() {
        assert_eq!(calculate_fit_dimensions(10, 5, 300, 300), (300, 150));
    }

    #[test]
    fn test_calculate_fit_dimensions_non_square_target() {
        // Square source into a wide target is limited by height
        assert_eq!(calculate_fit_dimensions(100, 100, 400, 200), (200, 200));
    }

    #[test]
    fn test_calculate_fit_dimensions_extreme_ratio() {
        assert_eq!(calculate_fit_dimensions(10_000, 1, 300, 300), (300, 1));
    }

    #[test]
    fn test_calculate_fit_dimensions_rounds_half_to_even() {
        // 1/4 * 10 = 2.5 rounds down to the even neighbour
        assert_eq!(calculate_fit_dimensions(4, 1, 10, 10), (10, 2));
        // 3/4 * 10 = 7.5 rounds up to the even neighbour
        assert_eq!(calculate_fit_dimensions(4, 3, 10, 10), (10, 8));
    }

    #[test]
    fn test_calculate_fit_dimensions_zero_input() {
        assert_eq!(calculate_fit_dimensions(0, 0, 256, 256), (0, 0));
    }
}
