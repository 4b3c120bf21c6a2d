//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! These are the weights conventionally used for 8-bit "L" (luminance)
//! conversion of sRGB images, and the ones the grayscale reducer and the
//! fill-color policy rely on.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate luma from u8 RGB values, rounded to the nearest integer.
///
/// # Example
///
/// ```
/// use geomorph_core::luminance::luma_u8;
///
/// assert_eq!(luma_u8(255, 0, 0), 76);
/// ```
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(0, 0, 0), 0);
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert!((luma(1.0, 1.0, 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(luma_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luma_u8(v, v, v), v, "gray {} should map to itself", v);
        }
    }
}
