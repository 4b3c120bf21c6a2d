//! Zoom stage: uniform scaling with Lanczos3 resampling.

use crate::canvas::{resize, FilterType};
use crate::error::{ProcessingError, Result};
use crate::raster::{canvas_dimension, check_canvas, Raster};

/// Compute the scaled dimensions `round(w * zoom) x round(h * zoom)`.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidParameters` if `zoom` is not a positive
/// finite number, if either dimension rounds to zero or exceeds the
/// per-side limit, or if the scaled area exceeds the pixel budget.
pub fn compute_scaled_dimensions(width: u32, height: u32, zoom: f64) -> Result<(u32, u32)> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(ProcessingError::InvalidParameters(format!(
            "zoom must be a positive finite number, got {}",
            zoom
        )));
    }

    let new_w = canvas_dimension((width as f64 * zoom).round(), "scaled width")?;
    let new_h = canvas_dimension((height as f64 * zoom).round(), "scaled height")?;
    check_canvas(new_w, new_h)?;
    Ok((new_w, new_h))
}

/// Scale an image by `zoom` using Lanczos3 for both upscaling and downscaling.
///
/// A zoom that leaves the dimensions unchanged returns an exact copy.
pub fn apply_scale(image: &Raster, zoom: f64) -> Result<Raster> {
    let (new_w, new_h) = compute_scaled_dimensions(image.width(), image.height(), zoom)?;
    resize(image, new_w, new_h, FilterType::Lanczos3)
}
