//! Shear stage.
//!
//! Applies the affine matrix `[[1, skew_x, 0], [skew_y, 1, 0]]` by pull
//! sampling: output pixel `(x, y)` reads the source at
//! `(x + skew_x·y, y + skew_y·x)`. The canvas keeps its size; content that
//! maps outside the source becomes [`FillColor::default_for`] the layout.

use super::sample::{InterpolationFilter, Sampler};
use crate::error::{ProcessingError, Result};
use crate::raster::{FillColor, Raster};

/// Shear an image in place of its own canvas.
///
/// Zero skew on both axes returns a copy.
pub fn apply_shear(
    image: &Raster,
    skew_x: f64,
    skew_y: f64,
    filter: InterpolationFilter,
) -> Result<Raster> {
    if !skew_x.is_finite() || !skew_y.is_finite() {
        return Err(ProcessingError::InvalidParameters(format!(
            "skew must be finite, got ({}, {})",
            skew_x, skew_y
        )));
    }

    if skew_x == 0.0 && skew_y == 0.0 {
        return Ok(image.clone());
    }

    let (w, h) = image.dimensions();
    let channels = image.channels();
    let sampler = Sampler::new(image, filter, FillColor::default_for(image.layout()));
    let mut output = vec![0u8; image.pixels().len()];

    for (y, row) in output.chunks_exact_mut(w as usize * channels).enumerate() {
        let y = y as f64;
        for (x, px) in row.chunks_exact_mut(channels).enumerate() {
            let x = x as f64;
            sampler.sample_into(x + skew_x * y, y + skew_y * x, px);
        }
    }

    Ok(Raster::from_parts(w, h, image.layout(), output))
}
