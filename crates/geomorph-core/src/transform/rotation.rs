//! Rotation stage with canvas expansion.
//!
//! The image is rotated counter-clockwise about its center and the canvas
//! grows to the smallest box containing every rotated corner. Multiples of
//! 90 degrees are exact pixel permutations; other angles use inverse
//! mapping: for each output pixel, with offsets `(dx, dy)` from the output
//! center,
//!
//! ```text
//! src_x = dx * cos(θ) - dy * sin(θ) + src_cx
//! src_y = dx * sin(θ) + dy * cos(θ) + src_cy
//! ```
//!
//! and the source is sampled with the requested [`InterpolationFilter`].
//! Exposed corners get [`FillColor::default_for`] the raster's layout.

use super::sample::{InterpolationFilter, Sampler};
use crate::error::{ProcessingError, Result};
use crate::raster::{canvas_dimension, check_canvas, FillColor, Raster};

/// Angles within this many degrees of a multiple of 90 take the exact path.
const QUARTER_TURN_EPSILON: f64 = 1e-6;

/// Slack subtracted before rounding bounds up, so floating noise in
/// `cos`/`sin` does not add a spurious row or column.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Number of counter-clockwise quarter turns (0-3) if `angle_degrees` is a
/// multiple of 90.
fn quarter_turns(angle_degrees: f64) -> Option<u8> {
    let normalized = angle_degrees.rem_euclid(360.0);
    let turns = (normalized / 90.0).round();
    if (normalized - turns * 90.0).abs() < QUARTER_TURN_EPSILON {
        Some((turns as u8) % 4)
    } else {
        None
    }
}

fn check_angle(angle_degrees: f64) -> Result<()> {
    if angle_degrees.is_finite() {
        Ok(())
    } else {
        Err(ProcessingError::InvalidParameters(format!(
            "rotation angle must be finite, got {}",
            angle_degrees
        )))
    }
}

/// Compute the dimensions of the bounding box for a rotated image:
/// `ceil(w·|cos θ| + h·|sin θ|) x ceil(w·|sin θ| + h·|cos θ|)`.
///
/// # Example
///
/// ```
/// use geomorph_core::transform::compute_rotated_bounds;
///
/// // 90-degree rotation swaps dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0).unwrap(), (50, 100));
/// ```
///
/// # Errors
///
/// Returns `ProcessingError::InvalidParameters` for a non-finite angle or a
/// bounding box beyond the per-side limit or the pixel budget.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> Result<(u32, u32)> {
    check_angle(angle_degrees)?;

    match quarter_turns(angle_degrees) {
        Some(0) | Some(2) => return Ok((width, height)),
        Some(_) => return Ok((height, width)),
        None => {}
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = ((w * cos + h * sin) - BOUNDS_EPSILON).ceil();
    let new_h = ((w * sin + h * cos) - BOUNDS_EPSILON).ceil();

    let new_w = canvas_dimension(new_w, "rotated width")?;
    let new_h = canvas_dimension(new_h, "rotated height")?;
    check_canvas(new_w, new_h)?;
    Ok((new_w, new_h))
}

/// Rotate an image counter-clockwise about its center.
///
/// The output canvas is expanded to fit the entire rotated image (no
/// clipping). Angles that are a multiple of 360 return a copy.
pub fn apply_rotation(
    image: &Raster,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> Result<Raster> {
    check_angle(angle_degrees)?;

    if let Some(turns) = quarter_turns(angle_degrees) {
        return Ok(rotate_quarter_turns(image, turns));
    }

    let (dst_w, dst_h) = compute_rotated_bounds(image.width(), image.height(), angle_degrees)?;

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = image.width() as f64 / 2.0;
    let src_cy = image.height() as f64 / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let sampler = Sampler::new(image, filter, FillColor::default_for(image.layout()));
    let channels = image.channels();
    let mut output = vec![0u8; dst_w as usize * dst_h as usize * channels];

    for (dst_y, row) in output.chunks_exact_mut(dst_w as usize * channels).enumerate() {
        // Offsets are measured between pixel centers
        let dy = dst_y as f64 + 0.5 - dst_cy;
        for (dst_x, px) in row.chunks_exact_mut(channels).enumerate() {
            let dx = dst_x as f64 + 0.5 - dst_cx;

            let src_x = dx * cos - dy * sin + src_cx - 0.5;
            let src_y = dx * sin + dy * cos + src_cy - 0.5;

            sampler.sample_into(src_x, src_y, px);
        }
    }

    Ok(Raster::from_parts(dst_w, dst_h, image.layout(), output))
}

/// Rotate by `turns` quarter turns counter-clockwise by moving pixels.
fn rotate_quarter_turns(image: &Raster, turns: u8) -> Raster {
    if turns == 0 {
        return image.clone();
    }

    let (w, h) = image.dimensions();
    let (dst_w, dst_h) = if turns % 2 == 1 { (h, w) } else { (w, h) };
    let channels = image.channels();
    let mut output = Vec::with_capacity(image.pixels().len());

    for y in 0..dst_h {
        for x in 0..dst_w {
            let (sx, sy) = match turns {
                1 => (w - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (y, h - 1 - x),
            };
            output.extend_from_slice(image.pixel(sx, sy));
        }
    }

    debug_assert_eq!(output.len(), dst_w as usize * dst_h as usize * channels);
    Raster::from_parts(dst_w, dst_h, image.layout(), output)
}
