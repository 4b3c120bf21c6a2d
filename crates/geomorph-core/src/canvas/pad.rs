//! Border expansion and letterbox fitting.

use serde::{Deserialize, Serialize};

use super::resize::{calculate_fit_dimensions, resize, FilterType};
use crate::error::{ProcessingError, Result};
use crate::raster::{check_canvas, FillColor, Raster, MAX_DIMENSION};

/// Widths of the border added on each side of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Border {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Border {
    /// Border of `horizontal` pixels left and right, `vertical` top and bottom.
    pub fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

/// Target canvas for [`resize_and_pad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasTarget {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub fill: FillColor,
}

impl Default for CanvasTarget {
    /// 300x300 on white, the member-photo card size.
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            fill: FillColor::WHITE,
        }
    }
}

/// Grow the canvas by `border`, filling the new area with `fill`.
///
/// The source pixels are copied unchanged to offset `(left, top)`.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidParameters` if the expanded canvas would
/// exceed the canvas limit.
pub fn expand_border(image: &Raster, border: Border, fill: FillColor) -> Result<Raster> {
    if border.is_empty() {
        return Ok(image.clone());
    }

    let new_w = image.width() as u64 + border.left as u64 + border.right as u64;
    let new_h = image.height() as u64 + border.top as u64 + border.bottom as u64;
    if new_w > MAX_DIMENSION as u64 || new_h > MAX_DIMENSION as u64 {
        return Err(ProcessingError::InvalidParameters(format!(
            "expanded canvas {}x{} exceeds the {} px limit",
            new_w, new_h, MAX_DIMENSION
        )));
    }

    let canvas = Raster::filled(new_w as u32, new_h as u32, image.layout(), fill)?;
    Ok(overlay(canvas, image, border.left, border.top))
}

/// Scale `image` to fit entirely inside `target` (aspect ratio preserved,
/// no cropping) and center it on a target-sized canvas of `target.fill`.
///
/// The result is always exactly `target.width x target.height` and keeps the
/// source's channel layout.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidParameters` if a target dimension is
/// zero or beyond the canvas limit.
pub fn resize_and_pad(image: &Raster, target: &CanvasTarget) -> Result<Raster> {
    check_canvas(target.width, target.height)?;

    let (fit_w, fit_h) =
        calculate_fit_dimensions(image.width(), image.height(), target.width, target.height);
    let scaled = resize(image, fit_w, fit_h, FilterType::Lanczos3)?;

    let canvas = Raster::filled(target.width, target.height, image.layout(), target.fill)?;
    let left = center_offset(target.width - fit_w);
    let top = center_offset(target.height - fit_h);
    Ok(overlay(canvas, &scaled, left, top))
}

/// Half of the leftover space, rounded half to even: a 7 px leftover puts
/// 4 px before the image, a 5 px leftover puts 2.
fn center_offset(leftover: u32) -> u32 {
    (leftover as f64 * 0.5).round_ties_even() as u32
}

/// Copy `image` onto `canvas` at `(left, top)`. Both share a layout and the
/// image fits entirely inside the canvas.
fn overlay(canvas: Raster, image: &Raster, left: u32, top: u32) -> Raster {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let layout = canvas.layout();
    let channels = layout.channels();
    let mut pixels = canvas.into_pixels();

    let row_len = image.width() as usize * channels;
    for (y, src_row) in image.pixels().chunks_exact(row_len).enumerate() {
        let dst_start = ((top as usize + y) * canvas_w as usize + left as usize) * channels;
        pixels[dst_start..dst_start + row_len].copy_from_slice(src_row);
    }

    Raster::from_parts(canvas_w, canvas_h, layout, pixels)
}
