//! Geomorph Core - Raster geometry library
//!
//! This crate provides the pixel operations behind the Geomorph image tool:
//! grayscale conversion, the scale/rotate/translate/shear pipeline,
//! letterbox resizing, and the PNG/JPEG codec edge.

pub mod canvas;
pub mod codec;
pub mod error;
pub mod grayscale;
pub mod luminance;
pub mod process;
pub mod raster;
pub mod transform;

pub use canvas::{resize_and_pad, CanvasTarget};
pub use codec::{decode_image, encode_png, save_png, PNG_MIME_TYPE};
pub use error::{ProcessingError, Result};
pub use grayscale::to_grayscale;
pub use process::{process_image, Operation, ProcessedImage};
pub use raster::{FillColor, PixelLayout, Raster};
pub use transform::{apply_transform, apply_transform_with, InterpolationFilter, TransformOptions};

/// Geometric transform parameters.
///
/// The UI sliders keep values inside their documented ranges, but the
/// pipeline only relies on [`TransformParameters::validate`].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformParameters {
    /// Scale factor (0.1 to 3.0)
    pub zoom: f64,
    /// Rotation in degrees, positive = counter-clockwise (-180 to 180)
    pub angle: f64,
    /// Horizontal border in pixels on each side; negative means none (-200 to 200)
    pub tx: i32,
    /// Vertical border in pixels on each side; negative means none (-200 to 200)
    pub ty: i32,
    /// Horizontal shear factor (-0.5 to 0.5)
    #[serde(alias = "skewX")]
    pub skew_x: f64,
    /// Vertical shear factor (-0.5 to 0.5)
    #[serde(alias = "skewY")]
    pub skew_y: f64,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            angle: 0.0,
            tx: 0,
            ty: 0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl TransformParameters {
    /// Create parameters that leave an image unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every parameter is at its identity value
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Reject non-finite values and a non-positive zoom.
    ///
    /// Canvas-size limits are checked by the individual stages.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("zoom", self.zoom),
            ("angle", self.angle),
            ("skew_x", self.skew_x),
            ("skew_y", self.skew_y),
        ] {
            if !value.is_finite() {
                return Err(ProcessingError::InvalidParameters(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.zoom <= 0.0 {
            return Err(ProcessingError::InvalidParameters(format!(
                "zoom must be positive, got {}",
                self.zoom
            )));
        }

        Ok(())
    }
}
