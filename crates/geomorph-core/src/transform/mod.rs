//! Geometric transforms: scale, rotation, translation and shear.
//!
//! Each stage is a standalone function returning a new raster. The composite
//! [`apply_transform`] chains them.
//!
//! # Transform Order
//!
//! 1. Scale by `zoom` (Lanczos3 resampling)
//! 2. Rotate by `angle`, expanding the canvas to fit
//! 3. Translate: pad `tx`/`ty` pixels of white on both sides
//! 4. Shear by `skew_x`/`skew_y` on the same canvas
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Origin is the top-left corner, y grows downward
//! - Pixel `(x, y)` covers `[x - 0.5, x + 0.5] x [y - 0.5, y + 0.5]`

mod pipeline;
mod rotation;
mod sample;
mod scale;
mod shear;
mod translate;

pub use pipeline::{apply_transform, apply_transform_with, TransformOptions};
pub use rotation::{apply_rotation, compute_rotated_bounds};
pub use sample::InterpolationFilter;
pub use scale::{apply_scale, compute_scaled_dimensions};
pub use shear::apply_shear;
pub use translate::apply_translation;
