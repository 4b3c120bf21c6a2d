//! Canvas utilities: resampling, border expansion and letterbox fitting.
//!
//! These are independent of the transform pipeline. The pipeline's scale
//! and translate stages are built on [`resize`] and [`expand_border`];
//! [`resize_and_pad`] fits portraits onto fixed-size cards.

mod pad;
mod resize;

pub use pad::{expand_border, resize_and_pad, Border, CanvasTarget};
pub use resize::{calculate_fit_dimensions, resize, FilterType};
