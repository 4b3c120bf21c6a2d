//! Codec edge: encoded bytes in, rasters through the pipeline, PNG out.
//!
//! Only PNG and JPEG are accepted on input. Output is always PNG, which
//! keeps every layout (including alpha) lossless.
//!
//! # Examples
//!
//! ```ignore
//! use geomorph_core::codec::{decode_image, encode_png};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let raster = decode_image(&bytes).unwrap();
//! let png = encode_png(&raster).unwrap();
//! ```

mod decode;
mod encode;

pub use decode::{decode_image, is_supported_extension, SUPPORTED_EXTENSIONS};
pub use encode::{encode_png, save_png, PNG_MIME_TYPE};
