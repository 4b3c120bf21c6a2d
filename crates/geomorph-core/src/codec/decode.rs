//! PNG and JPEG decoding.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::raster::Raster;

/// File extensions accepted by the upload surface.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Check whether a file name carries an accepted extension (case-insensitive).
pub fn is_supported_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Decode PNG or JPEG bytes into a raster.
///
/// The format is sniffed from the magic bytes, not the file name. Pixels
/// are used as stored; EXIF orientation is not applied.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes
///
/// # Returns
///
/// A `Raster` in `Luma`, `Rgb` or `Rgba` layout, matching the source.
///
/// # Errors
///
/// Returns `ProcessingError::InvalidImage` if the bytes are not a PNG or
/// JPEG, or cannot be decoded.
/// Returns `ProcessingError::Io` if the byte stream cannot be read.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> Result<Raster> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ProcessingError::Io(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Png) | Some(ImageFormat::Jpeg) => {}
        Some(other) => {
            return Err(ProcessingError::InvalidImage(format!(
                "unsupported format {:?}, expected PNG or JPEG",
                other
            )))
        }
        None => {
            return Err(ProcessingError::InvalidImage(
                "unrecognized image data, expected PNG or JPEG".to_string(),
            ))
        }
    }

    let img = reader
        .decode()
        .map_err(|e| ProcessingError::InvalidImage(e.to_string()))?;

    let raster = Raster::from_dynamic(img)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        layout = ?raster.layout(),
        "decoded"
    );
    Ok(raster)
}
