//! PNG encoding for processed output.
//!
//! This module provides lossless PNG encoding using the `image` crate's PNG
//! encoder. The color type follows the raster layout, so grayscale output
//! stays single-channel and alpha survives.

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::raster::{PixelLayout, Raster};

/// MIME type of every encoded output.
pub const PNG_MIME_TYPE: &str = "image/png";

fn color_type(layout: PixelLayout) -> ExtendedColorType {
    match layout {
        PixelLayout::Luma => ExtendedColorType::L8,
        PixelLayout::Rgb => ExtendedColorType::Rgb8,
        PixelLayout::Rgba => ExtendedColorType::Rgba8,
    }
}

/// Encode a raster to PNG bytes.
///
/// # Arguments
///
/// * `image` - Raster in any layout
///
/// # Returns
///
/// PNG-encoded bytes (L8, RGB8 or RGBA8 to match the layout).
///
/// # Errors
///
/// Returns `ProcessingError::Io` if the encoder fails.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn encode_png(image: &Raster) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            color_type(image.layout()),
        )
        .map_err(|e| ProcessingError::Io(format!("PNG encoding failed: {}", e)))?;

    debug!(bytes = buffer.len(), "encoded");
    Ok(buffer)
}

/// Encode a raster to PNG and write it to `path`.
///
/// # Errors
///
/// Returns `ProcessingError::Io` if encoding or writing fails (missing
/// directory, permissions). Nothing is retried.
#[tracing::instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn save_png(image: &Raster, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)
        .map_err(|e| ProcessingError::Io(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_image;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn gradient(width: u32, height: u32, layout: PixelLayout) -> Raster {
        let len = (width * height) as usize * layout.channels();
        let pixels = (0..len).map(|i| (i * 13 % 256) as u8).collect();
        Raster::new(width, height, layout, pixels).unwrap()
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&gradient(5, 5, PixelLayout::Rgb)).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_png_round_trip_preserves_layout_and_pixels() {
        for layout in [PixelLayout::Luma, PixelLayout::Rgb, PixelLayout::Rgba] {
            let original = gradient(7, 3, layout);
            let decoded = decode_image(&encode_png(&original).unwrap()).unwrap();
            assert_eq!(decoded, original, "round trip failed for {:?}", layout);
        }
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(PNG_MIME_TYPE, "image/png");
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transformed_image.png");
        let raster = gradient(4, 4, PixelLayout::Luma);

        save_png(&raster, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(decode_image(&written).unwrap(), raster);
    }

    #[test]
    fn test_save_png_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let result = save_png(&gradient(2, 2, PixelLayout::Rgb), &path);
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
