//! One-shot request handling: decode, apply one operation, encode.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::codec::{decode_image, encode_png, PNG_MIME_TYPE};
use crate::error::Result;
use crate::grayscale::to_grayscale;
use crate::transform::apply_transform;
use crate::TransformParameters;

/// The single operation applied by [`process_image`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    Transform(TransformParameters),
}

impl Operation {
    /// Download name for this operation's output.
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Operation::Grayscale => "monochrome_image.png",
            Operation::Transform(_) => "transformed_image.png",
        }
    }
}

/// Encoded result of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedImage {
    /// PNG bytes
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Always `image/png`
    pub mime_type: &'static str,
    pub file_name: &'static str,
}

/// Decode `bytes`, apply `operation` and encode the result to PNG.
///
/// # Errors
///
/// Any decode, parameter or encode failure is returned as is; no partial
/// output is produced.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn process_image(bytes: &[u8], operation: &Operation) -> Result<ProcessedImage> {
    match run(bytes, operation) {
        Ok(processed) => {
            info!(
                width = processed.width,
                height = processed.height,
                file_name = processed.file_name,
                "processed image"
            );
            Ok(processed)
        }
        Err(err) => {
            warn!(%err, "processing failed");
            Err(err)
        }
    }
}

fn run(bytes: &[u8], operation: &Operation) -> Result<ProcessedImage> {
    let input = decode_image(bytes)?;
    let output = match operation {
        Operation::Grayscale => to_grayscale(&input),
        Operation::Transform(params) => apply_transform(&input, params)?,
    };

    Ok(ProcessedImage {
        bytes: encode_png(&output)?,
        width: output.width(),
        height: output.height(),
        mime_type: PNG_MIME_TYPE,
        file_name: operation.output_file_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::raster::{PixelLayout, Raster};

    fn png_input(width: u32, height: u32) -> Vec<u8> {
        let pixels = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
        let raster = Raster::new(width, height, PixelLayout::Rgb, pixels).unwrap();
        encode_png(&raster).unwrap()
    }

    #[test]
    fn test_grayscale_request() {
        let result = process_image(&png_input(6, 4), &Operation::Grayscale).unwrap();
        assert_eq!((result.width, result.height), (6, 4));
        assert_eq!(result.mime_type, "image/png");
        assert_eq!(result.file_name, "monochrome_image.png");

        let decoded = decode_image(&result.bytes).unwrap();
        assert_eq!(decoded.layout(), PixelLayout::Luma);
    }

    #[test]
    fn test_transform_request() {
        let params = TransformParameters {
            zoom: 2.0,
            tx: 5,
            ..Default::default()
        };
        let result = process_image(&png_input(10, 10), &Operation::Transform(params)).unwrap();
        assert_eq!((result.width, result.height), (30, 20));
        assert_eq!(result.file_name, "transformed_image.png");
        assert_eq!(decode_image(&result.bytes).unwrap().dimensions(), (30, 20));
    }

    #[test]
    fn test_invalid_bytes_propagate() {
        let result = process_image(b"not an image", &Operation::Grayscale);
        assert!(matches!(result, Err(ProcessingError::InvalidImage(_))));
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let params = TransformParameters {
            zoom: 0.0,
            ..Default::default()
        };
        let result = process_image(&png_input(4, 4), &Operation::Transform(params));
        assert!(matches!(result, Err(ProcessingError::InvalidParameters(_))));
    }

    #[test]
    fn test_operation_serde() {
        let op: Operation = serde_json::from_str(r#"{"op": "grayscale"}"#).unwrap();
        assert_eq!(op, Operation::Grayscale);

        let op: Operation = serde_json::from_str(r#"{"op": "transform", "zoom": 1.5, "tx": 3}"#).unwrap();
        assert_eq!(
            op,
            Operation::Transform(TransformParameters {
                zoom: 1.5,
                tx: 3,
                ..Default::default()
            })
        );
    }
}
