//! Core raster types.
//!
//! A [`Raster`] is an immutable, row-major grid of interleaved 8-bit samples.
//! Construction validates the dimensions and buffer length, so every raster
//! that reaches an operation is non-empty and well formed.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::luminance::luma_u8;

/// Largest width or height any operation is allowed to produce.
pub const MAX_DIMENSION: u32 = 65_535;

/// Largest pixel area any raster may hold (64 megapixels, 256 MiB as RGBA).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Channel layout of a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelLayout {
    /// Single luminance channel.
    Luma,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
}

impl PixelLayout {
    /// Number of samples per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Luma => 1,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelLayout::Rgba)
    }

    /// Look up the layout for a channel count.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::InvalidImage` for counts other than 1, 3 or 4.
    pub fn from_channels(channels: u8) -> Result<Self> {
        match channels {
            1 => Ok(PixelLayout::Luma),
            3 => Ok(PixelLayout::Rgb),
            4 => Ok(PixelLayout::Rgba),
            other => Err(ProcessingError::InvalidImage(format!(
                "unsupported channel count {}",
                other
            ))),
        }
    }
}

/// An RGBA color used to fill canvas regions no source pixel maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FillColor {
    /// Opaque white.
    pub const WHITE: FillColor = FillColor::rgba(255, 255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: FillColor = FillColor::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Fill for regions exposed by rotation and shear.
    ///
    /// Transparent when the layout has alpha, opaque white otherwise.
    pub fn default_for(layout: PixelLayout) -> Self {
        if layout.has_alpha() {
            FillColor::TRANSPARENT
        } else {
            FillColor::WHITE
        }
    }

    /// Samples for this color in the given layout.
    ///
    /// Only the first `layout.channels()` entries are meaningful.
    pub fn samples(self, layout: PixelLayout) -> [u8; 4] {
        match layout {
            PixelLayout::Luma => [luma_u8(self.r, self.g, self.b), 0, 0, 0],
            PixelLayout::Rgb => [self.r, self.g, self.b, 0],
            PixelLayout::Rgba => [self.r, self.g, self.b, self.a],
        }
    }
}

impl Default for FillColor {
    fn default() -> Self {
        FillColor::WHITE
    }
}

/// An immutable image raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster from interleaved, row-major samples.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::InvalidImage` if either dimension is zero,
    /// the size exceeds [`MAX_DIMENSION`] or [`MAX_PIXELS`], or the buffer
    /// length is not `width * height * channels`.
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ProcessingError::InvalidImage(format!(
                "zero-sized raster {}x{}",
                width, height
            )));
        }

        if width > MAX_DIMENSION
            || height > MAX_DIMENSION
            || pixel_area(width, height) > MAX_PIXELS
        {
            return Err(ProcessingError::InvalidImage(format!(
                "raster {}x{} exceeds the size limit",
                width, height
            )));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(layout.channels()))
            .ok_or_else(|| {
                ProcessingError::InvalidImage(format!("raster {}x{} is too large", width, height))
            })?;
        if pixels.len() != expected {
            return Err(ProcessingError::InvalidImage(format!(
                "expected {} bytes for {}x{} {:?}, got {}",
                expected,
                width,
                height,
                layout,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Create a raster from a raw channel count (1, 3 or 4).
    pub fn from_channels(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelLayout::from_channels(channels)?, pixels)
    }

    /// Create a raster of the given size where every pixel is `fill`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::InvalidParameters` if either dimension is
    /// zero, larger than [`MAX_DIMENSION`], or the area exceeds [`MAX_PIXELS`].
    pub fn filled(width: u32, height: u32, layout: PixelLayout, fill: FillColor) -> Result<Self> {
        check_canvas(width, height)?;
        let channels = layout.channels();
        let samples = fill.samples(layout);
        let pixels = samples[..channels]
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * channels)
            .collect();
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Build a raster from a buffer the caller has already sized correctly.
    pub(crate) fn from_parts(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Interleaved samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster and return its sample buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Samples of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let channels = self.channels();
        let idx = (y as usize * self.width as usize + x as usize) * channels;
        &self.pixels[idx..idx + channels]
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Wrap a decoded `image` crate buffer, keeping 8-bit gray, RGB and RGBA
    /// as they are and converting everything else.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::InvalidImage` if the image is zero-sized.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(buf) => {
                let (w, h) = buf.dimensions();
                Self::new(w, h, PixelLayout::Luma, buf.into_raw())
            }
            DynamicImage::ImageRgb8(buf) => {
                let (w, h) = buf.dimensions();
                Self::new(w, h, PixelLayout::Rgb, buf.into_raw())
            }
            DynamicImage::ImageRgba8(buf) => {
                let (w, h) = buf.dimensions();
                Self::new(w, h, PixelLayout::Rgba, buf.into_raw())
            }
            other if other.color().has_alpha() => Self::from_dynamic(other.to_rgba8().into()),
            other if other.color().has_color() => Self::from_dynamic(other.to_rgb8().into()),
            other => Self::from_dynamic(other.to_luma8().into()),
        }
    }

    /// Copy the raster into an `image` crate buffer of the matching type.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h) = self.dimensions();
        let pixels = self.pixels.clone();
        match self.layout {
            PixelLayout::Luma => GrayImage::from_raw(w, h, pixels).map(DynamicImage::ImageLuma8),
            PixelLayout::Rgb => RgbImage::from_raw(w, h, pixels).map(DynamicImage::ImageRgb8),
            PixelLayout::Rgba => RgbaImage::from_raw(w, h, pixels).map(DynamicImage::ImageRgba8),
        }
    }
}

fn pixel_area(width: u32, height: u32) -> u64 {
    width as u64 * height as u64
}

/// Reject canvas sizes that are empty, beyond [`MAX_DIMENSION`] on a side,
/// or beyond [`MAX_PIXELS`] in area.
pub(crate) fn check_canvas(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ProcessingError::InvalidParameters(format!(
            "canvas would collapse to {}x{}",
            width, height
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ProcessingError::InvalidParameters(format!(
            "canvas {}x{} exceeds the {} px limit",
            width, height, MAX_DIMENSION
        )));
    }
    if pixel_area(width, height) > MAX_PIXELS {
        return Err(ProcessingError::InvalidParameters(format!(
            "canvas {}x{} exceeds the {} pixel area limit",
            width, height, MAX_PIXELS
        )));
    }
    Ok(())
}

/// Convert a computed floating-point dimension into a canvas size.
///
/// Non-finite, non-positive and oversized values are rejected with
/// `ProcessingError::InvalidParameters`.
pub(crate) fn canvas_dimension(value: f64, what: &str) -> Result<u32> {
    if !value.is_finite() {
        return Err(ProcessingError::InvalidParameters(format!(
            "{} is not finite",
            what
        )));
    }
    if value < 1.0 {
        return Err(ProcessingError::InvalidParameters(format!(
            "{} collapses to zero ({})",
            what, value
        )));
    }
    if value > MAX_DIMENSION as f64 {
        return Err(ProcessingError::InvalidParameters(format!(
            "{} of {} exceeds the {} px limit",
            what, value, MAX_DIMENSION
        )));
    }
    Ok(value as u32)
}
