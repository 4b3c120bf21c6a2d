//! Grayscale reduction.
//!
//! Maps RGB and RGBA rasters to a single luminance channel using the
//! BT.601 weights from [`crate::luminance`]. Alpha is dropped without
//! compositing.

use crate::luminance::luma_u8;
use crate::raster::{PixelLayout, Raster};

/// Convert a raster to single-channel luminance.
///
/// A raster that is already `Luma` is returned unchanged, which makes the
/// operation idempotent.
pub fn to_grayscale(image: &Raster) -> Raster {
    let channels = image.channels();
    if image.layout() == PixelLayout::Luma {
        return image.clone();
    }

    let luma: Vec<u8> = image
        .pixels()
        .chunks_exact(channels)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect();

    Raster::from_parts(image.width(), image.height(), PixelLayout::Luma, luma)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raster_strategy() -> impl Strategy<Value = Raster> {
        (1u32..=16, 1u32..=16, prop_oneof![Just(3u8), Just(4u8)]).prop_flat_map(|(w, h, c)| {
            let len = (w * h * c as u32) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| Raster::from_channels(w, h, c, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: Grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(img in raster_strategy()) {
            let once = to_grayscale(&img);
            prop_assert_eq!(to_grayscale(&once), once);
        }

        /// Property: Gray pixels keep their value.
        #[test]
        fn prop_neutral_pixels_preserved(v in any::<u8>()) {
            let img = Raster::new(1, 1, PixelLayout::Rgb, vec![v, v, v]).unwrap();
            let gray = to_grayscale(&img);
            prop_assert_eq!(gray.pixels(), &[v]);
        }
    }
}
