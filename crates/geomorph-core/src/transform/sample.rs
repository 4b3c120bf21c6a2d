//! Pull sampling with bilinear and Lanczos3 interpolation.
//!
//! Inverse-mapping stages (rotation, shear) compute a fractional source
//! coordinate for each output pixel and ask a [`Sampler`] for its value.
//!
//! Coordinates address pixel indices: `(0.0, 0.0)` is the center of the
//! top-left pixel. A coordinate is inside the source when it falls within
//! the pixel footprint `[-0.5, w - 0.5] x [-0.5, h - 0.5]`; neighbours are
//! clamped to the edge there. Anything outside yields the fill color.

use serde::{Deserialize, Serialize};

use crate::raster::{FillColor, Raster};

/// Interpolation filter for inverse-mapped sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationFilter {
    /// Bilinear interpolation over the 2x2 neighbourhood.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation over a 6x6 neighbourhood.
    Lanczos3,
}

/// Samples a raster at fractional coordinates.
pub(crate) struct Sampler<'a> {
    image: &'a Raster,
    filter: InterpolationFilter,
    fill: [u8; 4],
    channels: usize,
}

impl<'a> Sampler<'a> {
    pub(crate) fn new(image: &'a Raster, filter: InterpolationFilter, fill: FillColor) -> Self {
        Self {
            image,
            filter,
            fill: fill.samples(image.layout()),
            channels: image.channels(),
        }
    }

    /// Write the sample at `(x, y)` into `out` (`channels` bytes).
    #[inline]
    pub(crate) fn sample_into(&self, x: f64, y: f64, out: &mut [u8]) {
        let (w, h) = (self.image.width() as f64, self.image.height() as f64);
        // Negated comparisons so NaN coordinates also land on the fill.
        if !(x >= -0.5 && x <= w - 0.5 && y >= -0.5 && y <= h - 0.5) {
            out.copy_from_slice(&self.fill[..self.channels]);
            return;
        }

        let value = match self.filter {
            InterpolationFilter::Bilinear => self.bilinear(x, y),
            InterpolationFilter::Lanczos3 => self.lanczos3(x, y),
        };
        for (dst, v) in out.iter_mut().zip(value.iter()) {
            *dst = v.clamp(0.0, 255.0).round() as u8;
        }
    }

    #[inline]
    fn texel(&self, px: usize, py: usize) -> [f64; 4] {
        let idx = (py * self.image.width() as usize + px) * self.channels;
        let pixels = self.image.pixels();
        let mut result = [0.0; 4];
        for (c, slot) in result.iter_mut().enumerate().take(self.channels) {
            *slot = pixels[idx + c] as f64;
        }
        result
    }

    /// Bilinear interpolation of the 4 nearest pixels, clamped to the edge.
    fn bilinear(&self, x: f64, y: f64) -> [f64; 4] {
        let max_x = (self.image.width() - 1) as f64;
        let max_y = (self.image.height() - 1) as f64;
        let x = x.clamp(0.0, max_x);
        let y = y.clamp(0.0, max_y);

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(max_x as usize);
        let y1 = (y0 + 1).min(max_y as usize);

        let fx = x - x0 as f64;
        let fy = y - y0 as f64;

        let p00 = self.texel(x0, y0);
        let p10 = self.texel(x1, y0);
        let p01 = self.texel(x0, y1);
        let p11 = self.texel(x1, y1);

        let mut result = [0.0; 4];
        for i in 0..self.channels {
            result[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
                + p10[i] * fx * (1.0 - fy)
                + p01[i] * (1.0 - fx) * fy
                + p11[i] * fx * fy;
        }
        result
    }

    /// Lanczos3 interpolation; falls back to bilinear near the borders
    /// where the 6x6 window would leave the image.
    fn lanczos3(&self, x: f64, y: f64) -> [f64; 4] {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        if x < 2.0 || x >= (w - 3) as f64 || y < 2.0 || y >= (h - 3) as f64 {
            return self.bilinear(x, y);
        }

        let x0 = x.floor() as i64;
        let y0 = y.floor() as i64;

        let mut sum = [0.0f64; 4];
        let mut weight_sum = 0.0;

        for ky in -2..=3 {
            for kx in -2..=3 {
                let px = x0 + kx;
                let py = y0 + ky;
                let weight = lanczos_weight(x - px as f64, 3.0) * lanczos_weight(y - py as f64, 3.0);

                let texel = self.texel(px as usize, py as usize);
                for i in 0..self.channels {
                    sum[i] += texel[i] * weight;
                }
                weight_sum += weight;
            }
        }

        if weight_sum.abs() > f64::EPSILON {
            for v in sum.iter_mut() {
                *v /= weight_sum;
            }
        }
        sum
    }
}

/// Lanczos kernel: `sinc(x) * sinc(x / a)` for `|x| < a`, zero elsewhere.
pub(crate) fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;
    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}
