// SPDX-License-Identifier: MIT
//! # Lanczos-2 Resampling
//!
//! Each output pixel `(x, y)` maps to a continuous source position `(u, v)`
//! (see [`source_coordinate`]). Every source pixel in the integer window
//! `[floor(u-2), ceil(u+2)] x [floor(v-2), ceil(v+2)]` contributes with weight
//! `lanczos2(u - i) * lanczos2(v - j)`. Window positions outside the raster
//! replicate the nearest edge pixel.
//!
//! All four channels, alpha included, are resampled with the same weights and
//! rounded to the nearest integer before clamping to `[0, 255]`.
//!
//! [`lanczos_pixel`] is the single per-pixel routine shared by the sequential
//! and parallel resamplers, which is what makes their outputs bit-identical.

use tracing::debug;

use crate::bench::{measure_strategy, ResampleResult, Strategy};
use crate::buffer::{Bgra, PixelBuffer};
use crate::error::Result;
use crate::geometry::{source_coordinate, target_size, DimensionPolicy, ScaleFactor, Size};
use crate::kernel::{lanczos2, LANCZOS_RADIUS};

/// Widest possible window along one axis: `ceil(u+2) - floor(u-2) + 1`.
const MAX_TAPS: usize = 6;

/// Compute output pixel `(x, y)` of a `dst`-sized raster from `src`.
pub fn lanczos_pixel(src: &PixelBuffer, x: u32, y: u32, dst: Size) -> Result<Bgra> {
    let u = source_coordinate(x, src.width(), dst.w);
    let v = source_coordinate(y, src.height(), dst.h);

    let (x0, wx, nx) = axis_weights(u);
    let (y0, wy, ny) = axis_weights(v);

    let mut total_weight = 0.0;
    let mut acc = [0.0f64; 4];

    for (di, &kx) in wx[..nx].iter().enumerate() {
        for (dj, &ky) in wy[..ny].iter().enumerate() {
            let weight = kx * ky;
            let px = src.get_pixel_clamped(x0 + di as i64, y0 + dj as i64)?;
            acc[0] += px.r as f64 * weight;
            acc[1] += px.g as f64 * weight;
            acc[2] += px.b as f64 * weight;
            acc[3] += px.a as f64 * weight;
            total_weight += weight;
        }
    }
    debug_assert!(total_weight > 0.0, "lanczos weights sum to {total_weight}");

    let channel = |sum: f64| (sum / total_weight).round().clamp(0.0, 255.0) as u8;
    Ok(Bgra::rgba(
        channel(acc[0]),
        channel(acc[1]),
        channel(acc[2]),
        channel(acc[3]),
    ))
}

/// First window index, per-tap kernel weights and tap count for continuous
/// coordinate `c`. Only `weights[..count]` is meaningful.
#[inline]
fn axis_weights(c: f64) -> (i64, [f64; MAX_TAPS], usize) {
    let start = (c - LANCZOS_RADIUS).floor() as i64;
    let end = (c + LANCZOS_RADIUS).ceil() as i64;
    let count = ((end - start + 1).max(0) as usize).min(MAX_TAPS);
    let mut weights = [0.0f64; MAX_TAPS];
    for (tap, weight) in weights[..count].iter_mut().enumerate() {
        *weight = lanczos2(c - (start + tap as i64) as f64);
    }
    (start, weights, count)
}

/// Lanczos-resample `src` into a freshly allocated raster, one pixel at a time.
pub fn resample_sequential(src: &PixelBuffer, factor: ScaleFactor) -> Result<PixelBuffer> {
    let dst = target_size(src.size(), factor, DimensionPolicy::FloorAtOne)?;
    debug!(src = %src.size(), dst = %dst, factor = factor.percent(), "lanczos sequential");

    let mut out = PixelBuffer::new(dst.w, dst.h)?;
    for x in 0..dst.w {
        for y in 0..dst.h {
            let px = lanczos_pixel(src, x, y, dst)?;
            out.set_pixel(x, y, px)?;
        }
    }
    Ok(out)
}

/// Timed single-threaded Lanczos downscale.
pub fn downscale_sequential(src: &PixelBuffer, factor: ScaleFactor) -> Result<ResampleResult> {
    measure_strategy(Strategy::Sequential, || resample_sequential(src, factor))
}
