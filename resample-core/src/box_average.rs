// SPDX-License-Identifier: MIT
//! # Box-Average Resampling
//!
//! Unweighted mean over a rectangular source block per output pixel. This is a
//! coarser filter than Lanczos, not a higher-quality one.
//!
//! For output column `x` of `dst_w`, the inclusive source range is
//! `[x * src_w / dst_w, min((x + 1) * src_w / dst_w, src_w - 1)]` with
//! truncating integer division; rows are analogous. Adjacent blocks share
//! their boundary pixel. Channel means truncate.
//!
//! Alpha is never read. Every output pixel is written fully opaque.

use tracing::debug;

use crate::bench::{measure_strategy, ResampleResult, Strategy};
use crate::buffer::{Bgra, PixelBuffer};
use crate::error::Result;
use crate::geometry::{target_size, DimensionPolicy, ScaleFactor, Size};

/// Alpha written to every box-averaged pixel.
pub const BOX_AVERAGE_ALPHA: u8 = 255;

/// Inclusive source index range covered by output index `i` along one axis.
#[inline]
fn block_range(i: u32, src_len: u32, dst_len: u32) -> (u32, u32) {
    let (i, src, dst) = (i as u64, src_len as u64, dst_len as u64);
    let start = i * src / dst;
    let end = ((i + 1) * src / dst).min(src - 1);
    (start as u32, end as u32)
}

/// Average of the source block feeding output pixel `(x, y)`.
pub fn box_pixel(src: &PixelBuffer, x: u32, y: u32, dst: Size) -> Result<Bgra> {
    let (x0, x1) = block_range(x, src.width(), dst.w);
    let (y0, y1) = block_range(y, src.height(), dst.h);

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for i in x0..=x1 {
        for j in y0..=y1 {
            let px = src.get_pixel(i, j)?;
            r += px.r as u64;
            g += px.g as u64;
            b += px.b as u64;
        }
    }
    let count = (x1 - x0 + 1) as u64 * (y1 - y0 + 1) as u64;

    Ok(Bgra::rgba(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
        BOX_AVERAGE_ALPHA,
    ))
}

pub fn resample_box_average(src: &PixelBuffer, factor: ScaleFactor) -> Result<PixelBuffer> {
    let dst = target_size(src.size(), factor, DimensionPolicy::FloorAtOne)?;
    debug!(src = %src.size(), dst = %dst, factor = factor.percent(), "box average");

    let mut out = PixelBuffer::new(dst.w, dst.h)?;
    for x in 0..dst.w {
        for y in 0..dst.h {
            out.set_pixel(x, y, box_pixel(src, x, y, dst)?)?;
        }
    }
    Ok(out)
}

/// Timed box-average downscale.
pub fn downscale_box_average(src: &PixelBuffer, factor: ScaleFactor) -> Result<ResampleResult> {
    measure_strategy(Strategy::BoxAverage, || resample_box_average(src, factor))
}
