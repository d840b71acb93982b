// SPDX-License-Identifier: MIT
//! # Scaling Geometry
//!
//! One place computes output dimensions for every resampler. A [`ScaleFactor`]
//! is a percentage in `(0, 100]` applied to both axes:
//!
//! ```text
//! raw = floor(source_dim * factor / 100)
//! ```
//!
//! [`DimensionPolicy::FloorAtOne`] (the default, used by all strategies) clamps
//! `raw` to at least 1 so a tiny source or factor still yields a 1px result.
//! [`DimensionPolicy::Strict`] reports [`ResampleError::DegenerateDimensions`]
//! instead.

use crate::error::{ResampleError, Result};

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.w, self.h)
    }
}

/// Output size as a percentage of source size, validated to lie in `(0, 100]`.
///
/// The core never re-validates a factor: holding a `ScaleFactor` is the proof
/// that the caller-facing layer already rejected bad input.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor(100.0);

    pub fn new(percent: f64) -> Result<Self> {
        if percent.is_finite() && percent > 0.0 && percent <= 100.0 {
            Ok(Self(percent))
        } else {
            Err(ResampleError::invalid_factor(percent))
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = ResampleError;

    fn try_from(percent: f64) -> Result<Self> {
        Self::new(percent)
    }
}

/// How a zero output dimension is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Clamp each dimension to at least 1.
    #[default]
    FloorAtOne,
    /// Fail with `DegenerateDimensions` when either dimension truncates to 0.
    Strict,
}

/// Truncating dimension arithmetic with no lower clamp.
///
/// Kept separate so callers and tests can see where the unclamped formula
/// would yield a zero-sized raster.
pub fn raw_target_size(src: Size, factor: ScaleFactor) -> Size {
    Size {
        w: scale_dim(src.w, factor),
        h: scale_dim(src.h, factor),
    }
}

/// Output dimensions for `src` scaled by `factor` under `policy`.
pub fn target_size(src: Size, factor: ScaleFactor, policy: DimensionPolicy) -> Result<Size> {
    let raw = raw_target_size(src, factor);
    match policy {
        DimensionPolicy::FloorAtOne => Ok(Size {
            w: raw.w.max(1),
            h: raw.h.max(1),
        }),
        DimensionPolicy::Strict if raw.w == 0 || raw.h == 0 => {
            Err(ResampleError::DegenerateDimensions {
                width: raw.w,
                height: raw.h,
                factor: factor.percent(),
            })
        }
        DimensionPolicy::Strict => Ok(raw),
    }
}

/// Continuous source coordinate for output index `dst_index` along one axis.
///
/// Endpoints map to endpoints: `0 -> 0` and `dst_len - 1 -> src_len - 1`. A
/// single-pixel axis samples source coordinate 0.
#[inline]
pub fn source_coordinate(dst_index: u32, src_len: u32, dst_len: u32) -> f64 {
    if dst_len <= 1 {
        return 0.0;
    }
    dst_index as f64 * (src_len as f64 - 1.0) / (dst_len as f64 - 1.0)
}

#[inline]
fn scale_dim(dim: u32, factor: ScaleFactor) -> u32 {
    (dim as f64 * factor.percent() / 100.0).floor() as u32
}
