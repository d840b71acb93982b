// SPDX-License-Identifier: MIT
//! Lanczos-2 windowed sinc.

use std::f64::consts::PI;

/// Support radius of the kernel.
pub const LANCZOS_RADIUS: f64 = 2.0;

/// Normalized sinc: `sin(pi z) / (pi z)`, with `sinc(0) = 1`.
#[inline]
pub fn sinc(z: f64) -> f64 {
    if z.abs() < f64::EPSILON {
        return 1.0;
    }
    let pz = PI * z;
    pz.sin() / pz
}

/// Lanczos kernel with `a = 2`: `sinc(t) * sinc(t / 2)` inside `|t| < 2`, zero outside.
#[inline]
pub fn lanczos2(t: f64) -> f64 {
    let at = t.abs();
    if at < f64::EPSILON {
        1.0
    } else if at < LANCZOS_RADIUS {
        sinc(t) * sinc(t / LANCZOS_RADIUS)
    } else {
        0.0
    }
}
