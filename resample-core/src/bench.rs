// SPDX-License-Identifier: MIT
//! # Wall-Clock Instrumentation
//!
//! [`measure`] wraps any synchronous operation with a monotonic clock reading
//! before and after the call. The parallel resampler returns only after its
//! join barrier, so measuring it covers worker completion, not just dispatch.
//!
//! Each public `downscale_*` entry point is measured exactly once.

use std::fmt;
use std::time::{Duration, Instant};

use crate::buffer::PixelBuffer;
use crate::error::Result;

/// Which resampler produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Lanczos-2 on the calling thread
    #[value(name = "sequential")]
    Sequential,
    /// Lanczos-2 with output columns spread over a thread pool
    #[value(name = "parallel")]
    Parallel,
    /// Unweighted block mean
    #[value(name = "box-average")]
    BoxAverage,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Sequential, Strategy::Parallel, Strategy::BoxAverage];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential",
            Strategy::Parallel => "Parallel",
            Strategy::BoxAverage => "Box-Average",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value together with how long it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u64 {
        duration_ms(self.elapsed)
    }
}

/// Run `operation` on the calling thread and time it.
pub fn measure<T, F>(operation: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = operation();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Output of one resampling strategy.
#[derive(Debug)]
pub struct ResampleResult {
    pub buffer: PixelBuffer,
    pub elapsed: Duration,
    pub strategy: Strategy,
}

impl ResampleResult {
    pub fn elapsed_ms(&self) -> u64 {
        duration_ms(self.elapsed)
    }
}

/// Time one complete resample and tag the output with its strategy.
pub(crate) fn measure_strategy<F>(strategy: Strategy, operation: F) -> Result<ResampleResult>
where
    F: FnOnce() -> Result<PixelBuffer>,
{
    let timed = measure(operation);
    Ok(ResampleResult {
        buffer: timed.value?,
        elapsed: timed.elapsed,
        strategy,
    })
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
