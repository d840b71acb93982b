// SPDX-License-Identifier: MIT
//! # Column-Parallel Lanczos Resampling
//!
//! The output raster's columns are split into contiguous, disjoint ranges
//! ([`partition_columns`]), one task per range, executed on a rayon pool. Each
//! task reads the shared source buffer and fills a column strip it owns
//! exclusively, calling the same [`lanczos_pixel`] as the sequential path.
//!
//! The caller blocks until every task has finished. Only then are the strips
//! copied into the destination raster, so no partially written output is ever
//! observable and no locking is needed. Failed tasks are collected and
//! reported as one [`ResampleError::WorkerFailure`].
//!
//! The post-join copy runs on the calling thread, one bounds check per column,
//! and is part of the measured parallel time. Strips and output coexist until
//! it finishes, so peak memory is about twice the output size.
//!
//! Completion order across tasks is unspecified; the assembled result is not,
//! and matches [`crate::lanczos::resample_sequential`] bit for bit.

use std::ops::Range;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};

use crate::bench::{measure_strategy, ResampleResult, Strategy};
use crate::buffer::{Bgra, PixelBuffer};
use crate::error::{ResampleError, Result};
use crate::geometry::{target_size, DimensionPolicy, ScaleFactor, Size};
use crate::lanczos::lanczos_pixel;

/// Split `width` columns into at most `parts` contiguous, non-empty ranges that
/// cover `0..width` exactly once. Earlier ranges take the remainder.
pub fn partition_columns(width: u32, parts: usize) -> Vec<Range<u32>> {
    let parts = (parts.max(1) as u64).min(width as u64) as u32;
    if parts == 0 {
        return Vec::new();
    }
    let base = width / parts;
    let extra = width % parts;

    let mut ranges = Vec::with_capacity(parts as usize);
    let mut start = 0;
    for p in 0..parts {
        let len = base + u32::from(p < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Output columns computed by one task.
struct ColumnStrip {
    start: u32,
    columns: Vec<Vec<Bgra>>,
}

fn compute_strip<F>(range: Range<u32>, height: u32, pixel: &F) -> Result<ColumnStrip>
where
    F: Fn(u32, u32) -> Result<Bgra>,
{
    let start = range.start;
    let columns = range
        .map(|x| (0..height).map(|y| pixel(x, y)).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    Ok(ColumnStrip { start, columns })
}

/// Lanczos resampler that fans output columns out over a thread pool.
///
/// Without a dedicated pool the rayon global pool is used.
pub struct ParallelResampler {
    pool: Option<ThreadPool>,
    policy: DimensionPolicy,
}

impl Default for ParallelResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelResampler {
    pub fn new() -> Self {
        Self {
            pool: None,
            policy: DimensionPolicy::FloorAtOne,
        }
    }

    /// Use a dedicated pool of `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(ResampleError::ThreadPool(
                "worker count must be at least 1".to_string(),
            ));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("resample-col-{i}"))
            .build()
            .map_err(|e| ResampleError::ThreadPool(e.to_string()))?;
        Ok(Self {
            pool: Some(pool),
            policy: DimensionPolicy::FloorAtOne,
        })
    }

    pub fn with_policy(mut self, policy: DimensionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of threads tasks run on.
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Resample `src`, returning only after every column task has completed.
    pub fn resample(&self, src: &PixelBuffer, factor: ScaleFactor) -> Result<PixelBuffer> {
        let dst = target_size(src.size(), factor, self.policy)?;
        debug!(
            src = %src.size(),
            dst = %dst,
            factor = factor.percent(),
            workers = self.workers(),
            "lanczos parallel"
        );

        self.run_columns(dst, |x, y| lanczos_pixel(src, x, y, dst))
    }

    /// Fill a `dst`-sized raster by evaluating `pixel` for every output
    /// coordinate, one task per column range, and assemble it after the join.
    fn run_columns<F>(&self, dst: Size, pixel: F) -> Result<PixelBuffer>
    where
        F: Fn(u32, u32) -> Result<Bgra> + Sync,
    {
        let ranges = partition_columns(dst.w, self.workers());
        let total = ranges.len();

        let run = || {
            ranges
                .par_iter()
                .map(|range| compute_strip(range.clone(), dst.h, &pixel))
                .collect::<Vec<_>>()
        };
        let outcomes = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let mut strips = Vec::with_capacity(total);
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(strip) => strips.push(strip),
                Err(e) => errors.push(e),
            }
        }
        if let Some(err) = ResampleError::aggregate(total, errors) {
            warn!(error = %err, "parallel resample failed");
            return Err(err);
        }

        let mut out = PixelBuffer::new(dst.w, dst.h)?;
        for strip in strips {
            for (offset, column) in strip.columns.iter().enumerate() {
                out.write_column(strip.start + offset as u32, column)?;
            }
        }
        Ok(out)
    }

    /// Timed resample; the measurement spans dispatch through the join.
    pub fn downscale(&self, src: &PixelBuffer, factor: ScaleFactor) -> Result<ResampleResult> {
        measure_strategy(Strategy::Parallel, || self.resample(src, factor))
    }
}

/// Timed column-parallel Lanczos downscale on the global pool.
pub fn downscale_parallel(src: &PixelBuffer, factor: ScaleFactor) -> Result<ResampleResult> {
    ParallelResampler::new().downscale(src, factor)
}
