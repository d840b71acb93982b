//! # Strategy Comparison
//!
//! Runs each selected resampler independently on the same source, every one
//! timed exactly once by the engine's harness, and collects the results into a
//! [`ComparisonReport`] with output sizes, elapsed times, and whether the two
//! Lanczos strategies agree pixel for pixel.

use std::fmt;

use anyhow::{Context, Result, bail};
use resample_core::{
    ParallelResampler, PixelBuffer, ResampleResult, ScaleFactor, Size, Strategy,
    downscale_box_average, downscale_sequential,
};
use tracing::info;

/// Validated inputs for [`run_comparison`].
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub factor: ScaleFactor,
    pub workers: Option<usize>,
    pub strategies: Vec<Strategy>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            factor: ScaleFactor::IDENTITY,
            workers: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

/// Outcome of one comparison run.
#[derive(Debug)]
pub struct ComparisonReport {
    pub source: Size,
    pub factor: ScaleFactor,
    pub results: Vec<ResampleResult>,
}

impl ComparisonReport {
    pub fn result(&self, strategy: Strategy) -> Option<&ResampleResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }

    /// `Some(true)` when sequential and parallel outputs are identical, `None`
    /// unless both ran.
    pub fn lanczos_outputs_match(&self) -> Option<bool> {
        let seq = self.result(Strategy::Sequential)?;
        let par = self.result(Strategy::Parallel)?;
        Some(seq.buffer.same_pixels(&par.buffer))
    }

    /// One `"<Strategy> Time: <ms> ms"` line per result.
    pub fn timing_summary(&self) -> String {
        self.results
            .iter()
            .map(|r| format!("{} Time: {} ms", r.strategy, r.elapsed_ms()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Downscale factor: {}%", self.factor.percent())?;
        writeln!(f, "{:<12} Size: {}", "Original", self.source)?;
        for r in &self.results {
            writeln!(
                f,
                "{:<12} Size: {:<12} {:>6} ms",
                r.strategy.label(),
                r.buffer.size().to_string(),
                r.elapsed_ms()
            )?;
        }
        if let Some(same) = self.lanczos_outputs_match() {
            writeln!(
                f,
                "Sequential and parallel outputs identical: {}",
                if same { "yes" } else { "NO" }
            )?;
        }
        Ok(())
    }
}

/// Run every strategy in `options` against `source`.
///
/// A missing source is rejected before any buffer work starts.
pub fn run_comparison(
    source: Option<&PixelBuffer>,
    options: &CompareOptions,
) -> Result<ComparisonReport> {
    let Some(source) = source else {
        bail!("Please select an image first.");
    };

    let parallel = match options.workers {
        Some(n) => ParallelResampler::with_workers(n)?,
        None => ParallelResampler::new(),
    };

    let mut results = Vec::with_capacity(options.strategies.len());
    for &strategy in &options.strategies {
        let result = match strategy {
            Strategy::Sequential => downscale_sequential(source, options.factor),
            Strategy::Parallel => parallel.downscale(source, options.factor),
            Strategy::BoxAverage => downscale_box_average(source, options.factor),
        }
        .with_context(|| format!("{strategy} downscale failed"))?;

        info!(
            strategy = %strategy,
            size = %result.buffer.size(),
            elapsed_ms = result.elapsed_ms(),
            "downscale finished"
        );
        results.push(result);
    }

    Ok(ComparisonReport {
        source: source.size(),
        factor: options.factor,
        results,
    })
}
