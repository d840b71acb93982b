//! # Configuration Module
//!
//! This module provides the configuration structure and validation for downscale
//! comparisons. It is the caller-facing validation layer: a scale factor that
//! fails here never reaches the resampling engine.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `input` | `PathBuf` | Existing image file | Source image (bmp, jpg, png, ...) |
//! | `factor` | `f64` | (0, 100] | Output size as a percentage of the source |
//! | `workers` | `Option<usize>` | >= 1 | Dedicated pool size for the parallel strategy |
//! | `strategies` | `Vec<Strategy>` | non-empty | Strategies to run, in order |
//!
//! ## Examples
//!
//! ```rust
//! use image_downscale::config::{parse_factor, DownscaleConfig};
//!
//! let factor = parse_factor("25").unwrap();
//! let config = DownscaleConfig::new("photo.png".into(), factor.percent());
//! assert!(config.validate().is_ok());
//!
//! assert!(parse_factor("abc").is_err());
//! assert!(parse_factor("150").is_err());
//! ```

use std::path::PathBuf;

use resample_core::{ScaleFactor, Strategy};

use crate::compare::CompareOptions;

/// Message shown for any factor outside `(0, 100]` or any unparsable text.
pub const INVALID_FACTOR_MESSAGE: &str =
    "Invalid downscaling factor. Enter a value greater than 0 and at most 100.";

/// Configuration for one downscale comparison run.
///
/// # Field Descriptions
///
/// - `input`: Path of the source image
/// - `factor`: Percentage of the source size to produce along both axes
/// - `workers`: Thread count for the parallel strategy; `None` uses all cores
/// - `strategies`: Which resamplers to run; each one is timed exactly once
#[derive(Debug, Clone)]
pub struct DownscaleConfig {
    /// Source image path.
    ///
    /// Any format the `image` crate decodes is accepted. Loading happens after
    /// validation, so a missing file is reported by the loader, not here.
    pub input: PathBuf,

    /// Scale factor in percent.
    ///
    /// `50` halves both dimensions; `100` keeps them. Must be a finite value
    /// greater than 0 and at most 100.
    pub factor: f64,

    /// Size of the dedicated thread pool used by the parallel strategy.
    ///
    /// `None` runs on rayon's global pool. `Some(0)` is rejected.
    pub workers: Option<usize>,

    /// Strategies to run, in order. Duplicates are ignored.
    pub strategies: Vec<Strategy>,
}

impl Default for DownscaleConfig {
    /// Default values:
    /// - `input`: empty path
    /// - `factor`: 50 (half size)
    /// - `workers`: None (global pool)
    /// - `strategies`: all three
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            factor: 50.0,
            workers: None,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl DownscaleConfig {
    /// Creates a configuration that runs every strategy on the global pool.
    pub fn new(input: PathBuf, factor: f64) -> Self {
        Self {
            input,
            factor,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Validates the configuration parameters.
    ///
    /// # Validation Rules
    ///
    /// - `factor` must be finite, greater than 0 and at most 100
    /// - `workers`, when set, must be at least 1
    /// - `strategies` must not be empty
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all parameters are valid
    /// - `Err(String)` with a descriptive error message if validation fails
    pub fn validate(&self) -> Result<(), String> {
        if ScaleFactor::new(self.factor).is_err() {
            return Err(INVALID_FACTOR_MESSAGE.to_string());
        }
        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }
        if self.strategies.is_empty() {
            return Err("At least one strategy must be selected".to_string());
        }
        Ok(())
    }

    /// Convert to `CompareOptions` after validating.
    pub fn to_compare_options(&self) -> Result<CompareOptions, String> {
        self.validate()?;
        let factor = ScaleFactor::new(self.factor).map_err(|e| e.to_string())?;

        let mut strategies = Vec::with_capacity(self.strategies.len());
        for &s in &self.strategies {
            if !strategies.contains(&s) {
                strategies.push(s);
            }
        }

        Ok(CompareOptions {
            factor,
            workers: self.workers,
            strategies,
        })
    }
}

/// Parse a user-typed scale factor such as `"50"` or `" 12.5 "`.
pub fn parse_factor(text: &str) -> Result<ScaleFactor, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| INVALID_FACTOR_MESSAGE.to_string())?;
    ScaleFactor::new(value).map_err(|_| INVALID_FACTOR_MESSAGE.to_string())
}
