// SPDX-License-Identifier: MIT
//! # Resampling Errors
//!
//! Every fallible operation in this crate returns [`ResampleError`]. The variants
//! fall into two classes:
//!
//! - **User errors**: a scale factor outside `(0, 100]` or a factor that would
//!   produce an empty output raster. These are rejected before any buffer work
//!   and are not retried; the caller must ask for a different factor.
//! - **Programming errors**: out-of-range pixel access, a malformed buffer layout,
//!   or a failed worker pool. Correct geometry never produces them, so they are
//!   reported as [`ErrorSeverity::Fatal`].

use thiserror::Error;

/// Severity levels for resampling errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Rejected input; the request can be repeated with different parameters.
    Error,
    /// Broken invariant inside the engine.
    Fatal,
}

#[derive(Debug, Error)]
pub enum ResampleError {
    /// Scale factor not in `(0, 100]`, or not a finite number.
    #[error("invalid scale factor {value}: expected a value in (0, 100]")]
    InvalidFactor { value: f64 },

    /// The computed output raster would have a zero dimension.
    #[error("degenerate output dimensions {width}x{height} for scale factor {factor}")]
    DegenerateDimensions { width: u32, height: u32, factor: f64 },

    /// Pixel coordinate outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) is outside a {width}x{height} buffer")]
    OutOfRange { x: i64, y: i64, width: u32, height: u32 },

    /// Buffer geometry does not describe its storage.
    #[error("invalid buffer layout: {reason}")]
    InvalidLayout { reason: String },

    /// One or more column workers failed during a parallel resample.
    #[error("{failed} of {total} column workers failed: {first}")]
    WorkerFailure {
        failed: usize,
        total: usize,
        first: Box<ResampleError>,
    },

    /// The dedicated worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, ResampleError>;

impl ResampleError {
    pub fn invalid_factor(value: f64) -> Self {
        Self::InvalidFactor { value }
    }

    pub fn out_of_range(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::OutOfRange { x, y, width, height }
    }

    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            reason: reason.into(),
        }
    }

    /// Aggregate worker errors into a single failure. Returns `None` when `errors` is empty.
    pub fn aggregate(total: usize, errors: Vec<ResampleError>) -> Option<Self> {
        let failed = errors.len();
        let first = errors.into_iter().next()?;
        Some(Self::WorkerFailure {
            failed,
            total,
            first: Box::new(first),
        })
    }

    pub fn severity(&self) -> ErrorSeverity {
        if self.is_user_error() {
            ErrorSeverity::Error
        } else {
            ErrorSeverity::Fatal
        }
    }

    /// Errors the caller can resolve by choosing different input.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::InvalidFactor { .. } | Self::DegenerateDimensions { .. } => true,
            Self::WorkerFailure { first, .. } => first.is_user_error(),
            _ => false,
        }
    }

    /// Errors that indicate broken geometry or buffer handling.
    pub fn is_programming_error(&self) -> bool {
        !self.is_user_error()
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidFactor { .. } => "invalid_factor",
            Self::DegenerateDimensions { .. } => "degenerate_dimensions",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidLayout { .. } => "invalid_layout",
            Self::WorkerFailure { .. } => "worker_failure",
            Self::ThreadPool(_) => "thread_pool",
        }
    }
}
