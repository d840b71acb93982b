// SPDX-License-Identifier: MIT
//! # resample-core: BGRA Downscaling Engine
//!
//! Converts a source raster into a smaller one with three independent
//! strategies, each instrumented with wall-clock timing:
//!
//! - [`downscale_sequential`]: Lanczos-2, one pixel at a time.
//! - [`downscale_parallel`]: the same Lanczos computation with output columns
//!   partitioned across a rayon pool. Output is bit-identical to the sequential
//!   path.
//! - [`downscale_box_average`]: unweighted block mean. Cheaper and coarser than
//!   Lanczos.
//!
//! ## Key Components
//!
//! - [`buffer`]: owned BGRA raster with stride and bounds-checked access
//! - [`geometry`]: scale factor validation and the one output-size function
//! - [`kernel`]: Lanczos-2 windowed sinc
//! - [`lanczos`], [`parallel`], [`box_average`]: the resamplers
//! - [`bench`]: timing harness and result types
//!
//! ## Usage Example
//!
//! ```rust
//! use resample_core::{downscale_parallel, downscale_sequential, Bgra, PixelBuffer, ScaleFactor};
//!
//! let src = PixelBuffer::filled(64, 48, Bgra::rgba(200, 100, 50, 255))?;
//! let factor = ScaleFactor::new(50.0)?;
//!
//! let seq = downscale_sequential(&src, factor)?;
//! let par = downscale_parallel(&src, factor)?;
//! assert!(seq.buffer.same_pixels(&par.buffer));
//! println!("{} ms vs {} ms", seq.elapsed_ms(), par.elapsed_ms());
//! # Ok::<(), resample_core::ResampleError>(())
//! ```

pub mod bench;
pub mod box_average;
pub mod buffer;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod lanczos;
pub mod parallel;

pub use bench::{measure, ResampleResult, Strategy, Timed};
pub use box_average::downscale_box_average;
pub use buffer::{Bgra, PixelBuffer};
pub use error::{ErrorSeverity, ResampleError, Result};
pub use geometry::{target_size, DimensionPolicy, ScaleFactor, Size};
pub use lanczos::downscale_sequential;
pub use parallel::{downscale_parallel, ParallelResampler};
