//! # Image Downscale Comparison
//!
//! Loads a source image, downscales it with the three strategies of
//! [`resample_core`] and reports output sizes and wall-clock times.
//!
//! ## Architecture
//!
//! - `config`: Caller-facing validation of the scale factor and options
//! - `loader`: Image decoding into a BGRA pixel buffer
//! - `compare`: Runs the strategies and builds the report
//! - `pattern`: Synthetic source images for benchmarks and tests
//!
//! ## Example
//!
//! ```rust
//! use image_downscale::compare::{run_comparison, CompareOptions};
//! use image_downscale::pattern::gradient;
//! use resample_core::ScaleFactor;
//!
//! let source = gradient(64, 48)?;
//! let options = CompareOptions {
//!     factor: ScaleFactor::new(25.0)?,
//!     ..CompareOptions::default()
//! };
//! let report = run_comparison(Some(&source), &options)?;
//! assert_eq!(report.lanczos_outputs_match(), Some(true));
//! println!("{report}");
//! # Ok::<(), anyhow::Error>(())
//! ```

use tracing_subscriber::EnvFilter;

pub mod compare;
pub mod config;
pub mod loader;
pub mod pattern;

pub use compare::{CompareOptions, ComparisonReport, run_comparison};
pub use config::{DownscaleConfig, parse_factor};
pub use loader::load_source;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2+ = debug).
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
