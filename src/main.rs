use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use image_downscale::{DownscaleConfig, init_tracing, load_source, parse_factor, run_comparison};
use resample_core::Strategy;

/// Downscale an image with sequential Lanczos, parallel Lanczos and box
/// averaging, then compare output sizes and wall-clock times.
#[derive(Parser, Debug)]
#[command(name = "downscale")]
#[command(about = "Compare sequential, parallel and box-average image downscaling")]
#[command(long_about = "Downscale an image (bmp, jpg, png, ...) by a percentage with three strategies
and report each result's size and elapsed time. The sequential and parallel Lanczos
outputs are checked for pixel-exact agreement.")]
struct Args {
    /// Source image
    #[arg(help = "Image file to downscale (bmp, jpg, jpeg, png)")]
    input: PathBuf,

    /// Output size as a percentage of the source
    #[arg(short, long, default_value = "50",
          help = "Output size in percent of the source, greater than 0 and at most 100")]
    factor: String,

    /// Worker threads for the parallel strategy
    #[arg(short, long, help = "Threads for the parallel strategy (default: one per core)")]
    workers: Option<usize>,

    /// Strategies to run
    #[arg(short, long = "strategy", value_enum,
          help = "Strategy to run; repeat to select several (default: all)")]
    strategies: Vec<Strategy>,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let factor = parse_factor(&args.factor).map_err(anyhow::Error::msg)?;

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies
    };

    let config = DownscaleConfig::new(args.input, factor.percent())
        .with_workers(args.workers)
        .with_strategies(strategies);
    let options = config.to_compare_options().map_err(anyhow::Error::msg)?;

    let source = load_source(&config.input)?;
    let report = run_comparison(Some(&source), &options)
        .with_context(|| format!("downscaling {}", config.input.display()))?;

    println!("{report}");
    println!("Performance Metrics");
    println!("───────────────────");
    println!("{}", report.timing_summary());
    Ok(())
}
