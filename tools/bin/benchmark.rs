//! Benchmark of the three downscaling strategies on synthetic gradients.
//!
//! Usage: `benchmark [FACTOR] [WORKERS]` (defaults: 50, one per core).
//!
//! Time complexity: O(width * height) per strategy, with the Lanczos paths
//! touching up to 36 source pixels per output pixel.

use anyhow::Result;
use image_downscale::compare::{CompareOptions, run_comparison};
use image_downscale::pattern::gradient;
use image_downscale::{init_tracing, parse_factor};
use resample_core::Strategy;

const SIZES: &[(u32, u32)] = &[(640, 480), (1280, 720), (1920, 1080)];

fn main() -> Result<()> {
    init_tracing(0);

    let mut args = std::env::args().skip(1);
    let factor = parse_factor(args.next().as_deref().unwrap_or("50")).map_err(anyhow::Error::msg)?;
    let workers = args.next().map(|w| w.parse::<usize>()).transpose()?;

    println!("Downscale Strategy Benchmark");
    println!("════════════════════════════");
    println!(
        "Factor: {}%  Workers: {}",
        factor.percent(),
        workers.map_or_else(|| "auto".to_string(), |w| w.to_string())
    );
    println!();
    println!(
        "{:<12} {:>14} {:>12} {:>12} {:>12} {:>9}",
        "Source", "Output", "Sequential", "Parallel", "Box-Average", "Speedup"
    );
    println!("{}", "─".repeat(76));

    let options = CompareOptions {
        factor,
        workers,
        strategies: Strategy::ALL.to_vec(),
    };

    for &(w, h) in SIZES {
        let source = gradient(w, h)?;
        let report = run_comparison(Some(&source), &options)?;

        let ms = |s: Strategy| report.result(s).map_or(0, |r| r.elapsed_ms());
        let seq = report.result(Strategy::Sequential).map(|r| r.elapsed.as_secs_f64());
        let par = report.result(Strategy::Parallel).map(|r| r.elapsed.as_secs_f64());
        let speedup = match (seq, par) {
            (Some(s), Some(p)) if p > 0.0 => format!("{:.1}x", s / p),
            _ => "-".to_string(),
        };
        let output = report
            .result(Strategy::Sequential)
            .map(|r| r.buffer.size().to_string())
            .unwrap_or_default();

        println!(
            "{:<12} {:>14} {:>9} ms {:>9} ms {:>9} ms {:>9}",
            format!("{w}x{h}"),
            output,
            ms(Strategy::Sequential),
            ms(Strategy::Parallel),
            ms(Strategy::BoxAverage),
            speedup
        );

        if report.lanczos_outputs_match() == Some(false) {
            anyhow::bail!("sequential and parallel outputs differ for {w}x{h}");
        }
    }

    println!();
    println!("Sequential and parallel outputs identical for every size.");
    Ok(())
}
