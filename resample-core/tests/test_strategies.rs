//! Cross-strategy tests for the downscaling engine.

use resample_core::geometry::raw_target_size;
use resample_core::{
    downscale_box_average, downscale_parallel, downscale_sequential, measure, Bgra,
    ParallelResampler, PixelBuffer, ScaleFactor, Size, Strategy,
};

fn pct(p: f64) -> ScaleFactor {
    ScaleFactor::new(p).unwrap()
}

/// Deterministic noise-like pattern, written into a padded buffer.
fn noisy(width: u32, height: u32, stride_pad: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::with_stride(width, height, width as usize * 4 + stride_pad).unwrap();
    let mut state: u32 = 0x9E37_79B9;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, a] = state.to_le_bytes();
            buf.set_pixel(x, y, Bgra::rgba(r, g, b, a | 0x80)).unwrap();
        }
    }
    buf
}

fn assert_uniform(buf: &PixelBuffer, expected: Bgra) {
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            assert_eq!(buf.get_pixel(x, y).unwrap(), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_sequential_and_parallel_are_identical() {
    for &(w, h, factor) in &[
        (64, 48, 50.0),
        (97, 31, 33.3),
        (10, 10, 100.0),
        (200, 3, 7.5),
        (3, 200, 12.0),
    ] {
        let src = noisy(w, h, 12);
        let seq = downscale_sequential(&src, pct(factor)).unwrap();
        let par = downscale_parallel(&src, pct(factor)).unwrap();
        assert_eq!(seq.buffer.size(), par.buffer.size());
        assert!(
            seq.buffer.same_pixels(&par.buffer),
            "{w}x{h} at {factor}% differs between strategies"
        );
    }
}

#[test]
fn test_parallel_identity_is_independent_of_worker_count() {
    let src = noisy(81, 57, 0);
    let reference = downscale_sequential(&src, pct(45.0)).unwrap().buffer;
    for workers in [1, 2, 5, 16] {
        let par = ParallelResampler::with_workers(workers)
            .unwrap()
            .downscale(&src, pct(45.0))
            .unwrap();
        assert!(par.buffer.same_pixels(&reference), "{workers} workers");
    }
}

#[test]
fn test_full_factor_preserves_dimensions_for_lanczos() {
    let src = noisy(23, 19, 4);
    let seq = downscale_sequential(&src, ScaleFactor::IDENTITY).unwrap();
    let par = downscale_parallel(&src, ScaleFactor::IDENTITY).unwrap();
    assert_eq!(seq.buffer.size(), Size { w: 23, h: 19 });
    assert_eq!(par.buffer.size(), Size { w: 23, h: 19 });
    assert!(seq.buffer.same_pixels(&src));
}

#[test]
fn test_uniform_100x100_at_half_scale() {
    let color = Bgra::rgba(200, 100, 50, 255);
    let src = PixelBuffer::filled(100, 100, color).unwrap();

    let boxed = downscale_box_average(&src, pct(50.0)).unwrap();
    assert_eq!(boxed.buffer.size(), Size { w: 50, h: 50 });
    assert_uniform(&boxed.buffer, Bgra::rgba(200, 100, 50, 255));

    // Lanczos resamples alpha too, so the opaque source stays opaque.
    let seq = downscale_sequential(&src, pct(50.0)).unwrap();
    assert_eq!(seq.buffer.size(), Size { w: 50, h: 50 });
    assert_uniform(&seq.buffer, Bgra::rgba(200, 100, 50, 255));
}

#[test]
fn test_uniform_color_survives_every_factor() {
    let color = Bgra::rgba(17, 230, 99, 255);
    let src = PixelBuffer::filled(41, 29, color).unwrap();
    for factor in [1.0, 9.9, 25.0, 50.0, 73.0, 100.0] {
        assert_uniform(&downscale_box_average(&src, pct(factor)).unwrap().buffer, color);
        assert_uniform(&downscale_sequential(&src, pct(factor)).unwrap().buffer, color);
    }
}

#[test]
fn test_single_white_corner_pixel() {
    let mut src = PixelBuffer::filled(4, 4, Bgra::rgba(0, 0, 0, 255)).unwrap();
    src.set_pixel(0, 0, Bgra::rgba(255, 255, 255, 255)).unwrap();

    let boxed = downscale_box_average(&src, pct(25.0)).unwrap().buffer;
    assert_eq!(boxed.size(), Size { w: 1, h: 1 });
    assert_eq!(boxed.get_pixel(0, 0).unwrap(), Bgra::rgba(15, 15, 15, 255));

    let seq = downscale_sequential(&src, pct(25.0)).unwrap().buffer;
    let par = downscale_parallel(&src, pct(25.0)).unwrap().buffer;
    assert_eq!(seq.size(), Size { w: 1, h: 1 });
    // The single output sample sits on the corner, which carries all the weight.
    assert_eq!(seq.get_pixel(0, 0).unwrap(), Bgra::rgba(255, 255, 255, 255));
    assert!(seq.same_pixels(&par));
}

#[test]
fn test_one_pixel_source_at_full_scale() {
    let color = Bgra::rgba(1, 2, 3, 255);
    let src = PixelBuffer::filled(1, 1, color).unwrap();
    for result in [
        downscale_sequential(&src, ScaleFactor::IDENTITY).unwrap(),
        downscale_parallel(&src, ScaleFactor::IDENTITY).unwrap(),
        downscale_box_average(&src, ScaleFactor::IDENTITY).unwrap(),
    ] {
        assert_eq!(result.buffer.size(), Size { w: 1, h: 1 });
        assert_eq!(result.buffer.get_pixel(0, 0).unwrap(), color, "{}", result.strategy);
    }
}

#[test]
fn test_box_average_writes_opaque_alpha_regardless_of_source() {
    let src = noisy(30, 30, 0);
    let out = downscale_box_average(&src, pct(20.0)).unwrap().buffer;
    for y in 0..out.height() {
        for x in 0..out.width() {
            assert_eq!(out.get_pixel(x, y).unwrap().a, 255);
        }
    }
}

#[test]
fn test_unclamped_dimensions_would_be_degenerate() {
    // Legacy per-path arithmetic skipped the 1px floor; every strategy now applies it.
    let src = PixelBuffer::filled(3, 3, Bgra::rgba(8, 8, 8, 255)).unwrap();
    assert_eq!(raw_target_size(src.size(), pct(20.0)), Size { w: 0, h: 0 });
    for result in [
        downscale_sequential(&src, pct(20.0)).unwrap(),
        downscale_parallel(&src, pct(20.0)).unwrap(),
        downscale_box_average(&src, pct(20.0)).unwrap(),
    ] {
        assert_eq!(result.buffer.size(), Size { w: 1, h: 1 }, "{}", result.strategy);
    }
}

#[test]
fn test_results_are_tagged_and_timed() {
    let src = noisy(50, 50, 0);
    let runs = [
        measure(|| downscale_sequential(&src, pct(50.0)).unwrap()),
        measure(|| downscale_parallel(&src, pct(50.0)).unwrap()),
        measure(|| downscale_box_average(&src, pct(50.0)).unwrap()),
    ];
    let tags: Vec<Strategy> = runs.iter().map(|run| run.value.strategy).collect();
    assert_eq!(tags, Strategy::ALL.to_vec());
    // Each reported time is one measurement nested inside the whole call.
    for run in &runs {
        assert!(run.value.elapsed <= run.elapsed);
        assert!(run.value.elapsed_ms() <= run.elapsed_ms());
    }
}
