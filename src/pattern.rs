//! Synthetic source images.

use resample_core::{Bgra, PixelBuffer, Result};

/// Horizontal red ramp, vertical green ramp, checkered blue.
pub fn gradient(w: u32, h: u32) -> Result<PixelBuffer> {
    let mut pixels = Vec::with_capacity(w as usize * h as usize * 4);
    for y in 0..h {
        for x in 0..w {
            let r = (x as u64 * 255 / (w as u64 - 1).max(1)) as u8;
            let g = (y as u64 * 255 / (h as u64 - 1).max(1)) as u8;
            let b = if (x / 8 + y / 8) % 2 == 0 { 224 } else { 32 };
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    PixelBuffer::from_rgba8(w, h, &pixels)
}

/// Every pixel set to `color`, rows padded to `stride` bytes.
pub fn uniform_padded(width: u32, height: u32, stride: usize, color: Bgra) -> Result<PixelBuffer> {
    let mut buf = PixelBuffer::with_stride(width, height, stride)?;
    for y in 0..height {
        for x in 0..width {
            buf.set_pixel(x, y, color)?;
        }
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_corners() {
        let g = gradient(9, 5).unwrap();
        assert_eq!(g.get_pixel(0, 0).unwrap(), Bgra::rgba(0, 0, 224, 255));
        assert_eq!(g.get_pixel(8, 4).unwrap(), Bgra::rgba(255, 255, 32, 255));
        assert!(gradient(0, 4).is_err());
    }

    #[test]
    fn test_uniform_padded() {
        let buf = uniform_padded(3, 3, 16, Bgra::rgba(4, 5, 6, 7)).unwrap();
        assert_eq!(buf.stride(), 16);
        assert_eq!(buf.get_pixel(2, 2).unwrap(), Bgra::rgba(4, 5, 6, 7));
        assert!(uniform_padded(3, 3, 8, Bgra::default()).is_err());
    }
}
