// SPDX-License-Identifier: MIT
//! # BGRA Pixel Buffer
//!
//! An owned raster of 32-bit pixels stored as contiguous bytes with an explicit
//! row stride. Each pixel occupies 4 bytes in the fixed order Blue, Green, Red,
//! Alpha, which is the layout screen-capture and GDI-style bitmaps hand out.
//!
//! All pixel access goes through [`PixelBuffer::get_pixel`] and
//! [`PixelBuffer::set_pixel`], which validate the coordinate and compute the
//! byte offset `y * stride + x * 4` in one place. Raw offsets never leave this
//! module.
//!
//! Padding bytes between `width * 4` and `stride` are carried along but never
//! read as pixel data.

use crate::error::{ResampleError, Result};
use crate::geometry::Size;

/// Bytes per BGRA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A single pixel value. Field order matches the in-memory byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    /// Build a pixel from channels given in R, G, B, A order.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    fn from_bytes(px: &[u8]) -> Self {
        Self {
            b: px[0],
            g: px[1],
            r: px[2],
            a: px[3],
        }
    }

    #[inline]
    fn write_bytes(self, px: &mut [u8]) {
        px[0] = self.b;
        px[1] = self.g;
        px[2] = self.r;
        px[3] = self.a;
    }
}

/// Owned BGRA raster with explicit stride.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled, tightly packed buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_stride(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Zero-filled buffer with `stride` bytes per row.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        let len = checked_len(width, height, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0; len],
        })
    }

    /// Tightly packed buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Bgra) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        for px in buf.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            color.write_bytes(px);
        }
        Ok(buf)
    }

    /// Take ownership of existing BGRA bytes. `data` must hold at least `stride * height` bytes;
    /// anything beyond that is truncated.
    pub fn from_bgra(width: u32, height: u32, stride: usize, mut data: Vec<u8>) -> Result<Self> {
        let len = checked_len(width, height, stride)?;
        if data.len() < len {
            return Err(ResampleError::invalid_layout(format!(
                "{} bytes supplied, {}x{} with stride {} needs {}",
                data.len(),
                width,
                height,
                stride,
                len
            )));
        }
        data.truncate(len);
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Convert tightly packed RGBA8 bytes (the layout image decoders produce) into BGRA.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        if rgba.len() != buf.data.len() {
            return Err(ResampleError::invalid_layout(format!(
                "{} RGBA bytes supplied, {}x{} needs {}",
                rgba.len(),
                width,
                height,
                buf.data.len()
            )));
        }
        for (dst, src) in buf
            .data
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(rgba.chunks_exact(BYTES_PER_PIXEL))
        {
            Bgra::rgba(src[0], src[1], src[2], src[3]).write_bytes(dst);
        }
        Ok(buf)
    }

    /// Tightly packed RGBA8 copy of the pixel data, padding dropped.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * BYTES_PER_PIXEL);
        for row in self.rows() {
            for px in row.chunks_exact(BYTES_PER_PIXEL) {
                out.extend_from_slice(&Bgra::from_bytes(px).to_rgba());
            }
        }
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size {
            w: self.width,
            h: self.height,
        }
    }

    /// Bytes per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw storage, `stride * height` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Bgra> {
        let i = self.offset(x, y)?;
        Ok(Bgra::from_bytes(&self.data[i..i + BYTES_PER_PIXEL]))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Bgra) -> Result<()> {
        let i = self.offset(x, y)?;
        color.write_bytes(&mut self.data[i..i + BYTES_PER_PIXEL]);
        Ok(())
    }

    /// Read with edge replication: signed coordinates are clamped into the raster first.
    #[inline]
    pub fn get_pixel_clamped(&self, x: i64, y: i64) -> Result<Bgra> {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get_pixel(cx, cy)
    }

    /// Write `column` top to bottom into column `x`. The slice must span the full height.
    ///
    /// Bounds are checked once; each row is then reached by stepping one stride.
    pub fn write_column(&mut self, x: u32, column: &[Bgra]) -> Result<()> {
        if column.len() != self.height as usize {
            return Err(ResampleError::invalid_layout(format!(
                "column of {} pixels written into buffer of height {}",
                column.len(),
                self.height
            )));
        }
        let first = self.offset(x, 0)?;
        for (row, px) in self.data[first..].chunks_mut(self.stride).zip(column) {
            px.write_bytes(&mut row[..BYTES_PER_PIXEL]);
        }
        Ok(())
    }

    /// Pixel-for-pixel equality, ignoring stride and padding bytes.
    pub fn same_pixels(&self, other: &PixelBuffer) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }

    /// Pixel bytes of each row, padding excluded.
    fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        self.data
            .chunks(self.stride)
            .map(move |row| &row[..row_bytes])
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(ResampleError::out_of_range(
                x as i64,
                y as i64,
                self.width,
                self.height,
            ));
        }
        Ok(y as usize * self.stride + x as usize * BYTES_PER_PIXEL)
    }
}

fn checked_len(width: u32, height: u32, stride: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(ResampleError::invalid_layout(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let row_bytes = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| ResampleError::invalid_layout("row size overflow"))?;
    if stride < row_bytes {
        return Err(ResampleError::invalid_layout(format!(
            "stride {} is smaller than {} bytes per row",
            stride, row_bytes
        )));
    }
    stride
        .checked_mul(height as usize)
        .ok_or_else(|| ResampleError::invalid_layout("buffer size overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_uses_bgra_byte_order() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set_pixel(1, 1, Bgra::rgba(10, 20, 30, 40)).unwrap();
        assert_eq!(buf.get_pixel(1, 1).unwrap(), Bgra::rgba(10, 20, 30, 40));
        // (1,1) starts at 1*8 + 1*4
        assert_eq!(&buf.as_bytes()[12..16], &[30, 20, 10, 40]);
    }

    #[test]
    fn test_strided_offsets() {
        let mut buf = PixelBuffer::with_stride(3, 2, 16).unwrap();
        assert_eq!(buf.as_bytes().len(), 32);
        buf.set_pixel(2, 1, Bgra::rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(&buf.as_bytes()[24..28], &[3, 2, 1, 4]);
        // padding untouched
        assert_eq!(&buf.as_bytes()[28..32], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut buf = PixelBuffer::new(4, 3).unwrap();
        assert!(matches!(
            buf.get_pixel(4, 0),
            Err(ResampleError::OutOfRange { x: 4, y: 0, width: 4, height: 3 })
        ));
        assert!(buf.get_pixel(0, 3).is_err());
        assert!(buf.set_pixel(7, 7, Bgra::default()).is_err());
    }

    #[test]
    fn test_clamped_read_replicates_edges() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set_pixel(0, 0, Bgra::rgba(9, 9, 9, 9)).unwrap();
        buf.set_pixel(1, 1, Bgra::rgba(7, 7, 7, 7)).unwrap();
        assert_eq!(buf.get_pixel_clamped(-3, -1).unwrap(), Bgra::rgba(9, 9, 9, 9));
        assert_eq!(buf.get_pixel_clamped(5, 2).unwrap(), Bgra::rgba(7, 7, 7, 7));
    }

    #[test]
    fn test_invalid_layouts_rejected() {
        assert!(PixelBuffer::new(0, 5).is_err());
        assert!(PixelBuffer::with_stride(4, 4, 15).is_err());
        assert!(PixelBuffer::from_bgra(2, 2, 8, vec![0; 15]).is_err());
        assert!(PixelBuffer::from_rgba8(2, 2, &[0; 12]).is_err());
    }

    #[test]
    fn test_rgba8_conversion() {
        let rgba = [1, 2, 3, 4, 5, 6, 7, 8];
        let buf = PixelBuffer::from_rgba8(2, 1, &rgba).unwrap();
        assert_eq!(buf.as_bytes(), &[3, 2, 1, 4, 7, 6, 5, 8]);
        assert_eq!(buf.get_pixel(1, 0).unwrap(), Bgra::rgba(5, 6, 7, 8));
        assert_eq!(buf.to_rgba8(), rgba.to_vec());
    }

    #[test]
    fn test_same_pixels_ignores_padding() {
        let tight = PixelBuffer::filled(3, 2, Bgra::rgba(5, 5, 5, 255)).unwrap();
        let mut padded = PixelBuffer::with_stride(3, 2, 20).unwrap();
        for x in 0..3 {
            padded.write_column(x, &[Bgra::rgba(5, 5, 5, 255); 2]).unwrap();
        }
        assert!(tight.same_pixels(&padded));
        padded.set_pixel(2, 1, Bgra::default()).unwrap();
        assert!(!tight.same_pixels(&padded));
    }

    #[test]
    fn test_write_column_requires_full_height() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        assert!(buf.write_column(0, &[Bgra::default(); 2]).is_err());
        buf.write_column(1, &[Bgra::rgba(1, 1, 1, 1); 3]).unwrap();
        assert_eq!(buf.get_pixel(1, 2).unwrap(), Bgra::rgba(1, 1, 1, 1));
    }

    #[test]
    fn test_write_column_steps_by_stride() {
        let mut buf = PixelBuffer::with_stride(3, 4, 20).unwrap();
        let column: Vec<Bgra> = (0..4).map(|y| Bgra::rgba(y * 10, 1, 2, 255)).collect();
        buf.write_column(2, &column).unwrap();
        for y in 0..4 {
            assert_eq!(buf.get_pixel(2, y).unwrap(), column[y as usize]);
            assert_eq!(buf.get_pixel(1, y).unwrap(), Bgra::default());
        }
        // Padding after the last pixel of each row is untouched.
        assert!(buf.as_bytes().chunks(20).all(|row| row[12..].iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_write_column_rejects_column_past_width() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        let err = buf.write_column(2, &[Bgra::default(); 3]).unwrap_err();
        assert!(matches!(err, ResampleError::OutOfRange { x: 2, y: 0, .. }));
    }
}
