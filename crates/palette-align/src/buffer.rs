//! Row-major RGB pixel buffers.
//!
//! A [`PixelBuffer`] is an immutable snapshot of a decoded image. Every
//! transformation (crop, concatenation, highlighting, upscaling) builds a new
//! buffer; nothing mutates a buffer that another stage might still read.

use crate::color::Color;
use crate::error::EngineError;

/// An immutable `width × height` grid of colors, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Wrap decoded pixels.
    ///
    /// # Errors
    ///
    /// [`EngineError::BufferLength`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, EngineError> {
        if pixels.len() != width as usize * height as usize {
            return Err(EngineError::BufferLength {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Callers guarantee `pixels.len() == width * height`.
    pub(crate) fn from_raw(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build a buffer from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, EngineError> {
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Color::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Color at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Flatten to `[R, G, B, ...]` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// The four corner pixels in scan order: top-left, top-right,
    /// bottom-left, bottom-right.
    ///
    /// Returns `None` for an empty buffer.
    pub fn corners(&self) -> Option<[Color; 4]> {
        if self.is_empty() {
            return None;
        }
        let w = self.width as usize;
        let last = self.pixels.len() - 1;
        Some([
            self.pixels[0],
            self.pixels[w - 1],
            self.pixels[last + 1 - w],
            self.pixels[last],
        ])
    }

    /// Fails unless `other` has the same dimensions.
    pub fn ensure_aligned(&self, other: &PixelBuffer) -> Result<(), EngineError> {
        if self.width != other.width || self.height != other.height {
            return Err(EngineError::DimensionMismatch {
                a_width: self.width,
                a_height: self.height,
                b_width: other.width,
                b_height: other.height,
            });
        }
        Ok(())
    }

    /// Copy out the `width × height` region whose top-left corner is `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, EngineError> {
        if x.saturating_add(width) > self.width || y.saturating_add(height) > self.height {
            return Err(EngineError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                buf_width: self.width,
                buf_height: self.height,
            });
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in y..y + height {
            let start = row as usize * self.width as usize + x as usize;
            pixels.extend_from_slice(&self.pixels[start..start + width as usize]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Place `right` next to `self`. Both must have the same height.
    pub fn hconcat(&self, right: &PixelBuffer) -> Result<Self, EngineError> {
        if self.height != right.height {
            return Err(EngineError::DimensionMismatch {
                a_width: self.width,
                a_height: self.height,
                b_width: right.width,
                b_height: right.height,
            });
        }
        let width = self.width + right.width;
        let mut pixels = Vec::with_capacity(width as usize * self.height as usize);
        for (l, r) in self
            .pixels
            .chunks(self.width.max(1) as usize)
            .zip(right.pixels.chunks(right.width.max(1) as usize))
        {
            pixels.extend_from_slice(l);
            pixels.extend_from_slice(r);
        }
        Self::new(width, self.height, pixels)
    }

    /// Nearest-neighbour upscale by an integer factor. A factor of 0 is
    /// treated as 1.
    ///
    /// # Errors
    ///
    /// [`EngineError::UpscaleOverflow`] if the scaled dimensions or pixel
    /// count do not fit.
    pub fn upscale(&self, factor: u32) -> Result<Self, EngineError> {
        let factor = factor.max(1);
        let overflow = EngineError::UpscaleOverflow {
            width: self.width,
            height: self.height,
            factor,
        };
        let (Some(width), Some(height)) = (
            self.width.checked_mul(factor),
            self.height.checked_mul(factor),
        ) else {
            return Err(overflow);
        };
        let Some(len) = (width as usize).checked_mul(height as usize) else {
            return Err(overflow);
        };

        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(self.get(x / factor, y / factor));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: Color = Color::new(1, 1, 1);
    const B: Color = Color::new(2, 2, 2);
    const C: Color = Color::new(3, 3, 3);
    const D: Color = Color::new(4, 4, 4);

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = PixelBuffer::new(2, 2, vec![A; 3]).unwrap_err();
        assert_eq!(
            err,
            EngineError::BufferLength {
                width: 2,
                height: 2,
                len: 3
            }
        );
    }

    #[test]
    fn test_corners_scan_order() {
        let buf = PixelBuffer::new(2, 2, vec![A, B, C, D]).unwrap();
        assert_eq!(buf.corners(), Some([A, B, C, D]));
    }

    #[test]
    fn test_corners_single_row() {
        let buf = PixelBuffer::new(3, 1, vec![A, B, C]).unwrap();
        assert_eq!(buf.corners(), Some([A, C, A, C]));
    }

    #[test]
    fn test_corners_empty() {
        let buf = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert_eq!(buf.corners(), None);
    }

    #[test]
    fn test_crop_and_hconcat() {
        // A B
        // C D
        let buf = PixelBuffer::new(2, 2, vec![A, B, C, D]).unwrap();
        let left = buf.crop(0, 0, 1, 2).unwrap();
        let right = buf.crop(1, 0, 1, 2).unwrap();
        assert_eq!(left.pixels(), &[A, C]);
        assert_eq!(right.pixels(), &[B, D]);
        assert_eq!(left.hconcat(&right).unwrap(), buf);
        assert_eq!(right.hconcat(&left).unwrap().pixels(), &[B, A, D, C]);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let buf = PixelBuffer::filled(2, 2, A);
        assert!(matches!(
            buf.crop(1, 0, 2, 2),
            Err(EngineError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_hconcat_height_mismatch() {
        let a = PixelBuffer::filled(2, 2, A);
        let b = PixelBuffer::filled(2, 3, A);
        assert!(matches!(
            a.hconcat(&b),
            Err(EngineError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_upscale_nearest() {
        let buf = PixelBuffer::new(2, 1, vec![A, B]).unwrap();
        let up = buf.upscale(2).unwrap();
        assert_eq!(up.width(), 4);
        assert_eq!(up.height(), 2);
        assert_eq!(up.pixels(), &[A, A, B, B, A, A, B, B]);
    }

    #[test]
    fn test_upscale_overflow_is_error() {
        let buf = PixelBuffer::filled(128, 64, A);
        assert_eq!(
            buf.upscale(40_000_000),
            Err(EngineError::UpscaleOverflow {
                width: 128,
                height: 64,
                factor: 40_000_000
            })
        );
        assert!(buf.upscale(u32::MAX).is_err());
    }

    #[test]
    fn test_rgb_bytes_round_trip() {
        let buf = PixelBuffer::new(2, 1, vec![Color::new(1, 2, 3), Color::new(4, 5, 6)]).unwrap();
        let bytes = buf.to_rgb_bytes();
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(PixelBuffer::from_rgb_bytes(2, 1, &bytes).unwrap(), buf);
    }
}
