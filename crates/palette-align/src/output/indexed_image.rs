//! Palette-indexed raster.
//!
//! [`IndexedImage`] stores one palette slot per pixel together with the
//! palette that resolves it. It is what the sprite writer serializes; the
//! RGB view is computed on demand.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EngineError;
use crate::palette::Palette;

/// Slots per pixel plus the palette they index.
///
/// ```
/// use palette_align::{Color, IndexedImage, Palette, PixelBuffer};
///
/// let bg = Color::new(0, 0, 0);
/// let fg = Color::new(255, 255, 255);
/// let buf = PixelBuffer::new(2, 2, vec![bg, fg, fg, bg]).unwrap();
/// let palette = Palette::extract(&buf);
///
/// let image = IndexedImage::from_buffer(&buf, &palette).unwrap();
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_buffer(), buf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl IndexedImage {
    /// Replace every pixel of `buffer` with its slot in `palette`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::PaletteOverflow`] if the palette exceeds 256 colors.
    /// - [`EngineError::ColorNotInPalette`] for the first pixel whose color
    ///   the palette lacks. An upstream stage resolved the wrong palette;
    ///   there is no fallback slot.
    pub fn from_buffer(buffer: &PixelBuffer, palette: &Palette) -> Result<Self, EngineError> {
        if palette.len() > 256 {
            return Err(EngineError::PaletteOverflow(palette.len()));
        }
        let indices = buffer
            .pixels()
            .iter()
            .enumerate()
            .map(|(index, &color)| {
                palette
                    .index_of(color)
                    .map(|slot| slot as u8)
                    .ok_or(EngineError::ColorNotInPalette { color, index })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self {
            indices,
            width: buffer.width(),
            height: buffer.height(),
            palette: palette.clone(),
        })
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
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
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resolve every slot back to its color.
    pub fn to_buffer(&self) -> PixelBuffer {
        let pixels: Vec<Color> = self
            .indices
            .iter()
            .map(|&i| self.palette.colors()[i as usize])
            .collect();
        PixelBuffer::from_raw(self.width, self.height, pixels)
    }

    /// Pack slots into row-aligned `bits`-per-pixel data (1, 2, 4 or 8),
    /// most significant bits first. Each row starts on a byte boundary.
    pub fn packed(&self, bits: u8) -> Vec<u8> {
        pack_nbits(&self.indices, self.width, bits)
    }
}

/// Pack values into N-bit rows (1, 2, 4 or 8 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    if bits >= 8 || width == 0 {
        return indices.to_vec();
    }
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
