//! First-seen ordered palette with reverse lookup.

use std::collections::HashMap;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EngineError;

/// Number of slots the target hardware addresses per sprite palette.
pub const HARDWARE_PALETTE_SIZE: usize = 16;

/// An ordered, duplicate-free list of colors.
///
/// Stored as the ordered sequence plus a `color -> slot` map so both
/// "color at slot i" and "slot of color c" are constant time. Slot order is
/// load-bearing: [`Palette::extract`] yields first-occurrence order, which
/// every later stage relies on for reproducible output.
///
/// ```
/// use palette_align::{Color, Palette, PixelBuffer};
///
/// let a = Color::new(10, 10, 10);
/// let b = Color::new(20, 20, 20);
/// let buf = PixelBuffer::new(3, 1, vec![b, a, b]).unwrap();
///
/// let palette = Palette::extract(&buf);
/// assert_eq!(palette.colors(), &[b, a]);
/// assert_eq!(palette.index_of(a), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
    slots: HashMap<Color, usize>,
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl Eq for Palette {}

impl Palette {
    /// Every distinct color of `buffer`, in order of first appearance.
    pub fn extract(buffer: &PixelBuffer) -> Self {
        let mut palette = Self::default();
        for &color in buffer.pixels() {
            palette.insert(color);
        }
        palette
    }

    /// Build a palette from an explicit slot order.
    ///
    /// # Errors
    ///
    /// [`EngineError::DuplicateColor`] if a color occurs twice.
    pub fn try_from_colors(colors: impl IntoIterator<Item = Color>) -> Result<Self, EngineError> {
        let mut palette = Self::default();
        for color in colors {
            if !palette.insert(color) {
                return Err(EngineError::DuplicateColor(color));
            }
        }
        Ok(palette)
    }

    /// Append `color` if absent. Returns whether it was added.
    fn insert(&mut self, color: Color) -> bool {
        if self.slots.contains_key(&color) {
            return false;
        }
        self.slots.insert(color, self.colors.len());
        self.colors.push(color);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.colors.get(slot).copied()
    }

    #[inline]
    pub fn index_of(&self, color: Color) -> Option<usize> {
        self.slots.get(&color).copied()
    }

    #[inline]
    pub fn contains(&self, color: Color) -> bool {
        self.slots.contains_key(&color)
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    /// A new palette with `color` moved to slot 0 and the remaining colors
    /// shifted up, keeping their relative order.
    ///
    /// # Errors
    ///
    /// [`EngineError::BackgroundNotInPalette`] if `color` is absent.
    pub fn with_front(&self, color: Color) -> Result<Self, EngineError> {
        let slot = self
            .index_of(color)
            .ok_or(EngineError::BackgroundNotInPalette(color))?;
        let reordered = std::iter::once(self.colors[slot]).chain(
            self.colors
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != slot)
                .map(|(_, &c)| c),
        );
        Self::try_from_colors(reordered)
    }

    /// Recover a palette from hardware entries written by [`padded`](Self::padded).
    ///
    /// The trailing run of black entries is treated as padding and dropped,
    /// except that black is kept when `in_use` contains it. Remaining entries
    /// are deduplicated in slot order, then any `in_use` color still missing
    /// is appended.
    ///
    /// A palette whose last real slot is black, and whose black pixels are
    /// all outside `in_use`, cannot be told apart from padding and loses that
    /// slot.
    pub fn from_padded(entries: &[Color], in_use: &Palette) -> Self {
        let real_len = entries
            .iter()
            .rposition(|&c| c != Color::BLACK)
            .map_or(0, |last| last + 1);

        let mut palette = Self::default();
        for &color in &entries[..real_len] {
            palette.insert(color);
        }
        for color in in_use {
            palette.insert(color);
        }
        palette
    }

    /// Exactly `size` colors: this palette truncated or padded with black.
    pub fn padded(&self, size: usize) -> Vec<Color> {
        self.colors
            .iter()
            .copied()
            .chain(std::iter::repeat(Color::BLACK))
            .take(size)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = Color;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Color>>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const A: Color = Color::new(1, 0, 0);
    const B: Color = Color::new(0, 1, 0);
    const C: Color = Color::new(0, 0, 1);

    #[test]
    fn test_extract_first_occurrence_order() {
        let buf = PixelBuffer::new(3, 2, vec![C, A, C, B, A, B]).unwrap();
        let palette = Palette::extract(&buf);
        assert_eq!(palette.colors(), &[C, A, B]);
        assert_eq!(palette.index_of(C), Some(0));
        assert_eq!(palette.index_of(B), Some(2));
    }

    #[test]
    fn test_extract_empty() {
        let buf = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(Palette::extract(&buf).is_empty());
    }

    #[test]
    fn test_extract_matches_distinct_set() {
        let pixels: Vec<Color> = (0..200u32)
            .map(|i| Color::new((i * 7 % 11) as u8, (i % 3) as u8, 0))
            .collect();
        let buf = PixelBuffer::new(20, 10, pixels.clone()).unwrap();
        let palette = Palette::extract(&buf);

        let distinct: HashSet<Color> = pixels.iter().copied().collect();
        let extracted: HashSet<Color> = palette.iter().collect();
        assert_eq!(extracted, distinct);
        assert_eq!(palette.len(), distinct.len());
        assert!(Palette::try_from_colors(palette.iter()).is_ok());
    }

    #[test]
    fn test_try_from_colors_rejects_duplicates() {
        assert_eq!(
            Palette::try_from_colors([A, B, A]),
            Err(EngineError::DuplicateColor(A))
        );
    }

    #[test]
    fn test_with_front_preserves_relative_order() {
        let palette = Palette::try_from_colors([A, B, C]).unwrap();
        let moved = palette.with_front(C).unwrap();
        assert_eq!(moved.colors(), &[C, A, B]);
        assert_eq!(moved.index_of(A), Some(1));
        // The source palette is untouched.
        assert_eq!(palette.colors(), &[A, B, C]);
    }

    #[test]
    fn test_with_front_missing_color() {
        let palette = Palette::try_from_colors([A, B]).unwrap();
        assert_eq!(
            palette.with_front(C),
            Err(EngineError::BackgroundNotInPalette(C))
        );
    }

    #[test]
    fn test_padded() {
        let palette = Palette::try_from_colors([A, B]).unwrap();
        assert_eq!(palette.padded(4), vec![A, B, Color::BLACK, Color::BLACK]);
        assert_eq!(palette.padded(1), vec![A]);
    }

    #[test]
    fn test_from_padded_drops_black_padding() {
        let used = Palette::try_from_colors([A]).unwrap();
        let written = Palette::try_from_colors([A, B]).unwrap().padded(16);
        assert_eq!(Palette::from_padded(&written, &used).colors(), &[A, B]);
    }

    #[test]
    fn test_from_padded_keeps_black_slot_before_padding() {
        let used = Palette::try_from_colors([B]).unwrap();
        let written = Palette::try_from_colors([Color::BLACK, A, B])
            .unwrap()
            .padded(16);
        assert_eq!(
            Palette::from_padded(&written, &used).colors(),
            &[Color::BLACK, A, B]
        );
    }

    #[test]
    fn test_from_padded_keeps_black_in_use() {
        let used = Palette::try_from_colors([A, Color::BLACK]).unwrap();
        let written = Palette::try_from_colors([A, Color::BLACK])
            .unwrap()
            .padded(16);
        assert_eq!(
            Palette::from_padded(&written, &used).colors(),
            &[A, Color::BLACK]
        );
    }

    #[test]
    fn test_from_padded_full_palette() {
        let colors: Vec<Color> = (1..=16).map(|i| Color::new(i, 0, 0)).collect();
        let used = Palette::default();
        assert_eq!(Palette::from_padded(&colors, &used).colors(), &colors[..]);
    }
}
