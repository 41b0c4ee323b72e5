//! Icon palette cross-check.
//!
//! Icons are drawn separately from the battle sprite but must reuse its
//! palette. The check is not pixel-aligned: it only compares color sets and
//! counts how often each stray color is used.

use crate::align::VoteHistogram;
use crate::buffer::PixelBuffer;
use crate::issue::Issue;
use crate::palette::{Palette, HARDWARE_PALETTE_SIZE};

/// Report icon colors that `reference` lacks.
///
/// - More than 16 icon colors: a single [`Issue::IconPaletteTooLarge`], and
///   nothing else is checked.
/// - Otherwise every icon color outside `reference` is counted across the
///   icon and reported in one [`Issue::IconExtraColors`], most frequent
///   first.
pub fn check_icon(icon: &PixelBuffer, icon_palette: &Palette, reference: &Palette) -> Vec<Issue> {
    if icon_palette.len() > HARDWARE_PALETTE_SIZE {
        return vec![Issue::IconPaletteTooLarge {
            count: icon_palette.len(),
        }];
    }

    let has_extra = icon_palette.iter().any(|c| !reference.contains(c));
    if !has_extra {
        return Vec::new();
    }

    let mut extra = VoteHistogram::new();
    for &color in icon.pixels() {
        if icon_palette.contains(color) && !reference.contains(color) {
            extra.record(color);
        }
    }

    tracing::debug!(extra_colors = extra.len(), "Icon uses colors outside the reference palette");

    if extra.is_empty() {
        return Vec::new();
    }
    vec![Issue::IconExtraColors {
        colors: extra.by_frequency(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::issue::ColorCount;
    use pretty_assertions::assert_eq;

    const A: Color = Color::new(1, 0, 0);
    const B: Color = Color::new(2, 0, 0);
    const C: Color = Color::new(3, 0, 0);
    const D: Color = Color::new(4, 0, 0);
    const E: Color = Color::new(5, 0, 0);

    fn icon(pixels: Vec<Color>) -> (PixelBuffer, Palette) {
        let buf = PixelBuffer::new(pixels.len() as u32, 1, pixels).unwrap();
        let palette = Palette::extract(&buf);
        (buf, palette)
    }

    #[test]
    fn test_subset_passes() {
        let reference = Palette::try_from_colors([A, B, C]).unwrap();
        let (buf, palette) = icon(vec![A, B, A, B]);
        assert!(check_icon(&buf, &palette, &reference).is_empty());
    }

    #[test]
    fn test_extra_color_counted() {
        let reference = Palette::try_from_colors([A, B, C]).unwrap();
        let (buf, palette) = icon(vec![A, D, B, D, D, A, D, D]);
        assert_eq!(
            check_icon(&buf, &palette, &reference),
            vec![Issue::IconExtraColors {
                colors: vec![ColorCount::new(D, 5)]
            }]
        );
    }

    #[test]
    fn test_extra_colors_most_frequent_first() {
        let reference = Palette::try_from_colors([A]).unwrap();
        let (buf, palette) = icon(vec![E, D, D, A, E, D]);
        assert_eq!(
            check_icon(&buf, &palette, &reference),
            vec![Issue::IconExtraColors {
                colors: vec![ColorCount::new(D, 3), ColorCount::new(E, 2)]
            }]
        );
    }

    #[test]
    fn test_too_many_colors_short_circuits() {
        let reference = Palette::try_from_colors([A]).unwrap();
        let pixels: Vec<Color> = (0..17).map(|i| Color::new(0, i, 0)).collect();
        let (buf, palette) = icon(pixels);
        assert_eq!(
            check_icon(&buf, &palette, &reference),
            vec![Issue::IconPaletteTooLarge { count: 17 }]
        );
    }
}
