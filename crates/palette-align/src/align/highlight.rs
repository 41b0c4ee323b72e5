//! Diff image of pixels that disagree with the chosen mapping.

use std::collections::HashSet;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EngineError;

use super::mapper::Rendering;
use super::mapping::IndexMapping;

/// Mark every secondary pixel that contradicts `mapping` with
/// [`Color::MAGENTA`].
///
/// Only pixels whose color is in `problem_colors` are candidates. Such a
/// pixel is marked when no primary color maps onto its color, or when the
/// primary pixel at the same position is not the one that maps onto it. A
/// problem color that is used correctly elsewhere keeps those pixels
/// untouched, so only the disagreeing positions light up.
///
/// Returns a new buffer; `secondary.buffer` is not modified.
pub fn highlight_problem_pixels(
    secondary: Rendering<'_>,
    problem_colors: &HashSet<Color>,
    primary: Rendering<'_>,
    mapping: &IndexMapping,
) -> Result<PixelBuffer, EngineError> {
    secondary.buffer.ensure_aligned(primary.buffer)?;

    let expected_primary = mapping.inverse_colors(primary.palette, secondary.palette);

    let pixels = secondary
        .buffer
        .pixels()
        .iter()
        .zip(primary.buffer.pixels())
        .map(|(&s, &p)| {
            if !problem_colors.contains(&s) {
                return s;
            }
            match expected_primary.get(&s) {
                Some(&expected) if expected == p => s,
                _ => Color::MAGENTA,
            }
        })
        .collect();

    PixelBuffer::new(secondary.buffer.width(), secondary.buffer.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::mapper::map_palettes;
    use crate::issue::ImageRole;
    use crate::palette::Palette;
    use pretty_assertions::assert_eq;

    const A: Color = Color::new(10, 0, 0);
    const B: Color = Color::new(20, 0, 0);
    const X: Color = Color::new(0, 10, 0);
    const Y: Color = Color::new(0, 20, 0);
    const M: Color = Color::MAGENTA;

    fn buf(pixels: &[Color]) -> PixelBuffer {
        PixelBuffer::new(pixels.len() as u32, 1, pixels.to_vec()).unwrap()
    }

    fn run(primary: &PixelBuffer, secondary: &PixelBuffer) -> PixelBuffer {
        let pp = Palette::extract(primary);
        let sp = Palette::extract(secondary);
        let p = Rendering::new(ImageRole::Normal, &pp, primary);
        let s = Rendering::new(ImageRole::Shiny, &sp, secondary);
        let alignment = map_palettes(p, s).unwrap();
        highlight_problem_pixels(s, &alignment.problem_colors, p, &alignment.mapping).unwrap()
    }

    #[test]
    fn test_only_disagreeing_pixel_marked() {
        // A->X, B->Y; one A pixel carries Y, which is valid under B elsewhere.
        let primary = buf(&[A, A, A, B, B, B]);
        let secondary = buf(&[X, Y, X, Y, Y, Y]);
        let out = run(&primary, &secondary);
        assert_eq!(out.pixels(), &[X, M, X, Y, Y, Y]);
    }

    #[test]
    fn test_unreachable_problem_color_marked_everywhere() {
        // Z never wins any slot, so every Z pixel is marked.
        let z = Color::new(0, 0, 30);
        let primary = buf(&[A, A, A, B, B, B]);
        let secondary = buf(&[X, z, X, Y, z, Y]);
        let out = run(&primary, &secondary);
        assert_eq!(out.pixels(), &[X, M, X, Y, M, Y]);
    }

    #[test]
    fn test_clean_alignment_leaves_buffer_unchanged() {
        let primary = buf(&[A, B, A]);
        let secondary = buf(&[X, Y, X]);
        assert_eq!(run(&primary, &secondary), secondary);
    }
}
