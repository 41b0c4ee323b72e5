//! Background detection and slot-0 normalization.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EngineError;

use super::Palette;

/// The most frequent corner color of `buffer`.
///
/// Corners are scanned top-left, top-right, bottom-left, bottom-right; among
/// equally frequent colors the one scanned first wins.
pub fn detect_background(buffer: &PixelBuffer) -> Option<Color> {
    let corners = buffer.corners()?;
    let mut best: Option<(Color, usize)> = None;
    for &candidate in &corners {
        let count = corners.iter().filter(|&&c| c == candidate).count();
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((candidate, count));
        }
    }
    best.map(|(color, _)| color)
}

/// Reorder `palette` so the background color of `buffer` occupies slot 0.
///
/// An empty buffer has no background and yields the palette unchanged.
///
/// # Errors
///
/// [`EngineError::BackgroundNotInPalette`] if `palette` was not extracted from
/// `buffer` (the corner color is missing from it).
pub fn move_background_first(
    palette: &Palette,
    buffer: &PixelBuffer,
) -> Result<Palette, EngineError> {
    match detect_background(buffer) {
        Some(background) => {
            let normalized = palette.with_front(background)?;
            tracing::debug!(%background, "Moved background color to slot 0");
            Ok(normalized)
        }
        None => Ok(palette.clone()),
    }
}
