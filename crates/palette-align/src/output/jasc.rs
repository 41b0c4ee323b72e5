//! JASC-PAL text palettes.

use crate::palette::{Palette, HARDWARE_PALETTE_SIZE};

/// Render `palette` as a JASC-PAL file.
///
/// The file always lists exactly 16 entries: longer palettes are truncated,
/// shorter ones padded with `0 0 0`. Lines end with CRLF.
///
/// ```
/// use palette_align::{to_jasc, Color, Palette};
///
/// let palette = Palette::try_from_colors([Color::new(255, 0, 255)]).unwrap();
/// let text = to_jasc(&palette);
/// assert!(text.starts_with("JASC-PAL\r\n0100\r\n16\r\n255 0 255\r\n0 0 0\r\n"));
/// assert_eq!(text.lines().count(), 3 + 16);
/// ```
pub fn to_jasc(palette: &Palette) -> String {
    let mut out = String::with_capacity(32 + HARDWARE_PALETTE_SIZE * 13);
    out.push_str("JASC-PAL\r\n0100\r\n");
    out.push_str(&format!("{HARDWARE_PALETTE_SIZE}\r\n"));
    for color in palette.padded(HARDWARE_PALETTE_SIZE) {
        out.push_str(&format!("{} {} {}\r\n", color.r, color.g, color.b));
    }
    out
}
