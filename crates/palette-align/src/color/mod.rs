//! Opaque 8-bit RGB color.
//!
//! Colors are compared by exact channel equality. There is no alpha channel;
//! transparency on the target hardware is expressed by palette slot 0.

use std::fmt;

use serde::{Serialize, Serializer};

/// An 8-bit-per-channel RGB color.
///
/// Displays as lowercase `#rrggbb` and serializes the same way.
///
/// ```
/// use palette_align::Color;
///
/// let c = Color::new(255, 0, 128);
/// assert_eq!(c.to_string(), "#ff0080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure black, used to pad short palettes.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure magenta, used to mark disagreeing pixels in diff images.
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
