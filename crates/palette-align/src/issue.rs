//! User-facing diagnostics.
//!
//! An [`Issue`] describes something wrong with submitted art. Its `Display`
//! text is stable and shown to the artist verbatim; its variant (and the
//! serialized `kind` tag) lets callers tell issues apart programmatically.

use std::fmt;

use serde::Serialize;

use crate::color::Color;

/// Which rendering of a sprite a palette or buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    Normal,
    Shiny,
}

impl ImageRole {
    /// The other rendering.
    pub fn other(self) -> Self {
        match self {
            ImageRole::Normal => ImageRole::Shiny,
            ImageRole::Shiny => ImageRole::Normal,
        }
    }
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Normal => f.write_str("Normal"),
            ImageRole::Shiny => f.write_str("Shiny"),
        }
    }
}

/// A color together with how many pixels use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    pub color: Color,
    pub pixels: usize,
}

impl ColorCount {
    pub fn new(color: Color, pixels: usize) -> Self {
        Self { color, pixels }
    }

    /// Sort by descending pixel count. The sort is stable, so equal counts
    /// keep their first-seen order.
    pub fn sorted_by_frequency(mut counts: Vec<ColorCount>) -> Vec<ColorCount> {
        counts.sort_by(|a, b| b.pixels.cmp(&a.pixels));
        counts
    }
}

impl fmt::Display for ColorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pixels)", self.color, self.pixels)
    }
}

struct Evidence<'a>(&'a [ColorCount]);

impl fmt::Display for Evidence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

/// A problem with submitted art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The two renderings do not use the same number of colors.
    PaletteCountMismatch {
        a: ImageRole,
        a_count: usize,
        b: ImageRole,
        b_count: usize,
    },
    /// A rendering uses more colors than the hardware palette holds.
    PaletteTooLarge { which: ImageRole, count: usize },
    /// Pixels of one primary color sit on several secondary colors.
    /// `candidates` is ordered by descending pixel count; the first entry is
    /// the color the mapping chose.
    AmbiguousCorrespondence {
        primary: ImageRole,
        secondary: ImageRole,
        color: Color,
        candidates: Vec<ColorCount>,
    },
    /// The icon uses more colors than the hardware palette holds.
    IconPaletteTooLarge { count: usize },
    /// The icon uses colors the reference palette lacks, most frequent first.
    IconExtraColors { colors: Vec<ColorCount> },
}

impl Issue {
    /// Stable machine-readable name, identical to the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            Issue::PaletteCountMismatch { .. } => "palette_count_mismatch",
            Issue::PaletteTooLarge { .. } => "palette_too_large",
            Issue::AmbiguousCorrespondence { .. } => "ambiguous_correspondence",
            Issue::IconPaletteTooLarge { .. } => "icon_palette_too_large",
            Issue::IconExtraColors { .. } => "icon_extra_colors",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::PaletteCountMismatch {
                a,
                a_count,
                b,
                b_count,
            } => write!(
                f,
                "{a} palette has {a_count} colors, but {} palette has {b_count} colors",
                b.to_string().to_lowercase()
            ),
            Issue::PaletteTooLarge { which, count } => {
                write!(f, "{which} palette has more than 16 colors ({count} colors)")
            }
            Issue::AmbiguousCorrespondence {
                primary,
                secondary,
                color,
                candidates,
            } => write!(
                f,
                "{primary} color {color} maps to multiple {secondary} colors: {}",
                Evidence(candidates)
            ),
            Issue::IconPaletteTooLarge { count } => {
                write!(f, "Icon palette has more than 16 colors ({count} colors)")
            }
            Issue::IconExtraColors { colors } => write!(
                f,
                "Extra colors in icon palette compared to the battle sprite: {}",
                Evidence(colors)
            ),
        }
    }
}
