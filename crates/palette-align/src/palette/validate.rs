//! Palette cardinality checks.

use crate::issue::{ImageRole, Issue};

use super::{Palette, HARDWARE_PALETTE_SIZE};

/// Check that two palettes can be aligned at all.
///
/// Checks run in order and stop at the first failure:
/// 1. equal cardinality ([`Issue::PaletteCountMismatch`]);
/// 2. `a` fits the hardware palette ([`Issue::PaletteTooLarge`]);
/// 3. `b` fits the hardware palette.
///
/// An empty result means the palettes may proceed to alignment.
pub fn validate_sizes(a: (ImageRole, &Palette), b: (ImageRole, &Palette)) -> Vec<Issue> {
    let (a_role, a_palette) = a;
    let (b_role, b_palette) = b;

    let issue = if a_palette.len() != b_palette.len() {
        Some(Issue::PaletteCountMismatch {
            a: a_role,
            a_count: a_palette.len(),
            b: b_role,
            b_count: b_palette.len(),
        })
    } else if a_palette.len() > HARDWARE_PALETTE_SIZE {
        Some(Issue::PaletteTooLarge {
            which: a_role,
            count: a_palette.len(),
        })
    } else if b_palette.len() > HARDWARE_PALETTE_SIZE {
        Some(Issue::PaletteTooLarge {
            which: b_role,
            count: b_palette.len(),
        })
    } else {
        None
    };

    issue.into_iter().collect()
}
