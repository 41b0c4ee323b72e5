//! Palette types and utilities
//!
//! This module provides the first-seen ordered [`Palette`], background
//! normalization and the cardinality checks that gate alignment.

mod background;
mod palette;
mod validate;

pub use background::{detect_background, move_background_first};
pub use palette::{Palette, HARDWARE_PALETTE_SIZE};
pub use validate::validate_sizes;
