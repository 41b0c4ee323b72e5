//! Contract violations raised by the engine.
//!
//! These are programmer or pipeline invariant failures. User-facing problems
//! with submitted art are never reported here; they are collected as
//! [`Issue`](crate::Issue)s inside a failed [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("pixel buffer length {len} does not match {width}x{height}")]
    BufferLength { width: u32, height: u32, len: usize },

    #[error("buffers are not pixel-aligned: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        a_width: u32,
        a_height: u32,
        b_width: u32,
        b_height: u32,
    },

    #[error("region {x},{y} {width}x{height} lies outside a {buf_width}x{buf_height} buffer")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buf_width: u32,
        buf_height: u32,
    },

    #[error("unsupported spritesheet size {width}x{height} (expected {expected_width}x{expected_height})")]
    SheetDimensions {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("background color {0} is not in its own palette")]
    BackgroundNotInPalette(Color),

    #[error("color {color} at pixel {index} is not in the resolved palette")]
    ColorNotInPalette { color: Color, index: usize },

    #[error("duplicate palette color {0}")]
    DuplicateColor(Color),

    #[error("palette color {0} does not occur in its image")]
    ColorUnused(Color),

    #[error("slot {slot} is outside a palette of {len} colors")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("palette has {0} colors, more than an indexed image can address")]
    PaletteOverflow(usize),

    #[error("cannot upscale {width}x{height} by {factor}: size overflows")]
    UpscaleOverflow { width: u32, height: u32, factor: u32 },
}
