#![allow(clippy::module_inception)]

//! palette-align: palette extraction and alignment for 16-color sprites
//!
//! Indexed-color hardware stores sprite shape (palette slots per pixel) and
//! color (the palette) separately. A sprite's shiny variant is the same slot
//! data drawn with a second palette, so the normal and shiny art must be
//! pixel-for-pixel identical in shape. Artists draw both renderings as plain
//! RGB; this crate recovers the shared slot order, or explains precisely
//! which pixels prevent one.
//!
//! # Quick Start
//!
//! ```
//! use palette_align::{validate_spritesheet, Color, PixelBuffer, SpriteSheet, ValidationResult};
//!
//! // Normal art: green background, one red pixel. Shiny: same shape in blue.
//! let bg = Color::new(0, 255, 0);
//! let mut normal = vec![bg; 128 * 64];
//! let mut shiny = vec![bg; 128 * 64];
//! normal[200] = Color::new(255, 0, 0);
//! shiny[200] = Color::new(0, 0, 255);
//!
//! let sheet = SpriteSheet::from_working(
//!     PixelBuffer::new(128, 64, normal).unwrap(),
//!     PixelBuffer::new(128, 64, shiny).unwrap(),
//! )
//! .unwrap();
//!
//! match validate_spritesheet(&sheet).unwrap() {
//!     ValidationResult::Success(assets) => {
//!         assert_eq!(assets.normal_palette.colors(), &[bg, Color::new(255, 0, 0)]);
//!         assert_eq!(assets.shiny_palette.colors(), &[bg, Color::new(0, 0, 255)]);
//!     }
//!     ValidationResult::Failure(failure) => panic!("{:?}", failure.issues),
//! }
//! ```
//!
//! # Stages
//!
//! - [`Palette::extract`]: distinct colors in first-seen order.
//! - [`validate_sizes`]: equal cardinality, at most 16 colors each.
//! - [`move_background_first`]: majority corner color into slot 0.
//! - [`map_palettes`]: plurality vote over co-located pixels, with
//!   first-seen tie-break and ambiguity reporting.
//! - [`highlight_problem_pixels`]: magenta diff of disagreeing pixels.
//! - [`IndexedImage`] and [`to_jasc`]: serializable outputs.
//! - [`check_icon`]: icon colors outside a reference palette.
//!
//! # Errors
//!
//! Problems with submitted art are [`Issue`]s inside
//! [`ValidationResult::Failure`]. [`EngineError`] is reserved for broken
//! invariants between stages (a palette that was not extracted from its
//! buffer, misaligned buffers) and should halt the run.

pub mod align;
pub mod buffer;
pub mod color;
pub mod error;
pub mod icon;
pub mod issue;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod sheet;


pub use align::{
    highlight_problem_pixels, map_palettes, Alignment, IndexMapping, Rendering, VoteHistogram,
};
pub use buffer::PixelBuffer;
pub use color::Color;
pub use error::EngineError;
pub use icon::check_icon;
pub use issue::{ColorCount, ImageRole, Issue};
pub use output::{to_jasc, IndexedImage};
pub use palette::{
    detect_background, move_background_first, validate_sizes, Palette, HARDWARE_PALETTE_SIZE,
};
pub use pipeline::{
    choose_primary, validate_spritesheet, SpriteAssets, ValidationFailure, ValidationResult,
};
pub use sheet::{SpriteSheet, QUADRANT_SIZE, SHEET_HEIGHT, SHEET_WIDTH};
