//! Battle spritesheet geometry.
//!
//! A submitted sheet is 256×64: four 64×64 quadrants, left to right,
//! normal front, shiny front, normal back, shiny back. The engine works on
//! two 128×64 buffers that put each rendering's front and back side by side,
//! so one extracted palette covers both views in a consistent order.

use crate::buffer::PixelBuffer;
use crate::error::EngineError;

/// Edge length of one sprite view.
pub const QUADRANT_SIZE: u32 = 64;
/// Submitted sheet width.
pub const SHEET_WIDTH: u32 = QUADRANT_SIZE * 4;
/// Submitted sheet height.
pub const SHEET_HEIGHT: u32 = QUADRANT_SIZE;
/// Width of a working buffer (front | back).
pub const WORKING_WIDTH: u32 = QUADRANT_SIZE * 2;

/// The normal and shiny renderings of one sprite, each as `[front | back]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    normal: PixelBuffer,
    shiny: PixelBuffer,
}

impl SpriteSheet {
    /// Split a decoded 256×64 sheet into its working buffers.
    ///
    /// # Errors
    ///
    /// [`EngineError::SheetDimensions`] for any other size.
    pub fn split(sheet: &PixelBuffer) -> Result<Self, EngineError> {
        if sheet.width() != SHEET_WIDTH || sheet.height() != SHEET_HEIGHT {
            return Err(EngineError::SheetDimensions {
                width: sheet.width(),
                height: sheet.height(),
                expected_width: SHEET_WIDTH,
                expected_height: SHEET_HEIGHT,
            });
        }
        let quadrant = |i: u32| sheet.crop(i * QUADRANT_SIZE, 0, QUADRANT_SIZE, QUADRANT_SIZE);

        let normal = quadrant(0)?.hconcat(&quadrant(2)?)?;
        let shiny = quadrant(1)?.hconcat(&quadrant(3)?)?;
        Ok(Self { normal, shiny })
    }

    /// Build from already-assembled working buffers.
    ///
    /// # Errors
    ///
    /// [`EngineError::SheetDimensions`] unless both are 128×64.
    pub fn from_working(normal: PixelBuffer, shiny: PixelBuffer) -> Result<Self, EngineError> {
        for buffer in [&normal, &shiny] {
            if buffer.width() != WORKING_WIDTH || buffer.height() != QUADRANT_SIZE {
                return Err(EngineError::SheetDimensions {
                    width: buffer.width(),
                    height: buffer.height(),
                    expected_width: WORKING_WIDTH,
                    expected_height: QUADRANT_SIZE,
                });
            }
        }
        Ok(Self { normal, shiny })
    }

    /// Normal rendering, `[front | back]`.
    pub fn normal(&self) -> &PixelBuffer {
        &self.normal
    }

    /// Shiny rendering, `[front | back]`.
    pub fn shiny(&self) -> &PixelBuffer {
        &self.shiny
    }
}

/// Left half of a working buffer.
pub fn front_view(working: &PixelBuffer) -> Result<PixelBuffer, EngineError> {
    working.crop(0, 0, QUADRANT_SIZE, QUADRANT_SIZE)
}

/// Right half of a working buffer.
pub fn back_view(working: &PixelBuffer) -> Result<PixelBuffer, EngineError> {
    working.crop(QUADRANT_SIZE, 0, QUADRANT_SIZE, QUADRANT_SIZE)
}
