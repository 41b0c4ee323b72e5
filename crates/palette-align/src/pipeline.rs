//! End-to-end spritesheet validation.

use crate::align::{highlight_problem_pixels, map_palettes, Rendering};
use crate::buffer::PixelBuffer;
use crate::error::EngineError;
use crate::issue::{ImageRole, Issue};
use crate::output::IndexedImage;
use crate::palette::{move_background_first, validate_sizes, Palette};
use crate::sheet::{back_view, front_view, SpriteSheet};

/// Artifacts of a sheet that passed validation.
///
/// Both palettes are in the same slot order: slot `i` colors the same pixels
/// in the normal and the shiny rendering, so `front` and `back` render the
/// shiny variant when paired with `shiny_palette`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAssets {
    pub front: IndexedImage,
    pub back: IndexedImage,
    pub normal_palette: Palette,
    pub shiny_palette: Palette,
    /// The rendering whose palette drove the alignment.
    pub primary: ImageRole,
}

/// Issues found in a sheet, plus a diff image when pixels could be blamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub issues: Vec<Issue>,
    /// The secondary rendering at working resolution, disagreeing pixels in
    /// magenta.
    pub diff: Option<PixelBuffer>,
}

/// Terminal outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success(SpriteAssets),
    Failure(ValidationFailure),
}

impl ValidationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success(_))
    }
}

/// The rendering that drives the vote: shiny when it has strictly fewer
/// colors than normal, normal otherwise.
pub fn choose_primary(normal: &Palette, shiny: &Palette) -> ImageRole {
    if shiny.len() < normal.len() {
        ImageRole::Shiny
    } else {
        ImageRole::Normal
    }
}

/// Validate a sheet and, if it is consistent, produce its indexed assets.
///
/// 1. Extract both palettes; size problems end the run with no diff.
/// 2. Put the primary rendering's background color in slot 0.
/// 3. Vote the secondary palette into primary slot order.
/// 4. Ambiguous slots end the run with a highlighted diff of the secondary
///    rendering; otherwise index the normal front and back views.
///
/// # Errors
///
/// Only contract violations. Problems with the art are returned as
/// [`ValidationResult::Failure`].
pub fn validate_spritesheet(sheet: &SpriteSheet) -> Result<ValidationResult, EngineError> {
    let normal_palette = Palette::extract(sheet.normal());
    let shiny_palette = Palette::extract(sheet.shiny());

    tracing::debug!(
        normal_colors = normal_palette.len(),
        shiny_colors = shiny_palette.len(),
        "Extracted palettes"
    );

    let issues = validate_sizes(
        (ImageRole::Normal, &normal_palette),
        (ImageRole::Shiny, &shiny_palette),
    );
    if !issues.is_empty() {
        return Ok(ValidationResult::Failure(ValidationFailure {
            issues,
            diff: None,
        }));
    }

    // Sizes are equal past the gate, so this is always Normal here.
    let primary_role = choose_primary(&normal_palette, &shiny_palette);
    let (primary_buffer, primary_palette, secondary_buffer, secondary_palette) =
        match primary_role {
            ImageRole::Normal => (sheet.normal(), &normal_palette, sheet.shiny(), &shiny_palette),
            ImageRole::Shiny => (sheet.shiny(), &shiny_palette, sheet.normal(), &normal_palette),
        };
    tracing::debug!(primary = %primary_role, "Chose primary rendering");

    let primary_palette = move_background_first(primary_palette, primary_buffer)?;
    let primary = Rendering::new(primary_role, &primary_palette, primary_buffer);
    let secondary = Rendering::new(primary_role.other(), secondary_palette, secondary_buffer);

    let alignment = map_palettes(primary, secondary)?;
    if !alignment.is_clean() {
        let diff = highlight_problem_pixels(
            secondary,
            &alignment.problem_colors,
            primary,
            &alignment.mapping,
        )?;
        return Ok(ValidationResult::Failure(ValidationFailure {
            issues: alignment.issues,
            diff: Some(diff),
        }));
    }

    let aligned_secondary = alignment.mapping.apply(secondary_palette)?;
    let (normal_palette, shiny_palette) = match primary_role {
        ImageRole::Normal => (primary_palette, aligned_secondary),
        ImageRole::Shiny => (aligned_secondary, primary_palette),
    };

    let front = IndexedImage::from_buffer(&front_view(sheet.normal())?, &normal_palette)?;
    let back = IndexedImage::from_buffer(&back_view(sheet.normal())?, &normal_palette)?;

    Ok(ValidationResult::Success(SpriteAssets {
        front,
        back,
        normal_palette,
        shiny_palette,
        primary: primary_role,
    }))
}
