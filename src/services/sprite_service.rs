use palette_align::{
    check_icon, to_jasc, validate_spritesheet, Palette, PixelBuffer, SpriteAssets, SpriteSheet,
    ValidationFailure, ValidationResult,
};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::{AppConfig, Report, SpriteOutputs};
use crate::rendering::{decode_plte, decode_png, encode_diff, encode_sprite, read_png};

/// Validates uploaded art and writes the indexed assets
pub struct SpriteService {
    config: AppConfig,
}

impl SpriteService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validate a spritesheet file and write its outputs into `out_dir`.
    ///
    /// On success the front/back sprites and both palettes are written. On an
    /// alignment failure only the diff images are written. Size problems
    /// write nothing.
    pub fn process_sheet(&self, input: &Path, out_dir: &Path) -> Result<Report, AppError> {
        let decoded = read_png(input)?;
        tracing::info!(
            input = %input.display(),
            width = decoded.width(),
            height = decoded.height(),
            "Processing spritesheet"
        );
        self.process_decoded(&decoded, out_dir)
    }

    /// Same as [`process_sheet`](Self::process_sheet) for an already decoded
    /// sheet.
    pub fn process_decoded(&self, sheet: &PixelBuffer, out_dir: &Path) -> Result<Report, AppError> {
        let sheet = SpriteSheet::split(sheet)?;

        match validate_spritesheet(&sheet)? {
            ValidationResult::Success(assets) => {
                let outputs = self.write_assets(&assets, out_dir)?;
                tracing::info!(
                    colors = assets.normal_palette.len(),
                    primary = %assets.primary,
                    out_dir = %out_dir.display(),
                    "Spritesheet indexed"
                );
                Ok(Report::success(outputs))
            }
            ValidationResult::Failure(ValidationFailure { issues, diff }) => {
                tracing::info!(issues = issues.len(), "Spritesheet rejected");
                let diff = match diff {
                    Some(diff) => Some(self.write_diff(&diff, out_dir)?),
                    None => None,
                };
                Ok(Report::failure(issues, diff))
            }
        }
    }

    /// Check an icon file against the palette of a reference image.
    ///
    /// For an indexed reference, such as a written front sprite, the palette
    /// comes from its PLTE, so colors used only by the back view count too.
    /// Other references contribute the colors their pixels use.
    pub fn check_icon_file(&self, icon: &Path, reference: &Path) -> Result<Report, AppError> {
        let icon_buffer = read_png(icon)?;
        let reference_palette = reference_palette(reference)?;
        tracing::info!(
            icon = %icon.display(),
            reference_colors = reference_palette.len(),
            "Checking icon"
        );

        let icon_palette = Palette::extract(&icon_buffer);
        let issues = check_icon(&icon_buffer, &icon_palette, &reference_palette);
        if issues.is_empty() {
            Ok(Report::passed())
        } else {
            Ok(Report::failure(issues, None))
        }
    }

    fn write_assets(&self, assets: &SpriteAssets, out_dir: &Path) -> Result<SpriteOutputs, AppError> {
        std::fs::create_dir_all(out_dir)?;
        let names = &self.config.outputs;

        let outputs = SpriteOutputs {
            front: out_dir.join(&names.front),
            back: out_dir.join(&names.back),
            normal_palette: out_dir.join(&names.normal_palette),
            shiny_palette: out_dir.join(&names.shiny_palette),
        };

        write_file(&outputs.front, &encode_sprite(&assets.front)?)?;
        write_file(&outputs.back, &encode_sprite(&assets.back)?)?;
        write_file(
            &outputs.normal_palette,
            to_jasc(&assets.normal_palette).as_bytes(),
        )?;
        write_file(
            &outputs.shiny_palette,
            to_jasc(&assets.shiny_palette).as_bytes(),
        )?;

        Ok(outputs)
    }

    /// Write the diff at working resolution and upscaled; returns the
    /// upscaled path.
    fn write_diff(&self, diff: &PixelBuffer, out_dir: &Path) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(out_dir)?;
        let scale = self.config.diff_scale.max(1);
        let names = &self.config.outputs;

        write_file(&out_dir.join(&names.diff), &encode_diff(diff)?)?;

        let scaled_path = out_dir.join(names.scaled_diff(scale));
        write_file(&scaled_path, &encode_diff(&diff.upscale(scale)?)?)?;
        Ok(scaled_path)
    }
}

fn reference_palette(path: &Path) -> Result<Palette, AppError> {
    let bytes = std::fs::read(path)?;
    let in_use = Palette::extract(&decode_png(&bytes)?);
    match decode_plte(&bytes)? {
        Some(entries) => Ok(Palette::from_padded(&entries, &in_use)),
        None => Ok(in_use),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}
