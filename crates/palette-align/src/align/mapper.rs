//! Plurality-vote palette correspondence.
//!
//! For every primary slot `i`, each pixel painted with `primary[i]` casts one
//! vote for the secondary color at the same position. The most-voted
//! secondary color becomes `mapping[i]`. A slot that received votes for more
//! than one color is ambiguous: the losing colors are problem colors and the
//! slot is reported with its full vote count.

use std::collections::HashSet;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::EngineError;
use crate::issue::{ImageRole, Issue};
use crate::palette::Palette;

use super::histogram::VoteHistogram;
use super::mapping::IndexMapping;

/// One rendering taking part in an alignment: its role, pixels and palette.
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    pub role: ImageRole,
    pub palette: &'a Palette,
    pub buffer: &'a PixelBuffer,
}

impl<'a> Rendering<'a> {
    pub fn new(role: ImageRole, palette: &'a Palette, buffer: &'a PixelBuffer) -> Self {
        Self {
            role,
            palette,
            buffer,
        }
    }
}

/// Outcome of [`map_palettes`].
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    /// Primary slot to secondary slot.
    pub mapping: IndexMapping,
    /// Secondary colors that lost a vote somewhere.
    pub problem_colors: HashSet<Color>,
    /// One [`Issue::AmbiguousCorrespondence`] per ambiguous primary slot,
    /// in primary slot order.
    pub issues: Vec<Issue>,
}

impl Alignment {
    /// No slot was ambiguous.
    pub fn is_clean(&self) -> bool {
        self.problem_colors.is_empty()
    }
}

/// Infer which secondary slot each primary slot corresponds to.
///
/// # Errors
///
/// Contract violations only: mismatched buffer sizes, a pixel whose color is
/// missing from its own palette, or a primary palette color that never
/// occurs in the primary buffer.
pub fn map_palettes(
    primary: Rendering<'_>,
    secondary: Rendering<'_>,
) -> Result<Alignment, EngineError> {
    primary.buffer.ensure_aligned(secondary.buffer)?;

    let mut votes = vec![VoteHistogram::new(); primary.palette.len()];
    for (index, (&p, &s)) in primary
        .buffer
        .pixels()
        .iter()
        .zip(secondary.buffer.pixels())
        .enumerate()
    {
        let slot = primary
            .palette
            .index_of(p)
            .ok_or(EngineError::ColorNotInPalette { color: p, index })?;
        if !secondary.palette.contains(s) {
            return Err(EngineError::ColorNotInPalette { color: s, index });
        }
        votes[slot].record(s);
    }

    let mut alignment = Alignment::default();
    let mut targets = Vec::with_capacity(votes.len());

    for (slot, histogram) in votes.iter().enumerate() {
        let primary_color = primary.palette.colors()[slot];
        let winner = histogram
            .winner()
            .ok_or(EngineError::ColorUnused(primary_color))?;
        // Membership was checked while voting.
        let target = secondary
            .palette
            .index_of(winner)
            .ok_or(EngineError::ColorUnused(winner))?;

        tracing::debug!(
            slot,
            %primary_color,
            %winner,
            candidates = histogram.len(),
            "Resolved palette slot"
        );

        if histogram.is_ambiguous() {
            alignment.issues.push(Issue::AmbiguousCorrespondence {
                primary: primary.role,
                secondary: secondary.role,
                color: primary_color,
                candidates: histogram.by_frequency(),
            });
            alignment.problem_colors.extend(
                histogram
                    .entries()
                    .iter()
                    .map(|e| e.color)
                    .filter(|&c| c != winner),
            );
        }
        targets.push(target);
    }

    alignment.mapping = IndexMapping::new(targets);
    Ok(alignment)
}
