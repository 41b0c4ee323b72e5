//! Insertion-ordered vote counter.

use std::collections::HashMap;

use crate::color::Color;
use crate::issue::ColorCount;

/// Per-slot tally of which secondary colors sit under one primary color.
///
/// Entries keep the order in which colors were first recorded. That order
/// is the tie-break: when several colors share the highest count, the one
/// recorded first wins.
#[derive(Debug, Clone, Default)]
pub struct VoteHistogram {
    entries: Vec<ColorCount>,
    slots: HashMap<Color, usize>,
}

impl VoteHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one vote for `color`.
    pub fn record(&mut self, color: Color) {
        match self.slots.get(&color) {
            Some(&slot) => self.entries[slot].pixels += 1,
            None => {
                self.slots.insert(color, self.entries.len());
                self.entries.push(ColorCount::new(color, 1));
            }
        }
    }

    /// Number of distinct colors voted for.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// More than one distinct color received votes.
    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn count(&self, color: Color) -> usize {
        self.slots
            .get(&color)
            .map_or(0, |&slot| self.entries[slot].pixels)
    }

    /// Entries in first-recorded order.
    pub fn entries(&self) -> &[ColorCount] {
        &self.entries
    }

    /// The highest-count color; earliest recorded among equals.
    pub fn winner(&self) -> Option<Color> {
        let mut best: Option<&ColorCount> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.pixels > b.pixels) {
                best = Some(entry);
            }
        }
        best.map(|b| b.color)
    }

    /// Entries by descending count, ties in first-recorded order.
    pub fn by_frequency(&self) -> Vec<ColorCount> {
        ColorCount::sorted_by_frequency(self.entries.clone())
    }
}
