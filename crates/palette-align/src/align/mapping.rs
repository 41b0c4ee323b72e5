//! Slot correspondence between two palettes.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::EngineError;
use crate::palette::Palette;

/// A total function from primary slot to secondary slot.
///
/// `mapping[i]` is the secondary slot whose color covers the pixels that the
/// primary palette's slot `i` covers. The mapping is not required to be
/// injective; two primary slots landing on the same secondary slot only
/// happens alongside an ambiguous correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexMapping {
    targets: Vec<usize>,
}

impl IndexMapping {
    pub fn new(targets: Vec<usize>) -> Self {
        Self { targets }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Secondary slot for primary slot `slot`.
    #[inline]
    pub fn get(&self, slot: usize) -> Option<usize> {
        self.targets.get(slot).copied()
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    pub fn is_injective(&self) -> bool {
        let mut seen = vec![false; self.targets.iter().max().map_or(0, |&m| m + 1)];
        self.targets
            .iter()
            .all(|&t| !std::mem::replace(&mut seen[t], true))
    }

    /// Reorder `secondary` into primary slot order:
    /// `result[i] = secondary[mapping[i]]`.
    ///
    /// # Errors
    ///
    /// [`EngineError::DuplicateColor`] when the mapping is not injective, and
    /// [`EngineError::SlotOutOfRange`] when a target is not a slot of `secondary`.
    pub fn apply(&self, secondary: &Palette) -> Result<Palette, EngineError> {
        let colors = self
            .targets
            .iter()
            .map(|&slot| {
                secondary.get(slot).ok_or(EngineError::SlotOutOfRange {
                    slot,
                    len: secondary.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::try_from_colors(colors)
    }

    /// For every secondary color the mapping reaches, the primary color that
    /// maps onto it. When several primary slots share a target, the highest
    /// slot wins.
    pub fn inverse_colors(&self, primary: &Palette, secondary: &Palette) -> HashMap<Color, Color> {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(slot, &target)| Some((secondary.get(target)?, primary.get(slot)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: Color = Color::new(1, 0, 0);
    const B: Color = Color::new(2, 0, 0);
    const C: Color = Color::new(3, 0, 0);
    const X: Color = Color::new(0, 1, 0);
    const Y: Color = Color::new(0, 2, 0);
    const Z: Color = Color::new(0, 3, 0);

    #[test]
    fn test_apply_reorders_secondary() {
        let secondary = Palette::try_from_colors([X, Y, Z]).unwrap();
        let mapping = IndexMapping::new(vec![2, 0, 1]);
        assert_eq!(mapping.apply(&secondary).unwrap().colors(), &[Z, X, Y]);
    }

    #[test]
    fn test_apply_non_injective_fails() {
        let secondary = Palette::try_from_colors([X, Y]).unwrap();
        let mapping = IndexMapping::new(vec![1, 1]);
        assert!(!mapping.is_injective());
        assert_eq!(
            mapping.apply(&secondary),
            Err(EngineError::DuplicateColor(Y))
        );
    }

    #[test]
    fn test_apply_out_of_range() {
        let secondary = Palette::try_from_colors([X]).unwrap();
        let mapping = IndexMapping::new(vec![3]);
        assert_eq!(
            mapping.apply(&secondary),
            Err(EngineError::SlotOutOfRange { slot: 3, len: 1 })
        );
    }

    #[test]
    fn test_inverse_last_slot_wins() {
        let primary = Palette::try_from_colors([A, B, C]).unwrap();
        let secondary = Palette::try_from_colors([X, Y, Z]).unwrap();
        let mapping = IndexMapping::new(vec![1, 1, 0]);
        let inverse = mapping.inverse_colors(&primary, &secondary);
        assert_eq!(inverse.len(), 2);
        assert_eq!(inverse[&Y], B);
        assert_eq!(inverse[&X], C);
        assert!(!inverse.contains_key(&Z));
    }

    #[test]
    fn test_is_injective() {
        assert!(IndexMapping::new(vec![]).is_injective());
        assert!(IndexMapping::new(vec![2, 0, 1]).is_injective());
        assert!(!IndexMapping::new(vec![0, 2, 0]).is_injective());
    }
}
