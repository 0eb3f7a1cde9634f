// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of steps in each direction, for factors `0.0, 0.1, .., 1.0`.
pub const STEP_COUNT: usize = 11;

/// The label of the last step, ie, factor `1.0` scaled by 10.
pub const MAX_STEP: u8 = 10;

/// Step label (`"0"` .. `"10"`) to lowercase `#rrggbb`. Iteration follows insertion
/// order, which is increasing factor.
pub type PaletteMap = IndexMap<String, String>;

/// The tints and shades generated from one base color.
///
/// When produced by [`crate::generate_palette`] both maps have exactly [`STEP_COUNT`]
/// entries keyed `"0"`, `"1"`, .., `"10"` in that order. The JSON form is:
///
/// ```json
/// { "tints": { "0": "#336699", .., "10": "#ffffff" },
///   "shades": { "0": "#000000", .., "10": "#336699" } }
/// ```
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct PaletteResult {
    pub tints: PaletteMap,
    pub shades: PaletteMap,
}

impl PaletteResult {
    /// Both maps have one entry per step, keyed in ascending order.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let has_expected_keys = |map: &PaletteMap| {
            map.len() == STEP_COUNT
                && map
                    .keys()
                    .zip(0..=MAX_STEP)
                    .all(|(key, step)| *key == step.to_string())
        };
        has_expected_keys(&self.tints) && has_expected_keys(&self.shades)
    }

    /// Total number of colors, tints and shades.
    #[must_use]
    pub fn len(&self) -> usize { self.tints.len() + self.shades.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tints.is_empty() && self.shades.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_incomplete() {
        let it = PaletteResult::default();
        assert!(it.is_empty());
        assert!(!it.is_complete());
    }

    #[test]
    fn test_out_of_order_keys_are_incomplete() {
        let mut it = PaletteResult::default();
        for step in (0..=MAX_STEP).rev() {
            it.tints.insert(step.to_string(), "#000000".into());
            it.shades.insert(step.to_string(), "#000000".into());
        }
        assert_eq!(it.len(), 2 * STEP_COUNT);
        assert!(!it.is_complete());
    }
}
