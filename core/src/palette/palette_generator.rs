// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Generate tints (toward white) and shades (toward black) from a base color.
//!
//! The factor runs `0.0, 0.1, .., 1.0` for both directions, but it means different
//! things:
//!
//! | factor | tint       | shade      |
//! |--------|------------|------------|
//! | `0.0`  | base color | black      |
//! | `1.0`  | white      | base color |
//!
//! Each channel is blended independently, then rounded half away from zero.

use crate::{CommonResult, MAX_STEP, PaletteResult, RgbColor, hex_to_rgb};

/// One step of the palette, before it is flattened into hex strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteStep {
    /// `"0"` .. `"10"`.
    pub label: String,
    /// `0.0` .. `1.0`.
    pub factor: f64,
    pub tint: RgbColor,
    pub shade: RgbColor,
}

/// Parse `base_hex` and generate its palette.
///
/// # Errors
///
/// Returns [`crate::CommonErrorType::InvalidHexColorFormat`] if `base_hex` isn't a 6
/// digit hex color. No partial palette is ever returned.
pub fn generate_palette(base_hex: &str) -> CommonResult<PaletteResult> {
    let base = hex_to_rgb(base_hex)?;
    let palette = generate_palette_from_rgb(base);
    tracing::debug!(
        message = "Generated palette",
        base = %base,
        colors = palette.len()
    );
    Ok(palette)
}

/// Same as [`generate_palette`] for an already parsed color. This can't fail.
#[must_use]
pub fn generate_palette_from_rgb(base: RgbColor) -> PaletteResult {
    let mut palette = PaletteResult::default();
    for PaletteStep {
        label, tint, shade, ..
    } in palette_steps(base)
    {
        palette.tints.insert(label.clone(), tint.to_hex());
        palette.shades.insert(label, shade.to_hex());
    }
    palette
}

/// All the steps for `base`, in increasing factor order.
#[must_use]
pub fn palette_steps(base: RgbColor) -> Vec<PaletteStep> {
    step_factors()
        .map(|(label, factor)| PaletteStep {
            label,
            factor,
            tint: base.tint(factor),
            shade: base.shade(factor),
        })
        .collect()
}

/// `("0", 0.0), ("1", 0.1), .., ("10", 1.0)`. The factor is computed from the step
/// index so there is no accumulated floating point error.
pub fn step_factors() -> impl Iterator<Item = (String, f64)> {
    (0..=MAX_STEP).map(|step| (step.to_string(), f64::from(step) / f64::from(MAX_STEP)))
}

/// Blend `channel` toward 255.
#[must_use]
pub fn tint_channel(channel: u8, factor: f64) -> u8 {
    let channel = f64::from(channel);
    round_into_channel(channel + (255.0 - channel) * factor)
}

/// Scale `channel` by `factor`, so `0.0` is black and `1.0` leaves it unchanged.
#[must_use]
pub fn shade_channel(channel: u8, factor: f64) -> u8 {
    round_into_channel(f64::from(channel) * factor)
}

/// For inputs in `0..=255` and factors in `0.0..=1.0` the result is always in range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_into_channel(value: f64) -> u8 {
    let rounded = value.round();
    debug_assert!(
        (0.0..=255.0).contains(&rounded),
        "channel out of range: {rounded}"
    );
    rounded as u8
}

mod rgb_color_blend_impl {
    use super::{RgbColor, shade_channel, tint_channel};

    impl RgbColor {
        /// Blend toward white. `factor` must be in `0.0..=1.0`.
        #[must_use]
        pub fn tint(&self, factor: f64) -> Self {
            debug_assert!((0.0..=1.0).contains(&factor));
            Self {
                red: tint_channel(self.red, factor),
                green: tint_channel(self.green, factor),
                blue: tint_channel(self.blue, factor),
            }
        }

        /// Blend toward black. `factor` must be in `0.0..=1.0`, and `0.0` is black.
        #[must_use]
        pub fn shade(&self, factor: f64) -> Self {
            debug_assert!((0.0..=1.0).contains(&factor));
            Self {
                red: shade_channel(self.red, factor),
                green: shade_channel(self.green, factor),
                blue: shade_channel(self.blue, factor),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{CommonError, CommonErrorType, STEP_COUNT, assert_eq2};

    #[test]
    fn test_336699_anchor_points() {
        let palette = generate_palette("#336699").unwrap();
        assert_eq2!(palette.tints["0"], "#336699");
        assert_eq2!(palette.tints["5"], "#99b3cc");
        assert_eq2!(palette.tints["10"], "#ffffff");
        assert_eq2!(palette.shades["0"], "#000000");
        assert_eq2!(palette.shades["5"], "#1a334d");
        assert_eq2!(palette.shades["10"], "#336699");
    }

    #[test]
    fn test_keys_are_integer_labels_in_order() {
        let palette = generate_palette("abcdef").unwrap();
        let expected: Vec<String> = (0..=10).map(|it: u8| it.to_string()).collect();
        assert_eq2!(palette.tints.keys().cloned().collect::<Vec<_>>(), expected);
        assert_eq2!(palette.shades.keys().cloned().collect::<Vec<_>>(), expected);
        assert_eq2!(palette.tints.len(), STEP_COUNT);
        assert!(palette.is_complete());
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        let report = generate_palette("#12345").unwrap_err();
        assert!(CommonError::is_error_type(
            &report,
            CommonErrorType::InvalidHexColorFormat
        ));
    }

    #[test]
    fn test_step_factors_are_exact_tenths() {
        let factors: Vec<(String, f64)> = step_factors().collect();
        assert_eq2!(factors.len(), STEP_COUNT);
        assert_eq2!(factors[0], ("0".to_string(), 0.0));
        assert_eq2!(factors[3], ("3".to_string(), 0.3));
        assert_eq2!(factors[7], ("7".to_string(), 0.7));
        assert_eq2!(factors[10], ("10".to_string(), 1.0));
    }

    // 102 + 153 * 0.5 = 178.5 rounds up.
    #[test_case(102, 0.5, 179; "half rounds up")]
    #[test_case(0, 0.1, 26; "black tint")]
    #[test_case(255, 0.3, 255; "white stays white")]
    #[test_case(51, 0.0, 51; "factor zero is identity")]
    #[test_case(1, 1.0, 255; "factor one is white")]
    fn test_tint_channel(channel: u8, factor: f64, expected: u8) {
        assert_eq2!(tint_channel(channel, factor), expected);
    }

    // 51 * 0.5 = 25.5 rounds up.
    #[test_case(51, 0.5, 26; "half rounds up")]
    #[test_case(255, 0.1, 26; "white shade")]
    #[test_case(200, 0.0, 0; "factor zero is black")]
    #[test_case(200, 1.0, 200; "factor one is identity")]
    fn test_shade_channel(channel: u8, factor: f64, expected: u8) {
        assert_eq2!(shade_channel(channel, factor), expected);
    }

    #[test]
    fn test_steps_carry_rgb_and_factor() {
        let steps = palette_steps(RgbColor::from_u8(0, 128, 255));
        assert_eq2!(steps.len(), STEP_COUNT);
        assert_eq2!(steps[0].tint, RgbColor::from_u8(0, 128, 255));
        assert_eq2!(steps[0].shade, RgbColor::from_u8(0, 0, 0));
        assert_eq2!(steps[10].tint, RgbColor::from_u8(255, 255, 255));
        assert_eq2!(steps[10].shade, RgbColor::from_u8(0, 128, 255));
        assert_eq2!(steps[10].label, "10");
    }
}
