// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::{CommonResult, hex_to_rgb, rgb_to_hex};

/// A 24 bit color. Each channel is a [u8] so it is always in the range `0..=255`.
///
/// This is an immutable value: the tint & shade transforms in [`crate::palette`] return
/// new instances.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

mod rgb_color_impl {
    use super::{CommonResult, RgbColor, hex_to_rgb, rgb_to_hex};

    impl RgbColor {
        #[must_use]
        pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

        /// # Errors
        ///
        /// Returns [`crate::CommonErrorType::InvalidHexColorFormat`] if `input` is not a
        /// 6 digit hex color.
        pub fn try_from_hex_color(input: &str) -> CommonResult<RgbColor> {
            hex_to_rgb(input)
        }

        /// Lowercase `#rrggbb`.
        #[must_use]
        pub fn to_hex(&self) -> String { rgb_to_hex(self.red, self.green, self.blue) }

        /// Each channel scaled into `0.0..=1.0`, which is what hosts usually expect for
        /// fills.
        #[must_use]
        pub fn as_normalized(&self) -> (f32, f32, f32) {
            (
                f32::from(self.red) / 255.0,
                f32::from(self.green) / 255.0,
                f32::from(self.blue) / 255.0,
            )
        }
    }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.to_hex()) }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self { red, green, blue } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new() {
        let value = RgbColor::from_u8(1, 2, 3);
        assert_eq2!(value.red, 1);
        assert_eq2!(value.green, 2);
        assert_eq2!(value.blue, 3);
        assert_eq2!(RgbColor::from((1, 2, 3)), value);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let value = RgbColor::from_u8(0xAB, 0x0C, 0xFF);
        assert_eq2!(value.to_string(), "#ab0cff");
    }

    #[test]
    fn test_try_from_hex_color() {
        let value = RgbColor::try_from_hex_color("#FF8000").unwrap();
        assert_eq2!(value, RgbColor::from_u8(255, 128, 0));
        assert!(RgbColor::try_from_hex_color("orange").is_err());
    }

    #[test]
    fn test_as_normalized() {
        let (r, g, b) = RgbColor::from_u8(255, 0, 51).as_normalized();
        assert!((r - 1.0).abs() < f32::EPSILON);
        assert!(g.abs() < f32::EPSILON);
        assert!((b - 0.2).abs() < 1e-6);
    }
}
