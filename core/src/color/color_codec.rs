// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert between hex color strings and [`RgbColor`].

use nom::{Parser, combinator::all_consuming};

use crate::{CommonError, CommonErrorType, CommonResult, RgbColor, parse_hex_color};

/// Parse `#rrggbb` (the `#` is optional, digits are case insensitive) into an
/// [`RgbColor`].
///
/// Anything else is rejected: 3 digit shorthand, 8 digit colors w/ alpha, named colors,
/// surrounding whitespace, trailing characters, and the empty string.
///
/// # Errors
///
/// Returns [`CommonErrorType::InvalidHexColorFormat`] if the whole `hex` string is not
/// a 6 digit hex color.
pub fn hex_to_rgb(hex: &str) -> CommonResult<RgbColor> {
    match all_consuming(parse_hex_color).parse(hex) {
        Ok((_, color)) => Ok(color),
        Err(_) => {
            tracing::warn!(message = "Invalid hex color", input = ?hex);
            CommonError::new_error_result(
                CommonErrorType::InvalidHexColorFormat,
                &format!("Invalid hex color format: {hex:?}"),
            )
        }
    }
}

/// Format the channels as lowercase `#rrggbb`. Each channel is zero padded to 2 digits so
/// the result is always 7 characters long.
#[must_use]
pub fn rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    format!("#{red:02x}{green:02x}{blue:02x}")
}
