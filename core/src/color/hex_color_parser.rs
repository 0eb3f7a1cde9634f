// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbColor`]
//! struct. The hex color string can be in the following formats: `#RRGGBB` or `RRGGBB`,
//! eg: `#FF0000` or `ff0000` for red. Digits are case insensitive.
//!
//! The parser only consumes the color, and returns whatever follows it as the remainder.
//! Use [`crate::hex_to_rgb`] to reject trailing input.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map_res, opt}};

use crate::RgbColor;

/// Parse function that generates an [`RgbColor`] struct from a valid hex color string.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input doesn't start with 6 hex digits (after the
/// optional `#`).
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((input, RgbColor { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true` items
    /// will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Exactly 2 hex digits, ie, one color channel.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}
