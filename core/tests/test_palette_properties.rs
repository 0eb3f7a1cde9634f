// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties that hold for every valid base color, checked over a spread of colors.

use test_case::test_case;
use tintshade_core::{CommonError, CommonErrorType, PaletteResult, RgbColor, STEP_COUNT,
                     assert_eq2, generate_palette, hex_to_rgb, rgb_to_hex};

fn sample_colors() -> Vec<String> {
    let mut acc = vec![];
    for red in (0..=255_u8).step_by(51) {
        for green in (0..=255_u8).step_by(85) {
            for blue in [0_u8, 1, 15, 16, 127, 128, 254, 255] {
                acc.push(format!("#{red:02X}{green:02x}{blue:02X}"));
            }
        }
    }
    acc
}

fn normalize(hex: &str) -> String {
    format!("#{}", hex.trim_start_matches('#').to_lowercase())
}

#[test]
fn test_round_trip_is_lowercase_identity() {
    for hex in sample_colors() {
        let RgbColor { red, green, blue } = hex_to_rgb(&hex).unwrap();
        assert_eq2!(rgb_to_hex(red, green, blue), normalize(&hex));
    }
}

#[test]
fn test_palette_end_points() {
    for hex in sample_colors() {
        let palette = generate_palette(&hex).unwrap();
        assert_eq2!(palette.tints["0"], normalize(&hex));
        assert_eq2!(palette.tints["10"], "#ffffff");
        assert_eq2!(palette.shades["0"], "#000000");
        assert_eq2!(palette.shades["10"], normalize(&hex));
    }
}

#[test]
fn test_palette_shape() {
    for hex in sample_colors() {
        let palette = generate_palette(&hex).unwrap();
        assert!(palette.is_complete(), "incomplete palette for {hex}");
        assert_eq2!(palette.tints.len(), STEP_COUNT);
        assert_eq2!(palette.shades.len(), STEP_COUNT);
        assert!(
            palette
                .tints
                .values()
                .chain(palette.shades.values())
                .all(|it| it.len() == 7 && *it == it.to_lowercase())
        );
    }
}

/// Tints never get darker and shades never get lighter as the step goes up.
#[test]
fn test_palette_is_monotonic_per_channel() {
    let channels = |hex: &String| {
        let it = hex_to_rgb(hex).unwrap();
        [it.red, it.green, it.blue]
    };
    for hex in sample_colors() {
        let PaletteResult { tints, shades } = generate_palette(&hex).unwrap();
        let tints: Vec<_> = tints.values().map(channels).collect();
        let shades: Vec<_> = shades.values().map(channels).collect();
        for pair in tints.windows(2) {
            assert!((0..3).all(|it| pair[0][it] <= pair[1][it]), "{hex}");
        }
        for pair in shades.windows(2) {
            assert!((0..3).all(|it| pair[0][it] <= pair[1][it]), "{hex}");
        }
    }
}

#[test]
fn test_336699_midpoint() {
    let palette = generate_palette("#336699").unwrap();
    // r: round(51 + (255 - 51) * 0.5) = 153 = 0x99.
    assert!(palette.tints["5"].starts_with("#99"));
    assert_eq2!(palette.tints["5"], "#99b3cc");
}

#[test_case("12345"; "too short")]
#[test_case("#gg0000"; "non hex digit")]
#[test_case("red"; "named color")]
#[test_case(""; "empty")]
fn test_invalid_inputs(input: &str) {
    for report in [
        hex_to_rgb(input).unwrap_err(),
        generate_palette(input).unwrap_err(),
    ] {
        assert!(CommonError::is_error_type(
            &report,
            CommonErrorType::InvalidHexColorFormat
        ));
    }
}
