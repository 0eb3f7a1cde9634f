// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{PaletteMap, PaletteResult, RgbColor, hex_to_rgb};

/// Height of one swatch in host units.
pub const SWATCH_HEIGHT: f32 = 100.0;

/// Vertical space between two stacked swatches.
pub const SWATCH_GAP: f32 = 10.0;

/// Tints are drawn w/ rounded corners, shades are square.
pub const TINT_CORNER_RADIUS: f32 = 8.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwatchKind {
    Tint,
    Shade,
}

impl Display for SwatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SwatchKind::Tint => write!(f, "tint"),
            SwatchKind::Shade => write!(f, "shade"),
        }
    }
}

/// One rectangle for the host to draw.
#[derive(Clone, PartialEq, Debug)]
pub struct Swatch {
    pub kind: SwatchKind,
    /// Step label, `"0"` .. `"10"`.
    pub label: String,
    pub hex: String,
    pub color: RgbColor,
    pub y_offset: f32,
    pub height: f32,
    pub corner_radius: Option<f32>,
}

impl Swatch {
    /// Solid fill w/ each channel in `0.0..=1.0`.
    #[must_use]
    pub fn fill(&self) -> (f32, f32, f32) { self.color.as_normalized() }
}

/// Stack every tint, then every shade, top to bottom, in the palette's key order.
///
/// Entries whose value isn't a valid hex color are skipped, and they don't take up any
/// vertical space. This can only happen for a hand built [`PaletteResult`].
#[must_use]
pub fn layout_swatches(palette: &PaletteResult) -> Vec<Swatch> {
    let mut acc = Vec::with_capacity(palette.len());
    let mut y_offset = 0.0;
    layout_into(&mut acc, &mut y_offset, &palette.tints, SwatchKind::Tint);
    layout_into(&mut acc, &mut y_offset, &palette.shades, SwatchKind::Shade);
    acc
}

fn layout_into(
    acc: &mut Vec<Swatch>,
    y_offset: &mut f32,
    map: &PaletteMap,
    kind: SwatchKind,
) {
    for (label, hex) in map {
        let Ok(color) = hex_to_rgb(hex) else {
            tracing::warn!(message = "Skipping swatch", %kind, %label, %hex);
            continue;
        };
        acc.push(Swatch {
            kind,
            label: label.clone(),
            hex: hex.clone(),
            color,
            y_offset: *y_offset,
            height: SWATCH_HEIGHT,
            corner_radius: match kind {
                SwatchKind::Tint => Some(TINT_CORNER_RADIUS),
                SwatchKind::Shade => None,
            },
        });
        *y_offset += SWATCH_HEIGHT + SWATCH_GAP;
    }
}
