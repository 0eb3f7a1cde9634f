// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_ansi_color::{ColorSupport, global_color_support, red};
use tintshade_core::{PaletteResult, SwatchKind};

pub const TINTS_HEADING: &str = "Tints (toward white)";
pub const SHADES_HEADING: &str = "Shades (toward black)";

#[must_use]
pub fn palette_summary_msg(palette: &PaletteResult) -> String {
    format!(
        "🎨 {} tints and {} shades",
        palette.tints.len(),
        palette.shades.len()
    )
}

#[must_use]
pub fn heading_for(kind: SwatchKind) -> &'static str {
    match kind {
        SwatchKind::Tint => TINTS_HEADING,
        SwatchKind::Shade => SHADES_HEADING,
    }
}

#[must_use]
pub fn error_msg(message: &str) -> String {
    match global_color_support::detect() {
        ColorSupport::NoColor => format!("Error: {message}"),
        _ => format!("{} {message}", red("Error:")),
    }
}

#[must_use]
pub fn goodbye_msg(request_count: usize) -> String {
    format!("Handled {request_count} request(s). Goodbye 👋")
}
