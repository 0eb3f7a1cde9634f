// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tintshade_core
//!
//! Generate a tint & shade palette from a single base color, and hand the results over
//! to a host that draws them as swatches.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [Color codec](#color-codec)
//! - [Palette generator](#palette-generator)
//! - [Host integration](#host-integration)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//! <a id="markdown-introduction" name="introduction"></a>
//!
//! Given a base color like `#336699`, this crate produces 11 tints (blends toward white)
//! and 11 shades (blends toward black), one for each factor `0.0, 0.1, .., 1.0`. Each
//! step is keyed by its label `"0"` through `"10"`.
//!
//! ```
//! use tintshade_core::generate_palette;
//!
//! let palette = generate_palette("#336699").unwrap();
//! assert_eq!(palette.tints["0"], "#336699");
//! assert_eq!(palette.tints["5"], "#99b3cc");
//! assert_eq!(palette.tints["10"], "#ffffff");
//! assert_eq!(palette.shades["0"], "#000000");
//! assert_eq!(palette.shades["10"], "#336699");
//! ```
//!
//! # Color codec
//! <a id="markdown-color-codec" name="color-codec"></a>
//!
//! [`hex_to_rgb`] and [`rgb_to_hex`] convert between `#rrggbb` strings and
//! [`RgbColor`]. Only the 6 digit form is accepted, with or without the leading `#`.
//!
//! # Palette generator
//! <a id="markdown-palette-generator" name="palette-generator"></a>
//!
//! [`generate_palette`] returns a [`PaletteResult`]. Note that the two directions use
//! the factor differently: a tint at factor `0` is the base color, while a shade at
//! factor `0` is black.
//!
//! # Host integration
//! <a id="markdown-host-integration" name="host-integration"></a>
//!
//! A host receives [`HostRequest`]s and implements [`PaletteHost`] to post
//! [`HostResponse`]s and draw [`Swatch`]es. [`handle_host_request`] wires the two
//! together.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod color;
pub mod common;
pub mod decl_macros;
pub mod host;
pub mod logging;
pub mod palette;

// Re-export.
pub use color::*;
pub use common::*;
pub use host::*;
pub use logging::*;
pub use palette::*;
