// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # tintshade
//!
//! The terminal host for [`tintshade_core`]. It implements
//! [`tintshade_core::PaletteHost`] by drawing each swatch as a colored row in the
//! terminal, and posting messages either as human readable text or as JSON lines.
//!
//! # Run the `tintshade` binary target
//!
//! ```text
//! tintshade generate '#336699'
//! tintshade generate 336699 --format json
//! echo '{"type":"generate-colors","color":"#336699"}' | tintshade serve
//! ```
//!
//! - `generate` prints the palette for one color and exits. An invalid color exits w/
//!   a failure status.
//! - `serve` reads one request per line from stdin and answers on stdout, until stdin
//!   is closed. Swatches are drawn on stderr so they never mix with the responses.
//! - `-l` / `--enable-logging` writes a debug log to `log.txt` in the current folder.
//! - `--no-color` (or the `NO_COLOR` environment variable) prints only the hex values.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::redundant_else)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]

// Attach sources.
pub mod app;
pub mod clap_config;
pub mod generate;
pub mod serve;
pub mod terminal_host;
pub mod ui_str;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use generate::*;
pub use serve::*;
pub use terminal_host::*;
