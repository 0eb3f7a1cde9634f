// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin wrapper around [`TracingConfig`] for binaries that just want a log file.
//!
//! You can use the functions in this module or just use [`TracingConfig`] directly, along
//! with using [`tracing::info!`], [`tracing::debug!`], etc. macros.

use crate::{TracingConfig, ok};

/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// Otherwise, log output goes to a file named [`TracingConfig::DEFAULT_LOG_FILE_NAME`] in
/// the current folder.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if logging was already
/// initialized.
pub fn try_initialize_logging(
    level_filter: tracing_core::LevelFilter,
) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    TracingConfig::default()
        .with_level_filter(level_filter)
        .install_global()?;

    ok!()
}
