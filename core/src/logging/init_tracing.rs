// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`TracingConfig::install_global`]
//!
//! Setup Tokio [`tracing_subscriber`] to write plain text (no ANSI escapes) records to
//! the file named in a [`TracingConfig`].

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{Layer,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{TracingConfig, ok};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [`tracing_subscriber::fmt::format::Pretty`] and
/// [`tracing_subscriber::fmt::format::Compact`] are mutually exclusive.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Install the global default subscriber. Once set, it can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(&self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Can't install tracing subscriber: {err}"))?;
        ok!()
    }
}

/// Returns the layers, the level filter followed by the file layer. This does not
/// initialize the tracing system, [`TracingConfig::install_global`] does that.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    Ok(vec![
        Box::new(level_filter),
        try_create_file_layer(tracing_config)?,
    ])
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    tracing_config: &TracingConfig,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = try_create_log_file_appender(tracing_config.get_log_file_path())?;
    Ok(Box::new(
        create_fmt!()
            .with_writer(file)
            .with_filter(tracing_config.get_level_filter()),
    ))
}

/// The file is never rotated, new records are appended to it. A bare file name is
/// created in the current folder.
fn try_create_log_file_appender(path: &Path) -> miette::Result<RollingFileAppender> {
    let Some(file_name) = path.file_name() else {
        miette::bail!("Log file path {} has no file name", path.display());
    };
    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .into_diagnostic()
        .wrap_err_with(|| format!("Can't open log file {}", path.display()))
}
