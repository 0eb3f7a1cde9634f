// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use tracing_core::LevelFilter;

/// Where the log goes, and how much of it. Logs only ever go to a file, since stdout
/// carries the palette (or the host protocol), and stderr carries the swatches.
///
/// Fields:
/// - `log_file_path`: the file to append to. Its folder is created if needed.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub log_file_path: PathBuf,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self { Self::new(Self::DEFAULT_LOG_FILE_NAME) }
}

impl TracingConfig {
    pub const DEFAULT_LOG_FILE_NAME: &'static str = "log.txt";

    #[must_use]
    pub fn new(log_file_path: impl Into<PathBuf>) -> Self {
        Self {
            log_file_path: log_file_path.into(),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn get_log_file_path(&self) -> &Path { &self.log_file_path }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}
