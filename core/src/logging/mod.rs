// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod init_tracing;
pub mod logging_api;
pub mod tracing_config;

// Re-export.
pub use init_tracing::*;
pub use logging_api::*;
pub use tracing_config::*;
