// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod host_message;
pub mod palette_host;
pub mod swatch;

// Re-export.
pub use host_message::*;
pub use palette_host::*;
pub use swatch::*;
