// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod palette_generator;
pub mod palette_result;

// Re-export.
pub use palette_generator::*;
pub use palette_result::*;
