// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod colr_error;
pub mod common_atomic;
pub mod decl_macros;
pub mod sizes;

// Re-export.
pub use colr_error::*;
pub use common_atomic::*;
pub use sizes::*;
