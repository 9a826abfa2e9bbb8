// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Spinners and progress bars that animate in place while the caller keeps working.

// Attach sources.
pub mod animation_writer;
pub mod bar_set;
pub mod frame_set;
pub mod frames_registry;
pub mod progress_kinds;

// Re-export.
pub use animation_writer::*;
pub use bar_set::*;
pub use frame_set::*;
pub use frames_registry::*;
pub use progress_kinds::*;
