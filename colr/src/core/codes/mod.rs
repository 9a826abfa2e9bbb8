// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape code construction: SGR color and style codes, cursor and erase control codes,
//! the chainable [`Control`] builder, and the reverse direction in [`code_info`].

// Attach sources.
pub mod code_info;
pub mod control;
pub mod control_codes;
pub mod escape_code_builder;

// Re-export.
pub use code_info::*;
pub use control::*;
pub use control_codes::*;
pub use escape_code_builder::*;
