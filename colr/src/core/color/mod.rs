// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor) and [`AnsiValue`] (256-color
//!   palette), with the [`TransformColor`] trait to convert between them.
//! - **Conversion logic**: hex, RGB, and terminal code conversions with nearest-match
//!   quantization, in [`color_converter`], and [`ColorCode`] which holds all three.
//! - **Arguments**: [`ColorSpec`], [`StyleCode`], and [`ColrStyle`], parsed from the
//!   names, numbers, and strings users pass in.
//! - **Registries**: the named color table and the fluent name dispatch table.

// Attach.
pub mod color_code;
pub mod color_converter;
pub mod color_spec;
pub mod name_table;
pub mod named_color_table;
pub mod named_colors;
pub mod rgb_value;

// Re-export.
pub use color_code::*;
pub use color_converter::*;
pub use color_spec::*;
pub use name_table::*;
pub use named_color_table::*;
pub use named_colors::*;
pub use rgb_value::*;
