// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Strings with embedded escape codes, viewed as an ordered list of code and text
//! [`Segment`]s. Everything that measures, indexes, slices, pads, or strips visible text
//! goes through here, so that codes never count towards a width and are never split.

// Attach sources.
pub mod escape_pattern;
pub mod justify;
pub mod segment;
pub mod slice;
pub mod strip_chars;

// Re-export.
pub use escape_pattern::*;
pub use justify::*;
pub use segment::*;
pub use slice::*;
pub use strip_chars::*;
