// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`Colr`] styled string and everything that paints it: plain styles, gradients,
//! rainbows, and the format mini-language.

// Attach sources.
pub mod colorize;
pub mod colr;
pub mod colr_text;
pub mod format_spec;
pub mod gradient;
pub mod gradient_wave;
pub mod rainbow;

// Re-export.
pub use colorize::*;
pub use colr::*;
pub use colr_text::*;
pub use format_spec::*;
pub use gradient::*;
pub use gradient_wave::*;
pub use rainbow::*;
