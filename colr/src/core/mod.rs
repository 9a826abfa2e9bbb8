// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything below the progress writers: colors, escape codes, the segmented string
//! model, styled strings, output devices, and logging.

// Attach sources.
pub mod codes;
pub mod color;
pub mod common;
pub mod log;
pub mod output;
pub mod segmented;
pub mod styled;

// Re-export.
pub use codes::*;
pub use color::*;
pub use common::*;
pub use log::*;
pub use output::*;
pub use segmented::*;
pub use styled::*;
