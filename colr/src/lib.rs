// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_colr
//!
//! Styled strings for the terminal that stay aware of their own escape codes.
//!
//! A [`Colr`] holds text that may already contain ANSI escape sequences. Length,
//! slicing, justification, and stripping all work on the *visible* chars, so a styled
//! string can be padded into a column or cut in half without breaking its codes.
//!
//! ```
//! use r3bl_colr::{BasicColor, Colr, ColrStyle, StyleCode};
//!
//! let style = ColrStyle::new().set_fore(BasicColor::Red).set_style(StyleCode::Bold);
//! let it = Colr::default().styled("hello", &style).center(11, ' ');
//! assert_eq!(it.visible_len(), 11);
//! assert_eq!(it.stripped(), "   hello   ");
//! ```
//!
//! ## What's in the box
//!
//! 1. Colors: basic names, the 256-color palette, true color, hex, and a table of
//!    named colors. See [`ColorSpec`] and the converters in [`core::color`].
//! 2. Escape codes: cursor movement, erasing, and position save and restore, built with
//!    [`Control`].
//! 3. The segmented string model in [`core::segmented`], which splits text into code
//!    and text segments.
//! 4. Painting: [`Colr::gradient`], [`Colr::gradient_rgb`], [`Colr::rainbow`], and the
//!    format mini-language in [`parse_format_spec`].
//! 5. Progress: [`StaticProgress`], [`AnimatedProgress`], and [`ProgressBar`], which
//!    animate on a tokio task while your code keeps working. Frames and bars come from
//!    the [`FrameRegistry`].
//!
//! ## Logging
//!
//! The crate logs with [`tracing`]. Call [`try_initialize_logging_global`] with a
//! [`TracingConfig`] to see the logs on a display, in a file, or both.
//!
//! [`core::color`]: crate::core::color
//! [`core::segmented`]: crate::core::segmented
//! [`Colr::gradient`]: crate::Colr::gradient
//! [`Colr::gradient_rgb`]: crate::Colr::gradient_rgb
//! [`Colr::rainbow`]: crate::Colr::rainbow

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod progress;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use progress::*;
