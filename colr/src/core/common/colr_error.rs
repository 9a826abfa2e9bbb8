// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every fallible operation in this crate returns a [`ColrResult`]. Pure components
//! (color conversion, escape code building, segmented text) raise these synchronously
//! at the point of detection. The [`AnimationWriter`] captures errors that happen in its
//! background task and hands them back to the foreground.
//!
//! | Variant               | Raised by                                             |
//! | :-------------------- | :---------------------------------------------------- |
//! | [`InvalidColor`]      | Code, RGB, or argument outside its valid domain       |
//! | [`MalformedColor`]    | Hex strings with the wrong length or characters       |
//! | [`UnknownColorName`]  | Basic color, style, or gradient name lookup miss      |
//! | [`InvalidControlArg`] | Out-of-range erase methods                            |
//! | [`IndexOutOfBounds`]  | Integer index beyond the visible text                 |
//! | [`ValueParseError`]   | Non-numeric width, or a zero slice step               |
//! | [`InvalidEscapeCode`] | Explaining a code whose numbers are out of range      |
//! | [`OutputFailed`]      | IO errors while [`AnimationWriter`] draws a frame     |
//! | [`ProgressTimedOut`]  | [`AnimationWriter`] running longer than its timeout   |
//!
//! [`AnimationWriter`]: crate::AnimationWriter
//! [`InvalidColor`]: ColrError::InvalidColor
//! [`MalformedColor`]: ColrError::MalformedColor
//! [`UnknownColorName`]: ColrError::UnknownColorName
//! [`InvalidControlArg`]: ColrError::InvalidControlArg
//! [`IndexOutOfBounds`]: ColrError::IndexOutOfBounds
//! [`ValueParseError`]: ColrError::ValueParseError
//! [`InvalidEscapeCode`]: ColrError::InvalidEscapeCode
//! [`OutputFailed`]: ColrError::OutputFailed
//! [`ProgressTimedOut`]: ColrError::ProgressTimedOut

use std::time::Duration;

pub type ColrResult<T> = Result<T, ColrError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ColrError {
    #[error("Invalid color value: {value:?} ({reason})")]
    #[diagnostic(
        code(r3bl_colr::invalid_color),
        help("Use a basic name, a named color, 0-255, \"r,g,b\", or a hex value.")
    )]
    InvalidColor { value: String, reason: String },

    #[error("Malformed hex color: {value:?}")]
    #[diagnostic(
        code(r3bl_colr::malformed_color),
        help("Hex colors have 3 or 6 hex digits, with an optional leading '#'.")
    )]
    MalformedColor { value: String },

    #[error("Unknown color or style name: {name:?}")]
    #[diagnostic(
        code(r3bl_colr::unknown_color_name),
        help("Styles are bold, dim, italic, underline, flash, highlight, normal, reset_all.")
    )]
    UnknownColorName { name: String },

    #[error("Invalid control argument: {value}, expected one of {expected}")]
    #[diagnostic(code(r3bl_colr::invalid_control_arg))]
    InvalidControlArg { value: u8, expected: &'static str },

    #[error("Index {index} is out of bounds for visible length {len}")]
    #[diagnostic(code(r3bl_colr::index_out_of_bounds))]
    IndexOutOfBounds { index: isize, len: usize },

    #[error("Could not parse value: {value:?} ({reason})")]
    #[diagnostic(code(r3bl_colr::value_parse_error))]
    ValueParseError { value: String, reason: String },

    #[error("Invalid escape code: {code:?} ({reason})")]
    #[diagnostic(code(r3bl_colr::invalid_escape_code))]
    InvalidEscapeCode { code: String, reason: String },

    #[error("Invalid format spec: {spec:?} ({reason})")]
    #[diagnostic(
        code(r3bl_colr::invalid_format_spec),
        help("Expected something like \"[fore=red, back=white, style=bold]<10\".")
    )]
    InvalidFormatSpec { spec: String, reason: String },

    #[error("Cannot use a fixed fore and a fixed back color with a color walk")]
    #[diagnostic(
        code(r3bl_colr::conflicting_colors),
        help("Set only one of fore or back, the other one is used for the walk.")
    )]
    ConflictingColors,

    #[error("Frame set {name:?} has no frames")]
    #[diagnostic(code(r3bl_colr::empty_frame_set))]
    EmptyFrameSet { name: String },

    #[error("Unknown frame set: {name:?}")]
    #[diagnostic(code(r3bl_colr::unknown_frame_set))]
    UnknownFrameSet { name: String },

    #[error("Can't write to the output device: {message}")]
    #[diagnostic(code(r3bl_colr::output_failed))]
    OutputFailed { message: String },

    #[error("{}", fmt_timed_out(.name, .elapsed, .message))]
    #[diagnostic(code(r3bl_colr::progress_timed_out))]
    ProgressTimedOut {
        name: String,
        elapsed: Duration,
        message: Option<String>,
    },
}

fn fmt_timed_out(name: &str, elapsed: &Duration, message: &Option<String>) -> String {
    let secs = elapsed.as_secs_f64();
    #[allow(clippy::float_cmp)]
    let plural = if secs == 1.0 { "sec." } else { "secs." };
    let label = if name.is_empty() { "Progress" } else { name };
    match message.as_deref() {
        Some(msg) => format!("{label} timed out after {secs:.1} {plural}: {msg}"),
        None => format!("{label} timed out after {secs:.1} {plural}"),
    }
}

impl ColrError {
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn value_parse(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValueParseError {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn escape_code(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEscapeCode {
            code: code.into(),
            reason: reason.into(),
        }
    }

    pub fn format_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormatSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}
