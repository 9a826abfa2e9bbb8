// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::fmt::{Display, Formatter, Result};

use super::{hex_to_rgb, rgb_to_hex, rgb_to_nearest_term_code, term_code_to_rgb};
use crate::{ColrResult, InlineString};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default, PartialOrd, Ord)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(it: RgbValue) -> Self { (it.red, it.green, it.blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    #[must_use]
    pub const fn gray(level: u8) -> Self { Self::from_u8(level, level, level) }

    /// # Errors
    ///
    /// Returns [`crate::ColrError::MalformedColor`] if the input is not a 3 or 6 digit
    /// hex color, with an optional leading `#`.
    pub fn try_from_hex(input: &str) -> ColrResult<Self> { hex_to_rgb(input) }
}

impl Display for RgbValue {
    /// Formats as `r;g;b`, which is how the value appears inside an escape code.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{};{};{}", self.red, self.green, self.blue)
    }
}

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in the 256-color terminal palette approximating the
    /// `self` color.
    fn as_term_code(&self) -> u8;

    /// Returns the 6 digit lowercase hex representation of the `self` color.
    fn as_hex(&self) -> InlineString { rgb_to_hex(self.as_rgb()) }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_term_code(&self) -> u8 { rgb_to_nearest_term_code(*self) }
}

/// A 256-color palette index.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default, PartialOrd, Ord)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { term_code_to_rgb(self.index) }

    fn as_term_code(&self) -> u8 { self.index }
}
