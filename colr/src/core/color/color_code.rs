// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{RgbValue, TransformColor, hex_to_term_code, hex_to_term_hex, rgb_to_hex,
            term_code_to_hex, term_code_to_rgb};
use crate::{CLOSING_CODE, ColrResult, InlineString};

/// One color seen as a terminal code, a hex value, and an RGB value at the same time.
/// Unless `rgb_mode` is set, `hex` and `rgb` are the nearest palette entry rather than
/// the exact input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorCode {
    pub code: u8,
    pub hex: InlineString,
    pub rgb: RgbValue,
    pub rgb_mode: bool,
}

impl ColorCode {
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        Self {
            code,
            hex: term_code_to_hex(code),
            rgb: term_code_to_rgb(code),
            rgb_mode: false,
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::ColrError::MalformedColor`] if `hex` can't be parsed.
    pub fn from_hex(hex: &str) -> ColrResult<Self> {
        let hex = hex_to_term_hex(hex)?;
        let code = hex_to_term_code(&hex)?;
        Ok(Self {
            code,
            rgb: term_code_to_rgb(code),
            hex,
            rgb_mode: false,
        })
    }

    #[must_use]
    pub fn from_rgb(rgb: RgbValue, rgb_mode: bool) -> Self {
        let code = rgb.as_term_code();
        if rgb_mode {
            Self {
                code,
                hex: rgb_to_hex(rgb),
                rgb,
                rgb_mode,
            }
        } else {
            Self::from_code(code)
        }
    }

    /// Accepts a terminal code (`0..=255`), or a hex value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColrError::MalformedColor`] if `value` is neither.
    pub fn parse(value: &str, rgb_mode: bool) -> ColrResult<Self> {
        let value = value.trim();
        if let Ok(code) = value.parse::<u8>() {
            return Ok(Self::from_code(code));
        }
        if rgb_mode {
            return Ok(Self::from_rgb(RgbValue::try_from_hex(value)?, true));
        }
        Self::from_hex(value)
    }

    /// [`Display`] output, colored with this color.
    #[must_use]
    pub fn example(&self) -> String {
        if self.rgb_mode {
            format!("\x1b[38;2;{}m{self}{CLOSING_CODE}", self.rgb)
        } else {
            format!("\x1b[38;5;{}m{self}{CLOSING_CODE}", self.code)
        }
    }
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let RgbValue { red, green, blue } = self.rgb;
        write!(
            f,
            "Terminal: {:>3}, Hex: {:<6}, RGB: {red:>3}, {green:>3}, {blue:>3}",
            format!("{:02}", self.code),
            self.hex
        )
    }
}
