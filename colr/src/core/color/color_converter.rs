// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure conversions between hex strings, [`RgbValue`], and 256-color terminal codes.
//!
//! The terminal palette is made of three ranges:
//!
//! | Codes       | Range                                                  |
//! | :---------- | :----------------------------------------------------- |
//! | `0..=15`    | Legacy colors, fixed table                             |
//! | `16..=231`  | 6x6x6 cube, `16 + 36r + 6g + b` over [`CUBE_LEVELS`]   |
//! | `232..=255` | Grayscale ramp, `8 + 10i`                              |
//!
//! Some hex values appear twice in the palette (pure black, pure white, and the bright
//! legacy colors which also live in the cube). Reverse lookups always resolve to the
//! higher code.

use std::{collections::HashMap, fmt::Write, sync::LazyLock};

use super::RgbValue;
use crate::{ColrError, ColrResult, InlineString};

/// The six channel levels used by the color cube.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

const LEGACY_COLORS: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00),
    (0x80, 0x00, 0x00),
    (0x00, 0x80, 0x00),
    (0x80, 0x80, 0x00),
    (0x00, 0x00, 0x80),
    (0x80, 0x00, 0x80),
    (0x00, 0x80, 0x80),
    (0xc0, 0xc0, 0xc0),
    (0x80, 0x80, 0x80),
    (0xff, 0x00, 0x00),
    (0x00, 0xff, 0x00),
    (0xff, 0xff, 0x00),
    (0x00, 0x00, 0xff),
    (0xff, 0x00, 0xff),
    (0x00, 0xff, 0xff),
    (0xff, 0xff, 0xff),
];

/// Later (higher) codes overwrite earlier ones, so duplicates resolve to the higher code.
static TERM_CODE_BY_RGB: LazyLock<HashMap<RgbValue, u8>> = LazyLock::new(|| {
    (0..=u8::MAX)
        .map(|code| (term_code_to_rgb(code), code))
        .collect()
});

#[must_use]
pub fn term_code_to_rgb(code: u8) -> RgbValue {
    match code {
        0..=15 => LEGACY_COLORS[usize::from(code)].into(),
        16..=231 => {
            let offset = usize::from(code - 16);
            RgbValue::from_u8(
                CUBE_LEVELS[offset / 36],
                CUBE_LEVELS[(offset / 6) % 6],
                CUBE_LEVELS[offset % 6],
            )
        }
        232..=255 => RgbValue::gray(8 + (code - 232) * 10),
    }
}

#[must_use]
pub fn term_code_to_hex(code: u8) -> InlineString { rgb_to_hex(term_code_to_rgb(code)) }

#[must_use]
pub fn rgb_to_hex(rgb: RgbValue) -> InlineString {
    let mut acc = InlineString::new();
    // Writing into an in-memory string can't fail.
    _ = write!(acc, "{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    acc
}

/// Normalizes a hex color to 6 lowercase digits without the leading `#`.
///
/// # Errors
///
/// Returns [`ColrError::MalformedColor`] for anything but 3 or 6 hex digits.
pub fn normalize_hex(hex: &str) -> ColrResult<InlineString> {
    let digits = hex.trim().trim_start_matches('#');
    let malformed = || ColrError::MalformedColor { value: hex.to_string() };

    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let mut acc = InlineString::new();
    match digits.len() {
        3 => digits.chars().for_each(|ch| {
            acc.push(ch.to_ascii_lowercase());
            acc.push(ch.to_ascii_lowercase());
        }),
        6 => acc.push_str(&digits.to_ascii_lowercase()),
        _ => return Err(malformed()),
    }
    Ok(acc)
}

/// # Errors
///
/// Returns [`ColrError::MalformedColor`] for anything but 3 or 6 hex digits.
pub fn hex_to_rgb(hex: &str) -> ColrResult<RgbValue> {
    let digits = normalize_hex(hex)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColrError::MalformedColor { value: hex.to_string() })
    };
    Ok(RgbValue::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Snaps a channel to the closest of [`CUBE_LEVELS`]. A value exactly between two
/// levels goes to the larger one.
#[must_use]
pub fn quantize_channel(value: u8) -> u8 {
    let mut best = CUBE_LEVELS[0];
    let mut best_distance = u8::MAX;
    for level in CUBE_LEVELS {
        let distance = value.abs_diff(level);
        if distance <= best_distance {
            best = level;
            best_distance = distance;
        }
    }
    best
}

/// Quantizes each channel to the cube and returns the code that owns the resulting
/// color. A quantized color always lives in the cube, which is the highest owner of any
/// hex value it shares with the legacy range.
#[must_use]
pub fn rgb_to_nearest_term_code(rgb: RgbValue) -> u8 {
    let quantized = RgbValue::from_u8(
        quantize_channel(rgb.red),
        quantize_channel(rgb.green),
        quantize_channel(rgb.blue),
    );
    exact_term_code(quantized).unwrap_or_else(|| cube_code(quantized))
}

/// The code whose palette color is exactly `rgb`, preferring the higher code.
#[must_use]
pub fn exact_term_code(rgb: RgbValue) -> Option<u8> { TERM_CODE_BY_RGB.get(&rgb).copied() }

fn cube_code(quantized: RgbValue) -> u8 {
    let index = |level: u8| {
        CUBE_LEVELS
            .iter()
            .position(|it| *it == level)
            .and_then(|it| u8::try_from(it).ok())
            .unwrap_or(0)
    };
    16 + 36 * index(quantized.red) + 6 * index(quantized.green) + index(quantized.blue)
}

/// Exact palette match first, then the nearest cube color. This keeps
/// `hex_to_term_code(term_code_to_hex(code)) == code` for every code that owns its hex
/// value.
///
/// # Errors
///
/// Returns [`ColrError::MalformedColor`] if `hex` can't be parsed.
pub fn hex_to_term_code(hex: &str) -> ColrResult<u8> { Ok(rgb_to_term_code(hex_to_rgb(hex)?)) }

/// [`hex_to_term_code`] for a value that is already RGB.
#[must_use]
pub fn rgb_to_term_code(rgb: RgbValue) -> u8 {
    exact_term_code(rgb).unwrap_or_else(|| rgb_to_nearest_term_code(rgb))
}

/// # Errors
///
/// Returns [`ColrError::MalformedColor`] if `hex` can't be parsed.
pub fn hex_to_term_hex(hex: &str) -> ColrResult<InlineString> {
    Ok(term_code_to_hex(hex_to_term_code(hex)?))
}

/// # Errors
///
/// Returns [`ColrError::MalformedColor`] if `hex` can't be parsed.
pub fn hex_to_closest_term_rgb(hex: &str) -> ColrResult<RgbValue> {
    Ok(term_code_to_rgb(hex_to_term_code(hex)?))
}

/// Parses a term code given as an integer that may be out of range.
///
/// # Errors
///
/// Returns [`ColrError::InvalidColor`] outside `0..=255`.
pub fn try_term_code(code: i64) -> ColrResult<u8> {
    u8::try_from(code).map_err(|_| {
        ColrError::invalid_color(code.to_string(), "terminal codes are in 0..=255")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0, "000000")]
    #[test_case(7, "c0c0c0")]
    #[test_case(15, "ffffff")]
    #[test_case(16, "000000")]
    #[test_case(88, "870000")]
    #[test_case(102, "878787")]
    #[test_case(231, "ffffff")]
    #[test_case(232, "080808")]
    #[test_case(244, "808080")]
    #[test_case(255, "eeeeee")]
    fn test_term_code_to_hex(code: u8, hex: &str) {
        assert_eq2!(term_code_to_hex(code).as_str(), hex);
    }

    #[test]
    fn test_duplicates_prefer_higher_code() {
        assert_eq2!(hex_to_term_code("ffffff").unwrap(), 231);
        assert_eq2!(hex_to_term_code("000000").unwrap(), 16);
        assert_eq2!(hex_to_term_code("ff0000").unwrap(), 196);
        assert_eq2!(hex_to_term_code("808080").unwrap(), 244);
    }

    #[test_case(47, 0x00)]
    #[test_case(48, 0x5f)]
    #[test_case(115, 0x87)]
    #[test_case(114, 0x5f)]
    #[test_case(255, 0xff)]
    fn test_quantize_ties_go_up(value: u8, expected: u8) {
        assert_eq2!(quantize_channel(value), expected);
    }

    #[test]
    fn test_nearest_term_code() {
        assert_eq2!(rgb_to_nearest_term_code(RgbValue::from_u8(115, 0, 0)), 88);
        assert_eq2!(rgb_to_nearest_term_code(RgbValue::from_u8(0, 128, 255)), 33);
        assert_eq2!(hex_to_term_code("#010203").unwrap(), 16);
        // Exact gray ramp entries are kept, the cube has no (128, 128, 128).
        assert_eq2!(rgb_to_term_code(RgbValue::gray(128)), 244);
        assert_eq2!(rgb_to_nearest_term_code(RgbValue::gray(128)), 102);
    }

    #[test_case("fff", (255, 255, 255))]
    #[test_case("#a1B2c3", (0xa1, 0xb2, 0xc3))]
    #[test_case(" 0f0 ", (0, 255, 0))]
    fn test_hex_to_rgb(hex: &str, rgb: (u8, u8, u8)) {
        assert_eq2!(hex_to_rgb(hex).unwrap(), RgbValue::from(rgb));
    }

    #[test_case("")]
    #[test_case("ff")]
    #[test_case("fffff")]
    #[test_case("gggggg")]
    #[test_case("#ff00ff00")]
    fn test_malformed_hex(hex: &str) {
        assert!(matches!(
            hex_to_rgb(hex),
            Err(ColrError::MalformedColor { .. })
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        for value in [0x00_u8, 0x12, 0x7f, 0x80, 0xfe, 0xff] {
            let hex = rgb_to_hex(RgbValue::from_u8(value, 0xff - value, value / 2));
            assert_eq2!(rgb_to_hex(hex_to_rgb(&hex).unwrap()), hex);
        }
    }

    /// Every code that is the highest owner of its hex value survives the round trip.
    /// The 9 legacy codes that share a hex value with a higher code map to that code.
    #[test]
    fn test_term_code_round_trip() {
        let mut shadowed = vec![];
        for code in 0..=u8::MAX {
            let back = hex_to_term_code(&term_code_to_hex(code)).unwrap();
            if back != code {
                assert!(back > code);
                shadowed.push(code);
            }
        }
        assert_eq2!(shadowed, vec![0, 8, 9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_hex_to_term_hex() {
        assert_eq2!(hex_to_term_hex("ff0001").unwrap().as_str(), "ff0000");
        assert_eq2!(
            hex_to_closest_term_rgb("fe0000").unwrap(),
            RgbValue::from_u8(255, 0, 0)
        );
    }

    #[test]
    fn test_try_term_code() {
        assert_eq2!(try_term_code(255).unwrap(), 255);
        assert!(try_term_code(256).is_err());
        assert!(try_term_code(-1).is_err());
    }
}
