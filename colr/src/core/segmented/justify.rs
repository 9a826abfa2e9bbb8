// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Padding by visible width. The fill chars go outside of the whole string, codes
//! included, so the codes keep their original positions around the text.

use strum_macros::{Display, EnumString};

use super::visible_len;
use crate::{ColrError, ColrResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
pub enum Align {
    /// `<`
    #[default]
    #[strum(serialize = "<")]
    Left,
    /// `>`
    #[strum(serialize = ">")]
    Right,
    /// `^`
    #[strum(serialize = "^")]
    Center,
}

impl From<std::fmt::Alignment> for Align {
    fn from(it: std::fmt::Alignment) -> Self {
        match it {
            std::fmt::Alignment::Left => Self::Left,
            std::fmt::Alignment::Right => Self::Right,
            std::fmt::Alignment::Center => Self::Center,
        }
    }
}

/// Pads `text` with `fill_char` until its visible length is `width`. Text that is
/// already wide enough is returned unchanged.
///
/// Centering puts the extra fill char on the left when both the padding and `width` are
/// odd, and on the right otherwise.
#[must_use]
pub fn justify(text: &str, width: usize, fill_char: char, align: Align) -> String {
    let padding = width.saturating_sub(visible_len(text));
    let (left, right) = match align {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => {
            let left = padding / 2 + (padding & width & 1);
            (left, padding - left)
        }
    };

    let mut acc = String::with_capacity(text.len() + padding * fill_char.len_utf8());
    acc.extend(std::iter::repeat_n(fill_char, left));
    acc.push_str(text);
    acc.extend(std::iter::repeat_n(fill_char, right));
    acc
}

/// The width left for new text once `existing` text is already in the buffer.
#[must_use]
pub fn squeeze_width(existing: &str, width: usize) -> usize {
    width.saturating_sub(visible_len(existing))
}

/// # Errors
///
/// Returns [`ColrError::ValueParseError`] if `width` is not a non-negative integer.
pub fn parse_width(width: &str) -> ColrResult<usize> {
    width
        .trim()
        .parse::<usize>()
        .map_err(|_| ColrError::value_parse(width, "width must be a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    const TEST: &str = "\x1b[31mtest\x1b[0m";

    #[test]
    fn test_left_pads_after_codes() {
        assert_eq2!(
            justify(TEST, 10, ' ', Align::Left),
            "\x1b[31mtest\x1b[0m      "
        );
    }

    #[test_case(Align::Left, 8, "\x1b[31mtest\x1b[0m----")]
    #[test_case(Align::Right, 8, "----\x1b[31mtest\x1b[0m")]
    #[test_case(Align::Center, 8, "--\x1b[31mtest\x1b[0m--")]
    #[test_case(Align::Center, 9, "---\x1b[31mtest\x1b[0m--")]
    #[test_case(Align::Center, 7, "--\x1b[31mtest\x1b[0m-")]
    #[test_case(Align::Right, 2, "\x1b[31mtest\x1b[0m")]
    fn test_justify(align: Align, width: usize, expected: &str) {
        assert_eq2!(justify(TEST, width, '-', align), expected);
    }

    #[test_case(0)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(11)]
    fn test_visible_len_after_justify(width: usize) {
        for align in [Align::Left, Align::Right, Align::Center] {
            let it = justify(TEST, width, ' ', align);
            assert_eq2!(visible_len(&it), width.max(4));
        }
    }

    #[test]
    fn test_squeeze_width() {
        assert_eq2!(squeeze_width(TEST, 12), 8);
        assert_eq2!(squeeze_width(TEST, 2), 0);
    }

    #[test]
    fn test_parse_width() {
        assert_eq2!(parse_width(" 12 ").unwrap(), 12);
        assert!(matches!(
            parse_width("wide"),
            Err(ColrError::ValueParseError { .. })
        ));
        assert!(parse_width("-1").is_err());
    }

    #[test]
    fn test_align_from_str() {
        use std::str::FromStr;
        assert_eq2!(Align::from_str("^").unwrap(), Align::Center);
        assert!(Align::from_str("=").is_err());
    }
}
