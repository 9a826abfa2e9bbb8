// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `strip`, `lstrip`, and `rstrip` that see through escape codes.
//!
//! When the chars to strip are plain chars, the walk goes inward from each end, skips
//! over codes, and trims text segments until one of them keeps some of its text:
//!
//! ```text
//! "\x1b[31mtest\x1b[0m   " rstrip  ->  "\x1b[31mtest\x1b[0m"
//! ```
//!
//! When the chars to strip are exactly one escape code, repeated exact copies of that
//! code are removed from the end(s), and the walk stops at the first segment that is not
//! that code.

use strum_macros::{Display, EnumIter};

use super::{is_escape_code, segment};

pub const DEFAULT_STRIP_CHARS: &str = " \t\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum StripMethod {
    Both,
    Left,
    Right,
}

impl StripMethod {
    fn strips_left(self) -> bool { matches!(self, Self::Both | Self::Left) }

    fn strips_right(self) -> bool { matches!(self, Self::Both | Self::Right) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Strips `chars` (or [`DEFAULT_STRIP_CHARS`] when `None` or empty) from the end(s) of
/// `text` selected by `method`.
#[must_use]
pub fn strip_chars(text: &str, method: StripMethod, chars: Option<&str>) -> String {
    let chars = chars.filter(|it| !it.is_empty()).unwrap_or(DEFAULT_STRIP_CHARS);
    let strip_code = is_escape_code(chars);

    // `None` marks a segment that was removed entirely.
    let mut pieces = segment(text)
        .into_iter()
        .map(|it| (it.is_code(), Some(it.text)))
        .collect::<Vec<_>>();

    let order = (0..pieces.len()).collect::<Vec<_>>();
    if method.strips_left() {
        strip_pieces(&mut pieces, order.iter().copied(), Side::Left, chars, strip_code);
    }
    if method.strips_right() {
        strip_pieces(&mut pieces, order.iter().rev().copied(), Side::Right, chars, strip_code);
    }

    pieces.into_iter().filter_map(|(_, it)| it).collect()
}

fn strip_pieces<'a>(
    pieces: &mut [(bool, Option<&'a str>)],
    indices: impl Iterator<Item = usize>,
    side: Side,
    chars: &str,
    strip_code: bool,
) {
    for index in indices {
        let (is_code, piece) = pieces[index];
        let Some(piece) = piece else {
            // Already consumed from the other side.
            continue;
        };

        if strip_code {
            if piece == chars {
                pieces[index].1 = None;
                continue;
            }
            break;
        }

        if is_code {
            continue;
        }

        let is_strip_char = |ch: char| chars.contains(ch);
        let trimmed = match side {
            Side::Left => piece.trim_start_matches(is_strip_char),
            Side::Right => piece.trim_end_matches(is_strip_char),
        };

        if trimmed.is_empty() {
            pieces[index].1 = None;
            continue;
        }
        pieces[index].1 = Some(trimmed);
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CLOSING_CODE, assert_eq2};
    use test_case::test_case;

    #[test_case(StripMethod::Both, "\x1b[31mtest\x1b[0m")]
    #[test_case(StripMethod::Left, "\x1b[31mtest\x1b[0m   ")]
    #[test_case(StripMethod::Right, "  \x1b[31mtest\x1b[0m")]
    fn test_whitespace_around_codes(method: StripMethod, expected: &str) {
        let text = "  \x1b[31mtest\x1b[0m   ";
        assert_eq2!(strip_chars(text, method, None), expected);
    }

    #[test]
    fn test_strip_through_codes() {
        let text = "\x1b[31m  \x1b[1m test \x1b[0m \n";
        assert_eq2!(
            strip_chars(text, StripMethod::Both, None),
            "\x1b[31m\x1b[1mtest\x1b[0m"
        );
    }

    #[test]
    fn test_stops_at_first_partially_trimmed_segment() {
        let text = "x \x1b[31m y  ";
        assert_eq2!(strip_chars(text, StripMethod::Right, None), "x \x1b[31m y");
    }

    #[test]
    fn test_custom_chars() {
        assert_eq2!(
            strip_chars("--\x1b[1m-ab-\x1b[0m", StripMethod::Both, Some("-")),
            "\x1b[1mab\x1b[0m"
        );
        assert_eq2!(
            strip_chars("  ab  ", StripMethod::Both, Some("")),
            "ab"
        );
    }

    #[test]
    fn test_strip_a_code() {
        let text = "\x1b[31mtest\x1b[0m\x1b[0m";
        assert_eq2!(
            strip_chars(text, StripMethod::Right, Some(CLOSING_CODE)),
            "\x1b[31mtest"
        );
        assert_eq2!(
            strip_chars(text, StripMethod::Left, Some(CLOSING_CODE)),
            text
        );
        assert_eq2!(
            strip_chars("\x1b[1m\x1b[1mab", StripMethod::Both, Some("\x1b[1m")),
            "ab"
        );
    }

    #[test]
    fn test_everything_stripped() {
        assert_eq2!(strip_chars(" \x1b[1m \t", StripMethod::Both, None), "\x1b[1m");
        assert_eq2!(strip_chars("", StripMethod::Both, None), "");
    }
}
