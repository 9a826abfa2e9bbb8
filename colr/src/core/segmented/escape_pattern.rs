// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Recognition of the escape sequences this crate produces. Every shape lives in
//! [`ESCAPE_SHAPES`], and the alternation used for scanning is built from that table, so
//! grammar changes touch one place.
//!
//! ```text
//! ESC [ body terminator
//!
//! color set        [0-9;]*m
//! cursor hide      ?25l
//! cursor show      ?25h
//! position         (\d+;)?\d+[Hf]
//! save / restore   s / u
//! move/erase/...   \d+[ABCDEFGHJKST]
//! ```

use std::sync::LazyLock;

use regex::Regex;
use strum_macros::{Display, EnumIter};

/// Introducer shared by every escape sequence.
pub const ESCAPE_SEQUENCE: &str = "\x1b[";

/// Appended after colorized text to restore the terminal defaults.
pub const CLOSING_CODE: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EscapeShape {
    ColorSet,
    CursorHide,
    CursorShow,
    Position,
    SavePosition,
    RestorePosition,
    MoveEraseScroll,
}

/// Pattern for the body and terminator of each shape, after `ESC[`.
pub const ESCAPE_SHAPES: [(EscapeShape, &str); 7] = [
    (EscapeShape::ColorSet, r"[\d;]*m"),
    (EscapeShape::CursorHide, r"\?25l"),
    (EscapeShape::CursorShow, r"\?25h"),
    (EscapeShape::Position, r"(?:\d+;)?\d+[Hf]"),
    (EscapeShape::SavePosition, "s"),
    (EscapeShape::RestorePosition, "u"),
    (EscapeShape::MoveEraseScroll, r"\d+[ABCDEFGHJKST]"),
];

fn alternation() -> String {
    let bodies = ESCAPE_SHAPES
        .iter()
        .map(|(_, body)| *body)
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\x1b\[(?:{bodies})")
}

/// Matches any recognized escape sequence.
pub static ESCAPE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&alternation()).expect("Invalid escape code regex"));

/// Matches a whole string that is exactly one recognized escape sequence.
static SINGLE_ESCAPE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})$", alternation()))
        .expect("Invalid single escape code regex")
});

/// Matches color set sequences that carry at least one number.
pub static COLOR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[\d;]+m").expect("Invalid color code regex"));

static SHAPE_REGEXES: LazyLock<Vec<(EscapeShape, Regex)>> = LazyLock::new(|| {
    ESCAPE_SHAPES
        .iter()
        .map(|(shape, body)| {
            let regex = Regex::new(&format!(r"^\x1b\[(?:{body})$"))
                .expect("Invalid escape shape regex");
            (*shape, regex)
        })
        .collect()
});

/// `true` only if all of `text` is a single recognized escape sequence.
#[must_use]
pub fn is_escape_code(text: &str) -> bool { SINGLE_ESCAPE_CODE_REGEX.is_match(text) }

#[must_use]
pub fn classify_escape_code(code: &str) -> Option<EscapeShape> {
    SHAPE_REGEXES
        .iter()
        .find(|(_, regex)| regex.is_match(code))
        .map(|(shape, _)| *shape)
}

/// Removes every recognized escape sequence.
#[must_use]
pub fn strip_codes(text: &str) -> String {
    ESCAPE_CODE_REGEX.replace_all(text, "").into_owned()
}

/// All color codes embedded in `text`, in order.
#[must_use]
pub fn get_codes(text: &str) -> Vec<&str> {
    COLOR_CODE_REGEX
        .find_iter(text)
        .map(|it| it.as_str())
        .collect()
}

/// The last recognized escape sequence in `text`, or `""` if there is none.
#[must_use]
pub fn last_escape_code(text: &str) -> &str {
    ESCAPE_CODE_REGEX
        .find_iter(text)
        .last()
        .map_or("", |it| it.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("\x1b[31m", EscapeShape::ColorSet)]
    #[test_case("\x1b[m", EscapeShape::ColorSet)]
    #[test_case("\x1b[38;2;1;2;3m", EscapeShape::ColorSet)]
    #[test_case("\x1b[?25l", EscapeShape::CursorHide)]
    #[test_case("\x1b[?25h", EscapeShape::CursorShow)]
    #[test_case("\x1b[3;4H", EscapeShape::Position)]
    #[test_case("\x1b[12f", EscapeShape::Position)]
    #[test_case("\x1b[s", EscapeShape::SavePosition)]
    #[test_case("\x1b[u", EscapeShape::RestorePosition)]
    #[test_case("\x1b[2K", EscapeShape::MoveEraseScroll)]
    #[test_case("\x1b[10T", EscapeShape::MoveEraseScroll)]
    fn test_classify(code: &str, shape: EscapeShape) {
        assert!(is_escape_code(code));
        assert_eq2!(classify_escape_code(code), Some(shape));
    }

    #[test_case("")]
    #[test_case("\x1b[")]
    #[test_case("\x1b[K")]
    #[test_case("\x1b[31mx")]
    #[test_case("x\x1b[31m")]
    #[test_case("\x1b[31m\x1b[0m")]
    fn test_not_a_single_code(text: &str) {
        assert!(!is_escape_code(text));
    }

    #[test]
    fn test_strip_and_get_codes() {
        let text = "\x1b[1m\x1b[31mtest\x1b[2Kme\x1b[m\x1b[0m";
        assert_eq2!(strip_codes(text), "testme");
        assert_eq2!(get_codes(text), vec!["\x1b[1m", "\x1b[31m", "\x1b[0m"]);
        assert_eq2!(last_escape_code(text), CLOSING_CODE);
        assert_eq2!(last_escape_code("plain"), "");
    }
}
