// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ColrText;
use crate::{CLOSING_CODE, ColrStyle, build_code_str, get_codes};

/// Wraps `text` in the codes for `style`, and adds the closing code when it is needed.
///
/// The closing code is added when all of these hold:
/// - `text` is not empty (see [`ColrText`] for what counts as empty).
/// - `no_closing` is not set.
/// - `text` does not already end its codes with a closing code.
/// - There is at least one code, either from `style` or already embedded in `text`.
///
/// ```
/// use r3bl_colr::{BasicColor, ColrStyle, colorize};
/// let style = ColrStyle::new().set_fore(BasicColor::Red);
/// assert_eq!(colorize("hello", &style, false), "\x1b[31mhello\x1b[0m");
/// assert_eq!(colorize("", &style, false), "\x1b[31m");
/// assert_eq!(colorize("plain", &ColrStyle::default(), false), "plain");
/// ```
#[must_use]
pub fn colorize(text: impl Into<ColrText>, style: &ColrStyle, no_closing: bool) -> String {
    let text = text.into();
    let text = text.as_str();
    let codes = build_code_str(style);

    let needs_closing = !text.is_empty() && !no_closing && {
        let embedded = get_codes(text);
        let has_end = embedded.last() == Some(&CLOSING_CODE);
        !has_end && (!codes.is_empty() || !embedded.is_empty())
    };

    let mut acc = String::with_capacity(codes.len() + text.len() + CLOSING_CODE.len());
    acc.push_str(&codes);
    acc.push_str(text);
    if needs_closing {
        acc.push_str(CLOSING_CODE);
    }
    acc
}
