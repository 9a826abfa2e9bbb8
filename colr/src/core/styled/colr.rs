// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Colr`] is an owned string buffer of text and escape codes, that knows which parts
//! are visible.
//!
//! Methods come in two families:
//!
//! | Family    | Receiver   | Returns                  | Examples                          |
//! | :-------- | :--------- | :----------------------- | :-------------------------------- |
//! | Append    | `self`     | `Self` (or `ColrResult`) | `styled`, `with_fore`, `hex`      |
//! | Transform | `&self`    | a new [`Colr`]           | `slice`, `ljust`, `strip`, `join` |
//!
//! The append family adds to the end of the buffer and hands it back, so calls chain:
//!
//! ```
//! use r3bl_colr::{BasicColor, Colr, StyleCode};
//! let it = Colr::default()
//!     .with_fore(BasicColor::Red, "error")
//!     .chained(": ")
//!     .with_style(StyleCode::Bold, "disk full");
//! assert_eq!(it.stripped(), "error: disk full");
//! ```
//!
//! The transform family leaves `self` alone. Every transform that builds its result from
//! a raw string goes through [`colorize`] again, so a result with codes in it always
//! ends with a closing code.

use std::{fmt::{Display, Formatter, Result},
          io::Write,
          ops::{Add, Mul}};

use super::{ColrText, colorize};
use crate::{Align, CLOSING_CODE, ColorSpec, ColrError, ColrResult, ColrStyle, NamedCode,
            RgbValue, Segment, StripMethod, StyleCode, VisibleSlice, index_text, justify,
            lookup_name, segment, slice_text, squeeze_width, strip_chars as strip_segments,
            strip_codes, visible_len};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colr {
    pub data: String,
}

/// Constructors.
impl Colr {
    /// `text` with no codes added. If `text` already has codes, the closing code is
    /// added when it is missing.
    #[must_use]
    pub fn new(text: impl Into<ColrText>) -> Self { Self::from_style(text, &ColrStyle::default()) }

    #[must_use]
    pub fn from_style(text: impl Into<ColrText>, style: &ColrStyle) -> Self {
        Self {
            data: colorize(text, style, false),
        }
    }

    /// Leaves the codes open, so the style carries on into whatever is written next.
    #[must_use]
    pub fn from_style_no_closing(text: impl Into<ColrText>, style: &ColrStyle) -> Self {
        Self {
            data: colorize(text, style, true),
        }
    }

    /// Parses the `fore`, `back`, and `style` names with [`ColrStyle::try_from_names`].
    ///
    /// # Errors
    ///
    /// Returns the first name that fails to parse.
    pub fn try_new(
        text: impl Into<ColrText>,
        fore: Option<&str>,
        back: Option<&str>,
        style: Option<&str>,
    ) -> ColrResult<Self> {
        let style = ColrStyle::try_from_names(fore, back, style)?;
        Ok(Self::from_style(text, &style))
    }
}

/// Append family.
impl Colr {
    /// Appends raw `text`, as is.
    #[must_use]
    pub fn chained(mut self, text: impl AsRef<str>) -> Self {
        self.data.push_str(text.as_ref());
        self
    }

    /// Appends `text` colorized with `style`.
    #[must_use]
    pub fn styled(self, text: impl Into<ColrText>, style: &ColrStyle) -> Self {
        let it = colorize(text, style, false);
        self.chained(it)
    }

    /// # Errors
    ///
    /// Returns the first name that fails to parse.
    pub fn try_styled(
        self,
        text: impl Into<ColrText>,
        fore: Option<&str>,
        back: Option<&str>,
        style: Option<&str>,
    ) -> ColrResult<Self> {
        let style = ColrStyle::try_from_names(fore, back, style)?;
        Ok(self.styled(text, &style))
    }

    #[must_use]
    pub fn with_fore(self, fore: impl Into<ColorSpec>, text: impl Into<ColrText>) -> Self {
        self.styled(text, &ColrStyle::new().set_fore(fore))
    }

    #[must_use]
    pub fn with_back(self, back: impl Into<ColorSpec>, text: impl Into<ColrText>) -> Self {
        self.styled(text, &ColrStyle::new().set_back(back))
    }

    #[must_use]
    pub fn with_style(self, style: StyleCode, text: impl Into<ColrText>) -> Self {
        self.styled(text, &ColrStyle::new().set_style(style))
    }

    /// Appends `text` styled by a single name from the name table, like `red`, `bgblue`,
    /// `bold`, `f_208`, or `b_aliceblue`. See [`crate::lookup_name`].
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::UnknownColorName`] if `name` is not in the table.
    pub fn named(self, name: &str, text: impl Into<ColrText>) -> ColrResult<Self> {
        let style = match lookup_name(name) {
            Some(NamedCode::Fore(it)) => ColrStyle::new().set_fore(it),
            Some(NamedCode::Back(it)) => ColrStyle::new().set_back(it),
            Some(NamedCode::Style(it)) => ColrStyle::new().set_style(it),
            None => {
                return Err(ColrError::UnknownColorName {
                    name: name.to_string(),
                });
            }
        };
        Ok(self.styled(text, &style))
    }

    /// Fore color from a hex value. Without `rgb_mode` the nearest terminal code is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::MalformedColor`] if `value` is not a hex color.
    pub fn hex(
        self,
        value: &str,
        text: impl Into<ColrText>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        let fore = ColorSpec::from_hex(value, rgb_mode)?;
        Ok(self.with_fore(fore, text))
    }

    /// Back color version of [`Colr::hex`].
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::MalformedColor`] if `value` is not a hex color.
    pub fn b_hex(
        self,
        value: &str,
        text: impl Into<ColrText>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        let back = ColorSpec::from_hex(value, rgb_mode)?;
        Ok(self.with_back(back, text))
    }

    #[must_use]
    pub fn rgb(self, red: u8, green: u8, blue: u8, text: impl Into<ColrText>) -> Self {
        self.with_fore(RgbValue::from_u8(red, green, blue), text)
    }

    #[must_use]
    pub fn b_rgb(self, red: u8, green: u8, blue: u8, text: impl Into<ColrText>) -> Self {
        self.with_back(RgbValue::from_u8(red, green, blue), text)
    }

    /// Appends `text` repeated `length` times.
    #[must_use]
    pub fn append(self, text: &str, length: usize) -> Self { self.chained(text.repeat(length)) }

    /// Appends the closing code.
    #[must_use]
    pub fn reset(self) -> Self { self.chained(CLOSING_CODE) }

    /// Writes and flushes the data, which is then cleared.
    ///
    /// # Errors
    ///
    /// Returns any IO error from `writer`.
    pub fn write(&mut self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(self.data.as_bytes())?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// Writes the data and a new line to stdout, then clears the data.
    ///
    /// # Errors
    ///
    /// Returns any IO error from stdout.
    pub fn print(&mut self) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.data.push('\n');
        self.write(&mut stdout)
    }
}

/// Transform family.
impl Colr {
    #[must_use]
    pub fn as_str(&self) -> &str { &self.data }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Data with every escape code removed.
    #[must_use]
    pub fn stripped(&self) -> String { strip_codes(&self.data) }

    /// The width on screen, codes don't count.
    #[must_use]
    pub fn visible_len(&self) -> usize { visible_len(&self.data) }

    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> { segment(&self.data) }

    /// Slices the visible chars, keeping the codes that color them.
    ///
    /// ```
    /// use r3bl_colr::{BasicColor, Colr};
    /// let it = Colr::default().with_fore(BasicColor::Red, "hello");
    /// assert_eq!(it.slice(1..3).unwrap().data, "\x1b[31mel\x1b[0m");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::ValueParseError`] for a step of `0`.
    pub fn slice(&self, slice: impl Into<VisibleSlice>) -> ColrResult<Colr> {
        Ok(Colr::new(slice_text(&self.data, slice)?))
    }

    /// # Errors
    ///
    /// Returns [`ColrError::IndexOutOfBounds`] if `index` is outside the visible text.
    pub fn index(&self, index: isize) -> ColrResult<Colr> {
        Ok(Colr::new(index_text(&self.data, index)?))
    }

    #[must_use]
    pub fn justified(&self, width: usize, fill_char: char, align: Align) -> Colr {
        Colr::new(justify(&self.data, width, fill_char, align))
    }

    #[must_use]
    pub fn ljust(&self, width: usize, fill_char: char) -> Colr {
        self.justified(width, fill_char, Align::Left)
    }

    #[must_use]
    pub fn rjust(&self, width: usize, fill_char: char) -> Colr {
        self.justified(width, fill_char, Align::Right)
    }

    #[must_use]
    pub fn center(&self, width: usize, fill_char: char) -> Colr {
        self.justified(width, fill_char, Align::Center)
    }

    /// Justifies `text`, colorizes it with `style`, and appends it to a copy of the data.
    /// With `squeeze`, the width already taken by the data is subtracted from `width`, so
    /// the whole result is `width` wide.
    #[must_use]
    pub fn justify_text(
        &self,
        text: &str,
        width: usize,
        fill_char: char,
        align: Align,
        squeeze: bool,
        style: &ColrStyle,
    ) -> Colr {
        let width = if squeeze { squeeze_width(&self.data, width) } else { width };
        let justified = colorize(justify(text, width, fill_char, align), style, false);
        Colr::new(format!("{}{justified}", self.data))
    }

    #[must_use]
    pub fn ljust_text(
        &self,
        text: &str,
        width: usize,
        fill_char: char,
        squeeze: bool,
        style: &ColrStyle,
    ) -> Colr {
        self.justify_text(text, width, fill_char, Align::Left, squeeze, style)
    }

    #[must_use]
    pub fn rjust_text(
        &self,
        text: &str,
        width: usize,
        fill_char: char,
        squeeze: bool,
        style: &ColrStyle,
    ) -> Colr {
        self.justify_text(text, width, fill_char, Align::Right, squeeze, style)
    }

    #[must_use]
    pub fn center_text(
        &self,
        text: &str,
        width: usize,
        fill_char: char,
        squeeze: bool,
        style: &ColrStyle,
    ) -> Colr {
        self.justify_text(text, width, fill_char, Align::Center, squeeze, style)
    }

    /// Trims `chars` (whitespace when `None`) off the end(s), looking through codes. When
    /// `chars` is an escape code, only exact copies of it are trimmed. Trimming the
    /// closing code leaves it off of the result.
    #[must_use]
    pub fn strip_chars(&self, method: StripMethod, chars: Option<&str>) -> Colr {
        let no_closing = chars.is_some_and(|it| it.contains(CLOSING_CODE));
        let stripped = strip_segments(&self.data, method, chars);
        Colr::from_style_no_closing_if(stripped, no_closing)
    }

    #[must_use]
    pub fn strip(&self, chars: Option<&str>) -> Colr { self.strip_chars(StripMethod::Both, chars) }

    #[must_use]
    pub fn lstrip(&self, chars: Option<&str>) -> Colr { self.strip_chars(StripMethod::Left, chars) }

    #[must_use]
    pub fn rstrip(&self, chars: Option<&str>) -> Colr {
        self.strip_chars(StripMethod::Right, chars)
    }

    /// Joins `parts` with the data as the separator. Nested parts are flattened one level.
    /// With a `style`, each part is colorized before joining.
    ///
    /// ```
    /// use r3bl_colr::{Colr, JoinArg};
    /// let parts = [JoinArg::from("a"), JoinArg::from(vec!["b", "c"])];
    /// assert_eq!(Colr::new(", ").join(parts, None).data, "a, b, c");
    /// ```
    #[must_use]
    pub fn join<P: Into<JoinArg>>(
        &self,
        parts: impl IntoIterator<Item = P>,
        style: Option<&ColrStyle>,
    ) -> Colr {
        let flat = parts
            .into_iter()
            .flat_map(|it| match it.into() {
                JoinArg::Single(it) => vec![it],
                JoinArg::Nested(it) => it,
            })
            .map(|it| match style {
                Some(style) => colorize(it, style, false),
                None => it,
            })
            .collect::<Vec<_>>();
        Colr::new(flat.join(&self.data))
    }

    /// `text` repeated `length` times, in front of the data.
    #[must_use]
    pub fn prepend(&self, text: &str, length: usize) -> Colr {
        Colr {
            data: format!("{}{}", text.repeat(length), self.data),
        }
    }

    #[must_use]
    pub fn indent(&self, length: usize, fill_char: char) -> Colr {
        self.prepend(fill_char.encode_utf8(&mut [0; 4]), length)
    }

    fn from_style_no_closing_if(text: String, no_closing: bool) -> Colr {
        if no_closing {
            Colr::from_style_no_closing(text, &ColrStyle::default())
        } else {
            Colr::new(text)
        }
    }
}

/// A single part or a list of parts for [`Colr::join`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinArg {
    Single(String),
    Nested(Vec<String>),
}

impl From<&str> for JoinArg {
    fn from(it: &str) -> Self { Self::Single(it.to_string()) }
}

impl From<String> for JoinArg {
    fn from(it: String) -> Self { Self::Single(it) }
}

impl From<char> for JoinArg {
    fn from(it: char) -> Self { Self::Single(it.to_string()) }
}

impl From<Colr> for JoinArg {
    fn from(it: Colr) -> Self { Self::Single(it.data) }
}

impl From<&Colr> for JoinArg {
    fn from(it: &Colr) -> Self { Self::Single(it.data.clone()) }
}

impl<T: Into<String>> From<Vec<T>> for JoinArg {
    fn from(it: Vec<T>) -> Self { Self::Nested(it.into_iter().map(Into::into).collect()) }
}

impl<T: Into<String>, const N: usize> From<[T; N]> for JoinArg {
    fn from(it: [T; N]) -> Self { Self::Nested(it.into_iter().map(Into::into).collect()) }
}

/// Honours width, fill, and alignment against the visible length, so
/// `format!("{:^10}", it)` centers the text, not the codes.
impl Display for Colr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match f.width() {
            None => f.write_str(&self.data),
            Some(width) => {
                let align = f.align().map_or(Align::Left, Align::from);
                f.write_str(&justify(&self.data, width, f.fill(), align))
            }
        }
    }
}

impl AsRef<str> for Colr {
    fn as_ref(&self) -> &str { &self.data }
}

impl From<&str> for Colr {
    fn from(it: &str) -> Self { Colr::new(it) }
}

impl From<String> for Colr {
    fn from(it: String) -> Self { Colr::new(it) }
}

impl From<Colr> for String {
    fn from(it: Colr) -> Self { it.data }
}

impl PartialEq<str> for Colr {
    fn eq(&self, other: &str) -> bool { self.data == other }
}

impl PartialEq<&str> for Colr {
    fn eq(&self, other: &&str) -> bool { self.data == *other }
}

impl Add<&str> for Colr {
    type Output = Colr;

    fn add(self, rhs: &str) -> Self::Output { Colr::new(self.data + rhs) }
}

impl Add<Colr> for Colr {
    type Output = Colr;

    fn add(self, rhs: Colr) -> Self::Output { Colr::new(self.data + &rhs.data) }
}

impl Add<&Colr> for Colr {
    type Output = Colr;

    fn add(self, rhs: &Colr) -> Self::Output { Colr::new(self.data + &rhs.data) }
}

impl Add<Colr> for &str {
    type Output = Colr;

    fn add(self, rhs: Colr) -> Self::Output { Colr::new(format!("{self}{}", rhs.data)) }
}

impl Mul<usize> for Colr {
    type Output = Colr;

    fn mul(self, rhs: usize) -> Self::Output { Colr::new(self.data.repeat(rhs)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, assert_eq2};
    use test_case::test_case;

    fn red(text: &str) -> Colr { Colr::default().with_fore(BasicColor::Red, text) }

    #[test]
    fn test_constructors() {
        assert_eq2!(Colr::new("plain"), "plain");
        assert_eq2!(Colr::new(()).data, "");
        assert_eq2!(
            Colr::try_new("x", Some("red"), None, Some("bold")).unwrap(),
            "\x1b[1m\x1b[31mx\x1b[0m"
        );
        assert!(Colr::try_new("x", Some("nope"), None, None).is_err());
        assert_eq2!(
            Colr::from_style_no_closing("x", &ColrStyle::new().set_fore(BasicColor::Red)),
            "\x1b[31mx"
        );
        // Unclosed codes get closed.
        assert_eq2!(Colr::new("\x1b[31mx"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_append_family_chains() {
        let it = Colr::new("a")
            .with_back(BasicColor::Blue, "b")
            .chained("c")
            .append("-", 3)
            .rgb(1, 2, 3, "d");
        assert_eq2!(it, "a\x1b[44mb\x1b[0mc---\x1b[38;2;1;2;3md\x1b[0m");
        assert_eq2!(Colr::default().with_fore(BasicColor::Red, ()).reset(), "\x1b[31m\x1b[0m");
    }

    #[test_case("red", "\x1b[31mx\x1b[0m")]
    #[test_case("bgblue", "\x1b[44mx\x1b[0m")]
    #[test_case("bold", "\x1b[1mx\x1b[0m")]
    #[test_case("f_208", "\x1b[38;5;208mx\x1b[0m")]
    fn test_named(name: &str, expected: &str) {
        assert_eq2!(Colr::default().named(name, "x").unwrap(), expected);
    }

    #[test]
    fn test_named_unknown() {
        assert_eq2!(
            Colr::default().named("sparkly", "x"),
            Err(ColrError::UnknownColorName {
                name: "sparkly".into()
            })
        );
    }

    #[test]
    fn test_hex() {
        assert_eq2!(
            Colr::default().hex("#ff0000", "x", false).unwrap(),
            "\x1b[38;5;196mx\x1b[0m"
        );
        assert_eq2!(
            Colr::default().b_hex("010203", "x", true).unwrap(),
            "\x1b[48;2;1;2;3mx\x1b[0m"
        );
        assert!(Colr::default().hex("#ff00", "x", false).is_err());
    }

    #[test]
    fn test_slice_and_index() {
        let it = red("hello");
        assert_eq2!(it.slice(1..3).unwrap(), "\x1b[31mel\x1b[0m");
        assert_eq2!(it.index(-1).unwrap(), "\x1b[31mo\x1b[0m");
        assert!(matches!(
            it.index(5),
            Err(ColrError::IndexOutOfBounds { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_justify_self() {
        let it = red("test");
        assert_eq2!(it.ljust(10, ' '), "\x1b[31mtest\x1b[0m      ");
        assert_eq2!(it.rjust(6, '.'), "..\x1b[31mtest\x1b[0m");
        assert_eq2!(it.center(8, '-').visible_len(), 8);
        assert_eq2!(it.ljust(2, ' '), it);
    }

    #[test]
    fn test_justify_text_squeeze() {
        let it = Colr::new("ab");
        let style = ColrStyle::new().set_fore(BasicColor::Red);
        assert_eq2!(
            it.rjust_text("x", 5, ' ', true, &style),
            "ab\x1b[31m  x\x1b[0m"
        );
        assert_eq2!(it.ljust_text("x", 3, '.', false, &ColrStyle::default()), "abx..");
    }

    #[test]
    fn test_strip_family() {
        let it = Colr::new("  \x1b[31m test \x1b[0m  ");
        assert_eq2!(it.strip(None), "\x1b[31mtest\x1b[0m");
        assert_eq2!(it.lstrip(None), "\x1b[31mtest \x1b[0m  ");
        assert_eq2!(it.rstrip(None), "  \x1b[31m test\x1b[0m");
        assert_eq2!(red("x").rstrip(Some(CLOSING_CODE)), "\x1b[31mx");
    }

    #[test]
    fn test_join() {
        assert_eq2!(Colr::new("-").join(["a", "b", "c"], None), "a-b-c");
        let parts = [JoinArg::from('a'), JoinArg::from(["b", "c"]), JoinArg::from(red("d"))];
        assert_eq2!(
            Colr::new(",").join(parts, None),
            "a,b,c,\x1b[31md\x1b[0m"
        );
        let style = ColrStyle::new().set_fore(BasicColor::Red);
        assert_eq2!(
            Colr::new(" ").join(["a", "b"], Some(&style)),
            "\x1b[31ma\x1b[0m \x1b[31mb\x1b[0m"
        );
    }

    #[test]
    fn test_prepend_and_indent() {
        assert_eq2!(Colr::new("x").prepend("ab", 2), "ababx");
        assert_eq2!(red("x").indent(2, ' '), "  \x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_display_uses_visible_width() {
        let it = red("ab");
        assert_eq2!(format!("{it:>4}"), "  \x1b[31mab\x1b[0m");
        assert_eq2!(format!("{it:*^6}"), "**\x1b[31mab\x1b[0m**");
        assert_eq2!(format!("{it}"), "\x1b[31mab\x1b[0m");
    }

    #[test]
    fn test_operators() {
        assert_eq2!(Colr::new("a") + "b", "ab");
        let open = Colr {
            data: "\x1b[31ma".into(),
        };
        assert_eq2!(open + "b", "\x1b[31mab\x1b[0m");
        assert_eq2!("a" + Colr::new("b"), "ab");
        assert_eq2!(Colr::new("ab") * 2, "abab");
        assert!(Colr::new("a") < Colr::new("b"));
    }

    #[test]
    fn test_write_clears() {
        let mut buffer = vec![];
        let mut it = red("x");
        it.write(&mut buffer).unwrap();
        assert_eq2!(String::from_utf8(buffer).unwrap(), "\x1b[31mx\x1b[0m");
        assert!(it.is_empty());
    }
}
