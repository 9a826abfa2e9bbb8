// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resolved color and style arguments. Every user facing color argument (a name, a
//! number, an `"r,g,b"` string, or a hex string) is parsed into a [`ColorSpec`] once,
//! and escape codes are built from that.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::{RgbValue, get_named_color, hex_to_rgb, hex_to_term_code};
use crate::{ColrError, ColrResult};

/// The 8 basic terminal colors and their light variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    LightBlack,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

impl BasicColor {
    /// Position in the 8 color table, `0..=7`.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Black | Self::LightBlack => 0,
            Self::Red | Self::LightRed => 1,
            Self::Green | Self::LightGreen => 2,
            Self::Yellow | Self::LightYellow => 3,
            Self::Blue | Self::LightBlue => 4,
            Self::Magenta | Self::LightMagenta => 5,
            Self::Cyan | Self::LightCyan => 6,
            Self::White | Self::LightWhite => 7,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool { self.as_ref().starts_with("light") }

    #[must_use]
    pub fn fore_code(self) -> u8 {
        if self.is_light() { 90 + self.number() } else { 30 + self.number() }
    }

    #[must_use]
    pub fn back_code(self) -> u8 {
        if self.is_light() { 100 + self.number() } else { 40 + self.number() }
    }

    /// Full names plus the short aliases: the first letter of each name, `l` + first
    /// letter for the light variants, and `bl`/`blk`/`lbl`/`lblk` for black since `b`
    /// and `lb` belong to blue.
    #[must_use]
    pub fn from_alias(name: &str) -> Option<Self> {
        let it = match name {
            "b" => Self::Blue,
            "bl" | "blk" => Self::Black,
            "lb" => Self::LightBlue,
            "lbl" | "lblk" => Self::LightBlack,
            "r" => Self::Red,
            "g" => Self::Green,
            "y" => Self::Yellow,
            "m" => Self::Magenta,
            "c" => Self::Cyan,
            "w" => Self::White,
            "lr" => Self::LightRed,
            "lg" => Self::LightGreen,
            "ly" => Self::LightYellow,
            "lm" => Self::LightMagenta,
            "lc" => Self::LightCyan,
            "lw" => Self::LightWhite,
            _ => return Self::from_str(name).ok(),
        };
        Some(it)
    }
}

/// A resolved color. Ext codes and RGB components are in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    Basic(BasicColor),
    /// Restores the terminal default color (`39` fore, `49` back).
    Reset,
    Ext(u8),
    Rgb(RgbValue),
}

impl From<BasicColor> for ColorSpec {
    fn from(it: BasicColor) -> Self { Self::Basic(it) }
}

impl From<u8> for ColorSpec {
    fn from(it: u8) -> Self { Self::Ext(it) }
}

impl From<RgbValue> for ColorSpec {
    fn from(it: RgbValue) -> Self { Self::Rgb(it) }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from(it: (u8, u8, u8)) -> Self { Self::Rgb(it.into()) }
}

impl FromStr for ColorSpec {
    type Err = ColrError;

    fn from_str(arg: &str) -> ColrResult<Self> { Self::parse(arg, false) }
}

impl ColorSpec {
    /// Resolves a color argument, trying in order:
    /// 1. `reset` and the basic names with their aliases.
    /// 2. Integers `0..=255` as extended codes. Out of range integers with 3 or 6
    ///    digits are retried as hex.
    /// 3. `"r,g,b"` strings.
    /// 4. Named colors, like `aliceblue`.
    /// 5. Hex strings, with an optional leading `#`.
    ///
    /// When `rgb_mode` is set, named and hex colors become true color values instead of
    /// the nearest terminal code.
    ///
    /// # Errors
    ///
    /// - [`ColrError::InvalidColor`] for numbers or RGB values outside `0..=255`.
    /// - [`ColrError::MalformedColor`] for hex looking strings of the wrong length.
    /// - [`ColrError::UnknownColorName`] for anything else.
    pub fn parse(arg: &str, rgb_mode: bool) -> ColrResult<Self> {
        let name = arg.trim().to_lowercase();

        if name == "reset" {
            return Ok(Self::Reset);
        }
        if let Some(basic) = BasicColor::from_alias(&name) {
            return Ok(Self::Basic(basic));
        }
        if let Ok(number) = name.parse::<i64>() {
            if let Ok(code) = u8::try_from(number) {
                return Ok(Self::Ext(code));
            }
            if matches!(name.len(), 3 | 6) {
                return Self::from_hex(&name, rgb_mode);
            }
            return Err(ColrError::invalid_color(arg, "codes are in 0..=255"));
        }
        if name.contains(',') {
            return parse_rgb_triple(arg, &name).map(Self::Rgb);
        }
        if let Some(named) = get_named_color(&name) {
            return Ok(if rgb_mode {
                Self::Rgb(named.rgb)
            } else {
                Self::Ext(named.code)
            });
        }
        let digits = name.trim_start_matches('#');
        if !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Self::from_hex(&name, rgb_mode);
        }

        Err(ColrError::UnknownColorName { name: arg.to_string() })
    }

    /// # Errors
    ///
    /// Returns [`ColrError::MalformedColor`] if `hex` can't be parsed.
    pub fn from_hex(hex: &str, rgb_mode: bool) -> ColrResult<Self> {
        if rgb_mode {
            Ok(Self::Rgb(hex_to_rgb(hex)?))
        } else {
            Ok(Self::Ext(hex_to_term_code(hex)?))
        }
    }

    #[must_use]
    pub fn is_reset(&self) -> bool { matches!(self, Self::Reset) }
}

fn parse_rgb_triple(arg: &str, name: &str) -> ColrResult<RgbValue> {
    let parts = name.split(',').map(str::trim).collect::<Vec<_>>();
    let [red, green, blue] = parts.as_slice() else {
        return Err(ColrError::invalid_color(arg, "expected 3 values for r,g,b"));
    };
    let channel = |it: &str| {
        it.parse::<u8>()
            .map_err(|_| ColrError::invalid_color(arg, "rgb values are in 0..=255"))
    };
    Ok(RgbValue::from_u8(channel(red)?, channel(green)?, channel(blue)?))
}

/// Text style attributes. The discriminant is the SGR number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StyleCode {
    ResetAll = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underlined = 4,
    Flash = 5,
    Reverse = 7,
    None = 22,
}

impl StyleCode {
    #[must_use]
    pub fn number(self) -> u8 { self as u8 }

    /// The canonical name, used when reporting a style back to the user.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    /// # Errors
    ///
    /// Returns [`ColrError::UnknownColorName`] if `name` is not a known style number or
    /// alias.
    pub fn parse(name: &str) -> ColrResult<Self> {
        let it = match name.trim().to_lowercase().as_str() {
            "0" | "reset_all" => Self::ResetAll,
            "1" | "b" | "bright" | "bold" => Self::Bold,
            "2" | "d" | "dim" => Self::Dim,
            "3" | "i" | "italic" => Self::Italic,
            "4" | "u" | "underline" | "underlined" => Self::Underlined,
            "5" | "f" | "flash" => Self::Flash,
            "7" | "h" | "highlight" | "hilight" | "hilite" | "reverse" => Self::Reverse,
            "22" | "n" | "normal" | "none" => Self::None,
            _ => {
                return Err(ColrError::UnknownColorName {
                    name: name.to_string(),
                });
            }
        };
        Ok(it)
    }

    /// Every accepted spelling, including the SGR numbers.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ResetAll => &["0", "reset_all"],
            Self::Bold => &["1", "b", "bright", "bold"],
            Self::Dim => &["2", "d", "dim"],
            Self::Italic => &["3", "i", "italic"],
            Self::Underlined => &["4", "u", "underline", "underlined"],
            Self::Flash => &["5", "f", "flash"],
            Self::Reverse => &["7", "h", "highlight", "hilight", "hilite", "reverse"],
            Self::None => &["22", "n", "normal", "none"],
        }
    }
}

impl FromStr for StyleCode {
    type Err = ColrError;

    fn from_str(name: &str) -> ColrResult<Self> { Self::parse(name) }
}

/// The optional fore, back, and style arguments of a single colorize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColrStyle {
    pub fore: Option<ColorSpec>,
    pub back: Option<ColorSpec>,
    pub style: Option<StyleCode>,
}

impl ColrStyle {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parses each given name with [`ColorSpec::parse`] and [`StyleCode::parse`].
    ///
    /// # Errors
    ///
    /// Returns the first parse error.
    pub fn try_from_names(
        fore: Option<&str>,
        back: Option<&str>,
        style: Option<&str>,
    ) -> ColrResult<Self> {
        Ok(Self {
            fore: fore.map(|it| ColorSpec::parse(it, false)).transpose()?,
            back: back.map(|it| ColorSpec::parse(it, false)).transpose()?,
            style: style.map(StyleCode::parse).transpose()?,
        })
    }

    #[must_use]
    pub fn set_fore(mut self, fore: impl Into<ColorSpec>) -> Self {
        self.fore = Some(fore.into());
        self
    }

    #[must_use]
    pub fn set_back(mut self, back: impl Into<ColorSpec>) -> Self {
        self.back = Some(back.into());
        self
    }

    #[must_use]
    pub fn set_style(mut self, style: StyleCode) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fore.is_none() && self.back.is_none() && self.style.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("red", ColorSpec::Basic(BasicColor::Red))]
    #[test_case("b", ColorSpec::Basic(BasicColor::Blue))]
    #[test_case("blk", ColorSpec::Basic(BasicColor::Black))]
    #[test_case("lblk", ColorSpec::Basic(BasicColor::LightBlack))]
    #[test_case("LightCyan", ColorSpec::Basic(BasicColor::LightCyan))]
    #[test_case("reset", ColorSpec::Reset)]
    #[test_case("0", ColorSpec::Ext(0))]
    #[test_case("255", ColorSpec::Ext(255))]
    #[test_case("ffffff", ColorSpec::Ext(231))]
    #[test_case("#f00", ColorSpec::Ext(196))]
    #[test_case("255,0,1", ColorSpec::Rgb(RgbValue{red: 255, green: 0, blue: 1}))]
    #[test_case("aliceblue", ColorSpec::Ext(231))]
    fn test_parse(arg: &str, expected: ColorSpec) {
        assert_eq2!(ColorSpec::parse(arg, false).unwrap(), expected);
    }

    #[test]
    fn test_parse_rgb_mode() {
        assert_eq2!(
            ColorSpec::parse("#010203", true).unwrap(),
            ColorSpec::Rgb(RgbValue::from_u8(1, 2, 3))
        );
        assert_eq2!(
            ColorSpec::parse("aliceblue", true).unwrap(),
            ColorSpec::Rgb(RgbValue::from_u8(255, 255, 255))
        );
    }

    #[test]
    fn test_parse_out_of_range_int_retried_as_hex() {
        assert_eq2!(ColorSpec::parse("333", false).unwrap(), ColorSpec::Ext(59));
        assert!(matches!(
            ColorSpec::parse("1234", false),
            Err(ColrError::InvalidColor { .. })
        ));
    }

    #[test_case("256,0,0")]
    #[test_case("1,2")]
    #[test_case("-1,0,0")]
    fn test_parse_bad_rgb(arg: &str) {
        assert!(matches!(
            ColorSpec::parse(arg, false),
            Err(ColrError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_and_malformed() {
        assert!(matches!(
            ColorSpec::parse("notacolor", false),
            Err(ColrError::UnknownColorName { .. })
        ));
        assert!(matches!(
            ColorSpec::parse("#abcd", false),
            Err(ColrError::MalformedColor { .. })
        ));
    }

    #[test_case(BasicColor::Black, 30, 40)]
    #[test_case(BasicColor::White, 37, 47)]
    #[test_case(BasicColor::LightBlack, 90, 100)]
    #[test_case(BasicColor::LightWhite, 97, 107)]
    fn test_basic_codes(color: BasicColor, fore: u8, back: u8) {
        assert_eq2!(color.fore_code(), fore);
        assert_eq2!(color.back_code(), back);
    }

    #[test]
    fn test_style_aliases_resolve_to_canonical() {
        use strum::IntoEnumIterator;
        for style in StyleCode::iter() {
            for alias in style.aliases() {
                assert_eq2!(StyleCode::parse(alias).unwrap(), style);
            }
        }
        assert_eq2!(StyleCode::parse("hilite").unwrap().name(), "reverse");
        assert_eq2!(StyleCode::parse("22").unwrap().number(), 22);
        assert_eq2!(
            StyleCode::parse("blinky"),
            Err(ColrError::UnknownColorName {
                name: "blinky".into()
            })
        );
    }

    #[test]
    fn test_unknown_style_name_in_colr_style() {
        assert_eq2!(
            ColrStyle::try_from_names(None, None, Some("sparkle")),
            Err(ColrError::UnknownColorName {
                name: "sparkle".into()
            })
        );
        assert!(matches!(
            crate::Colr::try_new("x", Some("red"), None, Some("sparkle")),
            Err(ColrError::UnknownColorName { .. })
        ));
    }

    #[test]
    fn test_colr_style_from_names() {
        let it = ColrStyle::try_from_names(Some("red"), None, Some("bold")).unwrap();
        assert_eq2!(
            it,
            ColrStyle::new()
                .set_fore(BasicColor::Red)
                .set_style(StyleCode::Bold)
        );
        assert!(!it.is_empty());
        assert!(ColrStyle::default().is_empty());
    }
}
