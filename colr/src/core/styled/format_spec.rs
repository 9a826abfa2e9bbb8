// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small format mini-language for [`Colr`], for callers that receive their styling as
//! text, like a template or a config value.
//!
//! ```text
//! [fore=red, back=white, style=bold]^20
//! └──────────── colors ────────────┘└justify┘
//! ```
//!
//! - Colors: `key=value` pairs, with `f`, `b`, and `s` as short keys. Values without a
//!   key fill `fore`, `back`, and `style` in order. An `r;g;b` value is a true color.
//! - Justify: `[fill]<width`, `[fill]>width`, `[fill]^width`, or just `width` to left
//!   justify.

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Align, ColorSpec, Colr, ColrError, ColrResult, ColrStyle, RgbValue, StyleCode,
            parse_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum FormatKey {
    #[strum(to_string = "fore", serialize = "f")]
    Fore,
    #[strum(to_string = "back", serialize = "b")]
    Back,
    #[strum(to_string = "style", serialize = "s")]
    Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JustifySpec {
    pub fill_char: char,
    pub align: Align,
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColrFormatSpec {
    pub style: ColrStyle,
    pub justify: Option<JustifySpec>,
}

/// # Errors
///
/// - [`ColrError::InvalidFormatSpec`] for unknown or repeated keys, too many values, or
///   colors and styles that don't parse.
/// - [`ColrError::ValueParseError`] for a width that is not a number.
pub fn parse_format_spec(spec: &str) -> ColrResult<ColrFormatSpec> {
    let bracketed = spec.split_once('[').and_then(|(before, rest)| {
        rest.split_once(']')
            .map(|(colors, after)| (before, colors, after))
    });

    // The justify part may come before or after the colors.
    let (style, normal) = match bracketed {
        Some((before, colors, after)) => (
            parse_color_spec(spec, &colors.trim().to_lowercase())?,
            format!("{before}{after}"),
        ),
        None => (ColrStyle::default(), spec.to_string()),
    };

    Ok(ColrFormatSpec {
        style,
        justify: parse_justify_spec(&normal)?,
    })
}

fn parse_color_spec(spec: &str, colors: &str) -> ColrResult<ColrStyle> {
    let mut style = ColrStyle::default();
    let mut unused = vec![FormatKey::Fore, FormatKey::Back, FormatKey::Style];

    for pair in colors.split(',').map(str::trim).filter(|it| !it.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => {
                let key = FormatKey::from_str(key.trim())
                    .map_err(|_| ColrError::format_spec(spec, format!("unknown key {key:?}")))?;
                (key, value.trim())
            }
            None => {
                let Some(key) = unused.first().copied() else {
                    return Err(ColrError::format_spec(spec, "too many values"));
                };
                (key, pair)
            }
        };

        let Some(position) = unused.iter().position(|it| *it == key) else {
            return Err(ColrError::format_spec(spec, format!("{key} is set twice")));
        };
        unused.remove(position);

        let invalid = |_| ColrError::format_spec(spec, format!("invalid {key}: {value:?}"));
        match key {
            FormatKey::Fore => style.fore = Some(parse_color_value(value).map_err(invalid)?),
            FormatKey::Back => style.back = Some(parse_color_value(value).map_err(invalid)?),
            FormatKey::Style => style.style = Some(StyleCode::parse(value).map_err(invalid)?),
        }
    }

    Ok(style)
}

/// `r;g;b` is a true color, anything else goes through [`ColorSpec::parse`].
fn parse_color_value(value: &str) -> ColrResult<ColorSpec> {
    if value.matches(';').count() == 2 {
        let parts = value
            .split(';')
            .map(|it| it.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ColrError::invalid_color(value, "rgb values are in 0..=255"))?;
        if let [red, green, blue] = parts.as_slice() {
            return Ok(ColorSpec::Rgb(RgbValue::from_u8(*red, *green, *blue)));
        }
    }
    ColorSpec::parse(value, false)
}

fn parse_justify_spec(normal: &str) -> ColrResult<Option<JustifySpec>> {
    let normal = normal.trim();
    if normal.is_empty() {
        return Ok(None);
    }

    for align in [Align::Left, Align::Right, Align::Center] {
        let Some((fill, width)) = normal.split_once(align.to_string().as_str()) else {
            continue;
        };
        let mut fill_chars = fill.chars();
        let fill_char = match (fill_chars.next(), fill_chars.next()) {
            (None, _) => ' ',
            (Some(it), None) => it,
            (Some(_), Some(_)) => {
                return Err(ColrError::format_spec(normal, "the fill is a single char"));
            }
        };
        return Ok(Some(JustifySpec {
            fill_char,
            align,
            width: parse_width(width)?,
        }));
    }

    Ok(Some(JustifySpec {
        fill_char: ' ',
        align: Align::Left,
        width: parse_width(normal)?,
    }))
}

impl Colr {
    /// Applies a spec in the format mini-language (see [`parse_format_spec`]). Colors
    /// restyle the whole data, then the result is justified.
    ///
    /// ```
    /// use r3bl_colr::Colr;
    /// let it = Colr::new("hi").format_spec("[fore=red]>4").unwrap();
    /// assert_eq!(it.data, "  \x1b[31mhi\x1b[0m");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`parse_format_spec`].
    pub fn format_spec(&self, spec: &str) -> ColrResult<Colr> {
        let ColrFormatSpec { style, justify } = parse_format_spec(spec)?;
        let it = if style.is_empty() {
            self.clone()
        } else {
            Colr::from_style(self.data.as_str(), &style)
        };
        Ok(match justify {
            Some(JustifySpec {
                fill_char,
                align,
                width,
            }) => it.justified(width, fill_char, align),
            None => it,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, assert_eq2};
    use test_case::test_case;

    #[test_case("[fore=red, back=white, style=bold]", "\x1b[1m\x1b[47m\x1b[31mx\x1b[0m")]
    #[test_case("[f=red, s=bold]", "\x1b[1m\x1b[31mx\x1b[0m")]
    #[test_case("[red, white]", "\x1b[47m\x1b[31mx\x1b[0m")]
    #[test_case("[back=blue, red]", "\x1b[44m\x1b[31mx\x1b[0m")]
    #[test_case("[FORE=1;2;3]", "\x1b[38;2;1;2;3mx\x1b[0m")]
    #[test_case("[fore=208]", "\x1b[38;5;208mx\x1b[0m")]
    #[test_case("", "x")]
    fn test_colors(spec: &str, expected: &str) {
        assert_eq2!(Colr::new("x").format_spec(spec).unwrap(), expected);
    }

    #[test_case("<4", "x   ")]
    #[test_case(">4", "   x")]
    #[test_case("*^5", "**x**")]
    #[test_case("3", "x  ")]
    fn test_justify(spec: &str, expected: &str) {
        assert_eq2!(Colr::new("x").format_spec(spec).unwrap(), expected);
    }

    #[test]
    fn test_colors_and_justify() {
        assert_eq2!(
            Colr::new("x").format_spec("-<3[fore=red]").unwrap(),
            "\x1b[31mx\x1b[0m--"
        );
        assert_eq2!(
            parse_format_spec("[red]^9").unwrap(),
            ColrFormatSpec {
                style: ColrStyle::new().set_fore(BasicColor::Red),
                justify: Some(JustifySpec {
                    fill_char: ' ',
                    align: Align::Center,
                    width: 9,
                }),
            }
        );
    }

    #[test_case("[red, white, bold, extra]")]
    #[test_case("[fore=red, fore=blue]")]
    #[test_case("[color=red]")]
    #[test_case("[fore=notacolor]")]
    #[test_case("[style=sparkly]")]
    #[test_case("[fore=1;2;300]")]
    #[test_case("ab<4")]
    fn test_invalid_format_spec(spec: &str) {
        assert!(matches!(
            parse_format_spec(spec),
            Err(ColrError::InvalidFormatSpec { .. })
        ));
    }

    #[test_case("<x")]
    #[test_case("wide")]
    fn test_invalid_width(spec: &str) {
        assert!(matches!(
            parse_format_spec(spec),
            Err(ColrError::ValueParseError { .. })
        ));
    }
}
