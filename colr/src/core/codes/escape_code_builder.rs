// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builds SGR (select graphic rendition) escape codes from resolved [`ColorSpec`]s and
//! [`StyleCode`]s. Nothing here appends the closing code, that is the job of
//! [`crate::colorize`].
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use std::fmt::{Display, Formatter, Result};

use strum_macros::Display;

use crate::{ColorSpec, ColrStyle, InlineVec, StyleCode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum CodeTarget {
    Fore,
    Back,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    /// Basic colors, color resets, and styles are a single SGR number.
    Plain(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Plain(number)            => write!(f, "{CSI}{number}{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}

impl SgrCode {
    /// Color resets and the reset-all style go before every other code in a sequence.
    #[must_use]
    pub fn is_reset(&self) -> bool { matches!(self, Self::Plain(0 | 39 | 49)) }
}

#[must_use]
pub fn color_code(target: CodeTarget, spec: ColorSpec) -> SgrCode {
    match (target, spec) {
        (CodeTarget::Fore, ColorSpec::Basic(it)) => SgrCode::Plain(it.fore_code()),
        (CodeTarget::Back, ColorSpec::Basic(it)) => SgrCode::Plain(it.back_code()),
        (CodeTarget::Fore, ColorSpec::Reset) => SgrCode::Plain(39),
        (CodeTarget::Back, ColorSpec::Reset) => SgrCode::Plain(49),
        (CodeTarget::Fore, ColorSpec::Ext(code)) => SgrCode::ForegroundAnsi256(code),
        (CodeTarget::Back, ColorSpec::Ext(code)) => SgrCode::BackgroundAnsi256(code),
        (CodeTarget::Fore, ColorSpec::Rgb(it)) => {
            SgrCode::ForegroundRGB(it.red, it.green, it.blue)
        }
        (CodeTarget::Back, ColorSpec::Rgb(it)) => {
            SgrCode::BackgroundRGB(it.red, it.green, it.blue)
        }
    }
}

#[must_use]
pub fn style_code(style: StyleCode) -> SgrCode { SgrCode::Plain(style.number()) }

/// The codes for one set of arguments. Resets come first so they can't clobber a color
/// set in the same call, and each group is ordered style, back, fore.
#[must_use]
pub fn build_codes(style: &ColrStyle) -> InlineVec<SgrCode> {
    let all = [
        style.style.map(style_code),
        style.back.map(|it| color_code(CodeTarget::Back, it)),
        style.fore.map(|it| color_code(CodeTarget::Fore, it)),
    ];
    let (resets, colors): (InlineVec<SgrCode>, InlineVec<SgrCode>) =
        all.into_iter().flatten().partition(SgrCode::is_reset);

    let mut acc = resets;
    acc.extend(colors);
    acc
}

/// [`build_codes`] joined into a single string, empty when `style` is empty.
#[must_use]
pub fn build_code_str(style: &ColrStyle) -> String {
    build_codes(style)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, RgbValue, assert_eq2};
    use test_case::test_case;

    #[test_case(SgrCode::Plain(1), "\x1b[1m")]
    #[test_case(SgrCode::Plain(0), "\x1b[0m")]
    #[test_case(SgrCode::ForegroundAnsi256(150), "\x1b[38;5;150m")]
    #[test_case(SgrCode::BackgroundAnsi256(150), "\x1b[48;5;150m")]
    #[test_case(SgrCode::ForegroundRGB(175, 215, 135), "\x1b[38;2;175;215;135m")]
    #[test_case(SgrCode::BackgroundRGB(175, 215, 135), "\x1b[48;2;175;215;135m")]
    fn test_display(code: SgrCode, expected: &str) {
        assert_eq2!(code.to_string(), expected);
    }

    #[test]
    fn test_color_code() {
        assert_eq2!(
            color_code(CodeTarget::Fore, BasicColor::Red.into()),
            SgrCode::Plain(31)
        );
        assert_eq2!(
            color_code(CodeTarget::Back, BasicColor::LightRed.into()),
            SgrCode::Plain(101)
        );
        assert_eq2!(color_code(CodeTarget::Back, ColorSpec::Reset), SgrCode::Plain(49));
        assert_eq2!(
            color_code(CodeTarget::Fore, RgbValue::from_u8(1, 2, 3).into()),
            SgrCode::ForegroundRGB(1, 2, 3)
        );
    }

    #[test]
    fn test_build_codes_order() {
        let style = ColrStyle::new()
            .set_fore(BasicColor::Red)
            .set_back(ColorSpec::Reset)
            .set_style(StyleCode::Bold);
        assert_eq2!(build_code_str(&style), "\x1b[49m\x1b[1m\x1b[31m");

        let style = ColrStyle::new()
            .set_fore(ColorSpec::Reset)
            .set_back(ColorSpec::Ext(208))
            .set_style(StyleCode::ResetAll);
        assert_eq2!(build_code_str(&style), "\x1b[0m\x1b[39m\x1b[48;5;208m");
    }

    #[test]
    fn test_empty_style_has_no_codes() {
        assert!(build_codes(&ColrStyle::default()).is_empty());
        assert_eq2!(build_code_str(&ColrStyle::default()), "");
    }
}
