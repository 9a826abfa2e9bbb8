// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Explains the color codes embedded in a string, turning `\x1b[38;5;208m` back into
//! "extended fore, darkorange".

use std::{collections::HashSet,
          fmt::{Display, Formatter, Result}};

use strum_macros::Display;

use crate::{CLOSING_CODE, ColorCode, ColrError, ColrResult, KnownName, RgbValue,
            get_codes, get_known_ext_name, get_known_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CodeKind {
    Fore,
    Back,
    Style,
    #[strum(serialize = "Extended Fore")]
    ExtendedFore,
    #[strum(serialize = "Extended Back")]
    ExtendedBack,
    #[strum(serialize = "Rgb Fore")]
    RgbFore,
    #[strum(serialize = "Rgb Back")]
    RgbBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMeaning {
    Known(KnownName),
    Rgb(RgbValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeInfo<'a> {
    pub code: &'a str,
    pub kind: CodeKind,
    pub meaning: CodeMeaning,
}

/// The number at the end of a color code: the SGR number for basic codes, or the
/// palette index for extended codes.
///
/// # Errors
///
/// Returns [`ColrError::InvalidEscapeCode`] if that is not a number in `0..=255`.
pub fn get_code_num(code: &str) -> ColrResult<u8> {
    let tail = match code.rsplit_once(';') {
        Some((_, tail)) => tail,
        None => code.rsplit_once('[').map_or(code, |(_, tail)| tail),
    };
    let number = tail.strip_suffix('m').unwrap_or(tail);
    number
        .parse::<u8>()
        .map_err(|_| ColrError::escape_code(code, format!("{number:?} is not in 0..=255")))
}

/// The red, green, and blue values of a true color code like `\x1b[38;2;1;2;3m`.
///
/// # Errors
///
/// Returns [`ColrError::InvalidEscapeCode`] if the code doesn't have that shape, or a
/// value is not in `0..=255`.
pub fn get_code_num_rgb(code: &str) -> ColrResult<RgbValue> {
    let parts = code.split(';').collect::<Vec<_>>();
    let [_, _, red, green, blue] = parts.as_slice() else {
        return Err(ColrError::escape_code(code, "count is off"));
    };
    let Some(blue) = blue.strip_suffix('m') else {
        return Err(ColrError::escape_code(code, "missing 'm' on the end"));
    };
    let channel = |it: &str| {
        it.parse::<u8>()
            .map_err(|_| ColrError::escape_code(code, "not in range 0-255"))
    };
    Ok(RgbValue::from_u8(channel(red)?, channel(green)?, channel(blue)?))
}

/// Explains a single color code. Codes with no known meaning give `None`.
///
/// # Errors
///
/// Returns [`ColrError::InvalidEscapeCode`] for extended or RGB codes with out of
/// range numbers.
pub fn get_known_code(code: &str) -> ColrResult<Option<CodeInfo<'_>>> {
    if !code.ends_with('m') {
        return Ok(None);
    }

    let (kind, meaning) = if code.starts_with("\x1b[38;5;") {
        let it = get_known_ext_name(get_code_num(code)?);
        (CodeKind::ExtendedFore, CodeMeaning::Known(it))
    } else if code.starts_with("\x1b[48;5;") {
        let it = get_known_ext_name(get_code_num(code)?);
        (CodeKind::ExtendedBack, CodeMeaning::Known(it))
    } else if code.starts_with("\x1b[38;2") {
        (CodeKind::RgbFore, CodeMeaning::Rgb(get_code_num_rgb(code)?))
    } else if code.starts_with("\x1b[48;2") {
        (CodeKind::RgbBack, CodeMeaning::Rgb(get_code_num_rgb(code)?))
    } else {
        let Ok(number) = get_code_num(code) else {
            return Ok(None);
        };
        let Some(known) = get_known_name(number) else {
            return Ok(None);
        };
        let kind = match (known, number) {
            (KnownName::Style(_), _) => CodeKind::Style,
            (_, 40..=49 | 100..=107) => CodeKind::Back,
            _ => CodeKind::Fore,
        };
        (kind, CodeMeaning::Known(known))
    };

    Ok(Some(CodeInfo {
        code,
        kind,
        meaning,
    }))
}

/// Explains every color code in `text`, in order. With `unique`, a code is only
/// explained the first time it appears.
///
/// # Errors
///
/// See [`get_known_code`].
pub fn get_known_codes(text: &str, unique: bool) -> ColrResult<Vec<CodeInfo<'_>>> {
    let mut seen = HashSet::new();
    let mut acc = vec![];
    for code in get_codes(text) {
        if unique && !seen.insert(code) {
            continue;
        }
        if let Some(info) = get_known_code(code)? {
            acc.push(info);
        }
    }
    Ok(acc)
}

impl Display for CodeInfo<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let code = format!("{:?}", self.code);
        write!(f, "{:>13}: {code:<23} ", self.kind.to_string())?;
        match self.meaning {
            CodeMeaning::Rgb(rgb) => f.write_str(&ColorCode::from_rgb(rgb, true).example()),
            CodeMeaning::Known(KnownName::Ext { code, .. }) => {
                f.write_str(&ColorCode::from_code(code).example())
            }
            CodeMeaning::Known(known) => {
                let name = match known {
                    KnownName::Basic(it) => it.to_string(),
                    KnownName::Style(it) => it.name().to_string(),
                    KnownName::Reset | KnownName::Ext { .. } => "reset".to_string(),
                };
                write!(f, "{}{name}{CLOSING_CODE}", self.code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, StyleCode, assert_eq2};
    use test_case::test_case;

    #[test_case("\x1b[31m", 31)]
    #[test_case("\x1b[1m", 1)]
    #[test_case("\x1b[38;5;208m", 208)]
    #[test_case("\x1b[48;5;0m", 0)]
    fn test_get_code_num(code: &str, expected: u8) {
        assert_eq2!(get_code_num(code).unwrap(), expected);
    }

    #[test]
    fn test_get_code_num_errors() {
        assert!(matches!(
            get_code_num("\x1b[38;5;300m"),
            Err(ColrError::InvalidEscapeCode { .. })
        ));
        assert!(get_code_num("\x1b[xm").is_err());
    }

    #[test]
    fn test_get_code_num_rgb() {
        assert_eq2!(
            get_code_num_rgb("\x1b[38;2;1;22;255m").unwrap(),
            RgbValue::from_u8(1, 22, 255)
        );
        assert!(get_code_num_rgb("\x1b[38;2;1;22m").is_err());
        assert!(get_code_num_rgb("\x1b[38;2;1;22;256m").is_err());
        assert!(get_code_num_rgb("\x1b[38;2;1;22;25").is_err());
    }

    #[test]
    fn test_get_known_codes() {
        let text = "\x1b[31m\x1b[104m\x1b[1mx\x1b[38;5;231my\x1b[48;2;1;2;3m\x1b[31m\x1b[0m";
        let kinds = get_known_codes(text, true)
            .unwrap()
            .iter()
            .map(|it| it.kind)
            .collect::<Vec<_>>();
        assert_eq2!(
            kinds,
            vec![
                CodeKind::Fore,
                CodeKind::Back,
                CodeKind::Style,
                CodeKind::ExtendedFore,
                CodeKind::RgbBack,
                CodeKind::Style,
            ]
        );
        assert_eq2!(get_known_codes(text, false).unwrap().len(), 7);
    }

    #[test]
    fn test_meanings_and_display() {
        let info = get_known_code("\x1b[31m").unwrap().unwrap();
        assert_eq2!(info.meaning, CodeMeaning::Known(KnownName::Basic(BasicColor::Red)));
        assert!(info.to_string().ends_with("\x1b[31mred\x1b[0m"));
        assert!(info.to_string().starts_with("         Fore: "));

        let info = get_known_code("\x1b[0m").unwrap().unwrap();
        assert_eq2!(info.meaning, CodeMeaning::Known(KnownName::Style(StyleCode::ResetAll)));

        let info = get_known_code("\x1b[48;2;1;2;3m").unwrap().unwrap();
        assert!(info.to_string().contains("RGB:   1,   2,   3"));

        assert_eq2!(get_known_code("\x1b[60m").unwrap(), None);
        assert_eq2!(get_known_code("\x1b[2K").unwrap(), None);
    }
}
