// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BasicColor, NAMED_COLOR_TABLE, RgbValue, StyleCode, term_code_to_hex,
            term_code_to_rgb};
use crate::InlineString;

/// One entry of the named color registry. All three color fields describe the same
/// palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub code: u8,
    pub hex: InlineString,
    pub rgb: RgbValue,
}

impl NamedColor {
    fn from_entry((name, code): (&'static str, u8)) -> Self {
        Self {
            name,
            code,
            hex: term_code_to_hex(code),
            rgb: term_code_to_rgb(code),
        }
    }
}

/// Case sensitive lookup, names are stored lowercase.
#[must_use]
pub fn get_named_color(name: &str) -> Option<NamedColor> {
    NAMED_COLOR_TABLE
        .binary_search_by(|(it, _)| (*it).cmp(name))
        .ok()
        .map(|index| NamedColor::from_entry(NAMED_COLOR_TABLE[index]))
}

/// All names in the registry, sorted.
pub fn named_color_names() -> impl Iterator<Item = &'static str> {
    NAMED_COLOR_TABLE.iter().map(|(name, _)| *name)
}

/// All registry names that resolve to `code`.
pub fn named_colors_for_code(code: u8) -> impl Iterator<Item = &'static str> {
    NAMED_COLOR_TABLE
        .iter()
        .filter(move |(_, it)| *it == code)
        .map(|(name, _)| *name)
}

/// What an escape code number means, given the kind of code it appeared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownName {
    Basic(BasicColor),
    Reset,
    Style(StyleCode),
    /// Extended code, with the first registry name for it if there is one.
    Ext {
        code: u8,
        name: Option<&'static str>,
    },
}

/// Reverse lookup of the SGR number of a basic color, reset, or style code. `30..=37`,
/// `90..=97` and their back variants resolve to basic colors, `39`/`49` to reset, and
/// anything else to a style.
#[must_use]
pub fn get_known_name(sgr: u8) -> Option<KnownName> {
    use strum::IntoEnumIterator;

    if sgr == 39 || sgr == 49 {
        return Some(KnownName::Reset);
    }
    if let Some(basic) =
        BasicColor::iter().find(|it| it.fore_code() == sgr || it.back_code() == sgr)
    {
        return Some(KnownName::Basic(basic));
    }
    StyleCode::iter()
        .find(|it| it.number() == sgr)
        .map(KnownName::Style)
}

/// Reverse lookup of an extended (256-color) code.
#[must_use]
pub fn get_known_ext_name(code: u8) -> KnownName {
    KnownName::Ext {
        code,
        name: named_colors_for_code(code).next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let names = named_color_names().collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq2!(names, sorted);
    }

    #[test]
    fn test_lookup() {
        let it = get_named_color("aliceblue").unwrap();
        assert_eq2!(it.code, 231);
        assert_eq2!(it.hex.as_str(), "ffffff");
        assert_eq2!(it.rgb, RgbValue::from_u8(255, 255, 255));
        assert!(get_named_color("AliceBlue").is_none());
        assert!(get_named_color("nope").is_none());
    }

    #[test]
    fn test_known_names() {
        assert_eq2!(get_known_name(31), Some(KnownName::Basic(BasicColor::Red)));
        assert_eq2!(
            get_known_name(104),
            Some(KnownName::Basic(BasicColor::LightBlue))
        );
        assert_eq2!(get_known_name(49), Some(KnownName::Reset));
        assert_eq2!(get_known_name(1), Some(KnownName::Style(StyleCode::Bold)));
        assert_eq2!(get_known_name(60), None);
        assert!(matches!(
            get_known_ext_name(231),
            KnownName::Ext { code: 231, name: Some(_) }
        ));
    }
}
