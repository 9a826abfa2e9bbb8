// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resolves a single "fluent" name, like `red`, `bgblue`, `bold`, `f_208` or
//! `b_aliceblue`, to the kind of code it sets. [`crate::Colr::named`] is the only
//! consumer, so the set of accepted names stays enumerable through [`all_names`].
//!
//! | Name shape              | Resolves to                          |
//! | :---------------------- | :----------------------------------- |
//! | basic color or `reset`  | fore color                           |
//! | style alias             | style                                |
//! | `bg` + basic color      | back color (`bg_red` also works)     |
//! | `f_`/`f256_` + value    | fore extended code or named color    |
//! | `b_`/`b256_` + value    | back extended code or named color    |
//!
//! Fore names win over styles, so `b` is blue rather than bold.

use strum::IntoEnumIterator;

use super::{BasicColor, ColorSpec, StyleCode, get_named_color, named_color_names};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedCode {
    Fore(ColorSpec),
    Back(ColorSpec),
    Style(StyleCode),
}

#[must_use]
pub fn lookup_name(name: &str) -> Option<NamedCode> {
    if let Some(spec) = basic_or_reset(name) {
        return Some(NamedCode::Fore(spec));
    }
    if let Ok(style) = StyleCode::parse(name) {
        return Some(NamedCode::Style(style));
    }
    if let Some(rest) = name.strip_prefix("bg") {
        return basic_or_reset(rest.trim_start_matches('_')).map(NamedCode::Back);
    }
    if let Some(rest) = strip_ext_prefix(name, "b") {
        return ext_value(rest).map(NamedCode::Back);
    }
    if let Some(rest) = strip_ext_prefix(name, "f") {
        return ext_value(rest).map(NamedCode::Fore);
    }
    None
}

fn basic_or_reset(name: &str) -> Option<ColorSpec> {
    if name == "reset" {
        return Some(ColorSpec::Reset);
    }
    BasicColor::from_alias(name).map(ColorSpec::Basic)
}

fn strip_ext_prefix<'a>(name: &'a str, letter: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(letter)?;
    rest.strip_prefix("256_").or_else(|| rest.strip_prefix('_'))
}

fn ext_value(value: &str) -> Option<ColorSpec> {
    match value.parse::<u8>() {
        Ok(code) => Some(ColorSpec::Ext(code)),
        Err(_) => get_named_color(value).map(|it| ColorSpec::Ext(it.code)),
    }
}

/// Every name [`lookup_name`] accepts, except the 256 numeric and registry forms of the
/// `f_` and `b_` prefixes, which are listed once as `f_<code|name>` and `b_<code|name>`.
#[must_use]
pub fn all_names() -> Vec<String> {
    let basic = BasicColor::iter()
        .map(|it| it.to_string())
        .chain(std::iter::once("reset".to_string()))
        .collect::<Vec<_>>();

    let mut acc = basic.clone();
    acc.extend(
        StyleCode::iter()
            .flat_map(StyleCode::aliases)
            .map(ToString::to_string),
    );
    acc.extend(basic.iter().map(|it| format!("bg{it}")));
    acc.push("f_<code|name>".to_string());
    acc.push("b_<code|name>".to_string());
    acc
}

/// Registry names usable after the `f_` and `b_` prefixes.
pub fn ext_names() -> impl Iterator<Item = &'static str> { named_color_names() }
