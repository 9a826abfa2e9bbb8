// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The built in spinners and progress bars, looked up by name.
//!
//! Every base set is registered along with one color variant per name in
//! [`VARIANT_COLOR_NAMES`], named `{base}_{color}`, like `dots_blue`. Two more families
//! are built on demand when looked up, since there are too many of them to build up
//! front:
//! - `{base}_gradient_{name}` and `{base}_gradient_{name}_rgb`, for each of the
//!   [`crate::GRADIENT_NAMES`].
//! - `{base}_rainbow` and `{base}_rainbow_rgb`.

use std::{collections::HashMap, time::Duration};

use super::{BarSet, FrameSet, MoveOptions};
use crate::{ColorSpec, ColrError, ColrResult, ColrStyle, GRADIENT_NAMES};

pub const VARIANT_COLOR_NAMES: [&str; 14] = [
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "lightred",
    "lightgreen",
    "lightyellow",
    "lightblue",
    "lightmagenta",
    "lightcyan",
    "lightwhite",
];

pub const DEFAULT_FRAMES_NAME: &str = "dots_blue";
pub const DEFAULT_BARS_NAME: &str = "blocks_blue";

/// Builds the colored copies of a frame set or bar set.
pub trait ColorVariants: Clone {
    fn set_name(&self) -> &str;

    #[must_use]
    fn renamed(self, name: &str) -> Self;

    #[must_use]
    fn colored(&self, style: &ColrStyle) -> Self;

    /// # Errors
    ///
    /// Propagates rainbow errors.
    fn gradient(&self, name: &str, rgb_mode: bool) -> ColrResult<Self>;

    /// # Errors
    ///
    /// Propagates rainbow errors.
    fn rainbow(&self, rgb_mode: bool) -> ColrResult<Self>;
}

impl ColorVariants for FrameSet {
    fn set_name(&self) -> &str { &self.name }

    fn renamed(self, name: &str) -> Self { self.with_name(name) }

    fn colored(&self, style: &ColrStyle) -> Self { self.as_colr(style) }

    fn gradient(&self, name: &str, rgb_mode: bool) -> ColrResult<Self> {
        self.as_gradient(Some(name), None, rgb_mode)
    }

    fn rainbow(&self, rgb_mode: bool) -> ColrResult<Self> {
        self.as_rainbow(None, None, rgb_mode)
    }
}

impl ColorVariants for BarSet {
    fn set_name(&self) -> &str { self.name() }

    fn renamed(mut self, name: &str) -> Self {
        self.frame_set = self.frame_set.with_name(name);
        self
    }

    fn colored(&self, style: &ColrStyle) -> Self { self.as_colr(style) }

    fn gradient(&self, name: &str, rgb_mode: bool) -> ColrResult<Self> {
        self.as_gradient(Some(name), None, rgb_mode)
    }

    fn rainbow(&self, rgb_mode: bool) -> ColrResult<Self> {
        self.as_rainbow(None, None, rgb_mode)
    }
}

/// Name to set lookup, which remembers which sets are the uncolored originals.
#[derive(Debug, Clone)]
pub struct NamedSets<T> {
    base_names: Vec<String>,
    sets: HashMap<String, T>,
}

impl<T> Default for NamedSets<T> {
    fn default() -> Self {
        Self {
            base_names: vec![],
            sets: HashMap::new(),
        }
    }
}

impl<T: ColorVariants> NamedSets<T> {
    fn with_color_variants(base: Vec<T>) -> ColrResult<Self> {
        let mut acc = Self::default();
        for it in &base {
            acc.base_names.push(it.set_name().to_string());
        }
        for color in VARIANT_COLOR_NAMES {
            let style = ColrStyle::new().set_fore(ColorSpec::parse(color, false)?);
            for it in &base {
                let name = format!("{}_{color}", it.set_name());
                acc.register(it.colored(&style), Some(&name));
            }
        }
        for it in base {
            acc.register(it, None);
        }
        Ok(acc)
    }

    /// Adds or replaces a set, under `name` if given or else its own name.
    pub fn register(&mut self, set: T, name: Option<&str>) {
        let set = match name {
            Some(name) => set.renamed(name),
            None => set,
        };
        self.sets.insert(set.set_name().to_string(), set);
    }

    /// Sorted names. With `registered` set, colored and user registered sets are listed
    /// too.
    #[must_use]
    pub fn names(&self, registered: bool) -> Vec<&str> {
        let mut acc: Vec<&str> = if registered {
            self.sets.keys().map(String::as_str).collect()
        } else {
            self.base_names.iter().map(String::as_str).collect()
        };
        acc.sort_unstable();
        acc
    }

    /// # Errors
    ///
    /// Returns [`ColrError::UnknownFrameSet`] if `name` is neither registered nor a
    /// gradient or rainbow variant of a registered set.
    pub fn get(&self, name: &str) -> ColrResult<T> {
        let name = name.trim().to_lowercase();
        if let Some(it) = self.sets.get(&name) {
            return Ok(it.clone());
        }

        let unknown = || ColrError::UnknownFrameSet { name: name.clone() };
        let (base, variant) = parse_derived_name(&name).ok_or_else(unknown)?;
        let base = self.sets.get(base).ok_or_else(unknown)?;
        let it = match variant {
            DerivedVariant::Rainbow { rgb_mode } => base.rainbow(rgb_mode)?,
            DerivedVariant::Gradient { color, rgb_mode } => base.gradient(color, rgb_mode)?,
        };
        Ok(it.renamed(&name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DerivedVariant<'a> {
    Gradient { color: &'a str, rgb_mode: bool },
    Rainbow { rgb_mode: bool },
}

fn parse_derived_name(name: &str) -> Option<(&str, DerivedVariant<'_>)> {
    let (stem, rgb_mode) = match name.strip_suffix("_rgb") {
        Some(it) => (it, true),
        None => (name, false),
    };
    if let Some(base) = stem.strip_suffix("_rainbow") {
        return Some((base, DerivedVariant::Rainbow { rgb_mode }));
    }
    let (base, color) = stem.rsplit_once("_gradient_")?;
    GRADIENT_NAMES
        .iter()
        .any(|(it, _)| *it == color)
        .then_some((base, DerivedVariant::Gradient { color, rgb_mode }))
}

/// All built in spinners and bars.
#[derive(Debug, Clone)]
pub struct FrameRegistry {
    pub frames: NamedSets<FrameSet>,
    pub bars: NamedSets<BarSet>,
}

impl FrameRegistry {
    /// # Errors
    ///
    /// Only fails if a built in set is broken.
    pub fn try_new() -> ColrResult<Self> {
        let bars = base_bar_sets()?;
        let frames = base_frame_sets(&bars)?;
        Ok(Self {
            frames: NamedSets::with_color_variants(frames)?,
            bars: NamedSets::with_color_variants(bars)?,
        })
    }

    /// # Errors
    ///
    /// See [`NamedSets::get`].
    pub fn frame_set(&self, name: &str) -> ColrResult<FrameSet> { self.frames.get(name) }

    /// # Errors
    ///
    /// See [`NamedSets::get`].
    pub fn bar_set(&self, name: &str) -> ColrResult<BarSet> { self.bars.get(name) }

    /// # Errors
    ///
    /// Only fails if the default was unregistered.
    pub fn default_frames(&self) -> ColrResult<FrameSet> { self.frames.get(DEFAULT_FRAMES_NAME) }

    /// # Errors
    ///
    /// Only fails if the default was unregistered.
    pub fn default_bars(&self) -> ColrResult<BarSet> { self.bars.get(DEFAULT_BARS_NAME) }
}

fn base_bar_sets() -> ColrResult<Vec<BarSet>> {
    let bounce = MoveOptions::default().with_bounce(None);
    Ok(vec![
        BarSet::from_char(
            "⮊",
            "arrows",
            MoveOptions::default().with_bounce(Some("⮈")),
            Some(("[", "] ")),
        )?,
        BarSet::from_str(&"█".repeat(super::DEFAULT_BAR_WIDTH), "blocks", None, None)?,
        BarSet::from_char("●", "bounce", bounce.clone(), None)?,
        BarSet::from_char("⬤ ", "bounce_big", bounce, None)?,
        // 101 frames, so that 1 percent shows "%  1" and 100 shows "%100".
        BarSet::try_new((0..=100).map(|it| format!("%{it:>3}")), "numbers", None)?,
    ])
}

fn base_frame_sets(bars: &[BarSet]) -> ColrResult<Vec<FrameSet>> {
    let slow = Some(Duration::from_millis(250));
    let mut acc = vec![
        FrameSet::from_chars(&"◜◠◝◞◡◟".repeat(3), "arc", slow)?,
        FrameSet::try_new(
            ["▹▹▹▹▹", "▸▹▹▹▹", "▹▸▹▹▹", "▹▹▸▹▹", "▹▹▹▸▹", "▹▹▹▹▸"],
            "arrows",
            slow,
        )?,
        FrameSet::from_chars(&"⠁⠂⠄⠂".repeat(6), "bounce", slow)?,
        FrameSet::try_new(
            [
                "( ●    )", "(  ●   )", "(   ●  )", "(    ● )", "(     ●)", "(    ● )",
                "(   ●  )", "(  ●   )", "( ●    )", "(●     )",
            ],
            "bouncing_ball",
            None,
        )?,
        FrameSet::from_chars(&"⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏".repeat(3), "dots", None)?,
        FrameSet::from_chars(&"⢄⢂⢁⡁⡈⡐⡠".repeat(3), "dots_orbit", None)?,
        FrameSet::try_new(DOTS_CHASE, "dots_chase", None)?,
        FrameSet::try_new(["☱ ", "☲ ", "☴ "], "hamburger", Some(Duration::from_millis(500)))?,
    ];
    if let Some(arrows) = bars.iter().find(|it| it.name() == "arrows") {
        acc.push(FrameSet::from_barset(arrows, "arrows_bar", None, true, None)?);
    }
    Ok(acc)
}

const DOTS_CHASE: [&str; 56] = [
    "⢀⠀", "⡀⠀", "⠄⠀", "⢂⠀", "⡂⠀", "⠅⠀", "⢃⠀", "⡃⠀", "⠍⠀", "⢋⠀", "⡋⠀", "⠍⠁", "⢋⠁", "⡋⠁",
    "⠍⠉", "⠋⠉", "⠋⠉", "⠉⠙", "⠉⠙", "⠉⠩", "⠈⢙", "⠈⡙", "⢈⠩", "⡀⢙", "⠄⡙", "⢂⠩", "⡂⢘", "⠅⡘",
    "⢃⠨", "⡃⢐", "⠍⡐", "⢋⠠", "⡋⢀", "⠍⡁", "⢋⠁", "⡋⠁", "⠍⠉", "⠋⠉", "⠋⠉", "⠉⠙", "⠉⠙", "⠉⠩",
    "⠈⢙", "⠈⡙", "⠈⠩", "⠀⢙", "⠀⡙", "⠀⠩", "⠀⢘", "⠀⡘", "⠀⠨", "⠀⢐", "⠀⡐", "⠀⠠", "⠀⢀", "⠀⡀",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, strip};
    use test_case::test_case;

    fn registry() -> FrameRegistry { FrameRegistry::try_new().unwrap() }

    #[test]
    fn test_base_names() {
        let it = registry();
        assert_eq2!(
            it.frames.names(false),
            [
                "arc",
                "arrows",
                "arrows_bar",
                "bounce",
                "bouncing_ball",
                "dots",
                "dots_chase",
                "dots_orbit",
                "hamburger"
            ]
        );
        assert_eq2!(
            it.bars.names(false),
            ["arrows", "blocks", "bounce", "bounce_big", "numbers"]
        );
        assert_eq2!(it.frames.names(true).len(), 9 * 15);
    }

    #[test]
    fn test_defaults() {
        let it = registry();
        let frames = it.default_frames().unwrap();
        assert_eq2!(frames.name, "dots_blue");
        assert_eq2!(frames.frame(0), "\x1b[34m⠋\x1b[0m");
        assert_eq2!(it.default_bars().unwrap().name(), "blocks_blue");
    }

    #[test]
    fn test_base_sets() {
        let it = registry();
        assert_eq2!(it.frame_set("dots_chase").unwrap().len(), 56);
        assert_eq2!(it.frame_set("arc").unwrap().delay, Duration::from_millis(250));
        let arrows_bar = it.frame_set("arrows_bar").unwrap();
        assert_eq2!(arrows_bar.frame(0), format!("[⮊{}] ", " ".repeat(24)));
        assert_eq2!(arrows_bar.len(), 50);

        let numbers = it.bar_set("numbers").unwrap();
        assert_eq2!(numbers.as_percent(1.0), "[%  1]");
        assert_eq2!(numbers.as_percent(100.0), "[%100]");
        assert_eq2!(it.bar_set("blocks").unwrap().len(), 25);
    }

    #[test_case("dots_rainbow")]
    #[test_case("dots_rainbow_rgb")]
    #[test_case("bouncing_ball_gradient_orange")]
    #[test_case("  DOTS_CHASE_GRADIENT_LIGHTRED_RGB ")]
    fn test_derived_frame_sets(name: &str) {
        let it = registry().frame_set(name).unwrap();
        assert_eq2!(it.name, name.trim().to_lowercase());
        assert!(it.has_codes());
        let base = name.trim().to_lowercase();
        let base = base.split("_gradient_").next().unwrap().trim_end_matches("_rgb");
        let base = base.trim_end_matches("_rainbow");
        assert_eq2!(strip(&it.to_string()), registry().frame_set(base).unwrap().to_string());
    }

    #[test]
    fn test_derived_bar_set() {
        let it = registry().bar_set("bounce_rainbow").unwrap();
        assert_eq2!(it.name(), "bounce_rainbow");
        assert_eq2!(it.wrapper, ("[".to_string(), "]".to_string()));
    }

    #[test_case("nope")]
    #[test_case("dots_gradient_white")]
    #[test_case("nope_rainbow")]
    #[test_case("dots_gradient_")]
    fn test_unknown_frame_set(name: &str) {
        assert_eq2!(
            registry().frame_set(name),
            Err(ColrError::UnknownFrameSet { name: name.into() })
        );
    }

    #[test]
    fn test_register() {
        let mut it = registry();
        let custom = FrameSet::from_chars("xy", "custom", None).unwrap();
        it.frames.register(custom, Some("mine"));
        assert_eq2!(it.frame_set("mine").unwrap().to_string(), "xy");
        assert_eq2!(it.frame_set("mine_rainbow").unwrap().name, "mine_rainbow");
    }
}
