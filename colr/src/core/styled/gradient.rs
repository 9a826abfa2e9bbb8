// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gradient color walks over the cube, the gray ramp, and RGB morphs.
//!
//! Each method colors `text` and appends it to a copy of the data. When `text` is empty
//! the data itself is stripped of its codes and recolored.

use std::collections::VecDeque;

use super::{RainbowOptions, WaveGradient, check_walk_style, colorize_wave, GRAY_END,
            GRAY_START, wave_for_start_code};
use crate::{Colr, ColrError, ColrResult, ColrStyle, ColrText, RgbValue};

/// Known gradient names and their rainbow offsets.
pub const GRADIENT_NAMES: [(&str, i32); 8] = [
    ("green", 0),
    ("orange", 9),
    ("lightred", 15),
    ("magenta", 20),
    ("red", 80),
    ("yellow", 62),
    ("blue", 34),
    ("cyan", 48),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientOptions {
    /// A fixed fore or back color and a style. The walk goes in the other color slot.
    pub style: ColrStyle,
    /// Chars per color. For [`Colr::gradient_rgb`] it is the morph step instead.
    pub step: usize,
    /// Colors each line on its own, moving the start by `movefactor` per line.
    pub linemode: bool,
    pub movefactor: isize,
    /// Walks the gray ramp from white to black.
    pub reverse: bool,
    /// True color grays instead of gray ramp codes.
    pub rgb_mode: bool,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            style: ColrStyle::default(),
            step: 1,
            linemode: true,
            movefactor: 2,
            reverse: false,
            rgb_mode: false,
        }
    }
}

impl GradientOptions {
    #[must_use]
    pub fn with_style(mut self, style: ColrStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_linemode(mut self, linemode: bool) -> Self {
        self.linemode = linemode;
        self
    }

    #[must_use]
    pub fn with_movefactor(mut self, movefactor: isize) -> Self {
        self.movefactor = movefactor;
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn with_rgb_mode(mut self, rgb_mode: bool) -> Self {
        self.rgb_mode = rgb_mode;
        self
    }
}

/// Steps each channel from `start` toward `stop` by `step`, landing exactly on `stop`.
/// Both ends are included.
#[must_use]
pub fn morph_rgb(start: RgbValue, stop: RgbValue, step: u8) -> Vec<RgbValue> {
    let step = i16::from(step.max(1));
    let to_array = |it: RgbValue| [it.red, it.green, it.blue].map(i16::from);
    let target = to_array(stop);
    let mut current = to_array(start);

    let to_rgb = |it: [i16; 3]| {
        let [red, green, blue] = it.map(|channel| u8::try_from(channel).unwrap_or(u8::MAX));
        RgbValue::from_u8(red, green, blue)
    };

    let mut acc = vec![];
    while current != target {
        acc.push(to_rgb(current));
        for (channel, goal) in current.iter_mut().zip(target) {
            *channel = if *channel < goal {
                (*channel + step).min(goal)
            } else {
                (*channel - step).max(goal)
            };
        }
    }
    acc.push(to_rgb(current));
    acc
}

impl Colr {
    /// The text to color, and the data that goes in front of it.
    fn gradient_source(&self, text: ColrText) -> (String, &str) {
        if text.is_empty() {
            (self.stripped(), "")
        } else {
            (text.into_string(), &self.data)
        }
    }

    /// Walks the 36 color cube block that holds `start_code` (or the gray ramp for codes
    /// past the cube), coloring `options.step` chars per color.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::ConflictingColors`] if `options.style` has a fore and a back
    /// color.
    pub fn gradient(
        &self,
        text: impl Into<ColrText>,
        start_code: u8,
        options: &GradientOptions,
    ) -> ColrResult<Colr> {
        let (source, prefix) = self.gradient_source(text.into());
        let it = colorize_wave(
            &source,
            wave_for_start_code(start_code),
            options.step,
            &options.style,
            options.rgb_mode,
        )?;
        Ok(Colr::new(format!("{prefix}{it}")))
    }

    /// Walks the gray ramp from `start` (clamped to `232..=255`) to white, or to black
    /// with `options.reverse`. The default start is the dark end, or the light end when
    /// reversed.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::ConflictingColors`] if `options.style` has a fore and a back
    /// color.
    pub fn gradient_black(
        &self,
        text: impl Into<ColrText>,
        start: Option<u8>,
        options: &GradientOptions,
    ) -> ColrResult<Colr> {
        check_walk_style(&options.style)?;
        let (source, prefix) = self.gradient_source(text.into());
        let start = start.unwrap_or(if options.reverse { GRAY_END } else { GRAY_START });

        let it = if options.linemode {
            source
                .lines()
                .enumerate()
                .map(|(index, line)| {
                    gradient_black_line(line, moved_start(start, index, options.movefactor), options)
                })
                .collect::<ColrResult<Vec<_>>>()?
                .join("\n")
        } else {
            gradient_black_line(&source, start, options)?
        };
        Ok(Colr::new(format!("{prefix}{it}")))
    }

    /// Morphs from `start` to `stop` by `options.step` per channel, and spreads the morph
    /// over the text. With `options.linemode` and a `movefactor`, the morph wraps back
    /// around to `start` and is rotated by `movefactor` for every line.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::ConflictingColors`] if `options.style` has a fore and a back
    /// color.
    pub fn gradient_rgb(
        &self,
        text: impl Into<ColrText>,
        start: RgbValue,
        stop: RgbValue,
        options: &GradientOptions,
    ) -> ColrResult<Colr> {
        check_walk_style(&options.style)?;
        let (source, prefix) = self.gradient_source(text.into());
        let step = u8::try_from(options.step).unwrap_or(u8::MAX);
        let morph = morph_rgb(start, stop, step);

        let it = if options.linemode {
            let mut morph = VecDeque::from(morph);
            if options.movefactor != 0 {
                morph.extend(morph_rgb(stop, start, step));
            }
            let mut acc = vec![];
            for line in source.lines() {
                rotate(&mut morph, options.movefactor);
                let palette = morph.iter().copied().collect::<Vec<_>>();
                acc.push(gradient_rgb_line(line, &palette, &options.style)?);
            }
            acc.join("\n")
        } else {
            gradient_rgb_line(&source, &morph, &options.style)?
        };
        Ok(Colr::new(format!("{prefix}{it}")))
    }

    /// A gradient by name. `black` and `white` walk the gray ramp with `spread` chars per
    /// color (default 1). The [`GRADIENT_NAMES`], or an integer used as an offset, make a
    /// rainbow starting at that offset with a `spread` of 3 by default.
    ///
    /// # Errors
    ///
    /// - [`ColrError::UnknownColorName`] for any other name.
    /// - [`ColrError::ConflictingColors`] if `options.style` has a fore and a back color.
    pub fn gradient_named(
        &self,
        text: impl Into<ColrText>,
        name: &str,
        spread: Option<f64>,
        options: &RainbowOptions,
    ) -> ColrResult<Colr> {
        let name = name.trim().to_lowercase();

        if matches!(name.as_str(), "black" | "white") {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let step = spread.map_or(1, |it| it.max(1.0) as usize);
            let gradient_options = GradientOptions {
                style: options.style,
                step,
                linemode: options.linemode,
                movefactor: options.movefactor,
                reverse: name == "white",
                rgb_mode: options.rgb_mode,
            };
            return self.gradient_black(text, None, &gradient_options);
        }

        let offset = match name.parse::<i32>() {
            Ok(offset) => offset,
            Err(_) => GRADIENT_NAMES
                .iter()
                .find(|(known, _)| *known == name)
                .map(|(_, offset)| *offset)
                .ok_or_else(|| ColrError::UnknownColorName { name: name.clone() })?,
        };

        let rainbow_options = RainbowOptions {
            offset: f64::from(offset),
            spread: spread.unwrap_or(3.0),
            ..*options
        };
        self.rainbow(text, &rainbow_options)
    }
}

fn moved_start(start: u8, index: usize, movefactor: isize) -> u8 {
    let index = isize::try_from(index).unwrap_or(isize::MAX);
    let moved = isize::from(start).saturating_add(index.saturating_mul(movefactor));
    u8::try_from(moved.clamp(0, isize::from(u8::MAX))).unwrap_or(u8::MAX)
}

fn gradient_black_line(text: &str, start: u8, options: &GradientOptions) -> ColrResult<String> {
    let start = start.clamp(GRAY_START, GRAY_END);
    let codes = if options.reverse {
        (GRAY_START..=start).rev().collect::<Vec<_>>()
    } else {
        (start..=GRAY_END).collect::<Vec<_>>()
    };
    colorize_wave(
        text,
        WaveGradient::new(codes),
        options.step,
        &options.style,
        options.rgb_mode,
    )
}

/// Picks every n-th morph entry so a short line still reaches the end of the morph.
fn gradient_rgb_line(text: &str, morph: &[RgbValue], style: &ColrStyle) -> ColrResult<String> {
    let char_count = text.chars().count().max(1);
    let every = (morph.len() / char_count).max(1);
    let palette = morph.iter().copied().step_by(every).collect::<Vec<_>>();
    colorize_wave(text, WaveGradient::new(palette), 1, style, false)
}

/// Positive amounts move entries from the back to the front, negative amounts move them
/// from the front to the back.
fn rotate(morph: &mut VecDeque<RgbValue>, amount: isize) {
    if morph.is_empty() {
        return;
    }
    let amount_abs = amount.unsigned_abs() % morph.len();
    if amount > 0 {
        morph.rotate_right(amount_abs);
    } else {
        morph.rotate_left(amount_abs);
    }
}
