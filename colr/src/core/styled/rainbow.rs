// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lolcat style rainbow text. Each char gets its own color from three phase shifted sine
//! waves:
//!
//! ```text
//! i     = offset + index / spread
//! red   = sin(freq * i)          * 127 + 128
//! green = sin(freq * i + 2pi/3)  * 127 + 128
//! blue  = sin(freq * i + 4pi/3)  * 127 + 128
//! ```

use std::f64::consts::PI;

use super::{check_walk_style, walk_style};
use crate::{ColorSpec, Colr, ColrResult, ColrStyle, ColrText, RgbValue, colorize,
            rgb_to_term_code};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowOptions {
    /// A fixed fore or back color and a style. The rainbow goes in the other color slot.
    pub style: ColrStyle,
    /// How fast the colors change. Best in `0.0..=1.0`.
    pub freq: f64,
    /// Where in the wave to start.
    pub offset: f64,
    /// How many chars share roughly the same color.
    pub spread: f64,
    /// Colors each line on its own, moving the offset by `movefactor` per line.
    pub linemode: bool,
    pub movefactor: isize,
    /// True color values instead of the nearest terminal code.
    pub rgb_mode: bool,
}

impl Default for RainbowOptions {
    fn default() -> Self {
        Self {
            style: ColrStyle::default(),
            freq: 0.1,
            offset: 30.0,
            spread: 3.0,
            linemode: true,
            movefactor: 2,
            rgb_mode: false,
        }
    }
}

impl RainbowOptions {
    #[must_use]
    pub fn with_style(mut self, style: ColrStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_freq(mut self, freq: f64) -> Self {
        self.freq = freq;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
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
    pub fn with_rgb_mode(mut self, rgb_mode: bool) -> Self {
        self.rgb_mode = rgb_mode;
        self
    }
}

/// The rainbow color at position `i`. Every channel stays in `1..=255`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rainbow_rgb(freq: f64, i: f64) -> RgbValue {
    let channel = |shift: f64| ((freq * i + shift).sin() * 127.0 + 128.0) as u8;
    RgbValue::from_u8(channel(0.0), channel(2.0 * PI / 3.0), channel(4.0 * PI / 3.0))
}

impl Colr {
    /// Rainbow colors `text` and appends it to a copy of the data. When `text` is empty
    /// the data itself is stripped of its codes and recolored.
    ///
    /// ```
    /// use r3bl_colr::{Colr, RainbowOptions};
    /// let it = Colr::new("hello").rainbow((), &RainbowOptions::default()).unwrap();
    /// assert_eq!(it.stripped(), "hello");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColrError::ConflictingColors`] if `options.style` has a fore and
    /// a back color.
    pub fn rainbow(&self, text: impl Into<ColrText>, options: &RainbowOptions) -> ColrResult<Colr> {
        check_walk_style(&options.style)?;
        let text = text.into();
        let (source, prefix) = if text.is_empty() {
            (self.stripped(), "")
        } else {
            (text.into_string(), self.data.as_str())
        };

        let it = if options.linemode {
            source
                .lines()
                .enumerate()
                .map(|(index, line)| {
                    #[allow(clippy::cast_precision_loss)]
                    let offset = options.offset + (index as f64) * (options.movefactor as f64);
                    rainbow_line(line, offset, options)
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            rainbow_line(&source, options.offset, options)
        };
        Ok(Colr::new(format!("{prefix}{it}")))
    }
}

fn rainbow_line(text: &str, offset: f64, options: &RainbowOptions) -> String {
    let mut acc = String::with_capacity(text.len() * 16);
    for (index, ch) in text.chars().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let i = offset + (index as f64) / options.spread;
        let rgb = rainbow_rgb(options.freq, i);
        let color = if options.rgb_mode {
            ColorSpec::Rgb(rgb)
        } else {
            ColorSpec::Ext(rgb_to_term_code(rgb))
        };
        acc.push_str(&colorize(ch, &walk_style(&options.style, color), false));
    }
    acc
}
