// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A palette walk that bounces back and forth forever:
//!
//! ```text
//! palette: A B C D
//! walk:    A B C D C B A B C D C ...
//! ```
//!
//! [`WaveGradient`] never ends on its own. The caller stops pulling colors once
//! [`has_covered_all_input`] says every char has been colored.

use strum_macros::Display;

use crate::{ColorSpec, ColrError, ColrResult, ColrStyle, RgbValue, colorize};

/// First code of the 6x6x6 color cube.
pub const CUBE_START: u8 = 16;
/// Last code of the 6x6x6 color cube.
pub const CUBE_END: u8 = 231;
/// First code of the gray ramp.
pub const GRAY_START: u8 = 232;
/// Last code of the gray ramp.
pub const GRAY_END: u8 = 255;

const CUBE_BLOCK_LEN: u8 = 36;
const CUBE_ROW_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum WaveDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveGradient<T> {
    palette: Vec<T>,
    position: usize,
    direction: WaveDirection,
}

impl<T: Copy> WaveGradient<T> {
    #[must_use]
    pub fn new(palette: Vec<T>) -> Self { Self::starting_at(palette, 0) }

    /// Starts the walk at `position`, clamped to the last entry.
    #[must_use]
    pub fn starting_at(palette: Vec<T>, position: usize) -> Self {
        let position = position.min(palette.len().saturating_sub(1));
        Self {
            palette,
            position,
            direction: WaveDirection::Forward,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &[T] { &self.palette }

    fn advance(&mut self) {
        let last = self.palette.len().saturating_sub(1);
        if last == 0 {
            return;
        }
        match self.direction {
            WaveDirection::Forward if self.position == last => {
                self.direction = WaveDirection::Backward;
                self.position -= 1;
            }
            WaveDirection::Forward => self.position += 1,
            WaveDirection::Backward if self.position == 0 => {
                self.direction = WaveDirection::Forward;
                self.position += 1;
            }
            WaveDirection::Backward => self.position -= 1,
        }
    }
}

impl<T: Copy> Iterator for WaveGradient<T> {
    type Item = T;

    /// An empty palette gives `None`, every other palette gives `Some` forever.
    fn next(&mut self) -> Option<Self::Item> {
        let it = *self.palette.get(self.position)?;
        self.advance();
        Some(it)
    }
}

#[must_use]
pub fn has_covered_all_input(consumed: usize, total: usize) -> bool { consumed >= total }

/// The 36 color block of the cube that holds `start_code`, as 6 rows of 6 with every
/// other row reversed, so neighbors in the walk are neighbors in the cube.
///
/// ```text
/// 16 17 18 19 20 21
/// 27 26 25 24 23 22
/// 28 29 30 31 32 33
/// ...
/// ```
///
/// Codes below the cube start at [`CUBE_START`].
#[must_use]
pub fn cube_block(start_code: u8) -> Vec<u8> {
    let start_code = start_code.clamp(CUBE_START, CUBE_END);
    let block_start = CUBE_START + ((start_code - CUBE_START) / CUBE_BLOCK_LEN) * CUBE_BLOCK_LEN;
    let codes = (block_start..block_start + CUBE_BLOCK_LEN).collect::<Vec<_>>();
    codes
        .chunks(CUBE_ROW_LEN)
        .enumerate()
        .flat_map(|(row, it)| {
            let mut it = it.to_vec();
            if row % 2 == 1 {
                it.reverse();
            }
            it
        })
        .collect()
}

/// The palette walk for `start_code`. Cube codes walk their whole [`cube_block`] from its
/// first entry, gray codes walk the gray ramp from `start_code`.
#[must_use]
pub fn wave_for_start_code(start_code: u8) -> WaveGradient<u8> {
    if start_code > CUBE_END {
        let gray = (GRAY_START..=GRAY_END).collect::<Vec<_>>();
        WaveGradient::starting_at(gray, usize::from(start_code - GRAY_START))
    } else {
        WaveGradient::new(cube_block(start_code))
    }
}

/// The color walk goes into the fore color unless a fixed fore color is given, then it
/// goes into the back color.
///
/// # Errors
///
/// Returns [`ColrError::ConflictingColors`] if `fixed` has both a fore and a back color,
/// since there is nowhere left for the walk to go.
pub fn check_walk_style(fixed: &ColrStyle) -> ColrResult<()> {
    if fixed.fore.is_some() && fixed.back.is_some() {
        return Err(ColrError::ConflictingColors);
    }
    Ok(())
}

/// `fixed` with the walk color in the free slot. See [`check_walk_style`].
#[must_use]
pub fn walk_style(fixed: &ColrStyle, walk: ColorSpec) -> ColrStyle {
    if fixed.fore.is_some() {
        ColrStyle {
            back: Some(walk),
            ..*fixed
        }
    } else {
        ColrStyle {
            fore: Some(walk),
            ..*fixed
        }
    }
}

/// A palette entry for the walk. Plain codes become gray RGB values in `rgb_mode`.
pub trait WaveColor: Copy {
    fn to_color_spec(self, rgb_mode: bool) -> ColorSpec;
}

impl WaveColor for u8 {
    fn to_color_spec(self, rgb_mode: bool) -> ColorSpec {
        if rgb_mode {
            ColorSpec::Rgb(RgbValue::gray(self))
        } else {
            ColorSpec::Ext(self)
        }
    }
}

impl WaveColor for RgbValue {
    fn to_color_spec(self, _rgb_mode: bool) -> ColorSpec { ColorSpec::Rgb(self) }
}

/// Colors `text` with `step` chars per wave color.
///
/// # Errors
///
/// See [`check_walk_style`].
pub fn colorize_wave<T: WaveColor>(
    text: &str,
    mut wave: WaveGradient<T>,
    step: usize,
    fixed: &ColrStyle,
    rgb_mode: bool,
) -> ColrResult<String> {
    check_walk_style(fixed)?;

    let chars = text.chars().collect::<Vec<_>>();
    let step = step.max(1);
    let mut consumed = 0;
    let mut acc = String::with_capacity(text.len() * 8);

    while !has_covered_all_input(consumed, chars.len()) {
        let Some(color) = wave.next() else {
            break;
        };
        let end = (consumed + step).min(chars.len());
        let chunk = chars[consumed..end].iter().collect::<String>();
        let style = walk_style(fixed, color.to_color_spec(rgb_mode));
        acc.push_str(&colorize(chunk, &style, false));
        consumed = end;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, StyleCode, assert_eq2, get_codes};

    #[test]
    fn test_wave_bounces() {
        let it = WaveGradient::new(vec!['A', 'B', 'C', 'D'])
            .take(8)
            .collect::<String>();
        assert_eq2!(it, "ABCDCBAB");
    }

    #[test]
    fn test_wave_edge_palettes() {
        assert_eq2!(WaveGradient::<u8>::new(vec![]).next(), None);
        assert_eq2!(
            WaveGradient::new(vec![7_u8]).take(3).collect::<Vec<_>>(),
            vec![7, 7, 7]
        );
        assert_eq2!(
            WaveGradient::new(vec![1_u8, 2]).take(5).collect::<Vec<_>>(),
            vec![1, 2, 1, 2, 1]
        );
    }

    #[test]
    fn test_cube_block_rows_alternate() {
        let block = cube_block(20);
        assert_eq2!(block.len(), 36);
        assert_eq2!(&block[..6], &[16, 17, 18, 19, 20, 21]);
        assert_eq2!(&block[6..12], &[27, 26, 25, 24, 23, 22]);
        assert_eq2!(block[35], 46);
        assert_eq2!(cube_block(0)[0], 16);
        assert_eq2!(cube_block(52)[0], 52);
        assert_eq2!(cube_block(231)[0], 196);
    }

    #[test]
    fn test_gray_wave_starts_at_code() {
        let it = wave_for_start_code(250).take(8).collect::<Vec<_>>();
        assert_eq2!(it, vec![250, 251, 252, 253, 254, 255, 254, 253]);
    }

    #[test]
    fn test_covered() {
        assert!(!has_covered_all_input(0, 1));
        assert!(has_covered_all_input(2, 2));
        assert!(has_covered_all_input(3, 2));
        assert!(has_covered_all_input(0, 0));
    }

    /// 12 chars, 2 chars per color, 6 colors in the order of the first cube row.
    #[test]
    fn test_colorize_wave_twelve_chars_step_two() {
        let text = "abcdefghijkl";
        let it =
            colorize_wave(text, wave_for_start_code(20), 2, &ColrStyle::default(), false)
                .unwrap();
        let colors = get_codes(&it)
            .into_iter()
            .filter(|it| it.starts_with("\x1b[38;5;"))
            .collect::<Vec<_>>();
        assert_eq2!(
            colors,
            vec![
                "\x1b[38;5;16m",
                "\x1b[38;5;17m",
                "\x1b[38;5;18m",
                "\x1b[38;5;19m",
                "\x1b[38;5;20m",
                "\x1b[38;5;21m",
            ]
        );
        assert!(it.starts_with("\x1b[38;5;16mab\x1b[0m\x1b[38;5;17mcd\x1b[0m"));
    }

    #[test]
    fn test_colorize_wave_fixed_fore_walks_back() {
        let fixed = ColrStyle::new()
            .set_fore(BasicColor::Red)
            .set_style(StyleCode::Bold);
        let it = colorize_wave("ab", WaveGradient::new(vec![232_u8]), 1, &fixed, true)
            .unwrap();
        assert_eq2!(
            it,
            "\x1b[1m\x1b[48;2;232;232;232m\x1b[31ma\x1b[0m\x1b[1m\x1b[48;2;232;232;232m\x1b[31mb\x1b[0m"
        );
    }

    #[test]
    fn test_colorize_wave_conflict() {
        let fixed = ColrStyle::new()
            .set_fore(BasicColor::Red)
            .set_back(BasicColor::Blue);
        assert_eq2!(
            colorize_wave("ab", wave_for_start_code(20), 1, &fixed, false),
            Err(ColrError::ConflictingColors)
        );
    }

    #[test]
    fn test_colorize_wave_empty_text() {
        let it = colorize_wave("", wave_for_start_code(20), 1, &ColrStyle::default(), false);
        assert_eq2!(it.unwrap(), "");
    }
}
