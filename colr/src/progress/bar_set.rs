// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::FrameSet;
use crate::{ColrResult, ColrStyle, StyleCode};

pub const DEFAULT_BAR_WIDTH: usize = 25;
pub const DEFAULT_BAR_FILL: &str = " ";
pub const DEFAULT_BAR_WRAPPER: (&str, &str) = ("[", "]");

/// A [`FrameSet`] for a progress bar. The frames are the inside of the bar, from empty to
/// full, and the wrapper goes around whichever frame is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BarSet {
    pub frame_set: FrameSet,
    pub wrapper: (String, String),
}

/// How [`BarSet::from_char`] moves a char across the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOptions {
    pub width: usize,
    pub fill: String,
    /// Moves back to where it started after reaching the other side.
    pub bounce: bool,
    /// Starts on the right side.
    pub reverse: bool,
    /// Used instead of the char on the way back.
    pub back_char: Option<String>,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAR_WIDTH,
            fill: DEFAULT_BAR_FILL.to_string(),
            bounce: false,
            reverse: false,
            back_char: None,
        }
    }
}

impl MoveOptions {
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = fill.to_string();
        self
    }

    #[must_use]
    pub fn with_bounce(mut self, back_char: Option<&str>) -> Self {
        self.bounce = true;
        self.back_char = back_char.map(String::from);
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

impl BarSet {
    /// # Errors
    ///
    /// Returns [`crate::ColrError::EmptyFrameSet`] if there are no frames.
    pub fn try_new<T: Into<String>>(
        frames: impl IntoIterator<Item = T>,
        name: &str,
        wrapper: Option<(&str, &str)>,
    ) -> ColrResult<Self> {
        let (left, right) = wrapper.unwrap_or(DEFAULT_BAR_WRAPPER);
        Ok(Self {
            frame_set: FrameSet::try_new(frames, name, None)?,
            wrapper: (left.to_string(), right.to_string()),
        })
    }

    /// Frames that move `ch` through empty space, left to right unless reversed.
    ///
    /// ```
    /// use r3bl_colr::{BarSet, MoveOptions};
    /// let it = BarSet::from_char("*", "star", MoveOptions::default().with_width(3), None)
    ///     .unwrap();
    /// assert_eq!(it.frames(), ["*  ", " * ", "  *"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColrError::EmptyFrameSet`] for a width of `0`.
    pub fn from_char(
        ch: &str,
        name: &str,
        options: MoveOptions,
        wrapper: Option<(&str, &str)>,
    ) -> ColrResult<Self> {
        Self::try_new(generate_move(ch, &options), name, wrapper)
    }

    /// Frames that grow from the first char of `text` to all of it, padded with `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ColrError::EmptyFrameSet`] if `text` is empty.
    pub fn from_str(
        text: &str,
        name: &str,
        fill: Option<&str>,
        wrapper: Option<(&str, &str)>,
    ) -> ColrResult<Self> {
        let fill = fill.unwrap_or(DEFAULT_BAR_FILL);
        let chars = text.chars().collect::<Vec<_>>();
        let max_len = chars.len();
        let frames = (1..=max_len).map(|pos| {
            let mut acc = chars[..pos].iter().collect::<String>();
            acc.push_str(&fill.repeat(max_len - pos));
            acc
        });
        Self::try_new(frames, name, wrapper)
    }

    #[must_use]
    pub fn frames(&self) -> &[String] { self.frame_set.frames() }

    #[must_use]
    pub fn name(&self) -> &str { &self.frame_set.name }

    #[must_use]
    pub fn len(&self) -> usize { self.frame_set.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.frame_set.is_empty() }

    /// A copy with a new wrapper, or no wrapper at all. The name defaults to
    /// `{name}_custom_wrapper`.
    #[must_use]
    pub fn with_wrapper(&self, wrapper: Option<(&str, &str)>, name: Option<&str>) -> Self {
        let name = name.map_or_else(|| format!("{}_custom_wrapper", self.name()), String::from);
        let (left, right) = wrapper.unwrap_or(("", ""));
        Self {
            frame_set: self.frame_set.clone().with_name(&name),
            wrapper: (left.to_string(), right.to_string()),
        }
    }

    #[must_use]
    pub fn wrap_str(&self, text: &str) -> String {
        Self::wrap_with(text, (&self.wrapper.0, &self.wrapper.1))
    }

    #[must_use]
    pub fn wrap_with(text: &str, (left, right): (&str, &str)) -> String {
        format!("{left}{text}{right}")
    }

    /// The wrapped frame for `percent`. Values past 100 wrap around, but exactly 100
    /// (or any non-zero multiple of it) shows the full bar.
    ///
    /// ```
    /// use r3bl_colr::BarSet;
    /// let it = BarSet::from_str("1234567890", "digits", Some(" "), None).unwrap();
    /// assert_eq!(it.as_percent(50.0), "[123456    ]");
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn as_percent(&self, percent: f64) -> String {
        let wrapped = (percent.trunc() as i64).rem_euclid(100);
        let percent = if wrapped == 0 { percent.clamp(0.0, 100.0) } else { wrapped as f64 };
        let index = ((self.len() as f64 / 100.0) * percent) as usize;
        let last = self.len().saturating_sub(1);
        self.wrap_str(self.frame_set.frame(index.min(last)))
    }

    #[must_use]
    pub fn as_colr(&self, style: &ColrStyle) -> Self {
        self.map_frame_set(self.frame_set.as_colr(style))
    }

    /// # Errors
    ///
    /// See [`FrameSet::as_gradient`].
    pub fn as_gradient(
        &self,
        name: Option<&str>,
        style: Option<StyleCode>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        Ok(self.map_frame_set(self.frame_set.as_gradient(name, style, rgb_mode)?))
    }

    /// # Errors
    ///
    /// See [`FrameSet::as_rainbow`].
    pub fn as_rainbow(
        &self,
        offset: Option<f64>,
        style: Option<StyleCode>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        Ok(self.map_frame_set(self.frame_set.as_rainbow(offset, style, rgb_mode)?))
    }

    fn map_frame_set(&self, frame_set: FrameSet) -> Self {
        Self {
            frame_set,
            wrapper: self.wrapper.clone(),
        }
    }
}

/// Each frame is the filler with `ch` inserted at the next position. Slicing the filler
/// clamps at its end, so the edge frames repeat when bouncing.
fn generate_move(ch: &str, options: &MoveOptions) -> Vec<String> {
    let width = options.width;
    let filler = options
        .fill
        .repeat(width.saturating_sub(ch.chars().count()))
        .chars()
        .collect::<Vec<_>>();
    let frame = |index: usize, ch: &str| {
        let split = index.min(filler.len());
        let mut acc = filler[..split].iter().collect::<String>();
        acc.push_str(ch);
        acc.extend(&filler[split..]);
        acc
    };

    let (forward, backward): (Vec<usize>, Vec<usize>) = if options.reverse {
        ((0..=width).rev().collect(), (0..width.saturating_sub(1)).collect())
    } else {
        ((0..width).collect(), (1..=width).rev().collect())
    };

    let mut acc = forward.into_iter().map(|it| frame(it, ch)).collect::<Vec<_>>();
    if options.bounce {
        let back_char = options.back_char.as_deref().unwrap_or(ch);
        acc.extend(backward.into_iter().map(|it| frame(it, back_char)));
    }
    acc
}

/// The wrapped full bar.
impl Display for BarSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let last = self.frames().last().map_or("", String::as_str);
        f.write_str(&self.wrap_str(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn digits() -> BarSet { BarSet::from_str("1234567890", "digits", None, None).unwrap() }

    #[test]
    fn test_from_str_grows() {
        let it = BarSet::from_str("abc", "abc", Some("-"), Some(("<", ">"))).unwrap();
        assert_eq2!(it.frames(), ["a--", "ab-", "abc"]);
        assert_eq2!(it.to_string(), "<abc>");
    }

    #[test]
    fn test_from_char_bounce() {
        let it = BarSet::from_char(
            "*",
            "star",
            MoveOptions::default()
                .with_width(3)
                .with_fill(".")
                .with_bounce(Some("o")),
            None,
        )
        .unwrap();
        assert_eq2!(
            it.frames(),
            ["*..", ".*.", "..*", "..o", "..o", ".o."]
        );
    }

    #[test]
    fn test_from_char_reverse() {
        let it = BarSet::from_char(
            "*",
            "star",
            MoveOptions::default().with_width(3).with_reverse(true),
            None,
        )
        .unwrap();
        assert_eq2!(it.frames(), ["  *", "  *", " * ", "*  "]);
    }

    #[test_case(0.0, "[1         ]")]
    #[test_case(50.0, "[123456    ]")]
    #[test_case(99.0, "[1234567890]")]
    #[test_case(100.0, "[1234567890]")]
    #[test_case(150.0, "[123456    ]")]
    #[test_case(200.0, "[1234567890]")]
    fn test_as_percent(percent: f64, expected: &str) {
        assert_eq2!(digits().as_percent(percent), expected);
    }

    #[test]
    fn test_with_wrapper() {
        let it = digits().with_wrapper(Some(("|", "|")), None);
        assert_eq2!(it.name(), "digits_custom_wrapper");
        assert_eq2!(it.as_percent(100.0), "|1234567890|");
        assert_eq2!(digits().with_wrapper(None, Some("bare")).wrap_str("x"), "x");
    }

    #[test]
    fn test_frame_set_from_barset() {
        let bars = BarSet::from_str("ab", "ab", None, None).unwrap();
        let it = FrameSet::from_barset(&bars, "ab_frames", None, true, None).unwrap();
        assert_eq2!(it.frames(), ["[a ]", "[ab]"]);
        let it = FrameSet::from_barset(&bars, "ab_frames", None, true, Some(("(", ")")))
            .unwrap();
        assert_eq2!(it.frames(), ["(a )", "(ab)"]);
        let it = FrameSet::from_barset(&bars, "ab_frames", None, false, None).unwrap();
        assert_eq2!(it.frames(), ["a ", "ab"]);
    }
}
