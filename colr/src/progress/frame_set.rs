// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::{Add, Index, Mul},
          time::Duration};

use super::BarSet;
use crate::{Colr, ColrError, ColrResult, ColrStyle, GRADIENT_NAMES, RainbowOptions,
            StyleCode};

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Offset into the rainbow used by [`FrameSet::as_rainbow`] when none is given.
pub const DEFAULT_RAINBOW_OFFSET: f64 = 35.0;

/// A named, non-empty list of frames for a spinner, and the delay between them. The name
/// is trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSet {
    pub name: String,
    pub delay: Duration,
    frames: Vec<String>,
}

impl FrameSet {
    /// # Errors
    ///
    /// Returns [`ColrError::EmptyFrameSet`] if there are no frames.
    pub fn try_new<T: Into<String>>(
        frames: impl IntoIterator<Item = T>,
        name: &str,
        delay: Option<Duration>,
    ) -> ColrResult<Self> {
        let name = name.trim().to_lowercase();
        let frames = frames.into_iter().map(Into::into).collect::<Vec<_>>();
        if frames.is_empty() {
            return Err(ColrError::EmptyFrameSet { name });
        }
        Ok(Self {
            name,
            delay: delay.unwrap_or(DEFAULT_FRAME_DELAY),
            frames,
        })
    }

    /// One frame per char of `chars`.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::EmptyFrameSet`] if `chars` is empty.
    pub fn from_chars(chars: &str, name: &str, delay: Option<Duration>) -> ColrResult<Self> {
        Self::try_new(chars.chars().map(String::from), name, delay)
    }

    /// Copies the frames of a [`BarSet`], wrapped in `wrapper` if given, else in the
    /// bar's own wrapper when `use_wrapper` is set.
    ///
    /// # Errors
    ///
    /// Never fails for a valid [`BarSet`], which always has frames.
    pub fn from_barset(
        barset: &BarSet,
        name: &str,
        delay: Option<Duration>,
        use_wrapper: bool,
        wrapper: Option<(&str, &str)>,
    ) -> ColrResult<Self> {
        let frames = barset.frames().iter().map(|frame| match wrapper {
            Some(wrapper) => BarSet::wrap_with(frame, wrapper),
            None if use_wrapper => barset.wrap_str(frame),
            None => frame.clone(),
        });
        Self::try_new(frames, name, delay)
    }

    #[must_use]
    pub fn frames(&self) -> &[String] { &self.frames }

    #[must_use]
    pub fn len(&self) -> usize { self.frames.len() }

    /// Always `false`, empty frame sets can't be built.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.frames.is_empty() }

    /// The frame at `index`, wrapping around at the end.
    #[must_use]
    pub fn frame(&self, index: usize) -> &str { &self.frames[index % self.frames.len()] }

    /// `true` if any frame starts with an escape code.
    #[must_use]
    pub fn has_codes(&self) -> bool { self.frames.iter().any(|it| it.starts_with("\x1b[")) }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.trim().to_lowercase();
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Appends `text` to every frame.
    #[must_use]
    pub fn append(mut self, text: &str) -> Self {
        self.frames.iter_mut().for_each(|it| it.push_str(text));
        self
    }

    /// Prepends `text` to every frame.
    #[must_use]
    pub fn prepend(mut self, text: &str) -> Self {
        self.frames.iter_mut().for_each(|it| it.insert_str(0, text));
        self
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            name: format!("reversed_{}", self.name),
            delay: self.delay,
            frames: self.frames.iter().rev().cloned().collect(),
        }
    }

    /// Colors every frame with the same style.
    #[must_use]
    pub fn as_colr(&self, style: &ColrStyle) -> Self {
        Self {
            name: format!("custom_{}_as_colr", self.name),
            delay: self.delay,
            frames: self
                .frames
                .iter()
                .map(|frame| Colr::from_style(frame.as_str(), style).data)
                .collect(),
        }
    }

    /// Colors frame `i` from the rainbow at `offset + i`, where `offset` comes from one of
    /// the [`GRADIENT_NAMES`] (blue when `name` is unknown or missing).
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Colr::rainbow`].
    pub fn as_gradient(
        &self,
        name: Option<&str>,
        style: Option<StyleCode>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        let offset = gradient_offset(name);
        let suffix = if rgb_mode { "_rgb" } else { "" };
        let options = RainbowOptions::default()
            .with_spread(1.0)
            .with_rgb_mode(rgb_mode)
            .with_style(style_only(style));
        self.map_frames(
            format!("custom_{}_as_gradient{suffix}", self.name),
            |index, frame| frame_rainbow(frame, offset + index_f64(index), &options),
        )
    }

    /// Colors frame `i` from a quickly changing rainbow at `offset + i`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Colr::rainbow`].
    pub fn as_rainbow(
        &self,
        offset: Option<f64>,
        style: Option<StyleCode>,
        rgb_mode: bool,
    ) -> ColrResult<Self> {
        let offset = offset.unwrap_or(DEFAULT_RAINBOW_OFFSET);
        let options = RainbowOptions::default()
            .with_freq(0.25)
            .with_spread(1.0)
            .with_rgb_mode(rgb_mode)
            .with_style(style_only(style));
        self.map_frames(format!("custom_{}_as_rainbow", self.name), |index, frame| {
            frame_rainbow(frame, offset + index_f64(index), &options)
        })
    }

    fn map_frames(
        &self,
        name: String,
        mut f: impl FnMut(usize, &str) -> ColrResult<String>,
    ) -> ColrResult<Self> {
        let frames = self
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| f(index, frame))
            .collect::<ColrResult<Vec<_>>>()?;
        Ok(Self {
            name,
            delay: self.delay,
            frames,
        })
    }
}

pub(crate) fn gradient_offset(name: Option<&str>) -> f64 {
    let lookup = |name: &str| {
        GRADIENT_NAMES
            .iter()
            .find(|(it, _)| *it == name)
            .map(|(_, offset)| f64::from(*offset))
    };
    name.and_then(lookup)
        .or_else(|| lookup("blue"))
        .unwrap_or_default()
}

fn style_only(style: Option<StyleCode>) -> ColrStyle {
    ColrStyle {
        style,
        ..ColrStyle::default()
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_f64(index: usize) -> f64 { index as f64 }

fn frame_rainbow(frame: &str, offset: f64, options: &RainbowOptions) -> ColrResult<String> {
    let it = Colr::new(frame).rainbow((), &options.with_offset(offset))?;
    Ok(it.data)
}

/// Frames of `rhs` are added after those of `self`, which keeps its name and delay.
impl Add<&FrameSet> for FrameSet {
    type Output = FrameSet;

    fn add(mut self, rhs: &FrameSet) -> Self::Output {
        self.frames.extend(rhs.frames.iter().cloned());
        self
    }
}

impl Mul<usize> for FrameSet {
    type Output = FrameSet;

    /// `0` keeps a single copy, since a frame set can't be empty.
    fn mul(mut self, count: usize) -> Self::Output {
        self.frames = std::iter::repeat_n(self.frames, count.max(1))
            .flatten()
            .collect();
        self
    }
}

impl Index<usize> for FrameSet {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output { &self.frames[index] }
}

/// All frames joined together.
impl Display for FrameSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.frames.iter().try_for_each(|it| f.write_str(it))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, assert_eq2, strip};

    fn abc() -> FrameSet { FrameSet::from_chars("abc", "  ABC ", None).unwrap() }

    #[test]
    fn test_new_frame_set() {
        let it = abc();
        assert_eq2!(it.name, "abc");
        assert_eq2!(it.delay, DEFAULT_FRAME_DELAY);
        assert_eq2!(it.frames(), ["a", "b", "c"]);
        assert_eq2!(it.frame(4), "b");
        assert_eq2!(&it[2], "c");
        assert_eq2!(it.to_string(), "abc");
    }

    #[test]
    fn test_empty_frame_set_is_rejected() {
        assert_eq2!(
            FrameSet::try_new(Vec::<String>::new(), "nothing", None),
            Err(ColrError::EmptyFrameSet {
                name: "nothing".into()
            })
        );
    }

    #[test]
    fn test_append_prepend_add_mul() {
        let it = abc().append("!").prepend("<");
        assert_eq2!(it.frames(), ["<a!", "<b!", "<c!"]);

        let it = abc() + &FrameSet::from_chars("d", "d", None).unwrap();
        assert_eq2!(it.to_string(), "abcd");
        assert_eq2!(it.name, "abc");

        assert_eq2!((abc() * 2).len(), 6);
        assert_eq2!((abc() * 0).len(), 3);
        assert_eq2!(abc().reversed().to_string(), "cba");
        assert_eq2!(abc().reversed().name, "reversed_abc");
    }

    #[test]
    fn test_mul_repeats_frames_in_order() {
        let it = abc() * 3;
        assert_eq2!(it.frames(), ["a", "b", "c", "a", "b", "c", "a", "b", "c"]);
        assert_eq2!(it.name, "abc");
        assert_eq2!((abc() * 0).frames(), ["a", "b", "c"]);
    }

    #[test]
    fn test_as_colr() {
        let it = abc().as_colr(&ColrStyle::new().set_fore(BasicColor::Red));
        assert_eq2!(it.name, "custom_abc_as_colr");
        assert_eq2!(it.frame(0), "\x1b[31ma\x1b[0m");
        assert!(it.has_codes());
        assert!(!abc().has_codes());
    }

    #[test]
    fn test_as_gradient_and_rainbow() {
        let it = abc().as_gradient(Some("red"), None, true).unwrap();
        assert_eq2!(it.name, "custom_abc_as_gradient_rgb");
        let expected = Colr::new("b")
            .rainbow(
                (),
                &RainbowOptions::default()
                    .with_spread(1.0)
                    .with_rgb_mode(true)
                    .with_offset(81.0),
            )
            .unwrap();
        assert_eq2!(it.frame(1), expected.data);

        let it = abc().as_rainbow(None, Some(StyleCode::Bold), false).unwrap();
        assert_eq2!(it.name, "custom_abc_as_rainbow");
        assert!(it.frame(0).starts_with("\x1b[1m"));
        assert_eq2!(strip(&it.to_string()), "abc");
    }

    #[test]
    fn test_gradient_offset() {
        assert_eq2!(gradient_offset(Some("cyan")), 48.0);
        assert_eq2!(gradient_offset(Some("nope")), 34.0);
        assert_eq2!(gradient_offset(None), 34.0);
    }
}
