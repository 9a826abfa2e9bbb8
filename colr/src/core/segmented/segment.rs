// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splits a string with embedded escape codes into an ordered list of [`Segment`]s.
//!
//! ```text
//! "\x1b[31mtest\x1b[0m!"
//!  ├──────┤├──┤├─────┤├┤
//!   Code   Text  Code  Text
//! ```
//!
//! The segments partition the input: no gaps, no overlaps, and joining every
//! [`Segment::text`] in order gives back the input. Segments are computed on demand and
//! never cached, so a buffer that changes is simply segmented again.

use super::ESCAPE_CODE_REGEX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Code,
    Text,
}

/// A run of the original string. `start` and `stop` are byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub start: usize,
    pub stop: usize,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    fn new(kind: SegmentKind, origin: &'a str, start: usize, stop: usize) -> Self {
        Self {
            kind,
            start,
            stop,
            text: &origin[start..stop],
        }
    }

    #[must_use]
    pub fn is_code(&self) -> bool { self.kind == SegmentKind::Code }

    #[must_use]
    pub fn is_text(&self) -> bool { self.kind == SegmentKind::Text }

    /// Visible width in chars. Always `0` for codes.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.kind {
            SegmentKind::Code => 0,
            SegmentKind::Text => self.text.chars().count(),
        }
    }
}

/// Empty input has no segments, otherwise no segment is empty.
#[must_use]
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut acc = vec![];
    let mut last_stop = 0;

    for found in ESCAPE_CODE_REGEX.find_iter(text) {
        if found.start() > last_stop {
            acc.push(Segment::new(SegmentKind::Text, text, last_stop, found.start()));
        }
        acc.push(Segment::new(SegmentKind::Code, text, found.start(), found.end()));
        last_stop = found.end();
    }

    if last_stop < text.len() {
        acc.push(Segment::new(SegmentKind::Text, text, last_stop, text.len()));
    }

    acc
}

/// Number of chars a terminal would display.
#[must_use]
pub fn visible_len(text: &str) -> usize {
    segment(text).iter().map(Segment::visible_len).sum()
}

/// The text segments joined in order, without any codes.
#[must_use]
pub fn strip(text: &str) -> String {
    segment(text)
        .iter()
        .filter(|it| it.is_text())
        .map(|it| it.text)
        .collect()
}
