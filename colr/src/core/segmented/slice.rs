// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Indexing and slicing by visible character position. Escape codes take up no
//! positions, but they are carried along and re-emitted before the next selected char.
//!
//! For a positive step, every code passed over since the last selected char is
//! emitted, in original order, before the next selected char:
//!
//! ```text
//! "\x1b[31mtesting\x1b[0m"[1..3]  ->  "\x1b[31mes"
//! ```
//!
//! For a negative step, each time the walk enters a different text segment, the codes
//! directly in front of that segment are emitted. Codes are never reversed internally.
//!
//! ```text
//! "\x1b[31mab\x1b[32mcd"[::-1]  ->  "\x1b[32mdc\x1b[31mba"
//! ```
//!
//! In both directions, codes with no selected char after them are dropped.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use super::{Segment, segment};
use crate::{ColrError, ColrResult};

/// Standard sequence slice arguments, over visible chars. `None` means "use the
/// default for this step direction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleSlice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl VisibleSlice {
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    #[must_use]
    pub fn set_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the selected positions, in output order, for a sequence of `len`.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::ValueParseError`] for a step of `0`.
    pub fn positions(&self, len: usize) -> ColrResult<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(ColrError::value_parse("0", "slice step cannot be zero"));
        }

        let len = isize::try_from(len)
            .map_err(|_| ColrError::value_parse(len.to_string(), "too long to slice"))?;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |index: isize| {
            let index = if index < 0 { index + len } else { index };
            index.clamp(lower, upper)
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self.stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let mut acc = vec![];
        let mut index = start;
        while (step > 0 && index < stop) || (step < 0 && index > stop) {
            // Clamping keeps every index in 0..len here.
            acc.extend(usize::try_from(index).ok());
            match index.checked_add(step) {
                Some(next) => index = next,
                None => break,
            }
        }
        Ok(acc)
    }
}

impl From<Range<isize>> for VisibleSlice {
    fn from(it: Range<isize>) -> Self { Self::new(Some(it.start), Some(it.end), None) }
}

impl From<RangeFrom<isize>> for VisibleSlice {
    fn from(it: RangeFrom<isize>) -> Self { Self::new(Some(it.start), None, None) }
}

impl From<RangeTo<isize>> for VisibleSlice {
    fn from(it: RangeTo<isize>) -> Self { Self::new(None, Some(it.end), None) }
}

impl From<RangeFull> for VisibleSlice {
    fn from(_: RangeFull) -> Self { Self::default() }
}

/// One entry of the index map: either a single visible char or a whole code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexEntry<'a> {
    Char(char),
    Code(&'a str),
}

/// Flattens `text` into visible chars and whole codes, in original order.
#[must_use]
pub fn index_map(text: &str) -> Vec<IndexEntry<'_>> {
    let mut acc = vec![];
    for it in segment(text) {
        if it.is_code() {
            acc.push(IndexEntry::Code(it.text));
        } else {
            acc.extend(it.text.chars().map(IndexEntry::Char));
        }
    }
    acc
}

/// A visible char, with the text segment it came from and every code between it and
/// the previous visible char.
#[derive(Debug)]
struct VisibleChar<'a> {
    ch: char,
    segment_index: usize,
    codes_before: Vec<&'a str>,
}

/// Per visible char info, plus the run of codes directly in front of each segment.
fn visible_chars<'a>(segments: &[Segment<'a>]) -> (Vec<VisibleChar<'a>>, Vec<Vec<&'a str>>) {
    let mut chars = vec![];
    let mut leading_codes = vec![];
    let mut pending = vec![];

    for (segment_index, it) in segments.iter().enumerate() {
        if it.is_code() {
            pending.push(it.text);
            leading_codes.push(vec![]);
            continue;
        }
        leading_codes.push(pending.clone());
        for (char_index, ch) in it.text.chars().enumerate() {
            let codes_before = if char_index == 0 {
                std::mem::take(&mut pending)
            } else {
                vec![]
            };
            chars.push(VisibleChar {
                ch,
                segment_index,
                codes_before,
            });
        }
    }

    (chars, leading_codes)
}

/// # Errors
///
/// Returns [`ColrError::ValueParseError`] for a step of `0`.
pub fn slice_text(text: &str, slice: impl Into<VisibleSlice>) -> ColrResult<String> {
    let slice = slice.into();
    let segments = segment(text);
    let (chars, leading_codes) = visible_chars(&segments);
    let positions = slice.positions(chars.len())?;

    let mut acc = String::with_capacity(text.len());

    if slice.step.unwrap_or(1) > 0 {
        let mut selected = vec![false; chars.len()];
        for position in &positions {
            selected[*position] = true;
        }
        let mut carried = vec![];
        for (it, is_selected) in chars.iter().zip(selected) {
            carried.extend(it.codes_before.iter().copied());
            if is_selected {
                carried.drain(..).for_each(|code| acc.push_str(code));
                acc.push(it.ch);
            }
        }
    } else {
        let mut current_segment = None;
        for position in positions {
            let it = &chars[position];
            if current_segment != Some(it.segment_index) {
                leading_codes[it.segment_index]
                    .iter()
                    .for_each(|code| acc.push_str(code));
                current_segment = Some(it.segment_index);
            }
            acc.push(it.ch);
        }
    }

    Ok(acc)
}

/// A single visible char, with the codes that precede it. Negative indices count from
/// the end.
///
/// # Errors
///
/// Returns [`ColrError::IndexOutOfBounds`] if `index` is outside the visible text.
pub fn index_text(text: &str, index: isize) -> ColrResult<String> {
    let len = super::visible_len(text);
    let out_of_bounds = || ColrError::IndexOutOfBounds { index, len };
    let signed_len = isize::try_from(len).map_err(|_| out_of_bounds())?;

    let resolved = if index < 0 { index + signed_len } else { index };
    if resolved < 0 || resolved >= signed_len {
        return Err(out_of_bounds());
    }
    slice_text(text, resolved..resolved + 1)
}
