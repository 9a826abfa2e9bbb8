// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          io::Write,
          ops::Add};

use super::{CountedControl, EraseMethod, EscapeCode, counted_code, cursor_hide, cursor_show, erase_display, erase_line,
            erase_whole_line, move_back, move_carriage_return, move_column, move_down,
            move_forward, move_next, move_pos, move_prev, move_up, pos_restore, pos_save,
            scroll_down, scroll_up};
use crate::{ColrResult, last_escape_code};

/// Builds up a sequence of control codes and text by chaining.
///
/// ```
/// use r3bl_colr::Control;
/// let it = Control::default().move_up(1).repeat(3).text("done");
/// assert_eq!(it.to_string(), "\x1b[1A\x1b[1A\x1b[1Adone");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Control {
    pub data: String,
}

impl Control {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self { Self { data: data.into() } }

    #[must_use]
    pub fn chained(mut self, code: impl AsRef<str>) -> Self {
        self.data.push_str(code.as_ref());
        self
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self { self.chained(text) }

    #[must_use]
    pub fn cursor_hide(self) -> Self { self.chained(cursor_hide()) }

    #[must_use]
    pub fn cursor_show(self) -> Self { self.chained(cursor_show()) }

    #[must_use]
    pub fn erase_display(self, method: EraseMethod) -> Self {
        self.chained(erase_display(method))
    }

    /// # Errors
    ///
    /// Returns [`crate::ColrError::InvalidControlArg`] for the display only methods.
    pub fn erase_line(self, method: EraseMethod) -> ColrResult<Self> {
        Ok(self.chained(erase_line(method)?))
    }

    /// [`Self::erase_line`] for [`EraseMethod::All`], which can't fail.
    #[must_use]
    pub fn erase_whole_line(self) -> Self { self.chained(erase_whole_line()) }

    /// A move or scroll by `count`, which defaults to
    /// [`super::DEFAULT_CONTROL_COUNT`].
    #[must_use]
    pub fn counted(self, kind: CountedControl, count: Option<u16>) -> Self {
        self.chained(counted_code(kind, count))
    }

    #[must_use]
    pub fn move_back(self, columns: u16) -> Self { self.chained(move_back(columns)) }

    #[must_use]
    pub fn move_forward(self, columns: u16) -> Self { self.chained(move_forward(columns)) }

    #[must_use]
    pub fn move_up(self, lines: u16) -> Self { self.chained(move_up(lines)) }

    #[must_use]
    pub fn move_down(self, lines: u16) -> Self { self.chained(move_down(lines)) }

    #[must_use]
    pub fn move_next(self, lines: u16) -> Self { self.chained(move_next(lines)) }

    #[must_use]
    pub fn move_prev(self, lines: u16) -> Self { self.chained(move_prev(lines)) }

    #[must_use]
    pub fn move_column(self, column: u16) -> Self { self.chained(move_column(column)) }

    #[must_use]
    pub fn move_pos(self, line: u16, column: u16) -> Self {
        self.chained(move_pos(line, column))
    }

    #[must_use]
    pub fn move_carriage_return(self) -> Self { self.chained(move_carriage_return()) }

    #[must_use]
    pub fn pos_save(self) -> Self { self.chained(pos_save()) }

    #[must_use]
    pub fn pos_restore(self) -> Self { self.chained(pos_restore()) }

    #[must_use]
    pub fn scroll_up(self, lines: u16) -> Self { self.chained(scroll_up(lines)) }

    #[must_use]
    pub fn scroll_down(self, lines: u16) -> Self { self.chained(scroll_down(lines)) }

    /// The last recognized escape code in the data, or `""`.
    #[must_use]
    pub fn last_code(&self) -> &str { last_escape_code(&self.data) }

    /// Repeats the last code so that it occurs `count` times in a row. A `count` of `0`
    /// or `1` leaves the data as is.
    #[must_use]
    pub fn repeat(self, count: usize) -> Self {
        let code = self.last_code().repeat(count.saturating_sub(1));
        self.chained(code)
    }

    /// Repeats all of the data `count` times.
    #[must_use]
    pub fn repeat_all(self, count: usize) -> Self { Self::new(self.data.repeat(count)) }

    /// Writes and flushes the data, which is then cleared.
    ///
    /// # Errors
    ///
    /// Returns any IO error from `writer`.
    pub fn write(&mut self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(self.data.as_bytes())?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Display for Control {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.data) }
}

impl AsRef<str> for Control {
    fn as_ref(&self) -> &str { &self.data }
}

impl From<EscapeCode> for Control {
    fn from(it: EscapeCode) -> Self { Self::new(it) }
}

impl Add<&str> for Control {
    type Output = Control;

    fn add(self, rhs: &str) -> Self::Output { self.chained(rhs) }
}

impl Add<Control> for Control {
    type Output = Control;

    fn add(self, rhs: Control) -> Self::Output { self.chained(rhs) }
}

impl Add<EscapeCode> for Control {
    type Output = Control;

    fn add(self, rhs: EscapeCode) -> Self::Output { self.chained(rhs) }
}

/// Saves the cursor position, writes `text`, then restores the position.
///
/// # Errors
///
/// Returns any IO error from `writer`.
pub fn print_inplace(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    Control::default()
        .pos_save()
        .text(text)
        .pos_restore()
        .write(writer)
}

/// Erases the current line, moves to the first column, then writes `text`.
///
/// # Errors
///
/// Returns any IO error from `writer`.
pub fn print_overwrite(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    Control::default()
        .chained(erase_whole_line())
        .move_column(1)
        .text(text)
        .write(writer)
}
