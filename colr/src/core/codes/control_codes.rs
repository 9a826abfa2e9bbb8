// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor, erase, position, and scroll escape codes. Every function that takes a count
//! uses it as is. [`counted_code`] takes an optional count that falls back to
//! [`DEFAULT_CONTROL_COUNT`].
//!
//! | Function          | Code            |
//! | :---------------- | :-------------- |
//! | [`cursor_hide`]   | `ESC[?25l`      |
//! | [`cursor_show`]   | `ESC[?25h`      |
//! | [`erase_display`] | `ESC[<m>J`      |
//! | [`erase_line`]    | `ESC[<m>K`      |
//! | [`move_up`]       | `ESC[<n>A`      |
//! | [`move_down`]     | `ESC[<n>B`      |
//! | [`move_forward`]  | `ESC[<n>C`      |
//! | [`move_back`]     | `ESC[<n>D`      |
//! | [`move_next`]     | `ESC[<n>E`      |
//! | [`move_prev`]     | `ESC[<n>F`      |
//! | [`move_column`]   | `ESC[<n>G`      |
//! | [`move_pos`]      | `ESC[<l>;<c>H`  |
//! | [`pos_save`]      | `ESC[s`         |
//! | [`pos_restore`]   | `ESC[u`         |
//! | [`scroll_up`]     | `ESC[<n>S`      |
//! | [`scroll_down`]   | `ESC[<n>T`      |

use std::{fmt::{Display, Formatter},
          io::Write};

use strum_macros::{Display, EnumIter};

use crate::{ColrError, ColrResult, ESCAPE_SEQUENCE, InlineString};

/// A complete control sequence, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EscapeCode {
    code: InlineString,
}

impl EscapeCode {
    /// Prefixes `body` with `ESC[`, unless it already starts with it.
    #[must_use]
    pub fn new(body: &str) -> Self {
        let mut code = InlineString::new();
        if !body.starts_with(ESCAPE_SEQUENCE) {
            code.push_str(ESCAPE_SEQUENCE);
        }
        code.push_str(body);
        Self { code }
    }

    /// A control string that is not an escape sequence, like `\r`.
    #[must_use]
    pub fn raw(control: &str) -> Self {
        Self {
            code: control.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.code }

    /// # Errors
    ///
    /// Returns any IO error from `writer`.
    pub fn write(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writer.write_all(self.code.as_bytes())?;
        writer.flush()
    }
}

impl Display for EscapeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.code) }
}

impl AsRef<str> for EscapeCode {
    fn as_ref(&self) -> &str { &self.code }
}

impl From<EscapeCode> for String {
    fn from(it: EscapeCode) -> Self { it.code.to_string() }
}

/// How much of the display or line to erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum EraseMethod {
    /// From the cursor to the end.
    End = 0,
    /// From the cursor to the start.
    Start = 1,
    /// Everything. For the display, the cursor also moves home.
    #[default]
    All = 2,
    /// Everything, including the scrollback buffer. Display only.
    AllErase = 3,
    /// [`EraseMethod::All`] then [`EraseMethod::AllErase`]. Display only, and not a
    /// standard code.
    AllMoveErase = 4,
}

impl EraseMethod {
    pub const ALL_MOVE: Self = Self::All;

    #[must_use]
    pub fn number(self) -> u8 { self as u8 }
}

impl TryFrom<u8> for EraseMethod {
    type Error = ColrError;

    fn try_from(value: u8) -> ColrResult<Self> {
        match value {
            0 => Ok(Self::End),
            1 => Ok(Self::Start),
            2 => Ok(Self::All),
            3 => Ok(Self::AllErase),
            4 => Ok(Self::AllMoveErase),
            _ => Err(ColrError::InvalidControlArg {
                value,
                expected: "0, 1, 2, 3, 4",
            }),
        }
    }
}

pub const DEFAULT_CONTROL_COUNT: u16 = 1;

/// The control kinds that take a single count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CountedControl {
    MoveUp,
    MoveDown,
    MoveForward,
    MoveBack,
    MoveNext,
    MovePrev,
    MoveColumn,
    ScrollUp,
    ScrollDown,
}

impl CountedControl {
    #[must_use]
    pub fn terminator(self) -> char {
        match self {
            Self::MoveUp => 'A',
            Self::MoveDown => 'B',
            Self::MoveForward => 'C',
            Self::MoveBack => 'D',
            Self::MoveNext => 'E',
            Self::MovePrev => 'F',
            Self::MoveColumn => 'G',
            Self::ScrollUp => 'S',
            Self::ScrollDown => 'T',
        }
    }
}

/// `None` is [`DEFAULT_CONTROL_COUNT`].
///
/// ```
/// use r3bl_colr::{CountedControl, counted_code};
/// assert_eq!(counted_code(CountedControl::MoveUp, None).as_str(), "\x1b[1A");
/// assert_eq!(counted_code(CountedControl::ScrollDown, Some(3)).as_str(), "\x1b[3T");
/// ```
#[must_use]
pub fn counted_code(kind: CountedControl, count: Option<u16>) -> EscapeCode {
    counted(count.unwrap_or(DEFAULT_CONTROL_COUNT), kind.terminator())
}

fn counted(count: u16, terminator: char) -> EscapeCode {
    EscapeCode::new(&format!("{count}{terminator}"))
}

#[must_use]
pub fn cursor_hide() -> EscapeCode { EscapeCode::new("?25l") }

#[must_use]
pub fn cursor_show() -> EscapeCode { EscapeCode::new("?25h") }

#[must_use]
pub fn erase_display(method: EraseMethod) -> EscapeCode {
    match method {
        EraseMethod::AllMoveErase => {
            let mut it = counted(2, 'J');
            it.code.push_str(counted(3, 'J').as_str());
            it
        }
        _ => counted(method.number().into(), 'J'),
    }
}

/// The cursor position does not change.
///
/// # Errors
///
/// Returns [`ColrError::InvalidControlArg`] for the display only methods.
pub fn erase_line(method: EraseMethod) -> ColrResult<EscapeCode> {
    match method {
        EraseMethod::End | EraseMethod::Start | EraseMethod::All => {
            Ok(counted(method.number().into(), 'K'))
        }
        _ => Err(ColrError::InvalidControlArg {
            value: method.number(),
            expected: "0, 1, 2",
        }),
    }
}

/// [`erase_line`] with [`EraseMethod::All`], which can't fail.
#[must_use]
pub fn erase_whole_line() -> EscapeCode { counted(EraseMethod::All.number().into(), 'K') }

#[must_use]
pub fn move_up(lines: u16) -> EscapeCode {
    counted_code(CountedControl::MoveUp, Some(lines))
}

#[must_use]
pub fn move_down(lines: u16) -> EscapeCode {
    counted_code(CountedControl::MoveDown, Some(lines))
}

#[must_use]
pub fn move_forward(columns: u16) -> EscapeCode {
    counted_code(CountedControl::MoveForward, Some(columns))
}

#[must_use]
pub fn move_back(columns: u16) -> EscapeCode {
    counted_code(CountedControl::MoveBack, Some(columns))
}

/// Beginning of the line, `lines` down.
#[must_use]
pub fn move_next(lines: u16) -> EscapeCode {
    counted_code(CountedControl::MoveNext, Some(lines))
}

/// Beginning of the line, `lines` up.
#[must_use]
pub fn move_prev(lines: u16) -> EscapeCode {
    counted_code(CountedControl::MovePrev, Some(lines))
}

#[must_use]
pub fn move_column(column: u16) -> EscapeCode {
    counted_code(CountedControl::MoveColumn, Some(column))
}

/// 1 based `line` and `column`.
#[must_use]
pub fn move_pos(line: u16, column: u16) -> EscapeCode {
    EscapeCode::new(&format!("{line};{column}H"))
}

/// Same effect as `move_column(1)`, using `\r`.
#[must_use]
pub fn move_carriage_return() -> EscapeCode { EscapeCode::raw("\r") }

#[must_use]
pub fn pos_save() -> EscapeCode { EscapeCode::new("s") }

#[must_use]
pub fn pos_restore() -> EscapeCode { EscapeCode::new("u") }

/// New lines are added at the bottom.
#[must_use]
pub fn scroll_up(lines: u16) -> EscapeCode {
    counted_code(CountedControl::ScrollUp, Some(lines))
}

/// New lines are added at the top.
#[must_use]
pub fn scroll_down(lines: u16) -> EscapeCode {
    counted_code(CountedControl::ScrollDown, Some(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, is_escape_code};
    use test_case::test_case;

    #[test_case(cursor_hide(), "\x1b[?25l")]
    #[test_case(cursor_show(), "\x1b[?25h")]
    #[test_case(move_up(1), "\x1b[1A")]
    #[test_case(move_down(2), "\x1b[2B")]
    #[test_case(move_forward(3), "\x1b[3C")]
    #[test_case(move_back(4), "\x1b[4D")]
    #[test_case(move_next(1), "\x1b[1E")]
    #[test_case(move_prev(1), "\x1b[1F")]
    #[test_case(move_column(1), "\x1b[1G")]
    #[test_case(move_pos(3, 12), "\x1b[3;12H")]
    #[test_case(pos_save(), "\x1b[s")]
    #[test_case(pos_restore(), "\x1b[u")]
    #[test_case(scroll_up(5), "\x1b[5S")]
    #[test_case(scroll_down(5), "\x1b[5T")]
    fn test_codes(code: EscapeCode, expected: &str) {
        assert_eq2!(code.as_str(), expected);
        assert!(is_escape_code(code.as_str()));
    }

    #[test_case(EraseMethod::End, "\x1b[0J")]
    #[test_case(EraseMethod::Start, "\x1b[1J")]
    #[test_case(EraseMethod::ALL_MOVE, "\x1b[2J")]
    #[test_case(EraseMethod::AllErase, "\x1b[3J")]
    #[test_case(EraseMethod::AllMoveErase, "\x1b[2J\x1b[3J")]
    fn test_erase_display(method: EraseMethod, expected: &str) {
        assert_eq2!(erase_display(method).to_string(), expected);
    }

    #[test]
    fn test_erase_line() {
        assert_eq2!(erase_line(EraseMethod::All).unwrap(), erase_whole_line());
        assert_eq2!(erase_whole_line().as_str(), "\x1b[2K");
        assert_eq2!(erase_line(EraseMethod::End).unwrap().as_str(), "\x1b[0K");
        assert_eq2!(
            erase_line(EraseMethod::AllErase),
            Err(ColrError::InvalidControlArg {
                value: 3,
                expected: "0, 1, 2"
            })
        );
    }

    #[test]
    fn test_counted_code_defaults_to_one() {
        use strum::IntoEnumIterator;
        for kind in CountedControl::iter() {
            let expected = format!("\x1b[1{}", kind.terminator());
            assert_eq2!(counted_code(kind, None).as_str(), expected);
            assert!(is_escape_code(counted_code(kind, Some(9)).as_str()));
        }
        assert_eq2!(counted_code(CountedControl::MoveColumn, None), move_column(1));
        assert_eq2!(counted_code(CountedControl::ScrollUp, Some(4)), scroll_up(4));
    }

    #[test]
    fn test_erase_method_from_number() {
        assert_eq2!(EraseMethod::try_from(4).unwrap(), EraseMethod::AllMoveErase);
        assert!(matches!(
            EraseMethod::try_from(5),
            Err(ColrError::InvalidControlArg { value: 5, .. })
        ));
    }

    #[test]
    fn test_escape_code_new_and_write() {
        assert_eq2!(EscapeCode::new("\x1b[2K").as_str(), "\x1b[2K");
        assert_eq2!(move_carriage_return().as_str(), "\r");

        let mut buffer = vec![];
        move_up(2).write(&mut buffer).unwrap();
        assert_eq2!(buffer, b"\x1b[2A".to_vec());
    }
}
