// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The text argument of [`crate::colorize`] and the [`crate::Colr`] append methods.
//!
//! Absent text and `""` are empty. Everything else that is passed in explicitly is
//! rendered with [`Display`](std::fmt::Display), so `0` and `false` become `"0"` and
//! `"false"`, and they are not empty. They get a closing code like any other text.

use crate::Colr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColrText {
    #[default]
    Absent,
    Present(String),
}

impl ColrText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absent => "",
            Self::Present(it) => it,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.as_str().is_empty() }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Present(it) => it,
        }
    }
}

impl From<()> for ColrText {
    fn from((): ()) -> Self { Self::Absent }
}

impl From<&str> for ColrText {
    fn from(it: &str) -> Self { Self::Present(it.to_string()) }
}

impl From<String> for ColrText {
    fn from(it: String) -> Self { Self::Present(it) }
}

impl From<&String> for ColrText {
    fn from(it: &String) -> Self { Self::Present(it.clone()) }
}

impl From<char> for ColrText {
    fn from(it: char) -> Self { Self::Present(it.to_string()) }
}

impl From<bool> for ColrText {
    fn from(it: bool) -> Self { Self::Present(it.to_string()) }
}

impl From<Colr> for ColrText {
    fn from(it: Colr) -> Self { Self::Present(it.data) }
}

impl From<&Colr> for ColrText {
    fn from(it: &Colr) -> Self { Self::Present(it.data.clone()) }
}

impl<T: Into<ColrText>> From<Option<T>> for ColrText {
    fn from(it: Option<T>) -> Self { it.map_or(Self::Absent, Into::into) }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ColrText {
                fn from(it: $ty) -> Self { Self::Present(it.to_string()) }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
