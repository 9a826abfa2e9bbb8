// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small stack allocated collections. Most escape codes, frame glyphs, and segment
//! lists are short, so they stay on the stack until they outgrow these sizes.

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: Escape codes are at most ~20 bytes (`\x1b[38;2;255;255;255m`), keep this small.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// Short-hand for [`std::sync::Mutex`] so it does not clash with [`tokio::sync::Mutex`].
pub type StdMutex<T> = std::sync::Mutex<T>;
