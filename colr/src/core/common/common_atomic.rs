// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension trait for [`AtomicU8`] with ergonomic methods for common operations. The
//! [`AnimationWriter`] keeps its lifecycle state in one of these, so the foreground can
//! read it without taking a lock.
//!
//! [`AnimationWriter`]: crate::AnimationWriter

use std::sync::atomic::{AtomicU8, Ordering};

/// Ergonomic helpers for [`AtomicU8`] that hide [`SeqCst`] boilerplate.
///
/// [`SeqCst`]: Ordering::SeqCst
pub trait AtomicU8Ext {
    /// Reads the current value.
    fn get(&self) -> u8;

    /// Writes `value`.
    fn set(&self, value: u8);

    /// Writes `new` only if the stored value is `current`. Returns `true` if the write
    /// happened.
    fn transition(&self, current: u8, new: u8) -> bool;
}

impl AtomicU8Ext for AtomicU8 {
    fn get(&self) -> u8 { self.load(Ordering::SeqCst) }

    fn set(&self, value: u8) { self.store(value, Ordering::SeqCst) }

    fn transition(&self, current: u8, new: u8) -> bool {
        self.compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}
