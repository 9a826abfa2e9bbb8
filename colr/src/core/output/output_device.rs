// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use super::StdoutMock;
use crate::StdMutex;

pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Locks the output device and hands back a `&mut dyn Write`. Don't call this twice in
/// the same scope, it will deadlock. Use it in its own block scope instead.
///
/// ```
/// use r3bl_colr::{lock_output_device_as_mut, LockedOutputDevice, OutputDevice};
/// let device = OutputDevice::new_stdout();
/// {
///     let it: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = it.write_all(b"hello\n");
/// }
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where styled text and animation frames are written. Cheap to clone, every clone
/// writes to the same underlying resource.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// Returns the device and a handle to read back what was written to it.
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let mock = StdoutMock::default();
        let it = Self {
            resource: Arc::new(StdMutex::new(mock.clone())),
            is_mock: true,
        };
        (it, mock)
    }

    /// A writer that panicked mid write leaves nothing worth protecting, so a poisoned
    /// lock is recovered instead of propagated.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes `text` and flushes, so partial lines show up right away.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`std::io::Error`] if the write or flush fails.
    pub fn write_flush(&self, text: &str) -> std::io::Result<()> {
        let it = lock_output_device_as_mut!(self);
        it.write_all(text.as_bytes())?;
        it.flush()
    }
}

/// Each call takes the lock on its own, which lets tracing layers share the device with
/// the code that draws frames.
impl std::io::Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.lock().write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.lock().flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        let it: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        drop(it.flush());
        assert!(!device.is_mock);
    }

    #[test]
    fn test_mock_output_device() {
        let (device, mock) = OutputDevice::new_mock();
        let clone = device.clone();
        device.write_flush("\x1b[31mred\x1b[0m ").unwrap();
        clone.write_flush("text").unwrap();

        assert!(device.is_mock);
        assert_eq2!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[31mred\x1b[0m text"
        );
        assert_eq2!(mock.get_copy_of_buffer_as_string_strip_ansi(), "red text");
    }
}
