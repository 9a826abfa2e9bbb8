// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that configures logging converts into a [`TracingConfig`], so the init
//! functions in [`super::tracing_init`] take a single `impl Into<TracingConfig>`:
//!
//! ```no_run
//! use r3bl_colr::{DisplayPreference, TracingConfig, WriterConfig,
//!                 try_initialize_logging_global};
//!
//! let level: TracingConfig = tracing::Level::DEBUG.into();
//! let display: TracingConfig = DisplayPreference::Stderr.into();
//! let file: TracingConfig = WriterConfig::File("colr.log".to_string()).into();
//!
//! try_initialize_logging_global(level + display + file).unwrap();
//! ```

use std::{fmt::Debug, ops::Add};

use tracing_core::LevelFilter;

use crate::OutputDevice;

pub const DEFAULT_LOG_FILE_NAME: &str = "colr_log.txt";

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* Log file path. */),
    DisplayAndFile(DisplayPreference, String /* Log file path. */),
}

#[derive(Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    /// Shares the device frames are drawn on, so log lines and animations don't tear
    /// each other. A mock device captures logs in tests.
    SharedWriter(OutputDevice),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::SharedWriter(_) => write!(f, "SharedWriter"),
        }
    }
}

/// Shared writers are equal when they point at the same resource.
impl PartialEq for DisplayPreference {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DisplayPreference::Stdout, DisplayPreference::Stdout)
            | (DisplayPreference::Stderr, DisplayPreference::Stderr) => true,
            (DisplayPreference::SharedWriter(lhs), DisplayPreference::SharedWriter(rhs)) => {
                std::sync::Arc::ptr_eq(&lhs.resource, &rhs.resource)
            }
            _ => false,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            level_filter,
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            level_filter: LevelFilter::DEBUG,
        }
    }
}

/// The more verbose level wins, writers merge with [`WriterConfig`]'s `+`.
impl Add for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// `rhs` wins a collision, since it is the more specific setting. A display and a file
/// on opposite sides combine into [`WriterConfig::DisplayAndFile`].
impl Add for WriterConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display), File(file)) | (File(file), Display(display)) => {
                DisplayAndFile(display, file)
            }
            (Display(_) | File(_) | DisplayAndFile(..), it @ DisplayAndFile(..))
            | (Display(_), it @ Display(_))
            | (File(_), it @ File(_)) => it,
            (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (DisplayAndFile(display, _), File(file)) => DisplayAndFile(display, file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let (device, _) = OutputDevice::new_mock();
        let shared = DisplayPreference::SharedWriter(device);
        let file = || WriterConfig::File("a.log".to_string());
        let stdout = || WriterConfig::Display(DisplayPreference::Stdout);

        assert_eq2!(WriterConfig::None + file(), file());
        assert_eq2!(stdout() + WriterConfig::None, stdout());
        assert_eq2!(
            file() + stdout(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.log".to_string())
        );
        assert_eq2!(
            stdout() + WriterConfig::Display(shared.clone()),
            WriterConfig::Display(shared.clone())
        );
        assert_eq2!(
            WriterConfig::DisplayAndFile(shared.clone(), "a.log".to_string())
                + WriterConfig::File("b.log".to_string()),
            WriterConfig::DisplayAndFile(shared, "b.log".to_string())
        );
    }

    #[test]
    fn test_add_tracing_configs() {
        let it = TracingConfig::from(tracing::Level::WARN)
            + TracingConfig::from(LevelFilter::TRACE)
            + DisplayPreference::Stderr.into();
        assert_eq2!(it.get_level_filter(), LevelFilter::TRACE);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }

    #[test]
    fn test_shared_writers_compare_by_resource() {
        let (device, _) = OutputDevice::new_mock();
        let lhs = DisplayPreference::SharedWriter(device.clone());
        assert_eq2!(lhs.clone(), DisplayPreference::SharedWriter(device));
        assert!(lhs != DisplayPreference::SharedWriter(OutputDevice::new_mock().0));
    }
}
