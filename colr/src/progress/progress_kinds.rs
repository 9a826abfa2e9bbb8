// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three kinds of progress indicators, each an [`AnimationWriter`] with its own
//! default format:
//!
//! | Kind                 | Default format            | With `show_time`                   |
//! | :------------------- | :------------------------ | :--------------------------------- |
//! | [`StaticProgress`]   | `{text}`                  | `{elapsed} {text}`                 |
//! | [`AnimatedProgress`] | `{frame} {text}`          | `{frame} {elapsed} {text}`         |
//! | [`ProgressBar`]      | `{bar} {text:<40}`        | `{bar} {elapsed} {text:<40}`       |

use std::time::Duration;

use super::{AnimationWriter, BarSet, FormatPart, FrameRenderer, FrameSet, FrameSource,
            ProgressConfig, ProgressState};
use crate::{ColrResult, OutputDevice};

pub const STATIC_PROGRESS_DELAY: Duration = Duration::from_millis(100);
/// Bars redraw faster, to catch percent updates in time.
pub const PROGRESS_BAR_DELAY: Duration = Duration::from_millis(25);
pub const PROGRESS_BAR_TEXT_WIDTH: usize = 40;
pub const PROGRESS_BAR_DEFAULT_TEXT: &str = "Progress";

fn default_format(show_time: bool, frame: Option<FormatPart>, text: FormatPart) -> Vec<FormatPart> {
    frame
        .into_iter()
        .chain(show_time.then_some(FormatPart::Elapsed))
        .chain(Some(text))
        .collect()
}

fn writer_name(config: &ProgressConfig, kind: &str, set_name: &str) -> String {
    match (config.name.is_empty(), set_name.is_empty()) {
        (false, _) => config.name.clone(),
        (true, true) => kind.to_string(),
        (true, false) => format!("{kind}: {set_name}"),
    }
}

/// Delegates the lifecycle of a progress kind to its [`AnimationWriter`].
macro_rules! impl_writer_lifecycle {
    ($kind:ty) => {
        impl $kind {
            /// # Errors
            ///
            /// See [`AnimationWriter::start`].
            pub fn start(&mut self) -> ColrResult<()> { self.writer.start() }

            /// # Errors
            ///
            /// See [`AnimationWriter::stop`].
            pub async fn stop(&mut self) -> ColrResult<()> { self.writer.stop().await }

            #[must_use]
            pub fn state(&self) -> ProgressState { self.writer.state() }

            #[must_use]
            pub fn writer(&self) -> &AnimationWriter { &self.writer }
        }
    };
}

/// Text that is redrawn in place, with an optional elapsed time.
#[allow(missing_debug_implementations)]
pub struct StaticProgress {
    writer: AnimationWriter,
}

impl StaticProgress {
    #[must_use]
    pub fn new(text: &str, config: ProgressConfig, output_device: OutputDevice) -> Self {
        let format = config.format.clone().unwrap_or_else(|| {
            default_format(config.show_time, None, FormatPart::Text(None))
        });
        let writer = AnimationWriter::new(
            &writer_name(&config, "StaticProgress", ""),
            config.delay.unwrap_or(STATIC_PROGRESS_DELAY),
            config.timeout,
            FrameRenderer::new(FrameSource::None, format),
            text,
            output_device,
        );
        Self { writer }
    }

    pub fn set_text(&self, text: &str) { self.writer.set_text(text); }
}

impl_writer_lifecycle!(StaticProgress);

/// A spinner from a [`FrameSet`] in front of the text.
///
/// ```no_run
/// use r3bl_colr::{AnimatedProgress, FrameRegistry, OutputDevice, ProgressConfig};
///
/// # async fn example() -> r3bl_colr::ColrResult<()> {
/// let frames = FrameRegistry::try_new()?.frame_set("dots_orbit_blue")?;
/// let mut it = AnimatedProgress::new(
///     "Updating the thing.",
///     frames,
///     ProgressConfig::default().with_show_time(true),
///     OutputDevice::new_stdout(),
/// );
/// it.start()?;
/// it.set_text("Calibrating the frob...");
/// it.stop().await?;
/// # Ok(())
/// # }
/// ```
#[allow(missing_debug_implementations)]
pub struct AnimatedProgress {
    writer: AnimationWriter,
}

impl AnimatedProgress {
    /// The delay comes from `config`, then from `frames`.
    #[must_use]
    pub fn new(
        text: &str,
        frames: FrameSet,
        config: ProgressConfig,
        output_device: OutputDevice,
    ) -> Self {
        let format = config.format.clone().unwrap_or_else(|| {
            default_format(config.show_time, Some(FormatPart::Frame), FormatPart::Text(None))
        });
        let writer = AnimationWriter::new(
            &writer_name(&config, "AnimatedProgress", &frames.name),
            config.delay.unwrap_or(frames.delay),
            config.timeout,
            FrameRenderer::new(FrameSource::Cycle(frames), format),
            text,
            output_device,
        );
        Self { writer }
    }

    pub fn set_text(&self, text: &str) { self.writer.set_text(text); }
}

impl_writer_lifecycle!(AnimatedProgress);

/// A bar from a [`BarSet`], filled to the last percent given to [`Self::update`].
#[allow(missing_debug_implementations)]
pub struct ProgressBar {
    writer: AnimationWriter,
}

impl ProgressBar {
    /// `text` defaults to [`PROGRESS_BAR_DEFAULT_TEXT`].
    #[must_use]
    pub fn new(
        text: Option<&str>,
        bars: BarSet,
        config: ProgressConfig,
        output_device: OutputDevice,
    ) -> Self {
        let format = config.format.clone().unwrap_or_else(|| {
            default_format(
                config.show_time,
                Some(FormatPart::Frame),
                FormatPart::Text(Some(PROGRESS_BAR_TEXT_WIDTH)),
            )
        });
        let writer = AnimationWriter::new(
            &writer_name(&config, "ProgressBar", bars.name()),
            config.delay.unwrap_or(PROGRESS_BAR_DELAY),
            config.timeout,
            FrameRenderer::new(FrameSource::Percent(bars), format),
            text.unwrap_or(PROGRESS_BAR_DEFAULT_TEXT),
            output_device,
        );
        Self { writer }
    }

    /// Sets the percent and the text, either of which may be left as is. Does nothing
    /// once the bar is stopped.
    pub fn update(&self, percent: Option<f64>, text: Option<&str>) {
        if self.writer.state() == ProgressState::Stopped {
            return;
        }
        if let Some(percent) = percent {
            self.writer.set_percent(percent);
        }
        if let Some(text) = text {
            self.writer.set_text(text);
        }
    }
}

impl_writer_lifecycle!(ProgressBar);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_formats() {
        assert_eq2!(
            default_format(false, None, FormatPart::Text(None)),
            vec![FormatPart::Text(None)]
        );
        assert_eq2!(
            default_format(true, Some(FormatPart::Frame), FormatPart::Text(Some(40))),
            vec![
                FormatPart::Frame,
                FormatPart::Elapsed,
                FormatPart::Text(Some(40))
            ]
        );
    }

    #[test]
    fn test_names_and_delays() {
        let frames = FrameSet::from_chars("ab", "ab", Some(Duration::from_millis(7))).unwrap();
        let it = AnimatedProgress::new(
            "",
            frames.clone(),
            ProgressConfig::default(),
            OutputDevice::new_mock().0,
        );
        assert_eq2!(it.writer().name, "AnimatedProgress: ab");
        assert_eq2!(it.writer().delay, Duration::from_millis(7));

        let it = AnimatedProgress::new(
            "",
            frames,
            ProgressConfig::default()
                .with_name("mine")
                .with_delay(Duration::from_millis(3)),
            OutputDevice::new_mock().0,
        );
        assert_eq2!(it.writer().name, "mine");
        assert_eq2!(it.writer().delay, Duration::from_millis(3));

        let it = StaticProgress::new("", ProgressConfig::default(), OutputDevice::new_mock().0);
        assert_eq2!(it.writer().name, "StaticProgress");
        assert_eq2!(it.writer().delay, STATIC_PROGRESS_DELAY);
    }

    #[tokio::test]
    async fn test_static_progress() {
        let (device, mock) = OutputDevice::new_mock();
        let mut it = StaticProgress::new(
            "loading",
            ProgressConfig::default()
                .with_show_time(true)
                .with_delay(Duration::from_millis(5)),
            device,
        );
        it.start().unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        it.stop().await.unwrap();
        assert!(mock.get_copy_of_buffer_as_string_strip_ansi().contains(" 0s loading"));
        assert_eq2!(it.state(), ProgressState::Stopped);
    }

    #[tokio::test]
    async fn test_progress_bar_updates() {
        let (device, mock) = OutputDevice::new_mock();
        let bars = BarSet::from_str("####", "hash", Some("."), None).unwrap();
        let mut it = ProgressBar::new(
            None,
            bars,
            ProgressConfig::default().with_delay(Duration::from_millis(5)),
            device,
        );
        it.start().unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        it.update(Some(50.0), Some("halfway"));
        tokio::time::sleep(Duration::from_millis(20)).await;
        it.stop().await.unwrap();

        let output = mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains(&format!("[#...] {PROGRESS_BAR_DEFAULT_TEXT:<40}")));
        assert!(output.contains(&format!("[###.] {:<40}", "halfway")));

        // Updates after stopping are ignored.
        it.update(Some(100.0), None);
        assert!((it.writer().percent() - 50.0).abs() < f64::EPSILON);
    }
}
