// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A background task that redraws one line of text at a fixed cadence while the caller
//! carries on with its work.
//!
//! ```text
//! Created ──start()──► Running ──stop()──► Stopping ──clearing render──► Stopped
//!                         │                                                 ▲
//!                         └──────────── timeout (error kept) ───────────────┘
//! ```
//!
//! The foreground and the render task share:
//! - a [`watch`] channel for the latest text and percent. Updates that arrive between
//!   two frames collapse into the last one.
//! - a [`watch`] channel for the elapsed time.
//! - a [`broadcast`] channel to ask the task to stop, and a [`oneshot`] channel for the
//!   task to say it has stopped.
//! - an [`AtomicU8`] for the [`ProgressState`] and an error slot for a failure in the
//!   task, like [`ColrError::ProgressTimedOut`].
//!
//! Every frame is written with a single lock of the [`OutputDevice`], so a frame and the
//! final clearing render never interleave.

use std::{sync::{Arc, PoisonError, atomic::AtomicU8},
          time::Duration};

use tokio::{sync::{broadcast, oneshot, watch},
            time::Instant};

use super::{BarSet, FrameSet};
use crate::{AtomicU8Ext, CLOSING_CODE, ColrError, ColrResult, Control, OutputDevice,
            StdMutex, ok};

/// Time taken off every delay, for the render itself.
pub const NICE_DELAY: Duration = Duration::from_millis(1);

/// Joins the rendered [`FormatPart`]s.
pub const JOIN_STR: &str = " ";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ProgressState {
    Created = 0,
    Running = 1,
    Stopping = 2,
    Stopped = 3,
}

impl From<u8> for ProgressState {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Created,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

/// One piece of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatPart {
    /// The current frame, or the bar for the current percent.
    Frame,
    /// Whole seconds since the start, as `{secs:>2}s`.
    Elapsed,
    /// The text, left justified to a width if one is given.
    Text(Option<usize>),
    Literal(String),
}

/// What goes in the [`FormatPart::Frame`] slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameSource {
    None,
    /// Cycles through the frames, one per render.
    Cycle(FrameSet),
    /// Picks the bar for the current percent.
    Percent(BarSet),
}

/// The values the foreground can change while the animation runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressUpdate {
    pub text: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressConfig {
    /// Shown in logs and in [`ColrError::ProgressTimedOut`].
    pub name: String,
    /// Time between frames. Falls back to the frame set's delay, then to the default of
    /// the progress kind.
    pub delay: Option<Duration>,
    /// Stops the animation with [`ColrError::ProgressTimedOut`] once this much time has
    /// passed.
    pub timeout: Option<Duration>,
    /// Adds [`FormatPart::Elapsed`] to the default format.
    pub show_time: bool,
    /// Replaces the default format of the progress kind.
    pub format: Option<Vec<FormatPart>>,
}

impl ProgressConfig {
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_show_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Vec<FormatPart>) -> Self {
        self.format = Some(format);
        self
    }
}

/// The data a single render needs, owned by the render task.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRenderer {
    pub source: FrameSource,
    pub format: Vec<FormatPart>,
    frame_index: usize,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(source: FrameSource, format: Vec<FormatPart>) -> Self {
        Self {
            source,
            format,
            frame_index: 0,
        }
    }

    /// Renders the line for the current frame, without any control codes.
    #[must_use]
    pub fn render(&self, update: &ProgressUpdate, elapsed: Duration) -> String {
        let frame = match &self.source {
            FrameSource::None => String::new(),
            FrameSource::Cycle(frames) => frames.frame(self.frame_index).to_string(),
            FrameSource::Percent(bars) => bars.as_percent(update.percent),
        };
        self.format
            .iter()
            .map(|part| match part {
                FormatPart::Frame => frame.clone(),
                FormatPart::Elapsed => format_elapsed(elapsed),
                FormatPart::Text(None) => update.text.clone(),
                FormatPart::Text(Some(width)) => format!("{:<width$}", update.text),
                FormatPart::Literal(it) => it.clone(),
            })
            .collect::<Vec<_>>()
            .join(JOIN_STR)
    }

    /// Moves to the next frame, wrapping around at the end.
    pub fn advance(&mut self) {
        if let FrameSource::Cycle(frames) = &self.source {
            self.frame_index = (self.frame_index + 1) % frames.len();
        }
    }

    #[must_use]
    pub fn frame_index(&self) -> usize { self.frame_index }
}

#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let secs = elapsed.as_secs_f64().round() as u64;
    format!("{secs:>2}s")
}

/// Runs a [`FrameRenderer`] on a tokio task. Must be started from within a tokio
/// runtime. Call [`Self::stop`] when done, nothing stops it on drop.
#[allow(missing_debug_implementations)]
pub struct AnimationWriter {
    pub name: String,
    pub delay: Duration,
    pub timeout: Option<Duration>,
    pub output_device: OutputDevice,
    renderer: Option<FrameRenderer>,
    state: Arc<AtomicU8>,
    update_sender: watch::Sender<ProgressUpdate>,
    elapsed_receiver: watch::Receiver<Duration>,
    elapsed_sender: Option<watch::Sender<Duration>>,
    shutdown_sender: broadcast::Sender<()>,
    error_slot: Arc<StdMutex<Option<ColrError>>>,
    maybe_shutdown_complete_rx: Option<oneshot::Receiver<()>>,
}

impl AnimationWriter {
    #[must_use]
    pub fn new(
        name: &str,
        delay: Duration,
        timeout: Option<Duration>,
        renderer: FrameRenderer,
        text: &str,
        output_device: OutputDevice,
    ) -> Self {
        let (update_sender, _) = watch::channel(ProgressUpdate {
            text: text.to_string(),
            percent: 0.0,
        });
        let (elapsed_sender, elapsed_receiver) = watch::channel(Duration::ZERO);
        let (shutdown_sender, _) = broadcast::channel::<()>(1);
        Self {
            name: name.to_string(),
            delay,
            timeout,
            output_device,
            renderer: Some(renderer),
            state: Arc::new(AtomicU8::new(ProgressState::Created as u8)),
            update_sender,
            elapsed_receiver,
            elapsed_sender: Some(elapsed_sender),
            shutdown_sender,
            error_slot: Arc::new(StdMutex::new(None)),
            maybe_shutdown_complete_rx: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> ProgressState { self.state.get().into() }

    #[must_use]
    pub fn elapsed(&self) -> Duration { *self.elapsed_receiver.borrow() }

    #[must_use]
    pub fn text(&self) -> String { self.update_sender.borrow().text.clone() }

    #[must_use]
    pub fn percent(&self) -> f64 { self.update_sender.borrow().percent }

    /// Replaces the text. Never blocks, and the render task only sees the latest text.
    pub fn set_text(&self, text: &str) {
        self.update_sender.send_modify(|it| text.clone_into(&mut it.text));
    }

    pub fn set_percent(&self, percent: f64) {
        self.update_sender.send_modify(|it| it.percent = percent);
    }

    /// A copy of the error the render task stopped with, if any.
    #[must_use]
    pub fn error(&self) -> Option<ColrError> {
        self.error_slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Hides the cursor and spawns the render task. Does nothing unless the state is
    /// [`ProgressState::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::OutputFailed`] if the cursor can't be hidden.
    pub fn start(&mut self) -> ColrResult<()> {
        if !self
            .state
            .transition(ProgressState::Created as u8, ProgressState::Running as u8)
        {
            return ok!();
        }
        let (Some(mut renderer), Some(elapsed_sender)) =
            (self.renderer.take(), self.elapsed_sender.take())
        else {
            return ok!();
        };

        write_or_error(&self.output_device, &Control::default().cursor_hide().data)?;
        tracing::debug!(name = %self.name, delay = ?self.delay, "animation started");

        let (shutdown_complete_sender, shutdown_complete_receiver) = oneshot::channel::<()>();
        self.maybe_shutdown_complete_rx = Some(shutdown_complete_receiver);

        // These are all moved into the spawn block.
        let mut shutdown_receiver = self.shutdown_sender.subscribe();
        let update_receiver = self.update_sender.subscribe();
        let output_device = self.output_device.clone();
        let state = self.state.clone();
        let error_slot = self.error_slot.clone();
        let name = self.name.clone();
        let timeout = self.timeout;
        let sleep_for = self.delay.saturating_sub(NICE_DELAY);

        tokio::spawn(async move {
            let start = Instant::now();

            loop {
                if state.get() != ProgressState::Running as u8 {
                    break;
                }

                let elapsed = start.elapsed();
                elapsed_sender.send_replace(elapsed);
                let update = update_receiver.borrow().clone();

                if timeout.is_some_and(|it| elapsed > it) {
                    tracing::warn!(name = %name, ?elapsed, "animation timed out");
                    set_error(
                        &error_slot,
                        ColrError::ProgressTimedOut {
                            name: name.clone(),
                            elapsed,
                            message: Some(update.text).filter(|it| !it.is_empty()),
                        },
                    );
                    break;
                }

                let frame = Control::default()
                    .move_column(1)
                    .pos_save()
                    .erase_whole_line()
                    .text(&renderer.render(&update, elapsed));
                if let Err(err) = write_or_error(&output_device, &frame.data) {
                    set_error(&error_slot, err);
                    break;
                }
                renderer.advance();

                tokio::select! {
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => break,
                    () = tokio::time::sleep(sleep_for) => {}
                }
            }

            state.set(ProgressState::Stopping as u8);
            let clear = Control::new(CLOSING_CODE)
                .pos_restore()
                .move_column(1)
                .erase_whole_line()
                .cursor_show();
            if let Err(err) = write_or_error(&output_device, &clear.data) {
                set_error(&error_slot, err);
            }
            state.set(ProgressState::Stopped as u8);
            tracing::debug!(name = %name, "animation stopped");

            // It's okay if this fails, it just means the receiver was dropped.
            shutdown_complete_sender.send(()).ok();
        });

        ok!()
    }

    /// Asks the render task to stop and waits for its clearing render. Calling this on a
    /// stopped writer does nothing but report a stored error.
    ///
    /// # Errors
    ///
    /// Returns the error the render task stopped with, like
    /// [`ColrError::ProgressTimedOut`]. It is only returned once.
    pub async fn stop(&mut self) -> ColrResult<()> {
        // A writer that never started has nothing on screen to clear.
        if self
            .state
            .transition(ProgressState::Created as u8, ProgressState::Stopped as u8)
        {
            return ok!();
        }

        if self
            .state
            .transition(ProgressState::Running as u8, ProgressState::Stopping as u8)
        {
            // It's okay if this fails, it means the task already finished.
            self.shutdown_sender.send(()).ok();
        }

        if let Some(shutdown_complete_rx) = self.maybe_shutdown_complete_rx.take() {
            // It's okay if this fails, it means the task is gone.
            shutdown_complete_rx.await.ok();
        }

        match self
            .error_slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            Some(err) => Err(err),
            None => ok!(),
        }
    }
}

fn set_error(error_slot: &StdMutex<Option<ColrError>>, err: ColrError) {
    *error_slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(err);
}

fn write_or_error(output_device: &OutputDevice, text: &str) -> ColrResult<()> {
    output_device
        .write_flush(text)
        .map_err(|err| ColrError::OutputFailed {
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, cursor_hide, cursor_show, erase_whole_line};

    fn abc_writer(
        delay: Duration,
        timeout: Option<Duration>,
    ) -> (AnimationWriter, crate::StdoutMock) {
        let (device, mock) = OutputDevice::new_mock();
        let renderer = FrameRenderer::new(
            FrameSource::Cycle(FrameSet::from_chars("abc", "abc", None).unwrap()),
            vec![FormatPart::Frame, FormatPart::Text(None)],
        );
        let it = AnimationWriter::new("abc", delay, timeout, renderer, "working", device);
        (it, mock)
    }

    #[test]
    fn test_render_parts() {
        let mut renderer = FrameRenderer::new(
            FrameSource::Cycle(FrameSet::from_chars("ab", "ab", None).unwrap()),
            vec![
                FormatPart::Frame,
                FormatPart::Elapsed,
                FormatPart::Text(Some(6)),
                FormatPart::Literal("|".into()),
            ],
        );
        let update = ProgressUpdate {
            text: "hi".into(),
            percent: 0.0,
        };
        assert_eq2!(
            renderer.render(&update, Duration::from_millis(2600)),
            "a  3s hi     |"
        );
        renderer.advance();
        renderer.advance();
        renderer.advance();
        assert_eq2!(renderer.frame_index(), 1);
        assert!(renderer.render(&update, Duration::ZERO).starts_with("b  0s"));
    }

    #[test]
    fn test_render_percent() {
        let bars = BarSet::from_str("####", "hash", None, None).unwrap();
        let renderer = FrameRenderer::new(FrameSource::Percent(bars), vec![FormatPart::Frame]);
        let update = ProgressUpdate {
            text: String::new(),
            percent: 50.0,
        };
        assert_eq2!(renderer.render(&update, Duration::ZERO), "[### ]");
    }

    #[tokio::test]
    async fn test_start_then_stop() {
        let (mut it, mock) = abc_writer(Duration::from_millis(100), None);
        assert_eq2!(it.state(), ProgressState::Created);

        it.start().unwrap();
        assert_eq2!(it.state(), ProgressState::Running);
        it.stop().await.unwrap();
        assert_eq2!(it.state(), ProgressState::Stopped);

        let output = mock.get_copy_of_buffer_as_string();
        assert!(output.starts_with(cursor_hide().as_str()));
        let expected_end = format!("{}{}", erase_whole_line().as_str(), cursor_show().as_str());
        assert!(output.ends_with(&expected_end));

        // Stopping again does nothing.
        it.stop().await.unwrap();
        assert_eq2!(mock.get_copy_of_buffer_as_string(), output);
    }

    #[tokio::test]
    async fn test_frames_cycle_and_text_updates() {
        let (mut it, mock) = abc_writer(Duration::from_millis(10), None);
        it.start().unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        it.set_text("almost");
        assert_eq2!(it.text(), "almost");
        tokio::time::sleep(Duration::from_millis(60)).await;
        it.stop().await.unwrap();

        let output = mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains("a working"));
        assert!(output.contains("b working"));
        assert!(output.contains("c working"));
        assert!(output.contains(" almost"));
        assert!(it.elapsed() > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let (mut it, _mock) =
            abc_writer(Duration::from_millis(5), Some(Duration::from_millis(20)));
        it.start().unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq2!(it.state(), ProgressState::Stopped);
        assert!(matches!(
            it.error(),
            Some(ColrError::ProgressTimedOut { .. })
        ));
        let Err(ColrError::ProgressTimedOut { name, message, .. }) = it.stop().await else {
            panic!("expected a timeout");
        };
        assert_eq2!(name, "abc");
        assert_eq2!(message, Some("working".to_string()));
        assert!(it.stop().await.is_ok());
    }

    #[tokio::test]
    async fn test_stop_before_start() {
        let (mut it, mock) = abc_writer(Duration::from_millis(5), None);
        it.stop().await.unwrap();
        assert_eq2!(it.state(), ProgressState::Stopped);
        it.start().unwrap();
        assert_eq2!(it.state(), ProgressState::Stopped);
        assert_eq2!(mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq2!(format_elapsed(Duration::from_millis(400)), " 0s");
        assert_eq2!(format_elapsed(Duration::from_secs(42)), "42s");
    }
}
