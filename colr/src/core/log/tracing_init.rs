// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use crate::ok;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set can't be unset or changed. This is meant
/// for apps. Logging stays disabled unless this (or the thread local variant) is called
/// with a level other than [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is
/// already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    tracing_subscriber::registry()
        .with(try_create_layers(&it)?)
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, active until the returned guard is dropped. This is meant
/// for tests, where each test can log somewhere else.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let subscriber = tracing_subscriber::registry().with(try_create_layers(&it)?);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// Returns the layers without installing them.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![Box::new(level_filter)];

    if let Some(layer) = try_create_display_layer(level_filter, tracing_config.get_writer_config())
    {
        acc.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, tracing_config.get_writer_config())? {
        acc.push(layer);
    }

    Ok(acc)
}

/// Erases the concrete type of the writer, so layers can be composed at runtime.
#[must_use]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _) | WriterConfig::Display(display_pref) => {
            match display_pref {
                DisplayPreference::Stdout => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stdout)
                        .with_filter(level_filter),
                )),
                DisplayPreference::Stderr => Some(Box::new(
                    fmt_layer
                        .with_writer(std::io::stderr)
                        .with_filter(level_filter),
                )),
                DisplayPreference::SharedWriter(output_device) => {
                    // Log lines carry no color when they may land in a mock.
                    let is_mock = output_device.is_mock;
                    let tracing_writer = move || output_device.clone();
                    Some(Box::new(
                        fmt_layer
                            .with_ansi(!is_mock)
                            .with_writer(tracing_writer)
                            .with_filter(level_filter),
                    ))
                }
            }
        }
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
