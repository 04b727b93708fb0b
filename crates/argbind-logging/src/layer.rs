//! Subscriber construction and global installation

use crate::{LoggingError, ReloadHandle};
use argbind_core::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Convert a [`LogLevel`] to the equivalent tracing filter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Build a subscriber writing formatted events to `writer`
///
/// The level filter sits behind a reload layer; the returned handle changes it.
pub fn subscriber<W>(
    level: LogLevel,
    writer: W,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<LevelFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(level_filter(level));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);
    (tracing_subscriber::registry().with(filter).with(fmt), handle)
}

/// Install the global subscriber, logging to stderr at `level`
///
/// Call once at startup; the level can be changed later through
/// [`ReloadHandle::global`].
pub fn init_logging(level: LogLevel) -> Result<(), LoggingError> {
    let (subscriber, handle) = subscriber(level, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)?;
    ReloadHandle::global().set_handle(handle);
    tracing::debug!(%level, "logging initialized");
    Ok(())
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
