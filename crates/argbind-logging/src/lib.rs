//! argbind-logging - Tracing subscriber setup for argbind hosts
//!
//! This crate provides:
//! - [`init_logging`] global subscriber writing formatted events to stderr
//! - [`ReloadHandle`] runtime log level changes
//! - [`LoggingError`] setup and reload failures

mod layer;
mod reload;

pub use argbind_core::LogLevel;
pub use layer::{init_logging, level_filter, subscriber};
pub use reload::{LoggingError, ReloadHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, LoggingError, ReloadHandle, init_logging};
}
