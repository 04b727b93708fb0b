//! argbind-core - Declarative option binding for code-generator extensions
//!
//! This crate turns a flat sequence of command-line tokens into a typed,
//! arbitrarily nested configuration graph, driven purely by per-field metadata:
//! - [`OptionDescriptor`] metadata for one bindable field
//! - [`Options`] trait exposing a type's fields and zero-argument constructor
//! - [`ParserRegistry`] text-to-value conversion keyed by option name or type
//! - [`Repeated`] collection builder for repeatable options
//! - [`Binder`] the recursive matcher plus default/required validation
//! - [`usage`] aligned usage text rendering
//! - [`Plugin`] / [`OptionPlugin`] host-facing extension surface

mod collection;
mod descriptor;
mod engine;
mod error;
mod field;
mod matcher;
mod plugin;
mod qualified;
mod registry;
mod usage;
mod validate;

pub use collection::{CollectionKind, Repeated};
pub use descriptor::{
    DEFAULT_DELIMITER, DEFAULT_PREFIX, Element, OptionDescriptor, Shape, TypeKey,
    type_placeholder,
};
pub use engine::Binder;
pub use error::{BindError, BindResult, BoxError, PluginError, PluginResult};
pub use field::{FieldInfo, OptionField, Options, describe};
pub use plugin::{Extension, OptionPlugin, Plugin};
pub use qualified::{QualifiedName, QualifiedNameError};
pub use registry::ParserRegistry;
pub use usage::{render_usage, usage};

/// Log levels shared by the logging bridge and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BindError, BindResult, Binder, Extension, OptionDescriptor, OptionField, OptionPlugin,
        Options, ParserRegistry, Plugin, PluginError, PluginResult, QualifiedName,
    };
}
