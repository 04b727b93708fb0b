//! # argbind
//!
//! Declarative command-line option binding for code-generator extensions.
//!
//! Describe a configuration once as plain structs and argbind turns a flat
//! run of host arguments into that typed graph:
//! - Bare flags, single values and repeatable options
//! - Nested configuration objects, repeated by re-stating their flag
//! - Defaults and required options checked after binding
//! - Custom text parsers per value type or per option name
//! - Aligned usage text generated from the same declarations
//!
//! ## Declaring an Extension
//!
//! ```ignore
//! use argbind::prelude::*;
//!
//! #[derive(Debug, Default, Options)]
//! #[option(name = "Xnamespace", description = "Map XML namespaces to prefixes")]
//! pub struct NamespaceConfig {
//!     #[option(nested, required, description = "Namespace mapping")]
//!     pub mapping: Vec<Mapping>,
//! }
//!
//! #[derive(Debug, Default, Options)]
//! pub struct Mapping {
//!     #[option(required, description = "Namespace URI")]
//!     pub ns: Option<String>,
//!     #[option(description = "Preferred prefix")]
//!     pub prefix: Option<String>,
//! }
//!
//! impl Extension for NamespaceConfig {}
//!
//! let mut plugin = OptionPlugin::<NamespaceConfig>::new()?;
//! let args: Vec<String> = std::env::args().collect();
//! let consumed = plugin.parse_argument(&args, 1)?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`argbind_core`] - Binding engine, descriptors, parsers and usage text
//! - [`argbind_macros`] - The `Options` derive macro
//!
//! Generated code refers to `::argbind_core`, so extension crates depend on
//! `argbind-core` alongside this crate.

// Re-export core types
pub use argbind_core::{
    BindError, BindResult, Binder, BoxError, CollectionKind, DEFAULT_DELIMITER, DEFAULT_PREFIX,
    Element, Extension, FieldInfo, LogLevel, OptionDescriptor, OptionField, OptionPlugin, Options,
    ParserRegistry, Plugin, PluginError, PluginResult, QualifiedName, QualifiedNameError,
    Repeated, Shape, TypeKey, describe, render_usage, type_placeholder, usage,
};

// Re-export the derive macro
pub use argbind_macros::Options;

// Re-export common dependencies that extension authors need
pub use regex;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use argbind::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Core traits: `Options` (trait and derive), `Extension`, `Plugin`
/// - Core types: `Binder`, `OptionDescriptor`, `OptionPlugin`, `QualifiedName`
/// - Errors: `BindError`, `BindResult`, `PluginError`, `PluginResult`
pub mod prelude {
    pub use crate::{
        BindError, BindResult, Binder, BoxError, Extension, OptionDescriptor, OptionField,
        OptionPlugin, Options, Plugin, PluginError, PluginResult, QualifiedName,
    };
}
