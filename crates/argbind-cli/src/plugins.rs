//! Bundled demo extensions
//!
//! Configuration surfaces of a family of schema-to-code generator plugins.
//! Each one binds its own root option and reports what it bound; none of
//! them generates code.

use crate::host::HostedPlugin;
use argbind::prelude::*;
use regex::Regex;
use serde::{Serialize, Serializer};

pub mod annotate;
pub mod disable;
pub mod jsr310;
pub mod name_convert;
pub mod namespace;

pub use annotate::{AddConfig, Annotate, AnnotationError, AnnotationSpec, RemoveConfig};
pub use disable::{DisableGetters, DisableSetters};
pub use jsr310::{FieldConfig, Jsr310, TypeConfig};
pub use name_convert::{NameConvert, NameKind, NameMapping};
pub use namespace::{Namespace, NamespaceError, NamespaceMapping};

/// Every bundled extension, in the order the host offers tokens to them
pub fn builtin() -> PluginResult<Vec<Box<dyn HostedPlugin>>> {
    let plugins: Vec<Box<dyn HostedPlugin>> = vec![
        Box::new(OptionPlugin::<Namespace>::new()?),
        Box::new(OptionPlugin::<NameConvert>::new()?),
        Box::new(OptionPlugin::<Jsr310>::new()?),
        Box::new(OptionPlugin::<Annotate>::new()?),
        Box::new(OptionPlugin::<DisableGetters>::new()?),
        Box::new(DisableSetters::default()),
    ];
    Ok(plugins)
}

/// Regex that must match a whole target name
///
/// Anchored once when bound; serializes as the pattern the user wrote.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    anchored: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            source: pattern.to_string(),
            anchored: Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        self.anchored.is_match(name)
    }
}

impl Serialize for NamePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Register the [`NamePattern`] parser on an extension's binder
pub(crate) fn register_name_patterns(binder: &mut Binder) {
    binder.register_type(|_, text: &str| NamePattern::new(text));
}

/// Serialize an optional pattern as its source text
pub(crate) fn serialize_regex<S: Serializer>(
    regex: &Option<Regex>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match regex {
        Some(regex) => serializer.serialize_some(regex.as_str()),
        None => serializer.serialize_none(),
    }
}
