//! `-Xannotate`: add or remove annotations on generated code

use super::{NamePattern, register_name_patterns};
use argbind::prelude::*;
use argbind::QualifiedNameError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reason an annotation literal was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("annotation must start with '@': {0}")]
    MissingAt(String),

    #[error("annotation arguments are not closed: {0}")]
    Unclosed(String),

    #[error(transparent)]
    Class(#[from] QualifiedNameError),
}

/// An annotation literal such as `@jakarta.xml.bind.annotation.XmlElement(required = true)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSpec {
    pub class: QualifiedName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl AnnotationSpec {
    pub fn parse(text: &str) -> Result<Self, AnnotationError> {
        let literal = text.trim();
        let body = literal
            .strip_prefix('@')
            .ok_or_else(|| AnnotationError::MissingAt(literal.to_string()))?;
        let (class, arguments) = match body.split_once('(') {
            Some((class, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| AnnotationError::Unclosed(literal.to_string()))?
                    .trim();
                (class, Some(inner.to_string()).filter(|inner| !inner.is_empty()))
            }
            None => (body, None),
        };
        Ok(Self {
            class: QualifiedName::parse(class)?,
            arguments,
        })
    }
}

impl fmt::Display for AnnotationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.class)?;
        if let Some(arguments) = &self.arguments {
            write!(f, "({arguments})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Options, Serialize)]
#[option(name = "Xannotate", description = "Add custom annotations to generated Java artifacts")]
pub struct Annotate {
    #[option(nested, description = "Add annotations to generated classes")]
    pub add_to_class: Vec<AddConfig>,

    #[option(nested, description = "Add annotations to generated fields")]
    pub add_to_field: Vec<AddConfig>,

    #[option(nested, description = "Add annotations to generated methods")]
    pub add_to_method: Vec<AddConfig>,

    #[option(nested, description = "Remove annotations from generated classes")]
    pub remove_from_class: Vec<RemoveConfig>,

    #[option(nested, description = "Remove annotations from generated fields")]
    pub remove_from_field: Vec<RemoveConfig>,

    #[option(nested, description = "Remove annotations from generated methods")]
    pub remove_from_method: Vec<RemoveConfig>,
}

#[derive(Debug, Default, Options, Serialize)]
pub struct AddConfig {
    #[option(
        name = "anno",
        required,
        placeholder = "annotation",
        description = "The annotation to be added"
    )]
    pub annotations: Vec<AnnotationSpec>,

    #[option(
        name = "regex",
        placeholder = "regex",
        description = "The regex pattern to match the target"
    )]
    pub patterns: Vec<NamePattern>,
}

#[derive(Debug, Default, Options, Serialize)]
pub struct RemoveConfig {
    #[option(
        name = "anno",
        required,
        placeholder = "class",
        description = "The annotation class name to be removed"
    )]
    pub annotations: Vec<QualifiedName>,

    #[option(
        name = "regex",
        placeholder = "regex",
        description = "The regex pattern to match the target"
    )]
    pub patterns: Vec<NamePattern>,
}

/// Whether a target name is selected by a pattern list
///
/// No patterns selects every target; otherwise one pattern must match the
/// whole name.
pub fn selects(patterns: &[NamePattern], target: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|pattern| pattern.matches(target))
}

impl AddConfig {
    pub fn applies_to(&self, target: &str) -> bool {
        selects(&self.patterns, target)
    }
}

impl RemoveConfig {
    pub fn applies_to(&self, target: &str) -> bool {
        selects(&self.patterns, target)
    }
}

impl Extension for Annotate {
    fn register_parsers(binder: &mut Binder) {
        binder.register_type(|_, text: &str| AnnotationSpec::parse(text));
        register_name_patterns(binder);
    }
}
