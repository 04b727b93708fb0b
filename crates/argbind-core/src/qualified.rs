//! Qualified type names used as class references

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a class reference was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QualifiedNameError {
    #[error("class name cannot be empty")]
    Empty,

    #[error("class name mixes '.' and '::' separators: {0}")]
    MixedSeparators(String),

    #[error("invalid segment '{segment}' in class name {name}")]
    InvalidSegment { name: String, segment: String },
}

/// A class reference looked up by its qualified name
///
/// Segments are identifiers separated by `.` (`java.time.LocalDate`) or `::`
/// (`chrono::NaiveDate`); `$` is accepted inside identifiers for nested types.
///
/// # Example
///
/// ```
/// use argbind_core::QualifiedName;
///
/// let name = QualifiedName::parse("java.time.LocalDate").unwrap();
/// assert_eq!(name.simple_name(), "LocalDate");
/// assert_eq!(name.namespace(), Some("java.time"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Parse and validate a qualified name, ignoring surrounding whitespace
    pub fn parse(text: &str) -> Result<Self, QualifiedNameError> {
        let name = text.trim();
        if name.is_empty() {
            return Err(QualifiedNameError::Empty);
        }
        let uses_path = name.contains("::");
        if uses_path && name.contains('.') {
            return Err(QualifiedNameError::MixedSeparators(name.to_string()));
        }
        let separator = if uses_path { "::" } else { "." };
        for segment in name.split(separator) {
            if !is_identifier(segment) {
                return Err(QualifiedNameError::InvalidSegment {
                    name: name.to_string(),
                    segment: segment.to_string(),
                });
            }
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn separator(&self) -> &'static str {
        if self.0.contains("::") { "::" } else { "." }
    }

    /// Last segment of the name
    pub fn simple_name(&self) -> &str {
        let separator = self.separator();
        self.0
            .rsplit_once(separator)
            .map_or(self.0.as_str(), |(_, last)| last)
    }

    /// Everything before the last segment, if any
    pub fn namespace(&self) -> Option<&str> {
        self.0
            .rsplit_once(self.separator())
            .map(|(namespace, _)| namespace)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

impl std::str::FromStr for QualifiedName {
    type Err = QualifiedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
