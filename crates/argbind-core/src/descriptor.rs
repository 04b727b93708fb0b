//! Option descriptor metadata

use crate::{CollectionKind, QualifiedName};
use regex::Regex;
use std::any::{Any, TypeId};

/// Prefix used when a descriptor declares none
pub const DEFAULT_PREFIX: &str = "-";

/// Delimiter between flag and value when a descriptor declares none
pub const DEFAULT_DELIMITER: &str = "=";

/// Static metadata describing one bindable field
///
/// # Example
///
/// ```
/// use argbind_core::OptionDescriptor;
///
/// let descriptor = OptionDescriptor::new("count")
///     .with_default("3")
///     .with_description("How many times");
/// assert_eq!(descriptor.signature(), "-count");
/// assert_eq!(descriptor.default_value.as_deref(), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Option name without prefix
    pub name: String,
    /// Prefix prepended to the name to form the flag signature
    pub prefix: String,
    /// Separator between flag signature and value text
    pub delimiter: String,
    /// Whether the option must end up with a value
    pub required: bool,
    /// Raw default text, parsed through the registry when applied
    pub default_value: Option<String>,
    /// Placeholder shown in usage text instead of the type placeholder
    pub placeholder: Option<String>,
    /// Human description, may span several lines
    pub description: String,
}

impl OptionDescriptor {
    /// Create a descriptor with default prefix and delimiter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            required: false,
            default_value: None,
            placeholder: None,
            description: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the default text; an empty string means no default
    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into()).filter(|text| !text.is_empty());
        self
    }

    /// Set the usage placeholder; an empty string means none
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into()).filter(|text| !text.is_empty());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The literal token that selects this option (`prefix + name`)
    pub fn signature(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Pattern matching `signature <spaces> delimiter value`, capturing the value
    pub fn delimiter_pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            r"^{}\s*{}(.*)$",
            regex::escape(&self.signature()),
            regex::escape(&self.delimiter)
        ))
    }
}

/// Runtime identity of a value type, with its name for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<V: Any>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: std::any::type_name::<V>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<V: Any>(&self) -> bool {
        self.id == TypeId::of::<V>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl std::hash::Hash for TypeKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// How a field holds its value(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Plain `bool`, set by the bare flag
    Flag,
    /// One optional value
    Single,
    /// Repeatable values gathered into a collection
    Collection(CollectionKind),
}

/// Whether a field's value (or element) carries its own options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Scalar,
    Composite,
}

/// Usage placeholder for a value type that declares none explicitly
///
/// # Example
///
/// ```
/// use argbind_core::{TypeKey, type_placeholder};
///
/// assert_eq!(type_placeholder(TypeKey::of::<i32>()), "int");
/// assert_eq!(type_placeholder(TypeKey::of::<i64>()), "long");
/// assert_eq!(type_placeholder(TypeKey::of::<regex::Regex>()), "regex");
/// assert_eq!(type_placeholder(TypeKey::of::<String>()), "value");
/// ```
pub fn type_placeholder(key: TypeKey) -> &'static str {
    let is_any = |keys: &[TypeKey]| keys.contains(&key);
    if is_any(&[TypeKey::of::<i8>(), TypeKey::of::<u8>()]) {
        "byte"
    } else if is_any(&[TypeKey::of::<i16>(), TypeKey::of::<u16>()]) {
        "short"
    } else if is_any(&[
        TypeKey::of::<i32>(),
        TypeKey::of::<u32>(),
        TypeKey::of::<isize>(),
        TypeKey::of::<usize>(),
    ]) {
        "int"
    } else if is_any(&[
        TypeKey::of::<i64>(),
        TypeKey::of::<u64>(),
        TypeKey::of::<i128>(),
        TypeKey::of::<u128>(),
    ]) {
        "long"
    } else if key.is::<f32>() {
        "float"
    } else if key.is::<f64>() {
        "double"
    } else if key.is::<char>() {
        "char"
    } else if key.is::<bool>() {
        "boolean"
    } else if key.is::<Regex>() {
        "regex"
    } else if key.is::<QualifiedName>() {
        "class"
    } else {
        "value"
    }
}
