//! `-Xjsr310`: date/time type mappings

use super::{NamePattern, register_name_patterns};
use argbind::prelude::*;
use serde::Serialize;

#[derive(Debug, Default, Options, Serialize)]
#[option(
    name = "Xjsr310",
    description = "Enable JSR-310 date/time API support in generated JAXB classes"
)]
pub struct Jsr310 {
    #[option(
        placeholder = "package",
        default = "io.github.rawvoid.jaxb.adapter",
        description = "Package for generated XmlAdapters"
    )]
    pub adapter_package: Option<String>,

    #[option(nested, description = "Global type mappings from XSD types to JSR-310 classes")]
    pub type_config: Vec<TypeConfig>,

    #[option(nested, description = "Field-specific overrides for types, adapters, and formats")]
    pub field_config: Vec<FieldConfig>,
}

/// Global mapping from one XSD type to a date/time class
#[derive(Debug, Default, Options, Serialize)]
pub struct TypeConfig {
    #[option(description = "XSD type to map (e.g., xs:dateTime, xs:date)")]
    pub xsd_type: Option<String>,

    #[option(name = "jsr310-class", description = "Target JSR-310 class (e.g., java.time.LocalDateTime)")]
    pub class: Option<QualifiedName>,
}

/// Override applied to generated fields whose names match
#[derive(Debug, Default, Options, Serialize)]
pub struct FieldConfig {
    #[option(
        name = "xml-adapter",
        description = "Custom XmlAdapter class for serialization/deserialization"
    )]
    pub adapter: Option<QualifiedName>,

    #[option(
        name = "jsr310-class",
        description = "JSR-310 class for matched fields (e.g., java.time.LocalDate)"
    )]
    pub class: Option<QualifiedName>,

    #[option(
        placeholder = "pattern",
        description = "DateTimeFormatter pattern for auto-generated XmlAdapter (e.g., yyyy-MM-dd)"
    )]
    pub pattern: Option<String>,

    #[option(
        name = "regex",
        required,
        placeholder = "regex",
        description = "Regex patterns to match field names"
    )]
    pub field_patterns: Vec<NamePattern>,
}

impl Jsr310 {
    /// Class mapped for an XSD type, if any
    pub fn class_for_type(&self, xsd_type: &str) -> Option<&QualifiedName> {
        self.type_config
            .iter()
            .find(|config| config.xsd_type.as_deref() == Some(xsd_type))
            .and_then(|config| config.class.as_ref())
    }

    /// First field override whose patterns match the whole field name
    pub fn field_override(&self, field: &str) -> Option<&FieldConfig> {
        self.field_config
            .iter()
            .find(|config| config.field_patterns.iter().any(|pattern| pattern.matches(field)))
    }
}

impl Extension for Jsr310 {
    fn register_parsers(binder: &mut Binder) {
        register_name_patterns(binder);
    }
}
