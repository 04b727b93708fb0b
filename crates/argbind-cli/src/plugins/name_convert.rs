//! `-Xname-convert`: identifier renaming rules

use super::serialize_regex;
use argbind::prelude::*;
use regex::Regex;
use serde::Serialize;

/// Kind of generated identifier a rule list applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Class,
    Variable,
    Interface,
    Property,
    Constant,
    Package,
}

#[derive(Debug, Default, Options, Serialize)]
#[option(name = "Xname-convert", description = "Enable name conversion plugin")]
pub struct NameConvert {
    #[option(
        placeholder = "class",
        description = "Specify the fully qualified name of a custom NameConverter implementation"
    )]
    pub name_converter: Option<QualifiedName>,

    #[option(nested, description = "Configure class name conversion rules")]
    pub class_name: Vec<NameMapping>,

    #[option(nested, description = "Configure variable name conversion rules")]
    pub variable_name: Vec<NameMapping>,

    #[option(nested, description = "Configure interface name conversion rules")]
    pub interface_name: Vec<NameMapping>,

    #[option(
        nested,
        description = "Configure property name (including Getter/Setter method names) conversion rules"
    )]
    pub property_name: Vec<NameMapping>,

    #[option(nested, description = "Configure constant name conversion rules")]
    pub constant_name: Vec<NameMapping>,

    #[option(nested, description = "Configure package name conversion rules")]
    pub package_name: Vec<NameMapping>,
}

/// One renaming rule
#[derive(Debug, Default, Options, Serialize)]
pub struct NameMapping {
    #[option(description = "The original identifier to match")]
    pub token: Option<String>,

    #[option(description = "Regular expression used to match the internal name")]
    #[serde(serialize_with = "serialize_regex")]
    pub regex: Option<Regex>,

    #[option(required, description = "The target mapping name")]
    pub name: Option<String>,
}

impl NameConvert {
    pub fn rules(&self, kind: NameKind) -> &[NameMapping] {
        match kind {
            NameKind::Class => &self.class_name,
            NameKind::Variable => &self.variable_name,
            NameKind::Interface => &self.interface_name,
            NameKind::Property => &self.property_name,
            NameKind::Constant => &self.constant_name,
            NameKind::Package => &self.package_name,
        }
    }

    /// Apply the rules for `kind` to one identifier
    ///
    /// `token` is the identifier as written in the schema and `internal` the
    /// name the generator would use by default. The first rule whose token
    /// matches, or the first rule carrying a regex, decides the result.
    pub fn convert(&self, kind: NameKind, token: &str, internal: &str) -> String {
        for rule in self.rules(kind) {
            let name = rule.name.as_deref().unwrap_or_default();
            if rule.token.as_deref() == Some(token) {
                return name.to_string();
            }
            if let Some(regex) = &rule.regex {
                return regex.replace_all(internal, name).into_owned();
            }
        }
        internal.to_string()
    }
}

impl Extension for NameConvert {}

#[cfg(test)]
#[path = "name_convert/name_convert_tests.rs"]
mod name_convert_tests;
