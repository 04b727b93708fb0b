//! `-Xnamespace`: XML namespace to package mapping

use argbind::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Rejected namespace configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    #[error("namespace {0} is mapped to more than one package")]
    Duplicate(String),
}

#[derive(Debug, Default, Options, Serialize)]
#[option(name = "Xnamespace", description = "Customize Java package names for XML namespaces")]
pub struct Namespace {
    #[option(name = "mapping", nested, description = "Namespace to package mapping rule")]
    pub mappings: Vec<NamespaceMapping>,
}

#[derive(Debug, Default, Options, Serialize)]
pub struct NamespaceMapping {
    #[option(
        name = "ns",
        required,
        description = "XML target namespace URI (e.g., http://example.com/my-schema)"
    )]
    pub namespace: Option<String>,

    #[option(description = "XML target namespace prefix (e.g., myschema)")]
    pub prefix: Option<String>,

    #[option(
        name = "package",
        required,
        description = "Target Java package name for this namespace (e.g., com.example.myschema)"
    )]
    pub package_name: Option<String>,
}

impl NamespaceMapping {
    /// Namespace and package, when both are present and non-blank
    fn rule(&self) -> Option<(&str, &str)> {
        let namespace = self.namespace.as_deref().filter(|ns| !ns.trim().is_empty())?;
        let package = self.package_name.as_deref().filter(|pkg| !pkg.trim().is_empty())?;
        Some((namespace, package))
    }
}

impl Namespace {
    /// Package configured for a namespace URI
    pub fn package_for(&self, namespace: &str) -> Option<&str> {
        self.mappings
            .iter()
            .filter_map(NamespaceMapping::rule)
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, package)| package)
    }
}

impl Extension for Namespace {
    fn post_parse(&mut self, _consumed: usize) -> Result<(), BoxError> {
        let mut seen = HashSet::new();
        for (namespace, _) in self.mappings.iter().filter_map(NamespaceMapping::rule) {
            if !seen.insert(namespace) {
                return Err(NamespaceError::Duplicate(namespace.to_string()).into());
            }
        }
        Ok(())
    }
}
