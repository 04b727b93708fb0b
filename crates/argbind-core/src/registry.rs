//! Text parser registry
//!
//! Parsers are looked up first by option name, then by value type. The
//! registry follows a single-writer-then-many-readers discipline: register
//! everything through `&mut self` before binding starts; binding only reads.

use crate::{BindError, BindResult, BoxError, OptionDescriptor, QualifiedName, TypeKey};
use regex::Regex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::convert::Infallible;

type ErasedParser = Box<dyn Fn(&str, &str) -> Result<Box<dyn Any>, BoxError> + Send + Sync>;

struct ParserEntry {
    output: TypeKey,
    parse: ErasedParser,
}

impl ParserEntry {
    fn new<V, E, F>(parser: F) -> Self
    where
        V: Any,
        E: Into<BoxError>,
        F: Fn(&str, &str) -> Result<V, E> + Send + Sync + 'static,
    {
        Self {
            output: TypeKey::of::<V>(),
            parse: Box::new(move |option, text| {
                parser(option, text)
                    .map(|value| Box::new(value) as Box<dyn Any>)
                    .map_err(Into::into)
            }),
        }
    }
}

/// Conversion functions from raw option text to typed values
///
/// # Example
///
/// ```
/// use argbind_core::{OptionDescriptor, ParserRegistry};
///
/// let mut registry = ParserRegistry::with_builtins();
/// registry.register_option("magic", |_, text| Ok::<_, std::convert::Infallible>(format!("abc{text}")));
///
/// let magic = OptionDescriptor::new("magic");
/// assert_eq!(registry.parse::<String>(&magic, "def").unwrap(), "abcdef");
///
/// let count = OptionDescriptor::new("count");
/// assert_eq!(registry.parse::<u8>(&count, " 7 ").unwrap(), 7);
/// ```
#[derive(Default)]
pub struct ParserRegistry {
    by_type: HashMap<TypeId, ParserEntry>,
    by_option: HashMap<String, ParserEntry>,
}

impl ParserRegistry {
    /// Create a registry with no parsers at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in parsers
    ///
    /// Covers `bool`, every integer and float width, `char`, `String`,
    /// [`QualifiedName`] class references and [`Regex`] literals.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        macro_rules! register_numeric {
            ($($ty:ty),+ $(,)?) => {
                $(registry.register_type(|_, text: &str| text.trim().parse::<$ty>());)+
            };
        }
        register_numeric!(
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
        );

        registry.register_type(|_, text: &str| parse_bool(text));
        registry.register_type(|_, text: &str| {
            text.chars()
                .next()
                .ok_or_else(|| BoxError::from("empty text has no character"))
        });
        registry.register_type(|_, text: &str| Ok::<_, Infallible>(text.to_string()));
        registry.register_type(|_, text: &str| QualifiedName::parse(text));
        registry.register_type(|_, text: &str| Regex::new(text));
        registry
    }

    /// Register a parser for every option whose value type is `V`
    pub fn register_type<V, E, F>(&mut self, parser: F) -> &mut Self
    where
        V: Any,
        E: Into<BoxError>,
        F: Fn(&str, &str) -> Result<V, E> + Send + Sync + 'static,
    {
        self.by_type.insert(TypeId::of::<V>(), ParserEntry::new(parser));
        self
    }

    /// Register a parser for one option name, shadowing the type parser for `V`
    pub fn register_option<V, E, F>(&mut self, name: impl Into<String>, parser: F) -> &mut Self
    where
        V: Any,
        E: Into<BoxError>,
        F: Fn(&str, &str) -> Result<V, E> + Send + Sync + 'static,
    {
        self.by_option.insert(name.into(), ParserEntry::new(parser));
        self
    }

    fn resolve(&self, descriptor: &OptionDescriptor, key: TypeKey) -> Option<&ParserEntry> {
        self.by_option
            .get(&descriptor.name)
            .filter(|entry| entry.output == key)
            .or_else(|| self.by_type.get(&key.id()))
    }

    /// Whether a parser producing `key` resolves for this option
    pub fn can_parse(&self, descriptor: &OptionDescriptor, key: TypeKey) -> bool {
        self.resolve(descriptor, key).is_some()
    }

    /// Convert raw text for an option into a `V`
    pub fn parse<V: Any>(&self, descriptor: &OptionDescriptor, text: &str) -> BindResult<V> {
        let entry = self
            .resolve(descriptor, TypeKey::of::<V>())
            .ok_or_else(|| BindError::UnresolvedParser {
                option: descriptor.signature(),
                type_name: std::any::type_name::<V>(),
            })?;
        let conversion = |source: BoxError| BindError::Conversion {
            option: descriptor.signature(),
            text: text.to_string(),
            source,
        };
        let value = (entry.parse)(&descriptor.name, text).map_err(conversion)?;
        value
            .downcast::<V>()
            .map(|value| *value)
            .map_err(|_| conversion(format!("parser did not produce {}", entry.output.name()).into()))
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.by_type.values().map(|e| e.output.name()).collect();
        types.sort_unstable();
        let mut options: Vec<_> = self.by_option.keys().collect();
        options.sort_unstable();
        f.debug_struct("ParserRegistry")
            .field("types", &types)
            .field("options", &options)
            .finish()
    }
}

fn parse_bool(text: &str) -> Result<bool, BoxError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected true or false, got '{text}'").into())
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
