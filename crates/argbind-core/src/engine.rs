//! Binding engine entry points

use crate::{
    BindError, BindResult, BoxError, Options, ParserRegistry, matcher, usage, validate,
};
use parking_lot::Mutex;
use std::any::{Any, TypeId, type_name};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Binds command-line tokens onto [`Options`] types
///
/// Owns the parser registry used for every conversion. Register custom
/// parsers before binding; binding itself only reads the registry.
///
/// # Example
///
/// ```
/// use argbind_core::{Binder, OptionDescriptor, OptionField, Options};
///
/// #[derive(Default)]
/// struct Config {
///     count: Option<u32>,
///     tags: Vec<String>,
/// }
///
/// impl Options for Config {
///     fn option_fields() -> Vec<OptionField<Self>> {
///         vec![
///             OptionField::single(OptionDescriptor::new("count"), |c| &c.count, |c| &mut c.count),
///             OptionField::collection(OptionDescriptor::new("tag"), |c| &c.tags, |c| &mut c.tags),
///         ]
///     }
/// }
///
/// let binder = Binder::new();
/// let args = ["-count=3", "-tag=a", "-tag=b", "-other"];
/// let (config, consumed) = binder.bind::<Config, _>(&args, 0).unwrap();
/// assert_eq!(consumed, 3);
/// assert_eq!(config.count, Some(3));
/// assert_eq!(config.tags, ["a", "b"]);
/// ```
pub struct Binder {
    registry: ParserRegistry,
    checked: Mutex<HashSet<TypeId>>,
}

impl Binder {
    /// Create a binder with the built-in parsers
    pub fn new() -> Self {
        Self::with_registry(ParserRegistry::with_builtins())
    }

    pub fn with_registry(registry: ParserRegistry) -> Self {
        Self {
            registry,
            checked: Mutex::new(HashSet::new()),
        }
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ParserRegistry {
        &mut self.registry
    }

    /// Register a parser for every option whose value type is `V`
    pub fn register_type<V, E, F>(&mut self, parser: F) -> &mut Self
    where
        V: Any,
        E: Into<BoxError>,
        F: Fn(&str, &str) -> Result<V, E> + Send + Sync + 'static,
    {
        self.registry.register_type(parser);
        self
    }

    /// Register a parser for one option name
    pub fn register_option<V, E, F>(&mut self, name: impl Into<String>, parser: F) -> &mut Self
    where
        V: Any,
        E: Into<BoxError>,
        F: Fn(&str, &str) -> Result<V, E> + Send + Sync + 'static,
    {
        self.registry.register_option(name, parser);
        self
    }

    /// Bind the options following `T`'s root flag at `args[index]`
    ///
    /// Returns 0 when the token at `index` is not the root flag (or `T`
    /// declares no root); otherwise the root flag plus every token its
    /// options consumed.
    pub fn parse_argument<T: Options, S: AsRef<str>>(
        &self,
        target: &mut T,
        args: &[S],
        index: usize,
    ) -> BindResult<usize> {
        let Some(root) = T::root() else {
            return Ok(0);
        };
        let signature = root.signature();
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        if args.get(index).map(|arg| arg.trim()) != Some(signature.as_str()) {
            return Ok(0);
        }

        let consumed = matcher::bind_object(self, target, &args, index + 1)?;
        validate::apply_defaults(self, target)?;
        debug!(option = %signature, consumed = consumed + 1, "parsed root option");
        Ok(consumed + 1)
    }

    /// Bind a fresh `T` from `args[start..]` without a root flag
    pub fn bind<T: Options, S: AsRef<str>>(&self, args: &[S], start: usize) -> BindResult<(T, usize)> {
        let mut target = T::default();
        let consumed = self.bind_into(&mut target, args, start)?;
        Ok((target, consumed))
    }

    /// Bind onto an existing `T` from `args[start..]`, then apply defaults
    pub fn bind_into<T: Options, S: AsRef<str>>(
        &self,
        target: &mut T,
        args: &[S],
        start: usize,
    ) -> BindResult<usize> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let consumed = matcher::bind_object(self, target, &args, start)?;
        validate::apply_defaults(self, target)?;
        Ok(consumed)
    }

    /// Usage text for `T`
    pub fn usage<T: Options>(&self) -> String {
        usage::<T>()
    }

    /// Check `T`'s declared fields, once per type for this binder
    pub(crate) fn schema<T: Options>(&self) -> BindResult<()> {
        let id = TypeId::of::<T>();
        if self.checked.lock().contains(&id) {
            return Ok(());
        }

        let owner = type_name::<T>();
        let mut signatures = HashSet::new();
        for field in T::option_fields() {
            let descriptor = field.descriptor();
            let invalid = |reason: &str| BindError::InvalidDescriptor {
                option: descriptor.signature(),
                owner,
                reason: reason.to_string(),
            };
            if descriptor.name.is_empty() {
                return Err(invalid("option name cannot be empty"));
            }
            if descriptor.delimiter.is_empty() {
                return Err(invalid("option delimiter cannot be empty"));
            }
            if !signatures.insert(descriptor.signature()) {
                return Err(invalid("option is declared more than once"));
            }
            field.check()?;
        }

        trace!(owner, options = signatures.len(), "schema checked");
        self.checked.lock().insert(id);
        Ok(())
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Binder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("registry", &self.registry)
            .field("checked_types", &self.checked.lock().len())
            .finish()
    }
}
