//! Extension trait and the host-facing plugin adapter

use crate::{Binder, BoxError, OptionDescriptor, Options, PluginError, PluginResult};
use std::any::type_name;
use tracing::debug;

/// Host-facing surface of one code-generator extension
///
/// The host offers every token position to each plugin in turn; a plugin
/// claims the tokens it understands by returning a non-zero count.
pub trait Plugin {
    /// Root option name, without prefix
    fn option_name(&self) -> &str;

    /// Aligned usage text for the extension's options
    fn usage(&self) -> String;

    /// Try to bind the extension's options starting at `args[index]`
    ///
    /// Returns the number of tokens consumed; 0 means the token is not ours.
    fn parse_argument(&mut self, args: &[String], index: usize) -> PluginResult<usize>;
}

/// A configuration type that is the root of an extension
///
/// # Example
///
/// ```
/// use argbind_core::{Extension, OptionDescriptor, OptionField, OptionPlugin, Options, Plugin};
///
/// #[derive(Default)]
/// struct Quiet {
///     level: Option<u8>,
/// }
///
/// impl Options for Quiet {
///     fn option_fields() -> Vec<OptionField<Self>> {
///         vec![OptionField::single(OptionDescriptor::new("level"), |q| &q.level, |q| &mut q.level)]
///     }
///
///     fn root() -> Option<OptionDescriptor> {
///         Some(OptionDescriptor::new("Xquiet"))
///     }
/// }
///
/// impl Extension for Quiet {}
///
/// let mut plugin = OptionPlugin::<Quiet>::new().unwrap();
/// let args: Vec<String> = ["-Xquiet", "-level=2"].map(String::from).to_vec();
/// assert_eq!(plugin.parse_argument(&args, 0).unwrap(), 2);
/// assert_eq!(plugin.config().level, Some(2));
/// ```
pub trait Extension: Options {
    /// Register option or type parsers this extension needs
    fn register_parsers(_binder: &mut Binder) {}

    /// Inspect the configuration after its options were bound
    fn post_parse(&mut self, _consumed: usize) -> Result<(), BoxError> {
        Ok(())
    }
}

/// [`Plugin`] adapter owning an extension's configuration and parsers
pub struct OptionPlugin<T> {
    root: OptionDescriptor,
    binder: Binder,
    config: T,
}

impl<T: Extension> OptionPlugin<T> {
    /// Create the plugin; fails when `T` declares no root option
    pub fn new() -> PluginResult<Self> {
        let root = T::root().ok_or(PluginError::MissingRoot(type_name::<T>()))?;
        let mut binder = Binder::new();
        T::register_parsers(&mut binder);
        Ok(Self {
            root,
            binder,
            config: T::default(),
        })
    }

    pub fn root(&self) -> &OptionDescriptor {
        &self.root
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn config(&self) -> &T {
        &self.config
    }

    pub fn into_config(self) -> T {
        self.config
    }
}

impl<T: Extension> Plugin for OptionPlugin<T> {
    fn option_name(&self) -> &str {
        &self.root.name
    }

    fn usage(&self) -> String {
        self.binder.usage::<T>()
    }

    fn parse_argument(&mut self, args: &[String], index: usize) -> PluginResult<usize> {
        let consumed = self
            .binder
            .parse_argument(&mut self.config, args, index)
            .map_err(|source| PluginError::BadCommandLine {
                option: self.root.name.clone(),
                source,
            })?;
        if consumed > 0 {
            debug!(option = %self.root.name, consumed, "extension claimed arguments");
            self.config
                .post_parse(consumed)
                .map_err(|source| PluginError::PostParse {
                    option: self.root.name.clone(),
                    source,
                })?;
        }
        Ok(consumed)
    }
}

impl<T> std::fmt::Debug for OptionPlugin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionPlugin")
            .field("root", &self.root)
            .field("config", &type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
#[path = "plugin/plugin_tests.rs"]
mod plugin_tests;
