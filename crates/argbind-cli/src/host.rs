//! Extension host loop
//!
//! Mirrors how a code generator hands its command line to plugins: every
//! token position is offered to each plugin in turn, the first plugin that
//! consumes tokens wins, and a token nobody claims is an error.

use argbind::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, info};

/// A plugin the host can list and report on
pub trait HostedPlugin: Plugin {
    /// Root flag with its prefix, e.g. `-Xnamespace`
    fn signature(&self) -> String;

    /// First line of the root option's description
    fn summary(&self) -> String;

    /// Bound configuration as JSON
    fn config_json(&self) -> serde_json::Result<Value>;

    /// Bound configuration in pretty debug form
    fn config_debug(&self) -> String;
}

impl<T> HostedPlugin for OptionPlugin<T>
where
    T: Extension + Serialize + Debug,
{
    fn signature(&self) -> String {
        self.root().signature()
    }

    fn summary(&self) -> String {
        self.root()
            .description
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn config_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self.config())
    }

    fn config_debug(&self) -> String {
        format!("{:#?}", self.config())
    }
}

struct Entry {
    plugin: Box<dyn HostedPlugin>,
    active: bool,
}

/// Ordered set of plugins sharing one argument list
#[derive(Default)]
pub struct PluginHost {
    entries: Vec<Entry>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with every bundled extension registered
    pub fn with_builtin_plugins() -> PluginResult<Self> {
        let mut host = Self::new();
        for plugin in crate::plugins::builtin()? {
            host.add(plugin);
        }
        Ok(host)
    }

    pub fn add(&mut self, plugin: Box<dyn HostedPlugin>) -> &mut Self {
        self.entries.push(Entry {
            plugin,
            active: false,
        });
        self
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn HostedPlugin> {
        self.entries.iter().map(|entry| entry.plugin.as_ref())
    }

    /// Plugins that claimed at least one token
    pub fn activated(&self) -> impl Iterator<Item = &dyn HostedPlugin> {
        self.entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.plugin.as_ref())
    }

    /// Find a plugin by root name, with or without its prefix
    pub fn find(&self, name: &str) -> Option<&dyn HostedPlugin> {
        self.plugins()
            .find(|plugin| plugin.option_name() == name || plugin.signature() == name)
    }

    /// Hand `args` to the plugins until every token is claimed
    ///
    /// Returns the number of plugin invocations that claimed tokens.
    pub fn parse_arguments(&mut self, args: &[String]) -> PluginResult<usize> {
        let mut index = 0;
        let mut claims = 0;
        while index < args.len() {
            let mut consumed = 0;
            for entry in &mut self.entries {
                consumed = entry.plugin.parse_argument(args, index)?;
                if consumed > 0 {
                    debug!(plugin = entry.plugin.option_name(), index, consumed, "plugin claimed tokens");
                    entry.active = true;
                    break;
                }
            }
            if consumed == 0 {
                return Err(PluginError::UnrecognizedParameter(args[index].clone()));
            }
            index += consumed;
            claims += 1;
        }
        info!(tokens = args.len(), claims, "arguments bound");
        Ok(claims)
    }
}
