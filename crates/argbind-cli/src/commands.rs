//! Subcommand bodies, returning the text to print

use crate::host::PluginHost;
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde_json::{Map, Value};

/// Output format for bound configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Debug,
}

/// One line per extension: root flag and summary
pub fn list(host: &PluginHost) -> String {
    let width = host
        .plugins()
        .map(|plugin| plugin.signature().len())
        .max()
        .unwrap_or_default();
    host.plugins()
        .map(|plugin| format!("{:<width$}  {}", plugin.signature(), plugin.summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Usage of one extension, or of all of them
pub fn usage(host: &PluginHost, name: Option<&str>) -> Result<String> {
    match name {
        Some(name) => match host.find(name) {
            Some(plugin) => Ok(plugin.usage()),
            None => bail!("no extension named '{name}' (try `argbind list`)"),
        },
        None => Ok(host
            .plugins()
            .map(|plugin| plugin.usage())
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

/// Bind `args` and render every activated extension's configuration
pub fn parse(host: &mut PluginHost, args: &[String], format: Format) -> Result<String> {
    host.parse_arguments(args)
        .context("failed to bind extension arguments")?;

    match format {
        Format::Json => {
            let mut configs = Map::new();
            for plugin in host.activated() {
                let config = plugin
                    .config_json()
                    .with_context(|| format!("failed to serialize {}", plugin.signature()))?;
                configs.insert(plugin.signature(), config);
            }
            Ok(serde_json::to_string_pretty(&Value::Object(configs))?)
        }
        Format::Debug => Ok(host
            .activated()
            .map(|plugin| format!("{}\n{}", plugin.signature(), plugin.config_debug()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
