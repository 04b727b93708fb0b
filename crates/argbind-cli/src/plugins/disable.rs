//! `-Xdisable-getters` and `-Xdisable-setters`: bare switches

use crate::host::HostedPlugin;
use argbind::prelude::*;
use serde::Serialize;
use serde_json::Value;

/// Switch with no options of its own, bound through the derive
#[derive(Debug, Default, Options, Serialize)]
#[option(name = "Xdisable-getters", description = "Disable generation of getter methods for fields")]
pub struct DisableGetters;

impl Extension for DisableGetters {}

const DISABLE_SETTERS: &str = "Xdisable-setters";

/// Switch implementing [`Plugin`] by hand, with no declared options
#[derive(Debug, Default, Serialize)]
pub struct DisableSetters {
    pub enabled: bool,
}

impl Plugin for DisableSetters {
    fn option_name(&self) -> &str {
        DISABLE_SETTERS
    }

    fn usage(&self) -> String {
        format!("  -{DISABLE_SETTERS}: Disable generation of setter methods for fields")
    }

    fn parse_argument(&mut self, args: &[String], index: usize) -> PluginResult<usize> {
        let matched = args
            .get(index)
            .and_then(|arg| arg.trim().strip_prefix('-'))
            .is_some_and(|name| name == DISABLE_SETTERS);
        if matched {
            self.enabled = true;
        }
        Ok(usize::from(matched))
    }
}

impl HostedPlugin for DisableSetters {
    fn signature(&self) -> String {
        format!("-{DISABLE_SETTERS}")
    }

    fn summary(&self) -> String {
        "Disable generation of setter methods for fields".to_string()
    }

    fn config_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn config_debug(&self) -> String {
        format!("{self:#?}")
    }
}

#[cfg(test)]
#[path = "disable/disable_tests.rs"]
mod disable_tests;
