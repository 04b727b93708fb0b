//! argbind-cli - Extension host behind the `argbind` binary
//!
//! - [`host`] offers argument tokens to a list of plugins
//! - [`plugins`] bundled demo extensions
//! - [`commands`] subcommand bodies shared with the binary

pub mod commands;
pub mod host;
pub mod plugins;

pub use host::{HostedPlugin, PluginHost};
