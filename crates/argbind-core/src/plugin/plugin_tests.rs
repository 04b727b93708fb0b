#![allow(non_snake_case)]

use super::*;
use crate::{BindError, OptionField};

#[derive(Default, Debug)]
struct Rename {
    from: Vec<String>,
    to: Option<String>,
    claimed: usize,
}

impl Options for Rename {
    fn option_fields() -> Vec<OptionField<Self>> {
        vec![
            OptionField::collection(OptionDescriptor::new("from"), |r| &r.from, |r| &mut r.from),
            OptionField::single(
                OptionDescriptor::new("to").with_required(true),
                |r| &r.to,
                |r| &mut r.to,
            ),
        ]
    }

    fn root() -> Option<OptionDescriptor> {
        Some(OptionDescriptor::new("Xrename").with_description("Rename generated types"))
    }
}

impl Extension for Rename {
    fn register_parsers(binder: &mut Binder) {
        binder.register_option("to", |_, text: &str| {
            if text.is_empty() {
                Err("target cannot be empty")
            } else {
                Ok(text.to_string())
            }
        });
    }

    fn post_parse(&mut self, consumed: usize) -> Result<(), BoxError> {
        if self.from.iter().any(|from| Some(from) == self.to.as_ref()) {
            return Err(format!("cannot rename {} to itself", self.to.as_deref().unwrap_or("")).into());
        }
        self.claimed = consumed;
        Ok(())
    }
}

#[derive(Default)]
struct Rootless;

impl Options for Rootless {
    fn option_fields() -> Vec<OptionField<Self>> {
        Vec::new()
    }
}

impl Extension for Rootless {}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn OptionPlugin___new_without_root___fails() {
    let err = OptionPlugin::<Rootless>::new().unwrap_err();

    assert!(matches!(err, PluginError::MissingRoot(name) if name.ends_with("Rootless")));
}

#[test]
fn OptionPlugin___option_name___is_root_name_without_prefix() {
    let plugin = OptionPlugin::<Rename>::new().unwrap();

    assert_eq!(plugin.option_name(), "Xrename");
    assert_eq!(plugin.root().signature(), "-Xrename");
}

#[test]
fn OptionPlugin___parse_argument___binds_and_runs_post_parse() {
    let mut plugin = OptionPlugin::<Rename>::new().unwrap();
    let args = strings(&["-Xrename", "-from=A", "-from=B", "-to=C", "-extension"]);

    let consumed = plugin.parse_argument(&args, 0).unwrap();

    assert_eq!(consumed, 4);
    let config = plugin.into_config();
    assert_eq!(config.from, vec!["A", "B"]);
    assert_eq!(config.to.as_deref(), Some("C"));
    assert_eq!(config.claimed, 4);
}

#[test]
fn OptionPlugin___unclaimed_token___skips_post_parse() {
    let mut plugin = OptionPlugin::<Rename>::new().unwrap();

    let consumed = plugin.parse_argument(&strings(&["-Xother"]), 0).unwrap();

    assert_eq!(consumed, 0);
    assert_eq!(plugin.config().claimed, 0);
}

#[test]
fn OptionPlugin___bind_failure___is_bad_command_line() {
    let mut plugin = OptionPlugin::<Rename>::new().unwrap();

    let err = plugin
        .parse_argument(&strings(&["-Xrename", "-from=A"]), 0)
        .unwrap_err();

    assert_eq!(err.error_code(), 1);
    assert!(matches!(
        err,
        PluginError::BadCommandLine { ref option, source: BindError::RequiredOptionMissing { .. } }
            if option == "Xrename"
    ));
    assert!(err.to_string().starts_with("Error parsing plugin option Xrename: "));
}

#[test]
fn OptionPlugin___registered_option_parser___is_used() {
    let mut plugin = OptionPlugin::<Rename>::new().unwrap();

    let err = plugin
        .parse_argument(&strings(&["-Xrename", "-to="]), 0)
        .unwrap_err();

    assert!(err.to_string().contains("target cannot be empty"));
}

#[test]
fn OptionPlugin___post_parse_rejection___is_reported() {
    let mut plugin = OptionPlugin::<Rename>::new().unwrap();

    let err = plugin
        .parse_argument(&strings(&["-Xrename", "-from=A", "-to=A"]), 0)
        .unwrap_err();

    assert!(matches!(err, PluginError::PostParse { .. }));
    assert!(err.to_string().contains("cannot rename A to itself"));
}

#[test]
fn OptionPlugin___usage___renders_extension_options() {
    let plugin = OptionPlugin::<Rename>::new().unwrap();

    let usage = plugin.usage();

    assert!(usage.starts_with("  -Xrename"));
    assert!(usage.contains("Rename generated types"));
    assert!(usage.contains("-from=<value>"));
}
