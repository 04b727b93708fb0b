#![allow(non_snake_case)]

use super::*;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn DisableGetters___root_flag___claims_one_token() {
    let mut plugin = OptionPlugin::<DisableGetters>::new().unwrap();

    let args = strings(&["-Xdisable-getters", "-Xdisable-setters"]);

    assert_eq!(plugin.parse_argument(&args, 0).unwrap(), 1);
    assert_eq!(plugin.parse_argument(&args, 1).unwrap(), 0);
}

#[test]
fn DisableSetters___own_flag___enables_switch() {
    let mut plugin = DisableSetters::default();
    let args = strings(&["-Xdisable-getters", " -Xdisable-setters "]);

    assert_eq!(plugin.parse_argument(&args, 0).unwrap(), 0);
    assert!(!plugin.enabled);
    assert_eq!(plugin.parse_argument(&args, 1).unwrap(), 1);
    assert!(plugin.enabled);
}

#[test]
fn DisableSetters___index_past_end___claims_nothing() {
    let mut plugin = DisableSetters::default();

    assert_eq!(plugin.parse_argument(&[], 3).unwrap(), 0);
}

#[test]
fn DisableSetters___hosted___reports_switch_state() {
    let plugin = DisableSetters { enabled: true };

    assert_eq!(plugin.signature(), "-Xdisable-setters");
    assert_eq!(plugin.config_json().unwrap(), serde_json::json!({ "enabled": true }));
    assert!(plugin.usage().starts_with("  -Xdisable-setters: "));
}
