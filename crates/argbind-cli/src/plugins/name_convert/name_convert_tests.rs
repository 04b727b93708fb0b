#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

fn bound(args: &[&str]) -> NameConvert {
    let mut plugin = OptionPlugin::<NameConvert>::new().unwrap();
    let args = strings(args);
    assert_eq!(plugin.parse_argument(&args, 0).unwrap(), args.len());
    plugin.into_config()
}

#[test]
fn NameConvert___rules_per_kind___bind_separately() {
    let config = bound(&[
        "-Xname-convert",
        "-name-converter=com.example.MyConverter",
        "-class-name",
        "-token=order",
        "-name=PurchaseOrder",
        "-package-name",
        "-regex=^com\\.legacy",
        "-name=com.modern",
    ]);

    assert_eq!(
        config.name_converter.as_ref().map(QualifiedName::as_str),
        Some("com.example.MyConverter")
    );
    assert_eq!(config.rules(NameKind::Class).len(), 1);
    assert_eq!(config.rules(NameKind::Package).len(), 1);
    assert!(config.rules(NameKind::Variable).is_empty());
}

#[test_case("order", "Order", "PurchaseOrder"; "token match")]
#[test_case("item", "Item", "Item"; "no match")]
fn NameConvert___convert_class___applies_token_rule(token: &str, internal: &str, expected: &str) {
    let config = bound(&["-Xname-convert", "-class-name", "-token=order", "-name=PurchaseOrder"]);

    assert_eq!(config.convert(NameKind::Class, token, internal), expected);
}

#[test]
fn NameConvert___convert_package___rewrites_with_regex() {
    let config = bound(&[
        "-Xname-convert",
        "-package-name",
        "-regex=^com\\.legacy",
        "-name=com.modern",
    ]);

    let converted = config.convert(NameKind::Package, "urn:legacy", "com.legacy.orders");

    assert_eq!(converted, "com.modern.orders");
}

#[test]
fn NameConvert___mapping_without_name___is_rejected() {
    let mut plugin = OptionPlugin::<NameConvert>::new().unwrap();
    let args = strings(&["-Xname-convert", "-constant-name", "-token=MAX"]);

    let err = plugin.parse_argument(&args, 0).unwrap_err();

    assert!(err.to_string().contains("-name"));
}

#[test]
fn NameConvert___invalid_regex___reports_conversion() {
    let mut plugin = OptionPlugin::<NameConvert>::new().unwrap();
    let args = strings(&["-Xname-convert", "-variable-name", "-regex=(", "-name=x"]);

    let err = plugin.parse_argument(&args, 0).unwrap_err();

    match err {
        PluginError::BadCommandLine { source, .. } => assert_eq!(source.error_code(), 6),
        other => panic!("unexpected error: {other}"),
    }
}
