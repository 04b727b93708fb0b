#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn descriptor(name: &str) -> OptionDescriptor {
    OptionDescriptor::new(name)
}

#[test_case(" 42 ", 42; "surrounding whitespace")]
#[test_case("-7", -7; "negative")]
#[test_case("0", 0; "zero")]
fn ParserRegistry___builtin_i32___parses_trimmed_text(text: &str, expected: i32) {
    let registry = ParserRegistry::with_builtins();

    assert_eq!(registry.parse::<i32>(&descriptor("n"), text).unwrap(), expected);
}

#[test_case("true", true; "lowercase true")]
#[test_case("TRUE", true; "uppercase true")]
#[test_case(" false ", false; "padded false")]
fn ParserRegistry___builtin_bool___parses_case_insensitively(text: &str, expected: bool) {
    let registry = ParserRegistry::with_builtins();

    assert_eq!(registry.parse::<bool>(&descriptor("b"), text).unwrap(), expected);
}

#[test]
fn ParserRegistry___builtin_bool_garbage___is_conversion_error() {
    let registry = ParserRegistry::with_builtins();

    let err = registry.parse::<bool>(&descriptor("enabled"), "yes").unwrap_err();

    assert!(matches!(err, BindError::Conversion { ref option, ref text, .. }
        if option == "-enabled" && text == "yes"));
}

#[test]
fn ParserRegistry___unparsable_integer___names_option_and_text() {
    let registry = ParserRegistry::with_builtins();

    let err = registry.parse::<u16>(&descriptor("port"), "eighty").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("-port"), "{message}");
    assert!(message.contains("eighty"), "{message}");
}

#[test]
fn ParserRegistry___builtin_float___parses() {
    let registry = ParserRegistry::with_builtins();

    assert_eq!(registry.parse::<f64>(&descriptor("ratio"), "0.25").unwrap(), 0.25);
}

#[test]
fn ParserRegistry___builtin_char___takes_first_character() {
    let registry = ParserRegistry::with_builtins();

    assert_eq!(registry.parse::<char>(&descriptor("sep"), ";;").unwrap(), ';');
    assert!(registry.parse::<char>(&descriptor("sep"), "").is_err());
}

#[test]
fn ParserRegistry___builtin_string___is_verbatim() {
    let registry = ParserRegistry::with_builtins();

    assert_eq!(registry.parse::<String>(&descriptor("s"), " a b ").unwrap(), " a b ");
}

#[test]
fn ParserRegistry___builtin_regex___compiles_literal() {
    let registry = ParserRegistry::with_builtins();

    let regex = registry.parse::<Regex>(&descriptor("regex"), ".*Person").unwrap();

    assert!(regex.is_match("LegalPerson"));
    assert!(registry.parse::<Regex>(&descriptor("regex"), "(").is_err());
}

#[test]
fn ParserRegistry___builtin_class___validates_qualified_name() {
    let registry = ParserRegistry::with_builtins();

    let class = registry
        .parse::<QualifiedName>(&descriptor("class-name"), "java.time.LocalDate")
        .unwrap();

    assert_eq!(class.simple_name(), "LocalDate");
    assert!(registry.parse::<QualifiedName>(&descriptor("class-name"), "1.x").is_err());
}

#[test]
fn ParserRegistry___no_parser___is_unresolved() {
    let registry = ParserRegistry::new();

    let err = registry.parse::<i32>(&descriptor("n"), "1").unwrap_err();

    assert!(matches!(err, BindError::UnresolvedParser { type_name: "i32", .. }));
}

#[test]
fn ParserRegistry___option_parser___shadows_type_parser() {
    let mut registry = ParserRegistry::with_builtins();
    registry.register_option("magic-string", |_, text: &str| {
        Ok::<_, Infallible>(format!("abc{text}"))
    });

    assert_eq!(
        registry.parse::<String>(&descriptor("magic-string"), "def").unwrap(),
        "abcdef"
    );
    assert_eq!(registry.parse::<String>(&descriptor("other"), "def").unwrap(), "def");
}

#[test]
fn ParserRegistry___option_parser_of_other_type___falls_back_to_type_parser() {
    let mut registry = ParserRegistry::with_builtins();
    registry.register_option("int-list2", |_, text: &str| {
        text.split(',').map(str::parse::<i32>).collect::<Result<Vec<_>, _>>()
    });

    assert!(registry.can_parse(&descriptor("int-list2"), TypeKey::of::<Vec<i32>>()));
    assert_eq!(registry.parse::<i32>(&descriptor("int-list2"), "4").unwrap(), 4);
    assert_eq!(
        registry.parse::<Vec<i32>>(&descriptor("int-list2"), "4,5,6").unwrap(),
        vec![4, 5, 6]
    );
}

#[test]
fn ParserRegistry___option_parser___receives_option_name() {
    let mut registry = ParserRegistry::new();
    registry.register_option("tag", |option: &str, text: &str| {
        Ok::<_, Infallible>(format!("{option}:{text}"))
    });

    assert_eq!(registry.parse::<String>(&descriptor("tag"), "x").unwrap(), "tag:x");
}

#[test]
fn ParserRegistry___later_registration___replaces_earlier() {
    let mut registry = ParserRegistry::with_builtins();
    registry.register_type(|_, text: &str| Ok::<_, Infallible>(text.len() as u32));

    assert_eq!(registry.parse::<u32>(&descriptor("n"), "abcd").unwrap(), 4);
}

#[test]
fn ParserRegistry___custom_type___resolves_by_type() {
    #[derive(Debug, PartialEq)]
    struct Port(u16);

    let mut registry = ParserRegistry::new();
    registry.register_type(|_, text: &str| text.parse::<u16>().map(Port));

    assert!(registry.can_parse(&descriptor("p"), TypeKey::of::<Port>()));
    assert_eq!(registry.parse::<Port>(&descriptor("p"), "8080").unwrap(), Port(8080));
}

#[test]
fn ParserRegistry___debug___lists_registered_names() {
    let mut registry = ParserRegistry::new();
    registry.register_option("tag", |_, text: &str| Ok::<_, Infallible>(text.to_string()));

    assert!(format!("{registry:?}").contains("tag"));
}
