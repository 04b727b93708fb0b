#![allow(non_snake_case)]

use super::*;
use std::collections::{BTreeSet, VecDeque};

#[derive(Default, Debug, PartialEq)]
struct Point {
    x: Option<i32>,
    y: Option<i32>,
}

impl Options for Point {
    fn option_fields() -> Vec<OptionField<Self>> {
        vec![
            OptionField::single(OptionDescriptor::new("x"), |p| &p.x, |p| &mut p.x),
            OptionField::single(
                OptionDescriptor::new("y").with_default("0"),
                |p| &p.y,
                |p| &mut p.y,
            ),
        ]
    }
}

#[derive(Default, Debug)]
struct Shapes {
    verbose: bool,
    level: Option<u8>,
    ids: BTreeSet<u16>,
    origin: Option<Point>,
    path: VecDeque<Point>,
}

impl Options for Shapes {
    fn option_fields() -> Vec<OptionField<Self>> {
        vec![
            OptionField::flag(OptionDescriptor::new("verbose"), |s| &mut s.verbose),
            OptionField::single(OptionDescriptor::new("level"), |s| &s.level, |s| &mut s.level),
            OptionField::collection(OptionDescriptor::new("id"), |s| &s.ids, |s| &mut s.ids),
            OptionField::nested(OptionDescriptor::new("origin"), |s| &s.origin, |s| &mut s.origin),
            OptionField::nested_collection(
                OptionDescriptor::new("path"),
                |s| &s.path,
                |s| &mut s.path,
            ),
        ]
    }
}

fn field(name: &str) -> OptionField<Shapes> {
    Shapes::option_fields()
        .into_iter()
        .find(|field| field.descriptor().name == name)
        .unwrap()
}

#[test]
fn OptionField___info___reports_shape_and_element() {
    let infos = describe::<Shapes>();

    let shapes: Vec<_> = infos.iter().map(|info| (info.shape, info.element)).collect();
    assert_eq!(
        shapes,
        vec![
            (Shape::Flag, Element::Scalar),
            (Shape::Single, Element::Scalar),
            (Shape::Collection(CollectionKind::Set), Element::Scalar),
            (Shape::Single, Element::Composite),
            (Shape::Collection(CollectionKind::Queue), Element::Composite),
        ]
    );
}

#[test]
fn OptionField___info___value_type_is_element_type_for_collections() {
    let info = field("id").info();

    assert!(info.value_type.is::<u16>());
    assert!(info.nested.is_none());
}

#[test]
fn OptionField___nested_info___describes_element_fields() {
    let info = field("path").info();

    let nested = (info.nested.unwrap())();
    let names: Vec<_> = nested.iter().map(|f| f.descriptor.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn OptionField___flag___is_never_empty() {
    let shapes = Shapes::default();

    assert!(!field("verbose").is_empty(&shapes));
    assert!(field("level").is_empty(&shapes));
    assert!(field("id").is_empty(&shapes));
    assert!(field("origin").is_empty(&shapes));
}

#[test]
fn OptionField___flag_with_default___fails_check() {
    let flag: OptionField<Shapes> =
        OptionField::flag(OptionDescriptor::new("verbose").with_default("true"), |s| {
            &mut s.verbose
        });

    let err = flag.check().unwrap_err();

    assert!(matches!(err, BindError::InvalidDescriptor { ref option, .. } if option == "-verbose"));
}

#[test]
fn OptionField___required_flag___fails_check() {
    let flag: OptionField<Shapes> =
        OptionField::flag(OptionDescriptor::new("verbose").with_required(true), |s| {
            &mut s.verbose
        });

    assert!(flag.check().is_err());
}

#[test]
fn OptionField___invalid___reports_reason_at_check() {
    let map: OptionField<Shapes> =
        OptionField::invalid(OptionDescriptor::new("env"), "map fields cannot be options");

    let err = map.check().unwrap_err();

    assert_eq!(err.error_code(), 4);
    assert!(err.to_string().contains("map fields cannot be options"));
}

#[test]
fn OptionField___unsupported_collection___names_type_at_check() {
    let array: OptionField<Shapes> =
        OptionField::unsupported_collection(OptionDescriptor::new("dims"), "[u8; 3]");

    let err = array.check().unwrap_err();

    assert!(matches!(err, BindError::UnsupportedCollection { ref type_name, .. } if type_name == "[u8; 3]"));
}

#[test]
fn OptionField___rejected_slot___refuses_to_bind() {
    let binder = Binder::new();
    let array: OptionField<Shapes> =
        OptionField::unsupported_collection(OptionDescriptor::new("dims"), "[u8; 3]");
    let mut shapes = Shapes::default();

    let err = array.bind_flag(&binder, &mut shapes, &["-dims"], 0).unwrap_err();

    assert_eq!(err.error_code(), 3);
}

#[test]
fn OptionField___single_apply_default___stores_parsed_value() {
    let binder = Binder::new();
    let mut shapes = Shapes::default();

    field("level").apply_default(&binder, &mut shapes, "7").unwrap();

    assert_eq!(shapes.level, Some(7));
}

#[test]
fn OptionField___collection_apply_default___inserts_single_element() {
    let binder = Binder::new();
    let mut shapes = Shapes::default();

    field("id").apply_default(&binder, &mut shapes, "12").unwrap();

    assert_eq!(shapes.ids.into_iter().collect::<Vec<_>>(), vec![12]);
}

#[test]
fn OptionField___composite_without_parser___default_is_unresolved() {
    let binder = Binder::new();
    let mut shapes = Shapes::default();

    let err = field("origin")
        .apply_default(&binder, &mut shapes, "1,2")
        .unwrap_err();

    assert!(matches!(err, BindError::UnresolvedParser { .. }));
}

#[test]
fn OptionField___composite_with_type_parser___default_is_validated() {
    let mut binder = Binder::new();
    binder.register_type(|_, text: &str| {
        text.trim()
            .parse::<i32>()
            .map(|x| Point { x: Some(x), y: None })
    });
    let mut shapes = Shapes::default();

    field("origin").apply_default(&binder, &mut shapes, "4").unwrap();

    assert_eq!(shapes.origin, Some(Point { x: Some(4), y: Some(0) }));
}

#[test]
fn OptionField___scalar_exact_match___is_missing_value() {
    let binder = Binder::new();
    let mut shapes = Shapes::default();

    let err = field("level")
        .bind_flag(&binder, &mut shapes, &["-level"], 0)
        .unwrap_err();

    assert!(matches!(err, BindError::MissingValue { ref option, .. } if option == "-level"));
}

#[test]
fn OptionField___debug___shows_descriptor_and_type() {
    let debug = format!("{:?}", field("level"));

    assert!(debug.contains("OptionField"));
    assert!(debug.contains("u8"));
}
