#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized error code mapping tests
// ============================================================================

#[test_case(BindError::MissingValue { option: "-a".into(), owner: "T" }, 1; "missing value")]
#[test_case(BindError::UnresolvedParser { option: "-a".into(), type_name: "T" }, 2; "unresolved parser")]
#[test_case(
    BindError::UnsupportedCollection { option: "-a".into(), owner: "T", type_name: "[u8; 4]".into() },
    3;
    "unsupported collection"
)]
#[test_case(
    BindError::InvalidDescriptor { option: "-a".into(), owner: "T", reason: "map".into() },
    4;
    "invalid descriptor"
)]
#[test_case(BindError::RequiredOptionMissing { option: "-a".into(), owner: "T" }, 5; "required missing")]
#[test_case(
    BindError::Conversion { option: "-a".into(), text: "x".into(), source: "bad".into() },
    6;
    "conversion"
)]
fn BindError___variant___maps_to_correct_code(error: BindError, expected_code: u32) {
    assert_eq!(error.error_code(), expected_code);
}

#[test_case(
    PluginError::BadCommandLine {
        option: "X".into(),
        source: BindError::MissingValue { option: "-a".into(), owner: "T" },
    },
    1;
    "bad command line"
)]
#[test_case(PluginError::MissingRoot("T"), 2; "missing root")]
#[test_case(PluginError::PostParse { option: "X".into(), source: "dup".into() }, 3; "post parse")]
#[test_case(PluginError::UnrecognizedParameter("-x".into()), 4; "unrecognized")]
fn PluginError___variant___maps_to_correct_code(error: PluginError, expected_code: u32) {
    assert_eq!(error.error_code(), expected_code);
}
