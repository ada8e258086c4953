use pretty_assertions::assert_eq;

use super::*;
use crate::error::WidthProblem;

const WASM32: TargetConfig = TargetConfig::WASM32;

#[test]
fn canonical_integers() {
    let sizes: Vec<_> = ["i1", "i8", "i16", "i32", "i64"]
        .into_iter()
        .map(|tag| native_size(tag, WASM32))
        .collect();
    assert_eq!(sizes, vec![Ok(1), Ok(1), Ok(2), Ok(4), Ok(8)]);
}

#[test]
fn floats() {
    assert_eq!(native_size("float", WASM32), Ok(4));
    assert_eq!(native_size("double", WASM32), Ok(8));
}

#[test]
fn canonical_table_agrees_with_parser() {
    for tag in crate::INT_TYPES.iter().chain(crate::FLOAT_TYPES) {
        let parsed = TypeTag::parse(tag).map(|t| t.size(WASM32));
        assert_eq!(canonical_size(tag).map(Ok), Some(parsed), "tag {tag}");
    }
}

#[test]
fn pointers_use_target_pointer_size() {
    for tag in ["i8*", "i32**", "double*", "%struct.node*", "i33*", "int*", "*"] {
        assert_eq!(native_size(tag, WASM32), Ok(4), "tag {tag}");
    }

    let wide = TargetConfig::new(8, 8).ok();
    assert_eq!(wide.map(|t| native_size("i8*", t)), Some(Ok(8)));
    // Scalars do not depend on the target.
    assert_eq!(wide.map(|t| native_size("i32", t)), Some(Ok(4)));
}

#[test]
fn extended_width_integers() {
    assert_eq!(native_size("i24", WASM32), Ok(3));
    assert_eq!(native_size("i128", WASM32), Ok(16));
    assert_eq!(native_size("i256", WASM32), Ok(32));
}

#[test]
fn malformed_widths_are_errors() {
    assert_eq!(
        native_size("i33", WASM32),
        Err(LayoutError::MalformedIntegerWidth {
            tag: "i33".to_owned(),
            reason: WidthProblem::NotByteMultiple { bits: 33 },
        })
    );
    assert!(native_size("i0", WASM32).is_err());
    assert!(native_size("i", WASM32).is_err());
    assert!(native_size("int", WASM32).is_err());
}

#[test]
fn unrecognized_tags_are_zero() {
    for tag in ["opaque", "", "SomeAggregate", "%struct.point", "{ i32, i8 }", "[4 x i32]"] {
        assert_eq!(native_size(tag, WASM32), Ok(0), "tag {tag:?}");
    }
}

#[test]
fn repeated_calls_agree() {
    for tag in ["i1", "i128", "float*", "opaque", "i33"] {
        assert_eq!(native_size(tag, WASM32), native_size(tag, WASM32));
    }
}
