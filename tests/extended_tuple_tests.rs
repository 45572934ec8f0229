// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Extended tuple codec integration tests.
//!
//! Tests cover:
//! - Nesting through a tuple codec bound to the rest slot
//! - A plain rest slot giving a flat eight-element array
//! - Deep nesting for arities beyond 15
//! - Registry resolution of 8-tuples with a registered nested rest type

mod common;

use common::{array, ints};
use tuplecodec::encoding::{ExtendedTupleCodec, Int32Codec, StringCodec, TupleCodec};
use tuplecodec::io::json::{from_json_str, to_json_string};
use tuplecodec::io::{decode_from_slice, decode_from_value, encode_to_value, encode_to_vec};
use tuplecodec::{CodecError, CodecOptions, CodecRegistry, CodecValue};

type Nine = (i32, i32, i32, i32, i32, i32, i32, (i32, i32));

fn nine_codec() -> ExtendedTupleCodec<
    (
        Int32Codec,
        Int32Codec,
        Int32Codec,
        Int32Codec,
        Int32Codec,
        Int32Codec,
        Int32Codec,
    ),
    TupleCodec<(Int32Codec, Int32Codec)>,
> {
    let i = Int32Codec;
    ExtendedTupleCodec::new((i, i, i, i, i, i, i), TupleCodec::new((i, i)))
}

#[test]
fn test_nine_values_nest_once() {
    let value: Nine = (1, 2, 3, 4, 5, 6, 7, (8, 9));
    let tree = encode_to_value(&nine_codec(), &value).unwrap();

    let mut expected = ints(1..=7);
    expected.push(array(ints([8, 9])));
    assert_eq!(tree, array(expected));

    let decoded: Nine = decode_from_value(&nine_codec(), &tree).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_nesting_in_json() {
    let value: Nine = (1, 2, 3, 4, 5, 6, 7, (8, 9));
    let json = to_json_string(&nine_codec(), &value, CodecOptions::default()).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6,7,[8,9]]");
    let decoded: Nine = from_json_str(&nine_codec(), &json, CodecOptions::default()).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_plain_rest_slot() {
    let i = Int32Codec;
    let codec = ExtendedTupleCodec::new((i, i, i, i, i, i, i), StringCodec);
    let value = (1, 2, 3, 4, 5, 6, 7, "rest".to_string());

    let json = to_json_string(&codec, &value, CodecOptions::default()).unwrap();
    assert_eq!(json, r#"[1,2,3,4,5,6,7,"rest"]"#);

    let bytes = encode_to_vec(&codec, &value).unwrap();
    let decoded: (i32, i32, i32, i32, i32, i32, i32, String) =
        decode_from_slice(&codec, &bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_plain_rest_rejects_extra_values() {
    let i = Int32Codec;
    let codec = ExtendedTupleCodec::new((i, i, i, i, i, i, i), i);
    let err = decode_from_value::<(i32, i32, i32, i32, i32, i32, i32, i32), _>(
        &codec,
        &array(ints(1..=9)),
    )
    .unwrap_err();
    assert_eq!(err, CodecError::ArrayTooLong { expected: 8 });
}

#[test]
fn test_flattened_values_rejected_by_nested_rest() {
    let tree = array(ints(1..=8));
    let err = decode_from_value::<Nine, _>(&nine_codec(), &tree).unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { .. }));
}

#[test]
fn test_sixteen_values_nest_twice() {
    let i = Int32Codec;
    let inner = ExtendedTupleCodec::new((i, i, i, i, i, i, i), TupleCodec::new((i, i)));
    let codec = ExtendedTupleCodec::new((i, i, i, i, i, i, i), inner);

    type Sixteen = (i32, i32, i32, i32, i32, i32, i32, Nine);
    let value: Sixteen = (1, 2, 3, 4, 5, 6, 7, (8, 9, 10, 11, 12, 13, 14, (15, 16)));

    let json = to_json_string(&codec, &value, CodecOptions::default()).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6,7,[8,9,10,11,12,13,14,[15,16]]]");

    let bytes = encode_to_vec(&codec, &value).unwrap();
    let decoded: Sixteen = decode_from_slice(&codec, &bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_with_rest_builder() {
    let i = Int32Codec;
    let codec = TupleCodec::new((i, i, i, i, i, i, i)).with_rest(TupleCodec::new((i, i)));
    assert_eq!(codec.arity(), 8);
    let tree = encode_to_value(&codec, &(1, 2, 3, 4, 5, 6, 7, (8, 9))).unwrap();
    assert_eq!(encode_to_value(&nine_codec(), &(1, 2, 3, 4, 5, 6, 7, (8, 9))).unwrap(), tree);
}

#[test]
fn test_resolved_from_registry() {
    let registry = CodecRegistry::with_builtins();

    let missing = registry.tuple_codec::<Nine>().err().unwrap();
    assert!(matches!(missing, CodecError::TypeNotFound { .. }));

    registry.register_tuple::<(i32, i32)>().unwrap();
    let codec = registry.tuple_codec::<Nine>().unwrap();
    let value: Nine = (1, 2, 3, 4, 5, 6, 7, (8, 9));
    let tree = encode_to_value(&codec, &value).unwrap();
    assert_eq!(tree, encode_to_value(&nine_codec(), &value).unwrap());
    assert!(matches!(tree.as_array().map(|a| &a[7]), Some(CodecValue::Array(_))));
}
