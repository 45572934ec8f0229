// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tuple codecs across the binary, JSON and value-tree encodings.
//!
//! Tests cover:
//! - Exact binary layout of a tuple frame
//! - Truncated and trailing binary input
//! - JSON byte-string forms and options loaded from TOML
//! - Arity errors reported the same way by every reader

mod common;

use common::{array, ints};
use tuplecodec::encoding::{
    BoolCodec, BytesCodec, DynTupleCodec, Float64Codec, Int32Codec, Int64Codec, StringCodec,
    TupleCodec, ValueCodec,
};
use tuplecodec::io::binary::{TAG_ARRAY, TAG_BOOL, TAG_END, TAG_INT32, TAG_STRING};
use tuplecodec::io::json::{from_json_str, to_json_string};
use tuplecodec::io::{decode_from_slice, decode_from_value, encode_to_vec};
use tuplecodec::{CodecError, CodecOptions, CodecValue, ElementKind};

fn sample_codec() -> TupleCodec<(Int32Codec, StringCodec, BoolCodec)> {
    TupleCodec::new((Int32Codec, StringCodec, BoolCodec))
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_binary_layout() {
    let bytes = encode_to_vec(&sample_codec(), &(1, "a".to_string(), true)).unwrap();
    let expected = [
        TAG_ARRAY, TAG_INT32, 1, 0, 0, 0, TAG_STRING, 1, 0, 0, 0, b'a', TAG_BOOL, 1, TAG_END,
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn test_binary_truncated_frame() {
    let bytes = encode_to_vec(&sample_codec(), &(1, "a".to_string(), true)).unwrap();
    let truncated = &bytes[..bytes.len() - 1];
    let err = decode_from_slice::<(i32, String, bool), _>(&sample_codec(), truncated).unwrap_err();
    assert!(err.is_format_error(), "unexpected error: {err}");
}

#[test]
fn test_binary_trailing_bytes() {
    let mut bytes = encode_to_vec(&sample_codec(), &(1, "a".to_string(), true)).unwrap();
    bytes.extend_from_slice(&[0xde, 0xad]);
    let err = decode_from_slice::<(i32, String, bool), _>(&sample_codec(), &bytes).unwrap_err();
    match err {
        CodecError::Format { message, .. } => assert!(message.contains("dead"), "{message}"),
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn test_binary_short_array() {
    let pair = TupleCodec::new((Int32Codec, StringCodec));
    let bytes = encode_to_vec(&pair, &(1, "a".to_string())).unwrap();
    let err = decode_from_slice::<(i32, String, bool), _>(&sample_codec(), &bytes).unwrap_err();
    assert_eq!(
        err,
        CodecError::ArrayTooShort {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_binary_long_array() {
    let four = TupleCodec::new((Int32Codec, StringCodec, BoolCodec, Int64Codec));
    let bytes = encode_to_vec(&four, &(1, "a".to_string(), true, 4i64)).unwrap();
    let err = decode_from_slice::<(i32, String, bool), _>(&sample_codec(), &bytes).unwrap_err();
    assert_eq!(err, CodecError::ArrayTooLong { expected: 3 });
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_arity_errors() {
    let options = CodecOptions::default();
    let short = from_json_str::<(i32, String, bool), _>(&sample_codec(), r#"[1, "a"]"#, options);
    assert_eq!(short.unwrap_err(), CodecError::array_too_short(3, 2));

    let long =
        from_json_str::<(i32, String, bool), _>(&sample_codec(), r#"[1, "a", true, 0]"#, options);
    assert_eq!(long.unwrap_err(), CodecError::array_too_long(3));
}

#[test]
fn test_json_invalid_text() {
    let err = from_json_str::<(i32, String, bool), _>(
        &sample_codec(),
        "[1, \"a\"",
        CodecOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CodecError::ParseError { .. }));
}

#[test]
fn test_json_bytes_forms() {
    let codec = TupleCodec::new((BytesCodec, Int32Codec));
    let value = (vec![0xca, 0xfe], 1);

    let plain = to_json_string(&codec, &value, CodecOptions::default()).unwrap();
    assert_eq!(plain, "[[202,254],1]");

    let hex_options = CodecOptions::new().with_bytes_as_hex(true);
    let hex = to_json_string(&codec, &value, hex_options).unwrap();
    assert_eq!(hex, r#"["cafe",1]"#);

    for json in [plain, hex] {
        let decoded: (Vec<u8>, i32) =
            from_json_str(&codec, &json, CodecOptions::default()).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn test_json_float_exact() {
    let codec = TupleCodec::new((Float64Codec,));
    for f in [1.0715660391465826e-75, 0.1 + 0.2, f64::MIN_POSITIVE, 5e-324, f64::MAX, -3.0] {
        let json = to_json_string(&codec, &(f,), CodecOptions::default()).unwrap();
        let (decoded,): (f64,) = from_json_str(&codec, &json, CodecOptions::default()).unwrap();
        assert_eq!(decoded.to_bits(), f.to_bits(), "{json}");
    }
}

#[test]
fn test_json_typed_dynamic_slots() {
    let codec = DynTupleCodec::builder(3)
        .slot(0, ValueCodec::of_kind(ElementKind::Int64))
        .slot(1, ValueCodec::of_kind(ElementKind::Bytes))
        .slot(2, ValueCodec::of_kind(ElementKind::Int64))
        .build()
        .unwrap();
    let value = vec![
        CodecValue::Int64(5),
        CodecValue::Bytes(vec![1, 0xff]),
        CodecValue::Int64(1 << 40),
    ];

    for hex in [false, true] {
        let options = CodecOptions::new().with_bytes_as_hex(hex);
        let json = to_json_string(&codec, &value, options).unwrap();
        let decoded: Vec<CodecValue> = from_json_str(&codec, &json, options).unwrap();
        assert_eq!(decoded, value, "{json}");
    }
}

#[test]
fn test_value_tree_bytes_not_hex() {
    let codec = TupleCodec::new((BytesCodec,));
    let err = decode_from_value::<(Vec<u8>,), _>(&codec, &array(vec![CodecValue::from("abcd")]))
        .unwrap_err();
    assert!(matches!(err, CodecError::TypeMismatch { .. }));

    let decoded: (Vec<u8>,) = from_json_str(&codec, r#"["abcd"]"#, CodecOptions::default()).unwrap();
    assert_eq!(decoded, (vec![0xab, 0xcd],));
}

#[test]
fn test_options_from_toml() {
    let options = CodecOptions::from_toml_str("lenient_numbers = true\n").unwrap();
    assert!(options.lenient_numbers);
    assert!(!options.bytes_as_hex);

    let codec = TupleCodec::new((Int32Codec, Int64Codec));
    let decoded: (i32, i64) = from_json_str(&codec, "[2.0, 3.0]", options).unwrap();
    assert_eq!(decoded, (2, 3));
    assert!(from_json_str::<(i32, i64), _>(&codec, "[2.0, 3.0]", CodecOptions::default()).is_err());

    assert!(CodecOptions::from_toml_str("unknown = 1").is_err());
}

// ============================================================================
// Value Tree
// ============================================================================

#[test]
fn test_value_tree_nested_tuple() {
    let codec = TupleCodec::new((TupleCodec::new((Int32Codec, Int32Codec)), StringCodec));
    let tree = array(vec![array(ints([1, 2])), CodecValue::from("z")]);
    let decoded: ((i32, i32), String) = decode_from_value(&codec, &tree).unwrap();
    assert_eq!(decoded, ((1, 2), "z".to_string()));

    let bad = array(vec![array(ints([1])), CodecValue::from("z")]);
    let err = decode_from_value::<((i32, i32), String), _>(&codec, &bad).unwrap_err();
    assert_eq!(err, CodecError::array_too_short(2, 1));
}
