// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON encoding.
//!
//! JSON is carried through the value tree: encoding builds a [`CodecValue`]
//! with [`ValueWriter`] and converts it to `serde_json::Value`; decoding does
//! the reverse and replays the tree through [`ValueReader::for_json`].
//!
//! JSON has no byte-string type. Bytes are written as an array of numbers, or
//! as a hex string when [`CodecOptions::bytes_as_hex`] is set; the reader
//! accepts both forms.
//!
//! ## Example
//!
//! ```
//! use tuplecodec::encoding::{BoolCodec, Int32Codec, StringCodec, TupleCodec};
//! use tuplecodec::io::json::{from_json_str, to_json_string};
//! use tuplecodec::CodecOptions;
//!
//! # fn main() -> tuplecodec::Result<()> {
//! let codec = TupleCodec::new((Int32Codec, StringCodec, BoolCodec));
//! let value = (1, "a".to_string(), true);
//!
//! let json = to_json_string(&codec, &value, CodecOptions::default())?;
//! assert_eq!(json, r#"[1,"a",true]"#);
//!
//! let decoded: (i32, String, bool) = from_json_str(&codec, &json, CodecOptions::default())?;
//! assert_eq!(decoded, value);
//! # Ok(())
//! # }
//! ```

use crate::core::{CodecError, CodecOptions, CodecValue, Result};
use crate::encoding::Codec;

use super::value::{ValueReader, ValueWriter};
use super::{decode_value_with, encode_value_with};

/// Encode `value` as a JSON string.
pub fn to_json_string<T, C>(codec: &C, value: &T, options: CodecOptions) -> Result<String>
where
    C: Codec<T> + ?Sized,
{
    let json = to_json_value(codec, value, options)?;
    serde_json::to_string(&json).map_err(|e| CodecError::encode("json", format!("{e}")))
}

/// Encode `value` as a `serde_json::Value`.
pub fn to_json_value<T, C>(codec: &C, value: &T, options: CodecOptions) -> Result<serde_json::Value>
where
    C: Codec<T> + ?Sized,
{
    let mut writer = ValueWriter::new();
    encode_value_with(codec, value, &mut writer, options)?;
    codec_value_to_json(&writer.finish()?, options.bytes_as_hex)
}

/// Decode a value from a JSON string.
pub fn from_json_str<T, C>(codec: &C, json: &str, options: CodecOptions) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CodecError::parse("json", format!("{e}")))?;
    from_json_value(codec, &value, options)
}

/// Decode a value from a `serde_json::Value`.
pub fn from_json_value<T, C>(codec: &C, json: &serde_json::Value, options: CodecOptions) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    let tree = json_to_codec_value(json)?;
    let mut reader = ValueReader::for_json(&tree);
    decode_value_with(codec, &mut reader, options)
}

/// Convert a codec value to a JSON value.
pub fn codec_value_to_json(value: &CodecValue, bytes_as_hex: bool) -> Result<serde_json::Value> {
    match value {
        CodecValue::Null => Ok(serde_json::Value::Null),
        CodecValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        CodecValue::Int32(i) => Ok(serde_json::Value::Number(serde_json::Number::from(*i))),
        CodecValue::Int64(i) => Ok(serde_json::Value::Number(serde_json::Number::from(*i))),
        CodecValue::Float64(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or_else(|| CodecError::encode("json", format!("{f} is not representable"))),
        CodecValue::String(s) => Ok(serde_json::Value::String(s.clone())),
        CodecValue::Bytes(b) if bytes_as_hex => Ok(serde_json::Value::String(hex::encode(b))),
        CodecValue::Bytes(b) => Ok(serde_json::Value::Array(
            b.iter()
                .map(|byte| serde_json::Value::Number(serde_json::Number::from(*byte)))
                .collect(),
        )),
        CodecValue::Array(arr) => {
            let mut values = Vec::with_capacity(arr.len());
            for item in arr {
                values.push(codec_value_to_json(item, bytes_as_hex)?);
            }
            Ok(serde_json::Value::Array(values))
        }
    }
}

/// Convert a JSON value to a codec value.
///
/// Integers that fit in 32 bits become [`CodecValue::Int32`], other integers
/// [`CodecValue::Int64`]. Objects are rejected.
pub fn json_to_codec_value(value: &serde_json::Value) -> Result<CodecValue> {
    match value {
        serde_json::Value::Null => Ok(CodecValue::Null),
        serde_json::Value::Bool(b) => Ok(CodecValue::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i32::try_from(i)
                    .map(CodecValue::Int32)
                    .unwrap_or(CodecValue::Int64(i)))
            } else if n.is_u64() {
                Err(CodecError::unsupported(format!(
                    "JSON integer {n} exceeds the int64 range"
                )))
            } else if let Some(f) = n.as_f64() {
                Ok(CodecValue::Float64(f))
            } else {
                Err(CodecError::parse("number", "unknown number format"))
            }
        }
        serde_json::Value::String(s) => Ok(CodecValue::String(s.clone())),
        serde_json::Value::Array(arr) => {
            let mut values = Vec::with_capacity(arr.len());
            for item in arr {
                values.push(json_to_codec_value(item)?);
            }
            Ok(CodecValue::Array(values))
        }
        serde_json::Value::Object(_) => Err(CodecError::unsupported("JSON objects")),
    }
}
