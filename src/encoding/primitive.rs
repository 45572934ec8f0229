// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Leaf codecs for builtin scalar types.
//!
//! Each leaf codec reads or writes exactly one element. Numeric codecs honour
//! [`CodecOptions::lenient_numbers`](crate::CodecOptions::lenient_numbers).

use super::codec::Codec;
use super::context::{DecodeContext, EncodeContext};
use crate::core::{CodecError, CodecValue, ElementKind, Result};
use crate::io::traits::{StructuredReader, StructuredWriter};

/// Largest float that converts to `i64` without saturating.
const I64_FLOAT_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert an integral float to `i64`, rejecting fractions and out-of-range values.
fn integral_float(value: f64, target: &str) -> Result<i64> {
    let in_range = (-I64_FLOAT_BOUND..I64_FLOAT_BOUND).contains(&value);
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i64)
    } else {
        Err(CodecError::type_mismatch(target, format!("float64 {value}")))
    }
}

/// Codec for `bool`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

impl Codec<bool> for BoolCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<bool> {
        ctx.reader().read_bool()
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &bool) -> Result<()> {
        ctx.writer().write_bool(*value)
    }
}

/// Codec for `i32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int32Codec;

impl Codec<i32> for Int32Codec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<i32> {
        let lenient = ctx.options().lenient_numbers;
        let reader = ctx.reader();
        if lenient && reader.peek_kind()? == Some(ElementKind::Float64) {
            let value = integral_float(reader.read_f64()?, "int32")?;
            return i32::try_from(value).map_err(|_| {
                CodecError::format("int32", format!("value {value} does not fit in 32 bits"))
            });
        }
        reader.read_i32()
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &i32) -> Result<()> {
        ctx.writer().write_i32(*value)
    }
}

/// Codec for `i64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int64Codec;

impl Codec<i64> for Int64Codec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<i64> {
        let lenient = ctx.options().lenient_numbers;
        let reader = ctx.reader();
        if lenient && reader.peek_kind()? == Some(ElementKind::Float64) {
            return integral_float(reader.read_f64()?, "int64");
        }
        reader.read_i64()
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &i64) -> Result<()> {
        ctx.writer().write_i64(*value)
    }
}

/// Codec for `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float64Codec;

impl Codec<f64> for Float64Codec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<f64> {
        let lenient = ctx.options().lenient_numbers;
        let reader = ctx.reader();
        match reader.peek_kind()? {
            Some(ElementKind::Int32 | ElementKind::Int64) if lenient => {
                Ok(reader.read_i64()? as f64)
            }
            _ => reader.read_f64(),
        }
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &f64) -> Result<()> {
        ctx.writer().write_f64(*value)
    }
}

/// Codec for `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

impl Codec<String> for StringCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<String> {
        ctx.reader().read_string()
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &String) -> Result<()> {
        ctx.writer().write_string(value)
    }
}

/// Codec for byte strings held as `Vec<u8>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesCodec;

impl Codec<Vec<u8>> for BytesCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<Vec<u8>> {
        ctx.reader().read_bytes()
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &Vec<u8>) -> Result<()> {
        ctx.writer().write_bytes(value)
    }
}

// =============================================================================
// Dynamic Value Codec
// =============================================================================

/// Codec for [`CodecValue`], reading or writing whatever element is present.
///
/// Restricted with [`ValueCodec::of_kind`], it only accepts elements of one
/// kind, which makes it usable as a typed slot of a
/// [`DynTupleCodec`](super::tuple::DynTupleCodec).
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCodec {
    kind: Option<ElementKind>,
}

impl ValueCodec {
    /// Accept any element.
    pub const fn any() -> Self {
        Self { kind: None }
    }

    /// Accept only elements of `kind`.
    pub const fn of_kind(kind: ElementKind) -> Self {
        Self { kind: Some(kind) }
    }

    /// The accepted kind, or `None` if any element is accepted.
    pub const fn kind(&self) -> Option<ElementKind> {
        self.kind
    }

    fn check(&self, found: ElementKind) -> Result<()> {
        match self.kind {
            Some(expected) if expected != found => {
                Err(CodecError::type_mismatch(expected.as_str(), found.as_str()))
            }
            _ => Ok(()),
        }
    }
}

fn read_value(reader: &mut dyn StructuredReader) -> Result<CodecValue> {
    let kind = reader.peek_kind()?.ok_or_else(|| {
        CodecError::format("value", "expected an element, found end of array")
    })?;
    Ok(match kind {
        ElementKind::Null => {
            reader.read_null()?;
            CodecValue::Null
        }
        ElementKind::Bool => CodecValue::Bool(reader.read_bool()?),
        ElementKind::Int32 => CodecValue::Int32(reader.read_i32()?),
        ElementKind::Int64 => CodecValue::Int64(reader.read_i64()?),
        ElementKind::Float64 => CodecValue::Float64(reader.read_f64()?),
        ElementKind::String => CodecValue::String(reader.read_string()?),
        ElementKind::Bytes => CodecValue::Bytes(reader.read_bytes()?),
        ElementKind::Array => {
            reader.read_array_start()?;
            let mut items = Vec::new();
            while reader.has_next_element()? {
                items.push(read_value(reader)?);
            }
            reader.read_array_end()?;
            CodecValue::Array(items)
        }
    })
}

fn write_value(writer: &mut dyn StructuredWriter, value: &CodecValue) -> Result<()> {
    match value {
        CodecValue::Null => writer.write_null(),
        CodecValue::Bool(v) => writer.write_bool(*v),
        CodecValue::Int32(v) => writer.write_i32(*v),
        CodecValue::Int64(v) => writer.write_i64(*v),
        CodecValue::Float64(v) => writer.write_f64(*v),
        CodecValue::String(v) => writer.write_string(v),
        CodecValue::Bytes(v) => writer.write_bytes(v),
        CodecValue::Array(items) => {
            writer.write_array_start()?;
            for item in items {
                write_value(writer, item)?;
            }
            writer.write_array_end()
        }
    }
}

impl Codec<CodecValue> for ValueCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<CodecValue> {
        let reader = ctx.reader();
        match (self.kind, reader.peek_kind()?) {
            // the reader decides which forms it accepts as a byte string
            (Some(ElementKind::Bytes), Some(_)) => Ok(CodecValue::Bytes(reader.read_bytes()?)),
            (Some(ElementKind::Int64), Some(ElementKind::Int32)) => {
                Ok(CodecValue::Int64(reader.read_i64()?))
            }
            (_, Some(found)) => {
                self.check(found)?;
                read_value(reader)
            }
            (_, None) => read_value(reader),
        }
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &CodecValue) -> Result<()> {
        self.check(value.kind())?;
        write_value(ctx.writer(), value)
    }
}
