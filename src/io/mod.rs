// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Structured stream encodings.
//!
//! - [`traits`] - Reader and writer traits every encoding implements
//! - [`value`] - In-memory [`CodecValue`] trees
//! - [`binary`] - Tagged binary encoding
//! - [`json`] - JSON text, layered on the value tree
//!
//! The functions in this module run a codec against one complete top-level
//! value and reject trailing input.

pub mod binary;
pub mod json;
pub mod traits;
pub mod value;

pub use binary::{BinaryReader, BinaryWriter};
pub use traits::{StructuredReader, StructuredWriter};
pub use value::{ValueReader, ValueWriter};

use crate::core::{CodecError, CodecOptions, CodecValue, Result};
use crate::encoding::{Codec, DecodeContext, EncodeContext};

/// Longest trailing-input excerpt quoted in error messages.
const TRAILING_EXCERPT: usize = 16;

/// Encode `value` with `codec` into any writer.
pub fn encode_value_with<T, C>(
    codec: &C,
    value: &T,
    writer: &mut dyn StructuredWriter,
    options: CodecOptions,
) -> Result<()>
where
    C: Codec<T> + ?Sized,
{
    let mut ctx = EncodeContext::with_options(writer, options);
    codec.encode(&mut ctx, value)
}

/// Decode one top-level value with `codec` from any reader.
///
/// Fails if the reader still holds elements afterwards.
pub fn decode_value_with<T, C>(
    codec: &C,
    reader: &mut dyn StructuredReader,
    options: CodecOptions,
) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    let value = codec.decode(&mut DecodeContext::with_options(reader, options))?;
    if reader.depth() != 0 || reader.has_next_element()? {
        return Err(CodecError::format(
            "top-level value",
            "input continues after the decoded value",
        ));
    }
    Ok(value)
}

/// Encode `value` into a [`CodecValue`] tree.
pub fn encode_to_value<T, C>(codec: &C, value: &T) -> Result<CodecValue>
where
    C: Codec<T> + ?Sized,
{
    encode_to_value_with(codec, value, CodecOptions::default())
}

/// Encode `value` into a [`CodecValue`] tree with explicit options.
pub fn encode_to_value_with<T, C>(codec: &C, value: &T, options: CodecOptions) -> Result<CodecValue>
where
    C: Codec<T> + ?Sized,
{
    let mut writer = ValueWriter::new();
    encode_value_with(codec, value, &mut writer, options)?;
    writer.finish()
}

/// Decode a value from a [`CodecValue`] tree.
pub fn decode_from_value<T, C>(codec: &C, tree: &CodecValue) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    decode_from_value_with(codec, tree, CodecOptions::default())
}

/// Decode a value from a [`CodecValue`] tree with explicit options.
pub fn decode_from_value_with<T, C>(codec: &C, tree: &CodecValue, options: CodecOptions) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    let mut reader = ValueReader::new(tree);
    decode_value_with(codec, &mut reader, options)
}

/// Encode `value` into the tagged binary encoding.
pub fn encode_to_vec<T, C>(codec: &C, value: &T) -> Result<Vec<u8>>
where
    C: Codec<T> + ?Sized,
{
    encode_to_vec_with(codec, value, CodecOptions::default())
}

/// Encode `value` into the tagged binary encoding with explicit options.
pub fn encode_to_vec_with<T, C>(codec: &C, value: &T, options: CodecOptions) -> Result<Vec<u8>>
where
    C: Codec<T> + ?Sized,
{
    let mut writer = BinaryWriter::new(Vec::new());
    encode_value_with(codec, value, &mut writer, options)?;
    Ok(writer.into_inner())
}

/// Decode a value from the tagged binary encoding.
pub fn decode_from_slice<T, C>(codec: &C, data: &[u8]) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    decode_from_slice_with(codec, data, CodecOptions::default())
}

/// Decode a value from the tagged binary encoding with explicit options.
///
/// Bytes left over after the top-level value are a format error.
pub fn decode_from_slice_with<T, C>(codec: &C, data: &[u8], options: CodecOptions) -> Result<T>
where
    C: Codec<T> + ?Sized,
{
    let mut reader = BinaryReader::new(data);
    let value = decode_value_with(codec, &mut reader, options)?;
    let trailing = reader.remaining();
    if !trailing.is_empty() {
        let excerpt = &trailing[..trailing.len().min(TRAILING_EXCERPT)];
        return Err(CodecError::format(
            "binary reader",
            format!(
                "{} trailing bytes at position {}: {}",
                trailing.len(),
                reader.position(),
                hex::encode(excerpt)
            ),
        ));
    }
    Ok(value)
}
