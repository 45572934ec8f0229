// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tagged binary encoding.
//!
//! Every element starts with a one-byte tag. Scalars follow their tag with a
//! little-endian payload; strings and byte strings carry a `u32` length
//! prefix. Arrays are delimited by [`TAG_ARRAY`] and [`TAG_END`], so a reader
//! can tell where an array ends without knowing its length up front.
//!
//! ```text
//! [1, "a", true]  =>  08 | 03 01000000 | 06 01000000 61 | 02 01 | 00
//! ```

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::core::{CodecError, ElementKind, Result};

use super::traits::{StructuredReader, StructuredWriter};

/// End of the innermost array.
pub const TAG_END: u8 = 0x00;
/// Null marker, no payload.
pub const TAG_NULL: u8 = 0x01;
/// Boolean, one byte payload.
pub const TAG_BOOL: u8 = 0x02;
/// 32-bit signed integer.
pub const TAG_INT32: u8 = 0x03;
/// 64-bit signed integer.
pub const TAG_INT64: u8 = 0x04;
/// 64-bit float.
pub const TAG_FLOAT64: u8 = 0x05;
/// UTF-8 string with `u32` length prefix.
pub const TAG_STRING: u8 = 0x06;
/// Byte string with `u32` length prefix.
pub const TAG_BYTES: u8 = 0x07;
/// Start of an array.
pub const TAG_ARRAY: u8 = 0x08;

fn kind_of_tag(tag: u8, offset: usize) -> Result<Option<ElementKind>> {
    let kind = match tag {
        TAG_END => return Ok(None),
        TAG_NULL => ElementKind::Null,
        TAG_BOOL => ElementKind::Bool,
        TAG_INT32 => ElementKind::Int32,
        TAG_INT64 => ElementKind::Int64,
        TAG_FLOAT64 => ElementKind::Float64,
        TAG_STRING => ElementKind::String,
        TAG_BYTES => ElementKind::Bytes,
        TAG_ARRAY => ElementKind::Array,
        _ => {
            return Err(CodecError::format(
                "binary reader",
                format!("unknown tag 0x{tag:02x} at position {offset}"),
            ))
        }
    };
    Ok(Some(kind))
}

// =============================================================================
// Writer
// =============================================================================

/// Writer emitting the tagged binary encoding into any [`Write`] sink.
///
/// # Example
///
/// ```
/// use tuplecodec::io::binary::BinaryWriter;
/// use tuplecodec::io::traits::StructuredWriter;
///
/// let mut writer = BinaryWriter::new(Vec::new());
/// writer.write_array_start().unwrap();
/// writer.write_bool(true).unwrap();
/// writer.write_array_end().unwrap();
/// assert_eq!(writer.into_inner(), vec![0x08, 0x02, 0x01, 0x00]);
/// ```
pub struct BinaryWriter<W: Write> {
    sink: W,
    depth: usize,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a writer over `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink, depth: 0 }
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len = u32::try_from(len).map_err(|_| {
            CodecError::encode("binary", format!("length {len} exceeds u32::MAX"))
        })?;
        self.sink.write_u32::<LittleEndian>(len)?;
        Ok(())
    }
}

impl<W: Write> StructuredWriter for BinaryWriter<W> {
    fn write_array_start(&mut self) -> Result<()> {
        self.sink.write_u8(TAG_ARRAY)?;
        self.depth += 1;
        Ok(())
    }

    fn write_array_end(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(CodecError::format("array end", "no array is open"));
        }
        self.sink.write_u8(TAG_END)?;
        self.depth -= 1;
        Ok(())
    }

    fn write_null(&mut self) -> Result<()> {
        self.sink.write_u8(TAG_NULL)?;
        Ok(())
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.sink.write_u8(TAG_BOOL)?;
        self.sink.write_u8(u8::from(value))?;
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.sink.write_u8(TAG_INT32)?;
        self.sink.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.sink.write_u8(TAG_INT64)?;
        self.sink.write_i64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.sink.write_u8(TAG_FLOAT64)?;
        self.sink.write_f64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        self.sink.write_u8(TAG_STRING)?;
        self.write_len(value.len())?;
        self.sink.write_all(value.as_bytes())?;
        Ok(())
    }

    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.sink.write_u8(TAG_BYTES)?;
        self.write_len(value.len())?;
        self.sink.write_all(value)?;
        Ok(())
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

// =============================================================================
// Reader
// =============================================================================

/// Reader over a buffer in the tagged binary encoding.
///
/// The buffer holds exactly one top-level element. Once it is consumed the
/// reader reports no further elements; any bytes left over are reported by
/// [`remaining`](Self::remaining).
pub struct BinaryReader<'a> {
    data: &'a [u8],
    offset: usize,
    depth: usize,
    /// Set once the top-level element has been fully read
    done: bool,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            depth: 0,
            done: false,
        }
    }

    /// Get the current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the bytes not yet read.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset.min(self.data.len())..]
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.data.len().saturating_sub(self.offset);
        if len > available {
            return Err(CodecError::buffer_too_short(
                len,
                available,
                self.offset as u64,
            ));
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn peek_tag(&self) -> Result<u8> {
        self.data
            .get(self.offset)
            .copied()
            .ok_or_else(|| CodecError::buffer_too_short(1, 0, self.offset as u64))
    }

    /// Consume the tag for `kind`, leaving the reader untouched on mismatch.
    fn expect_tag(&mut self, kind: ElementKind, tag: u8) -> Result<()> {
        if self.done && self.depth == 0 {
            return Err(CodecError::format(
                "binary reader",
                format!("expected {kind}, but the top-level value was already read"),
            ));
        }
        let found = self.peek_tag()?;
        if found != tag {
            let found = match kind_of_tag(found, self.offset)? {
                Some(kind) => kind.as_str(),
                None => "end of array",
            };
            return Err(CodecError::type_mismatch(kind.as_str(), found));
        }
        self.offset += 1;
        Ok(())
    }

    fn complete_element(&mut self) {
        if self.depth == 0 {
            self.done = true;
        }
    }

    fn read_len(&mut self) -> Result<usize> {
        Ok(LittleEndian::read_u32(self.take(4)?) as usize)
    }
}

impl StructuredReader for BinaryReader<'_> {
    fn peek_kind(&mut self) -> Result<Option<ElementKind>> {
        if self.done && self.depth == 0 {
            return Ok(None);
        }
        let tag = self.peek_tag()?;
        if tag == TAG_END && self.depth == 0 {
            return Err(CodecError::format(
                "binary reader",
                format!("end marker outside of an array at position {}", self.offset),
            ));
        }
        kind_of_tag(tag, self.offset)
    }

    fn read_array_start(&mut self) -> Result<()> {
        self.expect_tag(ElementKind::Array, TAG_ARRAY)?;
        self.depth += 1;
        Ok(())
    }

    fn read_array_end(&mut self) -> Result<()> {
        if self.depth == 0 {
            return Err(CodecError::format("array end", "no array is open"));
        }
        let tag = self.peek_tag()?;
        if tag != TAG_END {
            return Err(CodecError::format(
                "array end",
                format!(
                    "element remains before the end marker at position {}",
                    self.offset
                ),
            ));
        }
        self.offset += 1;
        self.depth -= 1;
        self.complete_element();
        Ok(())
    }

    fn read_null(&mut self) -> Result<()> {
        self.expect_tag(ElementKind::Null, TAG_NULL)?;
        self.complete_element();
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool> {
        self.expect_tag(ElementKind::Bool, TAG_BOOL)?;
        let value = match self.take(1)?[0] {
            0 => false,
            1 => true,
            other => {
                return Err(CodecError::format(
                    "bool",
                    format!("invalid boolean byte 0x{other:02x}"),
                ))
            }
        };
        self.complete_element();
        Ok(value)
    }

    fn read_i32(&mut self) -> Result<i32> {
        self.expect_tag(ElementKind::Int32, TAG_INT32)?;
        let value = LittleEndian::read_i32(self.take(4)?);
        self.complete_element();
        Ok(value)
    }

    fn read_i64(&mut self) -> Result<i64> {
        let value = match self.peek_tag()? {
            TAG_INT32 => {
                self.expect_tag(ElementKind::Int32, TAG_INT32)?;
                LittleEndian::read_i32(self.take(4)?) as i64
            }
            _ => {
                self.expect_tag(ElementKind::Int64, TAG_INT64)?;
                LittleEndian::read_i64(self.take(8)?)
            }
        };
        self.complete_element();
        Ok(value)
    }

    fn read_f64(&mut self) -> Result<f64> {
        self.expect_tag(ElementKind::Float64, TAG_FLOAT64)?;
        let value = LittleEndian::read_f64(self.take(8)?);
        self.complete_element();
        Ok(value)
    }

    fn read_string(&mut self) -> Result<String> {
        self.expect_tag(ElementKind::String, TAG_STRING)?;
        let len = self.read_len()?;
        let start = self.offset;
        let bytes = self.take(len)?;
        let value = std::str::from_utf8(bytes)
            .map_err(|e| CodecError::parse("string", format!("invalid UTF-8 at {start}: {e}")))?
            .to_string();
        self.complete_element();
        Ok(value)
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.expect_tag(ElementKind::Bytes, TAG_BYTES)?;
        let len = self.read_len()?;
        let value = self.take(len)?.to_vec();
        self.complete_element();
        Ok(value)
    }

    fn depth(&self) -> usize {
        self.depth
    }
}
