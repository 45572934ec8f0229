// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Value-tree encoding.
//!
//! [`ValueWriter`] builds a [`CodecValue`] tree from writer calls and
//! [`ValueReader`] replays one as reader calls. The JSON encoding is layered
//! on top of this pair.

use crate::core::{CodecError, CodecValue, ElementKind, Result};

use super::traits::{StructuredReader, StructuredWriter};

// =============================================================================
// Reader
// =============================================================================

/// One open array: its elements and the index of the next unread one.
struct Frame<'a> {
    elements: &'a [CodecValue],
    next: usize,
}

/// Reader over a borrowed [`CodecValue`] tree.
pub struct ValueReader<'a> {
    /// Top-level element, cleared once consumed
    root: Option<&'a CodecValue>,
    /// Open arrays, innermost last
    frames: Vec<Frame<'a>>,
    /// Accept the JSON forms of a byte string
    json_bytes: bool,
}

impl<'a> ValueReader<'a> {
    /// Create a reader positioned on `root`.
    pub fn new(root: &'a CodecValue) -> Self {
        Self {
            root: Some(root),
            frames: Vec::new(),
            json_bytes: false,
        }
    }

    /// Create a reader over a tree converted from JSON.
    ///
    /// Byte strings may then arrive as a hex string or as an array of
    /// integers in `0..=255`.
    pub fn for_json(root: &'a CodecValue) -> Self {
        Self {
            json_bytes: true,
            ..Self::new(root)
        }
    }

    /// Whether the top-level element has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.root.is_none() && self.frames.is_empty()
    }

    fn current(&self) -> Option<&'a CodecValue> {
        match self.frames.last() {
            Some(frame) => frame.elements.get(frame.next),
            None => self.root,
        }
    }

    fn advance(&mut self) {
        match self.frames.last_mut() {
            Some(frame) => frame.next += 1,
            None => self.root = None,
        }
    }

    /// Element the reader is positioned on, or a format error at the end of an array.
    fn expect_current(&self, expected: &str) -> Result<&'a CodecValue> {
        self.current().ok_or_else(|| {
            CodecError::format(
                "value reader",
                format!("expected {expected}, found end of array"),
            )
        })
    }
}

impl StructuredReader for ValueReader<'_> {
    fn peek_kind(&mut self) -> Result<Option<ElementKind>> {
        Ok(self.current().map(CodecValue::kind))
    }

    fn read_array_start(&mut self) -> Result<()> {
        match self.expect_current("array")? {
            CodecValue::Array(elements) => {
                self.frames.push(Frame { elements, next: 0 });
                Ok(())
            }
            other => Err(CodecError::type_mismatch("array", other.type_name())),
        }
    }

    fn read_array_end(&mut self) -> Result<()> {
        let frame = self
            .frames
            .last()
            .ok_or_else(|| CodecError::format("array end", "no array is open"))?;
        let remaining = frame.elements.len() - frame.next;
        if remaining > 0 {
            return Err(CodecError::format(
                "array end",
                format!("{remaining} elements remain before the end marker"),
            ));
        }
        self.frames.pop();
        self.advance();
        Ok(())
    }

    fn read_null(&mut self) -> Result<()> {
        match self.expect_current("null")? {
            CodecValue::Null => {
                self.advance();
                Ok(())
            }
            other => Err(CodecError::type_mismatch("null", other.type_name())),
        }
    }

    fn read_bool(&mut self) -> Result<bool> {
        match self.expect_current("bool")? {
            CodecValue::Bool(v) => {
                let v = *v;
                self.advance();
                Ok(v)
            }
            other => Err(CodecError::type_mismatch("bool", other.type_name())),
        }
    }

    fn read_i32(&mut self) -> Result<i32> {
        let v = match self.expect_current("int32")? {
            CodecValue::Int32(v) => *v,
            CodecValue::Int64(v) => i32::try_from(*v).map_err(|_| {
                CodecError::format("int32", format!("value {v} does not fit in 32 bits"))
            })?,
            other => return Err(CodecError::type_mismatch("int32", other.type_name())),
        };
        self.advance();
        Ok(v)
    }

    fn read_i64(&mut self) -> Result<i64> {
        let v = match self.expect_current("int64")? {
            CodecValue::Int32(v) => *v as i64,
            CodecValue::Int64(v) => *v,
            other => return Err(CodecError::type_mismatch("int64", other.type_name())),
        };
        self.advance();
        Ok(v)
    }

    fn read_f64(&mut self) -> Result<f64> {
        match self.expect_current("float64")? {
            CodecValue::Float64(v) => {
                let v = *v;
                self.advance();
                Ok(v)
            }
            other => Err(CodecError::type_mismatch("float64", other.type_name())),
        }
    }

    fn read_string(&mut self) -> Result<String> {
        match self.expect_current("string")? {
            CodecValue::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            other => Err(CodecError::type_mismatch("string", other.type_name())),
        }
    }

    fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let bytes = match self.expect_current("bytes")? {
            CodecValue::Bytes(b) => b.clone(),
            CodecValue::String(s) if self.json_bytes => hex::decode(s)
                .map_err(|e| CodecError::format("bytes", format!("invalid hex string: {e}")))?,
            CodecValue::Array(items) if self.json_bytes => items
                .iter()
                .map(|item| {
                    item.as_i64()
                        .and_then(|v| u8::try_from(v).ok())
                        .ok_or_else(|| {
                            CodecError::type_mismatch("byte in 0..=255", item.to_string())
                        })
                })
                .collect::<Result<Vec<u8>>>()?,
            other => return Err(CodecError::type_mismatch("bytes", other.type_name())),
        };
        self.advance();
        Ok(bytes)
    }

    fn depth(&self) -> usize {
        self.frames.len()
    }
}

// =============================================================================
// Writer
// =============================================================================

/// Writer that assembles a [`CodecValue`] tree.
#[derive(Debug, Default)]
pub struct ValueWriter {
    /// Arrays opened but not yet closed, innermost last
    open: Vec<Vec<CodecValue>>,
    /// Completed top-level element
    root: Option<CodecValue>,
}

impl ValueWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements written so far into the innermost open array.
    pub fn pending(&self) -> Option<&[CodecValue]> {
        self.open.last().map(Vec::as_slice)
    }

    /// Consume the writer and return the completed top-level value.
    pub fn finish(self) -> Result<CodecValue> {
        if !self.open.is_empty() {
            return Err(CodecError::format(
                "value writer",
                format!("{} arrays left open", self.open.len()),
            ));
        }
        self.root
            .ok_or_else(|| CodecError::format("value writer", "no value was written"))
    }

    fn push(&mut self, value: CodecValue) -> Result<()> {
        match self.open.last_mut() {
            Some(array) => array.push(value),
            None if self.root.is_some() => {
                return Err(CodecError::format(
                    "value writer",
                    "a top-level value was already written",
                ));
            }
            None => self.root = Some(value),
        }
        Ok(())
    }
}

impl StructuredWriter for ValueWriter {
    fn write_array_start(&mut self) -> Result<()> {
        if self.open.is_empty() && self.root.is_some() {
            return Err(CodecError::format(
                "value writer",
                "a top-level value was already written",
            ));
        }
        self.open.push(Vec::new());
        Ok(())
    }

    fn write_array_end(&mut self) -> Result<()> {
        let array = self
            .open
            .pop()
            .ok_or_else(|| CodecError::format("array end", "no array is open"))?;
        self.push(CodecValue::Array(array))
    }

    fn write_null(&mut self) -> Result<()> {
        self.push(CodecValue::Null)
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.push(CodecValue::Bool(value))
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.push(CodecValue::Int32(value))
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.push(CodecValue::Int64(value))
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.push(CodecValue::Float64(value))
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        self.push(CodecValue::String(value.to_string()))
    }

    fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.push(CodecValue::Bytes(value.to_vec()))
    }

    fn depth(&self) -> usize {
        self.open.len()
    }
}
