// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core traits for structured stream I/O.
//!
//! Every encoding exposes the same element-level API: array framing plus one
//! read/write call per scalar kind. Codecs only ever talk to these traits, so
//! a codec written once works against the value tree, JSON and binary
//! encodings alike.

use crate::core::{ElementKind, Result};

/// Pull-style reader over a structured stream.
///
/// The reader is positioned on at most one element at a time. Inside an
/// array, [`peek_kind`](Self::peek_kind) returns `None` once the end marker
/// is reached; at top level it returns `None` once the single top-level
/// element has been consumed.
pub trait StructuredReader {
    /// Kind of the next element, or `None` at the end of the current array.
    fn peek_kind(&mut self) -> Result<Option<ElementKind>>;

    /// Whether another element precedes the end of the current array.
    fn has_next_element(&mut self) -> Result<bool> {
        Ok(self.peek_kind()?.is_some())
    }

    /// Consume an array-start marker.
    fn read_array_start(&mut self) -> Result<()>;

    /// Consume an array-end marker.
    ///
    /// Fails with a format error if elements remain in the array or if no
    /// array is open.
    fn read_array_end(&mut self) -> Result<()>;

    /// Consume a null marker.
    fn read_null(&mut self) -> Result<()>;

    /// Consume a boolean.
    fn read_bool(&mut self) -> Result<bool>;

    /// Consume a 32-bit integer.
    fn read_i32(&mut self) -> Result<i32>;

    /// Consume a 64-bit integer.
    ///
    /// Readers accept 32-bit integers here as well.
    fn read_i64(&mut self) -> Result<i64>;

    /// Consume a 64-bit float.
    fn read_f64(&mut self) -> Result<f64>;

    /// Consume a string.
    fn read_string(&mut self) -> Result<String>;

    /// Consume a byte string.
    ///
    /// Encodings without a native byte string may accept other forms here;
    /// the JSON reader takes a hex string or an array of byte values.
    fn read_bytes(&mut self) -> Result<Vec<u8>>;

    /// Number of arrays currently open.
    fn depth(&self) -> usize;
}

/// Push-style writer over a structured stream.
pub trait StructuredWriter {
    /// Emit an array-start marker.
    fn write_array_start(&mut self) -> Result<()>;

    /// Emit an array-end marker, closing the innermost open array.
    fn write_array_end(&mut self) -> Result<()>;

    /// Emit a null marker.
    fn write_null(&mut self) -> Result<()>;

    /// Emit a boolean.
    fn write_bool(&mut self, value: bool) -> Result<()>;

    /// Emit a 32-bit integer.
    fn write_i32(&mut self, value: i32) -> Result<()>;

    /// Emit a 64-bit integer.
    fn write_i64(&mut self, value: i64) -> Result<()>;

    /// Emit a 64-bit float.
    fn write_f64(&mut self, value: f64) -> Result<()>;

    /// Emit a string.
    fn write_string(&mut self, value: &str) -> Result<()>;

    /// Emit a byte string.
    fn write_bytes(&mut self, value: &[u8]) -> Result<()>;

    /// Number of arrays currently open.
    fn depth(&self) -> usize;
}
