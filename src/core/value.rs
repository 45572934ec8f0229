// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Structured value type system.
//!
//! [`CodecValue`] is the in-memory form of one element of the structured wire
//! format: a scalar, null, or an array of further elements. [`ElementKind`]
//! names the kind of the next element a reader is positioned on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the structured wire format.
///
/// Every encoding in [`crate::io`] can represent exactly these variants, so a
/// value decoded from one encoding can be re-encoded in any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CodecValue {
    // Null marker
    Null,

    // Boolean
    Bool(bool),

    // Signed integers
    Int32(i32),
    Int64(i64),

    // Floating point
    Float64(f64),

    // String (UTF-8)
    String(String),

    // Binary data
    Bytes(Vec<u8>),

    // Ordered sequence of elements
    Array(Vec<CodecValue>),
}

impl CodecValue {
    /// Kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            CodecValue::Null => ElementKind::Null,
            CodecValue::Bool(_) => ElementKind::Bool,
            CodecValue::Int32(_) => ElementKind::Int32,
            CodecValue::Int64(_) => ElementKind::Int64,
            CodecValue::Float64(_) => ElementKind::Float64,
            CodecValue::String(_) => ElementKind::String,
            CodecValue::Bytes(_) => ElementKind::Bytes,
            CodecValue::Array(_) => ElementKind::Array,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, CodecValue::Null)
    }

    /// Check if this value is an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, CodecValue::Int32(_) | CodecValue::Int64(_))
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CodecValue::Int32(v) => Some(*v as i64),
            CodecValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CodecValue::Int32(v) => Some(*v as f64),
            CodecValue::Int64(v) => Some(*v as f64),
            CodecValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CodecValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CodecValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CodecValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[CodecValue]> {
        match self {
            CodecValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl fmt::Display for CodecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecValue::Null => write!(f, "null"),
            CodecValue::Bool(v) => write!(f, "{v}"),
            CodecValue::Int32(v) => write!(f, "{v}"),
            CodecValue::Int64(v) => write!(f, "{v}"),
            CodecValue::Float64(v) => write!(f, "{v}"),
            CodecValue::String(v) => write!(f, "\"{v}\""),
            CodecValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            CodecValue::Array(v) => write!(f, "[{} elements]", v.len()),
        }
    }
}

impl From<bool> for CodecValue {
    fn from(v: bool) -> Self {
        CodecValue::Bool(v)
    }
}

impl From<i32> for CodecValue {
    fn from(v: i32) -> Self {
        CodecValue::Int32(v)
    }
}

impl From<i64> for CodecValue {
    fn from(v: i64) -> Self {
        CodecValue::Int64(v)
    }
}

impl From<f64> for CodecValue {
    fn from(v: f64) -> Self {
        CodecValue::Float64(v)
    }
}

impl From<&str> for CodecValue {
    fn from(v: &str) -> Self {
        CodecValue::String(v.to_string())
    }
}

impl From<String> for CodecValue {
    fn from(v: String) -> Self {
        CodecValue::String(v)
    }
}

impl From<Vec<CodecValue>> for CodecValue {
    fn from(v: Vec<CodecValue>) -> Self {
        CodecValue::Array(v)
    }
}

// =============================================================================
// Element Kind
// =============================================================================

/// Kind of the element a reader is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Null marker
    Null,
    /// Boolean
    Bool,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit float
    Float64,
    /// UTF-8 string
    String,
    /// Binary data
    Bytes,
    /// Start of a nested array
    Array,
}

impl ElementKind {
    /// Convert to string representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Null => "null",
            ElementKind::Bool => "bool",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::Float64 => "float64",
            ElementKind::String => "string",
            ElementKind::Bytes => "bytes",
            ElementKind::Array => "array",
        }
    }

    /// Check if this kind is numeric.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ElementKind::Int32 | ElementKind::Int64 | ElementKind::Float64
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(CodecValue::Null.kind(), ElementKind::Null);
        assert_eq!(CodecValue::Int32(1).kind(), ElementKind::Int32);
        assert_eq!(CodecValue::Array(vec![]).kind(), ElementKind::Array);
        assert_eq!(CodecValue::Bytes(vec![1]).type_name(), "bytes");
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(CodecValue::Int32(42).as_i64(), Some(42));
        assert_eq!(CodecValue::Int64(-7).as_i64(), Some(-7));
        assert_eq!(CodecValue::Float64(2.5).as_i64(), None);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CodecValue::Int32(42).as_f64(), Some(42.0));
        assert_eq!(CodecValue::Float64(2.5).as_f64(), Some(2.5));
        assert_eq!(CodecValue::from("x").as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CodecValue::from("a").to_string(), "\"a\"");
        assert_eq!(
            CodecValue::Array(vec![CodecValue::Null, CodecValue::Bool(true)]).to_string(),
            "[2 elements]"
        );
        assert_eq!(CodecValue::Bytes(vec![0; 3]).to_string(), "<3 bytes>");
    }

    #[test]
    fn test_numeric_kinds() {
        assert!(ElementKind::Int32.is_numeric());
        assert!(ElementKind::Float64.is_numeric());
        assert!(!ElementKind::String.is_numeric());
    }
}
