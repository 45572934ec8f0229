// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for tuplecodec.
//!
//! Errors fall into four groups:
//! - Configuration: a codec could not be assembled from the supplied slots
//! - Lookup: the registry has no codec for a requested type
//! - Format: the encoded stream is not shaped the way a codec expects
//! - Stream: I/O, parse and unsupported-value failures of a reader or writer
//!
//! Errors raised by a slot codec are passed through tuple codecs unchanged.

use std::fmt;

/// Errors that can occur while building or running a codec.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A codec was assembled with a missing or invalid slot
    Configuration {
        /// Zero-based slot index
        slot: usize,
        /// What is wrong with the slot
        reason: String,
    },

    /// No codec registered for the requested type
    TypeNotFound {
        /// Type name that was not found
        type_name: String,
    },

    /// Malformed framing or unexpected stream structure
    Format {
        /// Operation that hit the malformed input
        context: String,
        /// Error message
        message: String,
    },

    /// Array ended before all slots were read
    ArrayTooShort {
        /// Declared arity
        expected: usize,
        /// Elements consumed before the end marker
        found: usize,
    },

    /// Elements remain in the array after all slots were read
    ArrayTooLong {
        /// Declared arity
        expected: usize,
    },

    /// Element of one kind found where another was required
    TypeMismatch {
        /// Expected element kind
        expected: String,
        /// Actual element kind
        found: String,
    },

    /// Buffer too short for requested read
    BufferTooShort {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        cursor_pos: u64,
    },

    /// Parse error in textual input
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Unsupported type or feature
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Encoding error raised by a writer
    EncodeError {
        /// Codec context (e.g., "binary", "json")
        codec: String,
        /// Error message
        message: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create a configuration error for a slot.
    pub fn configuration(slot: usize, reason: impl Into<String>) -> Self {
        CodecError::Configuration {
            slot,
            reason: reason.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        CodecError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create a format error.
    pub fn format(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Format {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an error for an array that ended after `found` of `expected` elements.
    pub fn array_too_short(expected: usize, found: usize) -> Self {
        CodecError::ArrayTooShort { expected, found }
    }

    /// Create an error for an array holding more than `expected` elements.
    pub fn array_too_long(expected: usize) -> Self {
        CodecError::ArrayTooLong { expected }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        CodecError::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a buffer too short error.
    pub fn buffer_too_short(requested: usize, available: usize, cursor_pos: u64) -> Self {
        CodecError::BufferTooShort {
            requested,
            available,
            cursor_pos,
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::EncodeError {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports a malformed stream rather than a bad codec setup.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CodecError::Format { .. }
                | CodecError::ArrayTooShort { .. }
                | CodecError::ArrayTooLong { .. }
                | CodecError::TypeMismatch { .. }
                | CodecError::BufferTooShort { .. }
        )
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Configuration { slot, reason } => {
                vec![("slot", slot.to_string()), ("reason", reason.clone())]
            }
            CodecError::TypeNotFound { type_name } => vec![("type", type_name.clone())],
            CodecError::Format { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::ArrayTooShort { expected, found } => vec![
                ("expected", expected.to_string()),
                ("found", found.to_string()),
            ],
            CodecError::ArrayTooLong { expected } => vec![("expected", expected.to_string())],
            CodecError::TypeMismatch { expected, found } => {
                vec![("expected", expected.clone()), ("found", found.clone())]
            }
            CodecError::BufferTooShort {
                requested,
                available,
                cursor_pos,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("cursor", cursor_pos.to_string()),
            ],
            CodecError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::EncodeError { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Configuration { slot, reason } => {
                write!(f, "Invalid codec configuration at slot {slot}: {reason}")
            }
            CodecError::TypeNotFound { type_name } => {
                write!(f, "No codec registered for type '{type_name}'")
            }
            CodecError::Format { context, message } => {
                write!(f, "Format error in {context}: {message}")
            }
            CodecError::ArrayTooShort { expected, found } => write!(
                f,
                "Array ended after {found} elements, expected exactly {expected}"
            ),
            CodecError::ArrayTooLong { expected } => write!(
                f,
                "Array has elements remaining after {expected}, expected exactly {expected}"
            ),
            CodecError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {expected}, found {found}")
            }
            CodecError::BufferTooShort {
                requested,
                available,
                cursor_pos,
            } => write!(
                f,
                "Buffer too short: requested {requested} bytes at position {cursor_pos}, but only {available} bytes available"
            ),
            CodecError::ParseError { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
            CodecError::Unsupported { feature } => {
                write!(f, "Unsupported feature: '{feature}'")
            }
            CodecError::EncodeError { codec, message } => {
                write!(f, "{codec} encode error: {message}")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::EncodeError {
            codec: "IO".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for tuplecodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
