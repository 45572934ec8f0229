// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Stream-level codec options.
//!
//! Options travel with an encode or decode context. A child context starts
//! from a copy of its parent's options, so a slot can override them without
//! affecting its siblings or the enclosing value.
//!
//! # Example
//!
//! ```
//! use tuplecodec::CodecOptions;
//!
//! let options = CodecOptions::from_toml_str("lenient_numbers = true").unwrap();
//! assert!(options.lenient_numbers);
//! assert!(!options.bytes_as_hex);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when codec options cannot be loaded.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The TOML document is malformed or has unknown keys
    #[error("invalid codec options: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Options shared by all codecs taking part in one encode or decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Let integer codecs accept integral floats and float codecs accept integers.
    pub lenient_numbers: bool,

    /// Write bytes as a hex string in JSON output instead of an array of numbers.
    pub bytes_as_hex: bool,
}

impl CodecOptions {
    /// Create options with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document.
    ///
    /// Missing keys keep their defaults; unknown keys are rejected.
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(s)?)
    }

    /// Set [`lenient_numbers`](Self::lenient_numbers).
    #[must_use]
    pub fn with_lenient_numbers(mut self, lenient: bool) -> Self {
        self.lenient_numbers = lenient;
        self
    }

    /// Set [`bytes_as_hex`](Self::bytes_as_hex).
    #[must_use]
    pub fn with_bytes_as_hex(mut self, hex: bool) -> Self {
        self.bytes_as_hex = hex;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CodecOptions::new();
        assert!(!options.lenient_numbers);
        assert!(!options.bytes_as_hex);
    }

    #[test]
    fn test_from_toml() {
        let options = CodecOptions::from_toml_str(
            r#"
            lenient_numbers = true
            bytes_as_hex = true
            "#,
        )
        .unwrap();
        assert!(options.lenient_numbers);
        assert!(options.bytes_as_hex);
    }

    #[test]
    fn test_from_empty_toml() {
        assert_eq!(
            CodecOptions::from_toml_str("").unwrap(),
            CodecOptions::default()
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CodecOptions::from_toml_str("max_depth = 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid codec options"));
    }

    #[test]
    fn test_builders() {
        let options = CodecOptions::new()
            .with_lenient_numbers(true)
            .with_bytes_as_hex(true);
        assert!(options.lenient_numbers && options.bytes_as_hex);
    }
}
