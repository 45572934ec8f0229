// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # tuplecodec
//!
//! Tuple codecs for array-shaped structured encodings.
//!
//! A tuple `(T1, ..., TN)` is written as one array of exactly N elements, each
//! encoded by the codec bound to its slot. The library is organized as:
//! - [`core`] - Errors, options and the [`CodecValue`] tree
//! - [`encoding`] - The [`Codec`] trait, contexts, leaf codecs, tuple codecs
//!   and the codec registry
//! - [`io`] - Reader/writer traits and the value-tree, binary and JSON encodings
//!
//! ## Example: explicit slot codecs
//!
//! ```rust
//! # fn main() -> tuplecodec::Result<()> {
//! use tuplecodec::encoding::{BoolCodec, Int32Codec, StringCodec, TupleCodec};
//! use tuplecodec::io::{decode_from_slice, encode_to_vec};
//!
//! let codec = TupleCodec::new((Int32Codec, StringCodec, BoolCodec));
//! let bytes = encode_to_vec(&codec, &(1, "a".to_string(), true))?;
//! let decoded: (i32, String, bool) = decode_from_slice(&codec, &bytes)?;
//! assert_eq!(decoded, (1, "a".to_string(), true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: codecs resolved from a registry
//!
//! ```rust
//! # fn main() -> tuplecodec::Result<()> {
//! use tuplecodec::global_registry;
//! use tuplecodec::io::json::{from_json_str, to_json_string};
//!
//! let codec = global_registry().tuple_codec::<(i64, Option<String>)>()?;
//! let json = to_json_string(&codec, &(5, None), Default::default())?;
//! assert_eq!(json, "[5,null]");
//! let decoded: (i64, Option<String>) = from_json_str(&codec, &json, Default::default())?;
//! assert_eq!(decoded, (5, None));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, CodecOptions, CodecValue, ElementKind, OptionsError, Result};

// Codecs, contexts and registry
pub mod encoding;

pub use encoding::{
    global_registry, Codec, CodecRegistry, DynTupleCodec, ExtendedTupleCodec, SharedCodec,
    TupleCodec,
};

// Structured stream encodings
pub mod io;
