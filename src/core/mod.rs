// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout tuplecodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy shared by codecs, readers and writers
//! - [`CodecValue`] - In-memory form of one structured element
//! - [`CodecOptions`] - Stream-level options carried by contexts

pub mod error;
pub mod options;
pub mod value;

pub use error::{CodecError, Result};
pub use options::{CodecOptions, OptionsError};
pub use value::{CodecValue, ElementKind};
