// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codecs and the contexts they run in.
//!
//! - [`codec`] - Unified codec interface
//! - [`context`] - Decode/encode contexts and child derivation
//! - [`primitive`] - Leaf codecs for builtin scalar types
//! - [`adapters`] - Codecs wrapping another codec
//! - [`tuple`] - Fixed, extended and dynamic tuple codecs
//! - [`registry`] - Type-keyed registry of default codecs

pub mod adapters;
pub mod codec;
pub mod context;
pub mod primitive;
pub mod registry;
pub mod tuple;

pub use adapters::{NullableCodec, WithOptions};
pub use codec::{Codec, SharedCodec};
pub use context::{DecodeContext, EncodeContext};
pub use primitive::{
    BoolCodec, BytesCodec, Float64Codec, Int32Codec, Int64Codec, StringCodec, ValueCodec,
};
pub use registry::{global_registry, CodecRegistry};
pub use tuple::{
    DefaultTupleCodec, DynTupleCodec, DynTupleCodecBuilder, ExtendedTupleCodec, TupleCodec,
};
