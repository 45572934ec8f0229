// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Unified codec interface.
//!
//! A [`Codec<T>`] encodes and decodes one value of type `T` through a context.
//! Leaf codecs read or write a single scalar element; composite codecs (tuple
//! codecs) frame several child values and delegate each one to a child codec.
//! Both kinds implement the same trait, so a tuple codec can be used anywhere
//! a leaf codec is expected, including as a slot of another tuple codec.
//!
//! ## Example
//!
//! ```
//! use tuplecodec::encoding::{Codec, Int32Codec, StringCodec, TupleCodec};
//! use tuplecodec::io::{decode_from_value, encode_to_value};
//!
//! # fn main() -> tuplecodec::Result<()> {
//! let codec = TupleCodec::new((Int32Codec, StringCodec));
//! let encoded = encode_to_value(&codec, &(7, "seven".to_string()))?;
//! let decoded: (i32, String) = decode_from_value(&codec, &encoded)?;
//! assert_eq!(decoded, (7, "seven".to_string()));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use super::context::{DecodeContext, EncodeContext};
use crate::core::Result;

/// Paired encode/decode capability for values of type `T`.
///
/// Codecs are immutable once built and carry no per-call state, so one
/// instance can serve any number of concurrent calls as long as each call
/// owns its reader or writer.
pub trait Codec<T>: Send + Sync {
    /// Decode one value from the context's reader.
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<T>;

    /// Encode one value to the context's writer.
    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &T) -> Result<()>;

    /// Name of the value type this codec handles.
    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Shared, type-erased codec handle as stored in a registry.
pub type SharedCodec<T> = Arc<dyn Codec<T>>;

impl<T, C> Codec<T> for Arc<C>
where
    C: Codec<T> + ?Sized,
{
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<T> {
        (**self).decode(ctx)
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &T) -> Result<()> {
        (**self).encode(ctx, value)
    }

    fn value_type_name(&self) -> &'static str {
        (**self).value_type_name()
    }
}

impl<T, C> Codec<T> for Box<C>
where
    C: Codec<T> + ?Sized,
{
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<T> {
        (**self).decode(ctx)
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &T) -> Result<()> {
        (**self).encode(ctx, value)
    }

    fn value_type_name(&self) -> &'static str {
        (**self).value_type_name()
    }
}
