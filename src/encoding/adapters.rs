// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec adapters that wrap another codec.

use super::codec::Codec;
use super::context::{DecodeContext, EncodeContext};
use crate::core::{CodecOptions, ElementKind, Result};

/// Codec for `Option<T>`: `None` is the null marker, `Some` uses the inner codec.
///
/// Works for any inner codec, so an absent tuple value is written as a single
/// null element rather than an array.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullableCodec<C> {
    inner: C,
}

impl<C> NullableCodec<C> {
    /// Wrap `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The codec used for present values.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C> Codec<Option<T>> for NullableCodec<C>
where
    C: Codec<T>,
{
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<Option<T>> {
        if ctx.reader().peek_kind()? == Some(ElementKind::Null) {
            ctx.reader().read_null()?;
            return Ok(None);
        }
        self.inner.decode(ctx).map(Some)
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &Option<T>) -> Result<()> {
        match value {
            Some(v) => self.inner.encode(ctx, v),
            None => ctx.writer().write_null(),
        }
    }
}

/// Codec that runs its inner codec with option overrides.
///
/// The overrides apply to a child context, so they are visible to the inner
/// codec and everything it encodes or decodes, but not to sibling slots.
///
/// # Example
///
/// ```
/// use tuplecodec::encoding::{Int32Codec, TupleCodec, WithOptions};
/// use tuplecodec::io::decode_from_value;
/// use tuplecodec::CodecValue;
///
/// let codec = TupleCodec::new((
///     WithOptions::new(Int32Codec, |o| o.lenient_numbers = true),
///     Int32Codec,
/// ));
/// let tree = CodecValue::Array(vec![CodecValue::Float64(1.0), CodecValue::Int32(2)]);
/// let decoded: (i32, i32) = decode_from_value(&codec, &tree).unwrap();
/// assert_eq!(decoded, (1, 2));
/// ```
pub struct WithOptions<C, F> {
    inner: C,
    configure: F,
}

impl<C, F> WithOptions<C, F>
where
    F: Fn(&mut CodecOptions) + Send + Sync,
{
    /// Wrap `inner`, applying `configure` to the options it sees.
    pub fn new(inner: C, configure: F) -> Self {
        Self { inner, configure }
    }

    /// The wrapped codec.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<T, C, F> Codec<T> for WithOptions<C, F>
where
    C: Codec<T>,
    F: Fn(&mut CodecOptions) + Send + Sync,
{
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<T> {
        self.inner.decode(&mut ctx.child_with(&self.configure))
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &T) -> Result<()> {
        self.inner.encode(&mut ctx.child_with(&self.configure), value)
    }

    fn value_type_name(&self) -> &'static str {
        self.inner.value_type_name()
    }
}
