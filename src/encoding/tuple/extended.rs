// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Extended tuple codec: seven slots plus a rest slot.
//!
//! The outer array always holds exactly eight elements. The eighth is written
//! by the rest codec like any other slot, so a tuple codec bound there opens
//! its own nested array and carries the remaining values:
//!
//! ```text
//! (1, 2, 3, 4, 5, 6, 7, (8, 9))  ->  [1, 2, 3, 4, 5, 6, 7, [8, 9]]
//! ```
//!
//! A leaf codec bound to the rest slot gives a flat eight-element array.

use super::fixed::TupleCodec;
use super::frame::{ArrayDecoder, ArrayEncoder};
use super::DefaultTupleCodec;
use crate::core::Result;
use crate::encoding::codec::{Codec, SharedCodec};
use crate::encoding::context::{DecodeContext, EncodeContext};
use crate::encoding::registry::CodecRegistry;

/// Codec for `(T1, T2, T3, T4, T5, T6, T7, TRest)`.
///
/// `S` is a seven-tuple of slot codecs and `R` the codec for the rest slot.
/// The rest type is not constrained: nesting happens only when `R` is itself a
/// tuple codec.
///
/// # Example
///
/// ```
/// use tuplecodec::encoding::{ExtendedTupleCodec, Int32Codec, TupleCodec};
/// use tuplecodec::io::{decode_from_value, encode_to_value};
///
/// let i = Int32Codec;
/// let codec = ExtendedTupleCodec::new((i, i, i, i, i, i, i), TupleCodec::new((i, i)));
///
/// let value = (1, 2, 3, 4, 5, 6, 7, (8, 9));
/// let tree = encode_to_value(&codec, &value).unwrap();
/// let outer = tree.as_array().unwrap();
/// assert_eq!(outer.len(), 8);
/// assert_eq!(outer[7].as_array().map(|rest| rest.len()), Some(2));
///
/// let decoded: (i32, i32, i32, i32, i32, i32, i32, (i32, i32)) =
///     decode_from_value(&codec, &tree).unwrap();
/// assert_eq!(decoded, value);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedTupleCodec<S, R> {
    items: S,
    rest: R,
}

impl<S, R> ExtendedTupleCodec<S, R> {
    /// Number of slots, counting the rest slot as one.
    pub const ARITY: usize = 8;

    /// Bind seven slot codecs and a rest codec.
    pub fn new(items: S, rest: R) -> Self {
        Self { items, rest }
    }

    /// Number of slots, counting the rest slot as one.
    pub const fn arity(&self) -> usize {
        Self::ARITY
    }

    /// The seven leading slot codecs.
    pub fn items(&self) -> &S {
        &self.items
    }

    /// Codec bound to the rest slot.
    pub fn rest(&self) -> &R {
        &self.rest
    }

    /// Consume the codec, returning the leading slot codecs and the rest codec.
    pub fn into_parts(self) -> (S, R) {
        (self.items, self.rest)
    }
}

impl<C1, C2, C3, C4, C5, C6, C7> TupleCodec<(C1, C2, C3, C4, C5, C6, C7)> {
    /// Extend this seven-slot codec with a rest slot.
    pub fn with_rest<R>(self, rest: R) -> ExtendedTupleCodec<(C1, C2, C3, C4, C5, C6, C7), R> {
        ExtendedTupleCodec::new(self.into_slots(), rest)
    }
}

impl<C1, C2, C3, C4, C5, C6, C7, R> ExtendedTupleCodec<(C1, C2, C3, C4, C5, C6, C7), R> {
    /// Codec bound to slot 1.
    pub fn item1(&self) -> &C1 {
        &self.items.0
    }

    /// Codec bound to slot 2.
    pub fn item2(&self) -> &C2 {
        &self.items.1
    }

    /// Codec bound to slot 3.
    pub fn item3(&self) -> &C3 {
        &self.items.2
    }

    /// Codec bound to slot 4.
    pub fn item4(&self) -> &C4 {
        &self.items.3
    }

    /// Codec bound to slot 5.
    pub fn item5(&self) -> &C5 {
        &self.items.4
    }

    /// Codec bound to slot 6.
    pub fn item6(&self) -> &C6 {
        &self.items.5
    }

    /// Codec bound to slot 7.
    pub fn item7(&self) -> &C7 {
        &self.items.6
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, TRest, C1, C2, C3, C4, C5, C6, C7, R>
    Codec<(T1, T2, T3, T4, T5, T6, T7, TRest)>
    for ExtendedTupleCodec<(C1, C2, C3, C4, C5, C6, C7), R>
where
    C1: Codec<T1>,
    C2: Codec<T2>,
    C3: Codec<T3>,
    C4: Codec<T4>,
    C5: Codec<T5>,
    C6: Codec<T6>,
    C7: Codec<T7>,
    R: Codec<TRest>,
{
    fn decode(
        &self,
        ctx: &mut DecodeContext<'_>,
    ) -> Result<(T1, T2, T3, T4, T5, T6, T7, TRest)> {
        let items = &self.items;
        let mut frame = ArrayDecoder::begin(ctx, Self::ARITY)?;
        let value = (
            frame.slot(&items.0)?,
            frame.slot(&items.1)?,
            frame.slot(&items.2)?,
            frame.slot(&items.3)?,
            frame.slot(&items.4)?,
            frame.slot(&items.5)?,
            frame.slot(&items.6)?,
            frame.slot(&self.rest)?,
        );
        frame.end()?;
        Ok(value)
    }

    fn encode(
        &self,
        ctx: &mut EncodeContext<'_>,
        value: &(T1, T2, T3, T4, T5, T6, T7, TRest),
    ) -> Result<()> {
        let items = &self.items;
        let mut frame = ArrayEncoder::begin(ctx, Self::ARITY)?;
        frame.slot(&items.0, &value.0)?;
        frame.slot(&items.1, &value.1)?;
        frame.slot(&items.2, &value.2)?;
        frame.slot(&items.3, &value.3)?;
        frame.slot(&items.4, &value.4)?;
        frame.slot(&items.5, &value.5)?;
        frame.slot(&items.6, &value.6)?;
        frame.slot(&self.rest, &value.7)?;
        frame.end()
    }
}

impl<T1, T2, T3, T4, T5, T6, T7, TRest> DefaultTupleCodec for (T1, T2, T3, T4, T5, T6, T7, TRest)
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    T6: 'static,
    T7: 'static,
    TRest: 'static,
{
    type Resolved = ExtendedTupleCodec<
        (
            SharedCodec<T1>,
            SharedCodec<T2>,
            SharedCodec<T3>,
            SharedCodec<T4>,
            SharedCodec<T5>,
            SharedCodec<T6>,
            SharedCodec<T7>,
        ),
        SharedCodec<TRest>,
    >;

    fn resolve_codec(registry: &CodecRegistry) -> Result<Self::Resolved> {
        let items = (
            registry.resolve::<T1>()?,
            registry.resolve::<T2>()?,
            registry.resolve::<T3>()?,
            registry.resolve::<T4>()?,
            registry.resolve::<T5>()?,
            registry.resolve::<T6>()?,
            registry.resolve::<T7>()?,
        );
        Ok(ExtendedTupleCodec::new(items, registry.resolve::<TRest>()?))
    }
}
