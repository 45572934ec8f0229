// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-arity tuple codec.

use super::frame::{ArrayDecoder, ArrayEncoder};
use super::DefaultTupleCodec;
use crate::core::Result;
use crate::encoding::codec::{Codec, SharedCodec};
use crate::encoding::context::{DecodeContext, EncodeContext};
use crate::encoding::registry::CodecRegistry;

/// Codec for tuples of arity 1 through 7.
///
/// `S` is a tuple of slot codecs, one per element of the value tuple:
/// `TupleCodec<(C1, C2)>` encodes `(T1, T2)` when `C1: Codec<T1>` and
/// `C2: Codec<T2>`. Every slot must be bound, so an incomplete codec cannot be
/// constructed.
///
/// # Example
///
/// ```
/// use tuplecodec::encoding::{BoolCodec, Int32Codec, StringCodec, TupleCodec};
/// use tuplecodec::io::encode_to_value;
/// use tuplecodec::CodecValue;
///
/// let codec = TupleCodec::new((Int32Codec, StringCodec, BoolCodec));
/// assert_eq!(codec.arity(), 3);
///
/// let tree = encode_to_value(&codec, &(1, "a".to_string(), true)).unwrap();
/// assert_eq!(
///     tree,
///     CodecValue::Array(vec![1i32.into(), "a".into(), true.into()])
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TupleCodec<S> {
    slots: S,
}

impl<S> TupleCodec<S> {
    /// Bind one codec per slot, in slot order.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// The bound slot codecs.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Consume the codec, returning its slot codecs.
    pub fn into_slots(self) -> S {
        self.slots
    }
}

macro_rules! impl_tuple_codec {
    ($arity:literal; $($idx:tt => $item:ident: $t:ident, $c:ident);+) => {
        impl<$($c),+> TupleCodec<($($c,)+)> {
            /// Number of slots.
            pub const ARITY: usize = $arity;

            /// Number of slots.
            pub const fn arity(&self) -> usize {
                $arity
            }

            $(
                /// Codec bound to this slot.
                pub fn $item(&self) -> &$c {
                    &self.slots.$idx
                }
            )+
        }

        impl<$($t, $c),+> Codec<($($t,)+)> for TupleCodec<($($c,)+)>
        where
            $($c: Codec<$t>),+
        {
            fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<($($t,)+)> {
                let mut frame = ArrayDecoder::begin(ctx, $arity)?;
                let value: ($($t,)+) = ($(frame.slot(&self.slots.$idx)?,)+);
                frame.end()?;
                Ok(value)
            }

            fn encode(&self, ctx: &mut EncodeContext<'_>, value: &($($t,)+)) -> Result<()> {
                let mut frame = ArrayEncoder::begin(ctx, $arity)?;
                $(frame.slot(&self.slots.$idx, &value.$idx)?;)+
                frame.end()
            }
        }

        impl<$($t: 'static),+> DefaultTupleCodec for ($($t,)+) {
            type Resolved = TupleCodec<($(SharedCodec<$t>,)+)>;

            fn resolve_codec(registry: &CodecRegistry) -> Result<Self::Resolved> {
                Ok(TupleCodec::new(($(registry.resolve::<$t>()?,)+)))
            }
        }
    };
}

impl_tuple_codec!(1; 0 => item1: T1, C1);
impl_tuple_codec!(2; 0 => item1: T1, C1; 1 => item2: T2, C2);
impl_tuple_codec!(3; 0 => item1: T1, C1; 1 => item2: T2, C2; 2 => item3: T3, C3);
impl_tuple_codec!(4;
    0 => item1: T1, C1; 1 => item2: T2, C2; 2 => item3: T3, C3; 3 => item4: T4, C4);
impl_tuple_codec!(5;
    0 => item1: T1, C1; 1 => item2: T2, C2; 2 => item3: T3, C3; 3 => item4: T4, C4;
    4 => item5: T5, C5);
impl_tuple_codec!(6;
    0 => item1: T1, C1; 1 => item2: T2, C2; 2 => item3: T3, C3; 3 => item4: T4, C4;
    4 => item5: T5, C5; 5 => item6: T6, C6);
impl_tuple_codec!(7;
    0 => item1: T1, C1; 1 => item2: T2, C2; 2 => item3: T3, C3; 3 => item4: T4, C4;
    4 => item5: T5, C5; 5 => item6: T6, C6; 6 => item7: T7, C7);
