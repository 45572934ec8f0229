// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tuple codec with arity chosen at runtime.
//!
//! [`DynTupleCodec`] frames any number of [`CodecValue`] slots in one flat
//! array, without the rest-slot nesting of
//! [`ExtendedTupleCodec`](super::ExtendedTupleCodec). Its slot codecs are
//! supplied one by one through [`DynTupleCodecBuilder`], so a slot can be left
//! unbound; that is reported when the codec is built.

use std::sync::Arc;

use tracing::debug;

use super::frame::{ArrayDecoder, ArrayEncoder};
use crate::core::{CodecError, CodecValue, Result};
use crate::encoding::codec::{Codec, SharedCodec};
use crate::encoding::context::{DecodeContext, EncodeContext};

/// Codec for a fixed-length sequence of [`CodecValue`] slots.
#[derive(Clone)]
pub struct DynTupleCodec {
    slots: Vec<SharedCodec<CodecValue>>,
}

impl DynTupleCodec {
    /// Start building a codec with `arity` slots.
    pub fn builder(arity: usize) -> DynTupleCodecBuilder {
        DynTupleCodecBuilder::new(arity)
    }

    /// Build a codec from per-slot bindings, where `None` is an unbound slot.
    ///
    /// # Errors
    ///
    /// [`CodecError::Configuration`] naming the first unbound slot, or slot 0
    /// if `slots` is empty.
    pub fn from_slots(slots: Vec<Option<SharedCodec<CodecValue>>>) -> Result<Self> {
        if slots.is_empty() {
            return Err(CodecError::configuration(0, "a tuple needs at least one slot"));
        }
        let mut bound = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(codec) => bound.push(codec),
                None => {
                    let err = CodecError::configuration(index, "no codec bound to slot");
                    debug!(fields = ?err.log_fields(), "dynamic tuple codec incomplete");
                    return Err(err);
                }
            }
        }
        Ok(Self { slots: bound })
    }

    /// Number of slots.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Codec bound to slot `index` (zero-based).
    pub fn slot(&self, index: usize) -> Option<&SharedCodec<CodecValue>> {
        self.slots.get(index)
    }

    /// All slot codecs in order.
    pub fn slots(&self) -> &[SharedCodec<CodecValue>] {
        &self.slots
    }
}

impl std::fmt::Debug for DynTupleCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynTupleCodec")
            .field("arity", &self.arity())
            .finish()
    }
}

impl Codec<Vec<CodecValue>> for DynTupleCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<Vec<CodecValue>> {
        let mut frame = ArrayDecoder::begin(ctx, self.arity())?;
        let mut values = Vec::with_capacity(self.arity());
        for codec in &self.slots {
            values.push(frame.slot(codec)?);
        }
        frame.end()?;
        Ok(values)
    }

    /// Fails before writing anything if `value` does not hold exactly one
    /// element per slot.
    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &Vec<CodecValue>) -> Result<()> {
        if value.len() < self.arity() {
            return Err(CodecError::array_too_short(self.arity(), value.len()));
        }
        if value.len() > self.arity() {
            return Err(CodecError::array_too_long(self.arity()));
        }
        let mut frame = ArrayEncoder::begin(ctx, self.arity())?;
        for (codec, item) in self.slots.iter().zip(value) {
            frame.slot(codec, item)?;
        }
        frame.end()
    }
}

/// Collects slot codecs for a [`DynTupleCodec`].
///
/// ```
/// use tuplecodec::encoding::{DynTupleCodec, ValueCodec};
/// use tuplecodec::{CodecError, ElementKind};
///
/// let err = DynTupleCodec::builder(3)
///     .slot(0, ValueCodec::of_kind(ElementKind::Int32))
///     .slot(2, ValueCodec::any())
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, CodecError::Configuration { slot: 1, .. }));
/// ```
#[derive(Clone)]
pub struct DynTupleCodecBuilder {
    slots: Vec<Option<SharedCodec<CodecValue>>>,
    out_of_range: Option<usize>,
}

impl DynTupleCodecBuilder {
    /// Start with `arity` unbound slots.
    pub fn new(arity: usize) -> Self {
        Self {
            slots: vec![None; arity],
            out_of_range: None,
        }
    }

    /// Bind `codec` to slot `index`, replacing any earlier binding.
    pub fn slot<C>(self, index: usize, codec: C) -> Self
    where
        C: Codec<CodecValue> + 'static,
    {
        self.slot_shared(index, Arc::new(codec))
    }

    /// Bind a shared codec to slot `index`.
    pub fn slot_shared(mut self, index: usize, codec: SharedCodec<CodecValue>) -> Self {
        match self.slots.get_mut(index) {
            Some(slot) => *slot = Some(codec),
            None => {
                self.out_of_range.get_or_insert(index);
            }
        }
        self
    }

    /// Bind `codec` to every slot that is still unbound.
    pub fn fill<C>(mut self, codec: C) -> Self
    where
        C: Codec<CodecValue> + 'static,
    {
        let shared: SharedCodec<CodecValue> = Arc::new(codec);
        for slot in self.slots.iter_mut().filter(|s| s.is_none()) {
            *slot = Some(Arc::clone(&shared));
        }
        self
    }

    /// Build the codec.
    ///
    /// # Errors
    ///
    /// [`CodecError::Configuration`] if a slot index was out of range, the
    /// arity is zero or a slot has no codec.
    pub fn build(self) -> Result<DynTupleCodec> {
        if let Some(index) = self.out_of_range {
            return Err(CodecError::configuration(
                index,
                format!("slot index out of range for arity {}", self.slots.len()),
            ));
        }
        DynTupleCodec::from_slots(self.slots)
    }
}
