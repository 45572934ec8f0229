// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Array framing shared by every tuple codec.
//!
//! A tuple of arity N is one array holding exactly N elements in slot order.
//! [`ArrayDecoder`] and [`ArrayEncoder`] own that rule: they open the array,
//! hand each slot a child context, check the element count and close the
//! array. Tuple codecs only decide which codec serves which slot.

use tracing::{debug, trace};

use crate::core::{CodecError, Result};
use crate::encoding::codec::Codec;
use crate::encoding::context::{DecodeContext, EncodeContext};

/// Decodes the slots of one tuple array in order.
pub(crate) struct ArrayDecoder<'c, 'r> {
    ctx: &'c mut DecodeContext<'r>,
    arity: usize,
    consumed: usize,
}

impl<'c, 'r> ArrayDecoder<'c, 'r> {
    /// Consume the array-start marker.
    pub(crate) fn begin(ctx: &'c mut DecodeContext<'r>, arity: usize) -> Result<Self> {
        trace!(arity, level = ctx.level(), "decoding tuple");
        ctx.reader().read_array_start()?;
        Ok(Self {
            ctx,
            arity,
            consumed: 0,
        })
    }

    /// Decode the next slot with `codec`.
    ///
    /// Fails if the array ended before this slot.
    pub(crate) fn slot<T, C>(&mut self, codec: &C) -> Result<T>
    where
        C: Codec<T> + ?Sized,
    {
        if !self.ctx.reader().has_next_element()? {
            let err = CodecError::array_too_short(self.arity, self.consumed);
            debug!(fields = ?err.log_fields(), "tuple array ended early");
            return Err(err);
        }
        let value = self.ctx.decode_child(codec)?;
        self.consumed += 1;
        Ok(value)
    }

    /// Check that no elements remain and consume the array-end marker.
    pub(crate) fn end(self) -> Result<()> {
        debug_assert_eq!(self.consumed, self.arity, "tuple codec skipped a slot");
        if self.ctx.reader().has_next_element()? {
            let err = CodecError::array_too_long(self.arity);
            debug!(fields = ?err.log_fields(), "tuple array has extra elements");
            return Err(err);
        }
        self.ctx.reader().read_array_end()?;
        trace!(arity = self.arity, level = self.ctx.level(), "decoded tuple");
        Ok(())
    }
}

/// Encodes the slots of one tuple array in order.
pub(crate) struct ArrayEncoder<'c, 'w> {
    ctx: &'c mut EncodeContext<'w>,
    arity: usize,
    written: usize,
}

impl<'c, 'w> ArrayEncoder<'c, 'w> {
    /// Emit the array-start marker.
    pub(crate) fn begin(ctx: &'c mut EncodeContext<'w>, arity: usize) -> Result<Self> {
        trace!(arity, level = ctx.level(), "encoding tuple");
        ctx.writer().write_array_start()?;
        Ok(Self {
            ctx,
            arity,
            written: 0,
        })
    }

    /// Encode the next slot with `codec`.
    pub(crate) fn slot<T, C>(&mut self, codec: &C, value: &T) -> Result<()>
    where
        C: Codec<T> + ?Sized,
    {
        self.ctx.encode_child(codec, value)?;
        self.written += 1;
        Ok(())
    }

    /// Emit the array-end marker.
    pub(crate) fn end(self) -> Result<()> {
        debug_assert_eq!(self.written, self.arity, "tuple codec skipped a slot");
        self.ctx.writer().write_array_end()?;
        trace!(arity = self.arity, level = self.ctx.level(), "encoded tuple");
        Ok(())
    }
}
