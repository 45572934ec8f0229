// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tuple codecs.
//!
//! A tuple of arity N is written as one array holding exactly N elements in
//! slot order, each encoded by the codec bound to that slot.
//!
//! - [`TupleCodec`] - arities 1 through 7, one codec per slot
//! - [`ExtendedTupleCodec`] - arity 8: seven slots plus a *rest* slot whose
//!   codec may itself be a tuple codec, which nests further values
//! - [`DynTupleCodec`] - runtime-assembled arity over [`CodecValue`] slots
//!
//! Codecs for a tuple type can also be resolved from a
//! [`CodecRegistry`] through [`DefaultTupleCodec`].
//!
//! [`CodecValue`]: crate::CodecValue

mod dynamic;
mod extended;
mod fixed;
mod frame;

pub use dynamic::{DynTupleCodec, DynTupleCodecBuilder};
pub use extended::ExtendedTupleCodec;
pub use fixed::TupleCodec;

use super::codec::Codec;
use super::registry::CodecRegistry;
use crate::core::Result;

/// Tuple types whose codec can be assembled from registry defaults.
///
/// Implemented for tuples of arity 1 through 8. For arity 8 the last element
/// is the rest slot; its type is resolved like any other slot, so a nested
/// tuple must itself be registered (see [`CodecRegistry::register_tuple`]).
pub trait DefaultTupleCodec: Sized + 'static {
    /// Codec built from the resolved slot codecs.
    type Resolved: Codec<Self> + 'static;

    /// Resolve one codec per slot from `registry`.
    ///
    /// Fails with [`CodecError::TypeNotFound`](crate::CodecError::TypeNotFound)
    /// for the first slot type without a registration.
    fn resolve_codec(registry: &CodecRegistry) -> Result<Self::Resolved>;
}
