// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode and decode contexts.
//!
//! A context couples the stream a codec works on with the options in force
//! for that call. Composite codecs hand each child value a *child* context:
//! it shares the parent's reader or writer but owns a copy of the options,
//! so overrides applied for one slot never reach its siblings or the parent.

use super::codec::Codec;
use crate::core::{CodecOptions, Result};
use crate::io::traits::{StructuredReader, StructuredWriter};

/// Context passed to [`Codec::decode`].
pub struct DecodeContext<'r> {
    reader: &'r mut dyn StructuredReader,
    options: CodecOptions,
    level: usize,
}

impl<'r> DecodeContext<'r> {
    /// Create a root context with default options.
    pub fn new(reader: &'r mut dyn StructuredReader) -> Self {
        Self::with_options(reader, CodecOptions::default())
    }

    /// Create a root context with the given options.
    pub fn with_options(reader: &'r mut dyn StructuredReader, options: CodecOptions) -> Self {
        Self {
            reader,
            options,
            level: 0,
        }
    }

    /// The underlying reader.
    pub fn reader(&mut self) -> &mut dyn StructuredReader {
        &mut *self.reader
    }

    /// Options in force for this context.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Number of child derivations between this context and the root.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Derive a child context that inherits this context's options.
    pub fn child(&mut self) -> DecodeContext<'_> {
        DecodeContext {
            reader: &mut *self.reader,
            options: self.options,
            level: self.level + 1,
        }
    }

    /// Derive a child context and apply option overrides to it only.
    pub fn child_with(&mut self, configure: impl FnOnce(&mut CodecOptions)) -> DecodeContext<'_> {
        let mut child = self.child();
        configure(&mut child.options);
        child
    }

    /// Decode a value with `codec` in a child context.
    pub fn decode_child<T, C>(&mut self, codec: &C) -> Result<T>
    where
        C: Codec<T> + ?Sized,
    {
        codec.decode(&mut self.child())
    }
}

/// Context passed to [`Codec::encode`].
pub struct EncodeContext<'w> {
    writer: &'w mut dyn StructuredWriter,
    options: CodecOptions,
    level: usize,
}

impl<'w> EncodeContext<'w> {
    /// Create a root context with default options.
    pub fn new(writer: &'w mut dyn StructuredWriter) -> Self {
        Self::with_options(writer, CodecOptions::default())
    }

    /// Create a root context with the given options.
    pub fn with_options(writer: &'w mut dyn StructuredWriter, options: CodecOptions) -> Self {
        Self {
            writer,
            options,
            level: 0,
        }
    }

    /// The underlying writer.
    pub fn writer(&mut self) -> &mut dyn StructuredWriter {
        &mut *self.writer
    }

    /// Options in force for this context.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Number of child derivations between this context and the root.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Derive a child context that inherits this context's options.
    pub fn child(&mut self) -> EncodeContext<'_> {
        EncodeContext {
            writer: &mut *self.writer,
            options: self.options,
            level: self.level + 1,
        }
    }

    /// Derive a child context and apply option overrides to it only.
    pub fn child_with(&mut self, configure: impl FnOnce(&mut CodecOptions)) -> EncodeContext<'_> {
        let mut child = self.child();
        configure(&mut child.options);
        child
    }

    /// Encode `value` with `codec` in a child context.
    pub fn encode_child<T, C>(&mut self, codec: &C, value: &T) -> Result<()>
    where
        C: Codec<T> + ?Sized,
    {
        codec.encode(&mut self.child(), value)
    }
}
