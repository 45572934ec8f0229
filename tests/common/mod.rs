// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tuplecodec::encoding::{Codec, DecodeContext, EncodeContext, Int32Codec};
use tuplecodec::{CodecError, CodecValue, Result};

// ============================================================================
// Test Codecs
// ============================================================================

/// Codec that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingCodec {
    pub error: CodecError,
}

impl FailingCodec {
    pub fn new(error: CodecError) -> Self {
        Self { error }
    }
}

impl Codec<i32> for FailingCodec {
    fn decode(&self, _ctx: &mut DecodeContext<'_>) -> Result<i32> {
        Err(self.error.clone())
    }

    fn encode(&self, _ctx: &mut EncodeContext<'_>, _value: &i32) -> Result<()> {
        Err(self.error.clone())
    }
}

/// One call observed by a [`RecordingCodec`].
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub label: &'static str,
    pub level: usize,
    pub lenient_numbers: bool,
}

/// Shared log of visits, in call order.
pub type VisitLog = Arc<Mutex<Vec<Visit>>>;

/// `i32` codec that records each call before delegating to [`Int32Codec`].
#[derive(Debug, Clone)]
pub struct RecordingCodec {
    label: &'static str,
    log: VisitLog,
}

impl RecordingCodec {
    pub fn new(label: &'static str, log: &VisitLog) -> Self {
        Self {
            label,
            log: Arc::clone(log),
        }
    }

    fn record(&self, level: usize, lenient_numbers: bool) {
        self.log.lock().unwrap().push(Visit {
            label: self.label,
            level,
            lenient_numbers,
        });
    }
}

impl Codec<i32> for RecordingCodec {
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<i32> {
        self.record(ctx.level(), ctx.options().lenient_numbers);
        Int32Codec.decode(ctx)
    }

    fn encode(&self, ctx: &mut EncodeContext<'_>, value: &i32) -> Result<()> {
        self.record(ctx.level(), ctx.options().lenient_numbers);
        Int32Codec.encode(ctx, value)
    }
}

pub fn new_log() -> VisitLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn labels(log: &VisitLog) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(|v| v.label).collect()
}

// ============================================================================
// Value Helpers
// ============================================================================

pub fn ints(values: impl IntoIterator<Item = i32>) -> Vec<CodecValue> {
    values.into_iter().map(CodecValue::Int32).collect()
}

pub fn array(values: Vec<CodecValue>) -> CodecValue {
    CodecValue::Array(values)
}
