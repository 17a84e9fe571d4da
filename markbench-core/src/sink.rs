// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Append-only output sink shared by every repetition of a run.
//!
//! Transforms can only append. Clearing is reserved for the runner and only
//! happens under [`SinkPolicy::ResetPerIteration`]; the backing allocation
//! is kept either way.

use std::fmt;
use std::io;

use crate::types::SinkPolicy;

/// Byte accumulator receiving transformation output.
#[derive(Debug)]
pub struct OutputSink {
    buf: Vec<u8>,
    policy: SinkPolicy,
}

impl OutputSink {
    /// Create an empty sink.
    pub fn new(policy: SinkPolicy) -> Self {
        Self::with_capacity(policy, 0)
    }

    /// Create a sink with `capacity` bytes pre-allocated.
    pub fn with_capacity(policy: SinkPolicy, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            policy,
        }
    }

    /// Append raw bytes.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append UTF-8 text.
    pub fn push_str(&mut self, text: &str) {
        self.buf.extend_from_slice(text.as_bytes());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn policy(&self) -> SinkPolicy {
        self.policy
    }

    /// Apply the sink policy ahead of a repetition.
    pub(crate) fn begin_repetition(&mut self) {
        if self.policy == SinkPolicy::ResetPerIteration {
            self.buf.clear();
        }
    }
}

impl io::Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.buf.extend_from_slice(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for OutputSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
