// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Timed repetition runner.
//!
//! The clock is read once before the first repetition and once after the
//! last. There is no warm-up and no per-iteration timing, so the result is
//! a single aggregate span covering every call, including any one-time
//! initialization the transform does on its first call.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::config::HarnessConfig;
use crate::error::{BenchError, BenchResult};
use crate::loader::InputBuffer;
use crate::sink::OutputSink;
use crate::transform::Transform;
use crate::types::{RepetitionCount, SinkPolicy};

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Time from just before the first repetition to just after the last.
    pub elapsed: Duration,
    /// Number of repetitions executed.
    pub repetitions: u64,
    /// Sink length when the run finished.
    pub output_bytes: usize,
}

/// Runs a transform a fixed number of times under one timer span.
#[derive(Debug, Clone)]
pub struct RepetitionRunner {
    repetitions: RepetitionCount,
    sink_policy: SinkPolicy,
    sink_capacity: usize,
}

impl RepetitionRunner {
    /// Create a runner with default settings (1000 repetitions, accumulating sink).
    pub fn new() -> Self {
        Self {
            repetitions: RepetitionCount::default(),
            sink_policy: SinkPolicy::default(),
            sink_capacity: 0,
        }
    }

    /// Create a runner from a validated configuration.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self {
            repetitions: config.repetitions,
            sink_policy: config.sink_policy,
            sink_capacity: config.sink_capacity,
        }
    }

    /// Set the number of repetitions.
    pub fn repetitions(mut self, repetitions: RepetitionCount) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the sink policy.
    pub fn sink_policy(mut self, policy: SinkPolicy) -> Self {
        self.sink_policy = policy;
        self
    }

    /// Bytes to pre-allocate in the sink before timing starts.
    pub fn sink_capacity(mut self, capacity: usize) -> Self {
        self.sink_capacity = capacity;
        self
    }

    /// Run `transform` against `input` for the configured number of repetitions.
    ///
    /// The same sink is handed to every call. The first failing call aborts
    /// the loop and its partial timing is discarded.
    pub fn run<T>(&self, input: &InputBuffer, transform: &mut T) -> BenchResult<RunOutcome>
    where
        T: Transform + ?Sized,
    {
        let total = self.repetitions.get();
        let mut sink = OutputSink::with_capacity(self.sink_policy, self.sink_capacity);

        let start = Instant::now();
        for index in 0..total {
            sink.begin_repetition();
            if let Err(source) = transform.transform(input, &mut sink) {
                return Err(BenchError::Transformation {
                    iteration: index + 1,
                    total,
                    source,
                });
            }
        }
        let elapsed = start.elapsed();

        let sink = black_box(sink);

        Ok(RunOutcome {
            elapsed,
            repetitions: total,
            output_bytes: sink.len(),
        })
    }
}

impl Default for RepetitionRunner {
    fn default() -> Self {
        Self::new()
    }
}
