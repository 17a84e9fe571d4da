// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! One benchmark invocation: load, run, report.
//!
//! The session drives the [`RunStateMachine`] through a single traversal.
//! The first error moves it to Failed and is returned untouched; nothing is
//! written to the report stream unless every repetition succeeded.

use std::io::Write;
use std::path::Path;

use crate::config::HarnessConfig;
use crate::error::BenchResult;
use crate::loader::WorkloadLoader;
use crate::report::{elapsed_nanos, ReportWriter, RunReport};
use crate::runner::RepetitionRunner;
use crate::state::{RunPhase, RunStateMachine};
use crate::transform::{build_transform, Transform};

/// A single-shot benchmark run.
#[derive(Debug)]
pub struct BenchmarkSession {
    config: HarnessConfig,
    state: RunStateMachine,
}

impl BenchmarkSession {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            state: RunStateMachine::new(),
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        self.state.phase()
    }

    /// Benchmark the configured converter against the file at `path`.
    pub fn execute<W: Write>(
        &mut self,
        path: impl AsRef<Path>,
        out: &mut W,
    ) -> BenchResult<RunReport> {
        let mut transform = build_transform(self.config.converter, &self.config.extensions);
        self.execute_with(path, &mut *transform, out)
    }

    /// Benchmark an arbitrary transform against the file at `path`.
    pub fn execute_with<T, W>(
        &mut self,
        path: impl AsRef<Path>,
        transform: &mut T,
        out: &mut W,
    ) -> BenchResult<RunReport>
    where
        T: Transform + ?Sized,
        W: Write,
    {
        let result = self.traverse(path.as_ref(), transform, out);
        if result.is_err() {
            self.state.fail();
        }
        result
    }

    fn traverse<T, W>(
        &mut self,
        path: &Path,
        transform: &mut T,
        out: &mut W,
    ) -> BenchResult<RunReport>
    where
        T: Transform + ?Sized,
        W: Write,
    {
        self.state.transition_to(RunPhase::Loading)?;
        let input = WorkloadLoader::load(path)?;

        self.state.transition_to(RunPhase::Running)?;
        tracing::info!(
            converter = transform.name(),
            repetitions = %self.config.repetitions,
            sink_policy = %self.config.sink_policy,
            input_bytes = input.len(),
            "Starting timed run"
        );
        let outcome = RepetitionRunner::from_config(&self.config).run(&input, transform)?;
        tracing::info!(
            elapsed_ns = elapsed_nanos(outcome.elapsed),
            output_bytes = outcome.output_bytes,
            "Timed run complete"
        );

        self.state.transition_to(RunPhase::Reporting)?;
        let report = RunReport::new(
            transform.name(),
            self.config.sink_policy,
            input.len(),
            &outcome,
        );
        ReportWriter::new(self.config.format).write(&report, out)?;

        self.state.transition_to(RunPhase::Done)?;
        Ok(report)
    }
}
