// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result reporting.
//!
//! A run produces exactly one line of output: either the bare formatted
//! duration or a single compact JSON record.

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult, HardValidationError};
use crate::runner::RunOutcome;
use crate::types::SinkPolicy;

/// Format a duration in human-readable form (auto-selects ns/µs/ms/s).
pub fn format_duration(elapsed: Duration) -> String {
    let ns = elapsed.as_nanos();
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2}µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.3}s", ns as f64 / 1_000_000_000.0)
    }
}

/// Whole nanoseconds in `elapsed`, saturating at `u64::MAX`.
pub(crate) fn elapsed_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// How the report line is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Bare duration, e.g. `812.50ms`.
    #[default]
    Human,
    /// One compact JSON object.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Human => write!(f, "human"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = HardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(HardValidationError::InvalidFieldValue {
                field: "format",
                value: other.to_string(),
                reason: "Expected 'human' or 'json'".to_string(),
            }),
        }
    }
}

/// Record of one completed benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Converter that was measured
    pub converter: String,
    /// Repetitions executed inside the timed span
    pub repetitions: u64,
    /// Sink policy in effect
    pub sink_policy: SinkPolicy,
    /// Size of the input document
    pub input_bytes: usize,
    /// Sink length at the end of the run
    pub output_bytes: usize,
    /// Total elapsed time in nanoseconds
    pub elapsed_ns: u64,
    /// Total elapsed time, formatted
    pub elapsed: String,
    /// When the run finished
    pub timestamp: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        converter: impl Into<String>,
        sink_policy: SinkPolicy,
        input_bytes: usize,
        outcome: &RunOutcome,
    ) -> Self {
        Self {
            converter: converter.into(),
            repetitions: outcome.repetitions,
            sink_policy,
            input_bytes,
            output_bytes: outcome.output_bytes,
            elapsed_ns: elapsed_nanos(outcome.elapsed),
            elapsed: format_duration(outcome.elapsed),
            timestamp: Utc::now(),
        }
    }
}

/// Writes a [`RunReport`] as a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Write `report` to `out`, followed by a newline, and flush.
    pub fn write<W: Write>(&self, report: &RunReport, out: &mut W) -> BenchResult<()> {
        match self.format {
            ReportFormat::Human => writeln!(out, "{}", report.elapsed).map_err(io_error)?,
            ReportFormat::Json => {
                serde_json::to_writer(&mut *out, report)?;
                out.write_all(b"\n").map_err(io_error)?;
            }
        }
        out.flush().map_err(io_error)
    }
}

fn io_error(source: std::io::Error) -> BenchError {
    BenchError::Io {
        context: "writing report",
        source,
    }
}
