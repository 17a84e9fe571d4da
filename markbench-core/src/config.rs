// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict schema validation.
//!
//! Every field has a documented default, so an empty file (or no file at
//! all) reproduces the classic run: 1000 repetitions, accumulating sink,
//! pulldown-cmark, human-readable output. Invalid values are rejected with
//! a HardValidationError before anything is loaded or timed.

use std::path::Path;

use serde::Deserialize;

use crate::error::{BenchError, BenchResult, HardValidationError};
use crate::report::ReportFormat;
use crate::transform::MarkdownExtensions;
use crate::types::{ConverterKind, RepetitionCount, SinkPolicy, DEFAULT_REPETITIONS};

/// Upper bound on sink pre-allocation: 1 GiB.
const MAX_SINK_CAPACITY: u64 = 1024 * 1024 * 1024;

/// Raw sink settings as parsed from YAML (before validation).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSinkConfig {
    #[serde(default)]
    policy: SinkPolicy,
    #[serde(default)]
    capacity: u64,
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_repetitions")]
    repetitions: u64,
    #[serde(default)]
    converter: ConverterKind,
    #[serde(default)]
    format: ReportFormat,
    #[serde(default)]
    sink: RawSinkConfig,
    #[serde(default)]
    extensions: MarkdownExtensions,
}

fn default_repetitions() -> u64 {
    DEFAULT_REPETITIONS
}

/// Validated harness configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub repetitions: RepetitionCount,
    pub sink_policy: SinkPolicy,
    pub sink_capacity: usize,
    pub converter: ConverterKind,
    pub extensions: MarkdownExtensions,
    pub format: ReportFormat,
}

impl HarnessConfig {
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

    /// Set the sink pre-allocation in bytes.
    pub fn sink_capacity(mut self, capacity: usize) -> Self {
        self.sink_capacity = capacity;
        self
    }

    /// Set the converter to measure.
    pub fn converter(mut self, converter: ConverterKind) -> Self {
        self.converter = converter;
        self
    }

    /// Set the report format.
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            repetitions: RepetitionCount::default(),
            sink_policy: SinkPolicy::default(),
            sink_capacity: 0,
            converter: ConverterKind::default(),
            extensions: MarkdownExtensions::default(),
            format: ReportFormat::default(),
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<HarnessConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Loaded configuration file");

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<HarnessConfig> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(HarnessConfig::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Ok(Self::validate(raw)?)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> Result<HarnessConfig, HardValidationError> {
        let repetitions = RepetitionCount::new(raw.repetitions)?;

        if raw.sink.capacity > MAX_SINK_CAPACITY {
            return Err(HardValidationError::OutOfRange {
                field: "sink.capacity",
                value: raw.sink.capacity,
                min: 0,
                max: MAX_SINK_CAPACITY,
            });
        }

        let sink_capacity = usize::try_from(raw.sink.capacity).map_err(|_| {
            HardValidationError::InvalidFieldValue {
                field: "sink.capacity",
                value: raw.sink.capacity.to_string(),
                reason: "Does not fit in this platform's address space".to_string(),
            }
        })?;

        Ok(HarnessConfig {
            repetitions,
            sink_policy: raw.sink.policy,
            sink_capacity,
            converter: raw.converter,
            extensions: raw.extensions,
            format: raw.format,
        })
    }
}
