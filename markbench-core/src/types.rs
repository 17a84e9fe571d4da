// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers and enums for validated harness settings.
//!
//! All types validate their invariants at creation time, so a constructed
//! value is always usable by the runner without further checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Repetitions used when nothing else is configured.
pub const DEFAULT_REPETITIONS: u64 = 1000;
/// Smallest accepted repetition count.
const MIN_REPETITIONS: u64 = 1;
/// Largest accepted repetition count.
const MAX_REPETITIONS: u64 = 100_000_000;

/// Validated number of timed repetitions.
/// Must be between 1 and 100 000 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RepetitionCount(u64);

impl RepetitionCount {
    /// Create a new RepetitionCount with bounds validation.
    pub fn new(count: u64) -> Result<Self, HardValidationError> {
        if !(MIN_REPETITIONS..=MAX_REPETITIONS).contains(&count) {
            return Err(HardValidationError::OutOfRange {
                field: "repetitions",
                value: count,
                min: MIN_REPETITIONS,
                max: MAX_REPETITIONS,
            });
        }
        Ok(Self(count))
    }

    /// Get the inner count.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for RepetitionCount {
    fn default() -> Self {
        Self(DEFAULT_REPETITIONS)
    }
}

impl fmt::Display for RepetitionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for RepetitionCount {
    type Error = HardValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepetitionCount> for u64 {
    fn from(count: RepetitionCount) -> Self {
        count.0
    }
}

/// What happens to the output sink between repetitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SinkPolicy {
    /// Never reset; the sink grows across every repetition.
    #[default]
    Accumulate,
    /// Clear the sink before each repetition, keeping its capacity.
    ResetPerIteration,
}

impl SinkPolicy {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Accumulate => "accumulate",
            Self::ResetPerIteration => "reset-per-iteration",
        }
    }
}

impl fmt::Display for SinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SinkPolicy {
    type Err = HardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accumulate" => Ok(Self::Accumulate),
            "reset-per-iteration" => Ok(Self::ResetPerIteration),
            other => Err(HardValidationError::InvalidFieldValue {
                field: "sink_policy",
                value: other.to_string(),
                reason: "Expected 'accumulate' or 'reset-per-iteration'".to_string(),
            }),
        }
    }
}

/// Markdown converter selected for the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConverterKind {
    #[default]
    PulldownCmark,
    Comrak,
}

impl ConverterKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PulldownCmark => "pulldown-cmark",
            Self::Comrak => "comrak",
        }
    }
}

impl fmt::Display for ConverterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConverterKind {
    type Err = HardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pulldown-cmark" => Ok(Self::PulldownCmark),
            "comrak" => Ok(Self::Comrak),
            other => Err(HardValidationError::InvalidFieldValue {
                field: "converter",
                value: other.to_string(),
                reason: "Expected 'pulldown-cmark' or 'comrak'".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repetition_count_validation() {
        assert!(RepetitionCount::new(0).is_err());
        assert!(RepetitionCount::new(1).is_ok());
        assert!(RepetitionCount::new(MAX_REPETITIONS).is_ok());
        assert!(RepetitionCount::new(MAX_REPETITIONS + 1).is_err());
    }

    #[test]
    fn test_repetition_count_default() {
        assert_eq!(RepetitionCount::default().get(), 1000);
    }

    #[test]
    fn test_sink_policy_parse() {
        assert_eq!(
            "accumulate".parse::<SinkPolicy>().unwrap(),
            SinkPolicy::Accumulate
        );
        assert_eq!(
            "reset-per-iteration".parse::<SinkPolicy>().unwrap(),
            SinkPolicy::ResetPerIteration
        );
        assert!("sometimes".parse::<SinkPolicy>().is_err());
    }

    #[test]
    fn test_converter_kind_roundtrip_name() {
        for kind in [ConverterKind::PulldownCmark, ConverterKind::Comrak] {
            assert_eq!(kind.name().parse::<ConverterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_and_deserialize_accept_same_spellings() {
        for text in ["accumulate", "reset-per-iteration", "reset"] {
            let parsed = text.parse::<SinkPolicy>().ok();
            let deserialized = serde_yaml::from_str::<SinkPolicy>(text).ok();
            assert_eq!(parsed, deserialized, "sink policy {text:?}");
        }
        for text in ["pulldown-cmark", "comrak", "pulldown"] {
            let parsed = text.parse::<ConverterKind>().ok();
            let deserialized = serde_yaml::from_str::<ConverterKind>(text).ok();
            assert_eq!(parsed, deserialized, "converter {text:?}");
        }
    }

    #[test]
    fn test_repetition_count_deserialize_rejects_zero() {
        let result: Result<RepetitionCount, _> = serde_yaml::from_str("0");
        assert!(result.is_err());
    }
}
