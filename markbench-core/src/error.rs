//! Custom error types for markbench.
//!
//! Every failure disqualifies the measurement, so there is no recoverable
//! category here. Errors are explicit enums that surface to the process
//! boundary; `exit_code` maps each category to a distinct status.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a missing or unreadable input (sysexits `EX_NOINPUT`).
pub const EXIT_RESOURCE_LOAD: u8 = 66;
/// Exit status for a failed repetition (sysexits `EX_DATAERR`).
pub const EXIT_TRANSFORMATION: u8 = 65;
/// Exit status for configuration problems (sysexits `EX_CONFIG`).
pub const EXIT_CONFIG: u8 = 78;
/// Exit status when the report cannot be written (sysexits `EX_IOERR`).
pub const EXIT_IO: u8 = 74;
/// Exit status for internal faults (sysexits `EX_SOFTWARE`).
pub const EXIT_INTERNAL: u8 = 70;

/// Top-level error type for a benchmark invocation.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Workload Errors - Fatal, No Retry
    // =========================================================================
    #[error("Failed to load input {path}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Transformation failed on repetition {iteration} of {total}: {source}")]
    Transformation {
        iteration: u64,
        total: u64,
        #[source]
        source: TransformError,
    },

    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Invalid phase transition: {0}")]
    InvalidPhaseTransition(#[from] PhaseTransitionError),

    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),
}

impl BenchError {
    /// Process exit status for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ResourceLoad { .. } => EXIT_RESOURCE_LOAD,
            Self::Transformation { .. } => EXIT_TRANSFORMATION,
            Self::HardValidation(_)
            | Self::ConfigNotFound { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. } => EXIT_CONFIG,
            Self::Io { .. } | Self::ReportSerialize(_) => EXIT_IO,
            Self::InvalidPhaseTransition(_) => EXIT_INTERNAL,
        }
    }
}

/// Errors reported by a transformation operation for a single call.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("{converter} failed to render: {source}")]
    Render {
        converter: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{converter} failed: {message}")]
    Failed { converter: String, message: String },
}

/// Validation errors for configuration values.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} out of bounds: {value} (min: {min}, max: {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Phase transition errors for the run state machine.
#[derive(Debug, Error)]
pub enum PhaseTransitionError {
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Run is in terminal phase: {phase}")]
    TerminalPhase { phase: &'static str },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
