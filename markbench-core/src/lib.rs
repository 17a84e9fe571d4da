//! markbench Core Library
//!
//! Harness for timing a pluggable text transformation: the workload is
//! loaded once, the transform is applied a fixed number of times under a
//! single timer span, and the aggregate elapsed time is reported.
//! Markdown-to-HTML converters are provided as the stock transforms.

pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod runner;
pub mod session;
pub mod sink;
pub mod state;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigLoader, HarnessConfig};
pub use error::{BenchError, BenchResult, HardValidationError, TransformError};
pub use loader::{InputBuffer, WorkloadLoader};
pub use report::{format_duration, ReportFormat, ReportWriter, RunReport};
pub use runner::{RepetitionRunner, RunOutcome};
pub use session::BenchmarkSession;
pub use sink::OutputSink;
pub use state::{RunPhase, RunStateMachine};
pub use transform::{build_transform, from_fn, MarkdownExtensions, Transform};
pub use types::{ConverterKind, RepetitionCount, SinkPolicy};
