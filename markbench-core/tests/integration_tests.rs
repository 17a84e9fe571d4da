// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests for the markbench harness.
//!
//! These tests drive a full session from a file on disk to the report line.

use markbench_core::{
    BenchError, BenchmarkSession, ConverterKind, HarnessConfig, InputBuffer, OutputSink,
    RepetitionCount, ReportFormat, RunPhase, RunReport, SinkPolicy, Transform, TransformError,
};
use tempfile::TempDir;

/// Counting transform that appends the input verbatim.
struct CountingTransform {
    calls: u64,
    sink_addresses: Vec<usize>,
}

impl CountingTransform {
    fn new() -> Self {
        Self {
            calls: 0,
            sink_addresses: Vec::new(),
        }
    }
}

impl Transform for CountingTransform {
    fn name(&self) -> &str {
        "counting-mock"
    }

    fn transform(
        &mut self,
        input: &InputBuffer,
        sink: &mut OutputSink,
    ) -> Result<(), TransformError> {
        self.calls += 1;
        self.sink_addresses.push(&*sink as *const OutputSink as usize);
        sink.extend_from_slice(input.as_bytes());
        Ok(())
    }
}

fn write_doc(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("TEST.md");
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Title document, 1000 repetitions, always-succeeding mock.
#[test]
fn test_title_document_thousand_repetitions() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_doc(&dir, "# Title\n\nBody text.");

    let mut session = BenchmarkSession::new(HarnessConfig::default());
    let mut transform = CountingTransform::new();
    let mut out = Vec::new();

    let report = session
        .execute_with(&path, &mut transform, &mut out)
        .expect("Run should succeed");

    assert_eq!(transform.calls, 1000);
    assert_eq!(report.repetitions, 1000);
    assert_eq!(session.phase(), RunPhase::Done);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(text.trim_end(), report.elapsed);

    // Accumulating sink: every repetition's output is still there at the end.
    assert_eq!(report.output_bytes, 1000 * "# Title\n\nBody text.".len());

    let first = transform.sink_addresses[0];
    assert!(transform.sink_addresses.iter().all(|&a| a == first));
}

#[test]
fn test_real_converters_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(
        &dir,
        "# Title\n\nBody text with **bold** and a [link](https://example.com).\n",
    );

    for converter in [ConverterKind::PulldownCmark, ConverterKind::Comrak] {
        let config = HarnessConfig::default()
            .repetitions(RepetitionCount::new(25).unwrap())
            .converter(converter)
            .format(ReportFormat::Json);
        let mut session = BenchmarkSession::new(config);
        let mut out = Vec::new();

        let report = session.execute(&path, &mut out).expect("Run should succeed");

        let parsed: RunReport = serde_json::from_slice(&out).expect("Report must be JSON");
        assert_eq!(parsed.converter, converter.name());
        assert_eq!(parsed.repetitions, 25);
        assert_eq!(parsed, report);
        assert!(report.output_bytes > 0);
    }
}

#[test]
fn test_reset_policy_keeps_single_output() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "# Title\n\nBody text.");

    let config = HarnessConfig::default()
        .repetitions(RepetitionCount::new(100).unwrap())
        .sink_policy(SinkPolicy::ResetPerIteration);
    let mut session = BenchmarkSession::new(config);
    let mut transform = CountingTransform::new();
    let mut out = Vec::new();

    let report = session
        .execute_with(&path, &mut transform, &mut out)
        .unwrap();

    assert_eq!(transform.calls, 100);
    assert_eq!(report.output_bytes, "# Title\n\nBody text.".len());
    assert_eq!(report.sink_policy, SinkPolicy::ResetPerIteration);
}

#[test]
fn test_invalid_utf8_input_is_transformation_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.md");
    std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let mut session = BenchmarkSession::new(HarnessConfig::default());
    let mut out = Vec::new();

    let err = session.execute(&path, &mut out).unwrap_err();
    assert!(matches!(
        err,
        BenchError::Transformation {
            iteration: 1,
            total: 1000,
            source: TransformError::InvalidUtf8 { .. },
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn test_two_runs_produce_sane_durations() {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "# Title\n\nBody text.");

    for _ in 0..2 {
        let config = HarnessConfig::default().repetitions(RepetitionCount::new(50).unwrap());
        let mut session = BenchmarkSession::new(config);
        let report = session.execute(&path, &mut std::io::sink()).unwrap();

        let secs = report.elapsed_ns as f64 / 1e9;
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}
