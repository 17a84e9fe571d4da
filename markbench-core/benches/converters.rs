// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Converter microbenchmarks.
//!
//! Measures each stock converter at a few document sizes, plus the full
//! repetition loop under both sink policies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use markbench_core::{
    build_transform, ConverterKind, InputBuffer, MarkdownExtensions, OutputSink,
    RepetitionCount, RepetitionRunner, SinkPolicy, Transform,
};
use std::time::Duration;

/// Number of times the sample section is repeated per document.
const DOC_SCALES: &[usize] = &[1, 16, 128];

const SECTION: &str = "# Heading\n\nSome *emphasis*, some **strong** text and `code`.\n\n\
- item one\n- item two with a [link](https://example.com)\n\n\
```rust\nfn main() {}\n```\n\n> quoted ~~struck~~ text\n\n";

fn document(scale: usize) -> InputBuffer {
    InputBuffer::from_bytes("bench.md", SECTION.repeat(scale))
}

/// Benchmark one conversion per iteration with a fresh sink.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.measurement_time(Duration::from_secs(5));

    for kind in [ConverterKind::PulldownCmark, ConverterKind::Comrak] {
        for &scale in DOC_SCALES {
            let input = document(scale);
            group.throughput(Throughput::Bytes(input.len() as u64));

            group.bench_with_input(BenchmarkId::new(kind.name(), scale), &input, |b, input| {
                let mut transform = build_transform(kind, &MarkdownExtensions::default());
                b.iter(|| {
                    let mut sink = OutputSink::new(SinkPolicy::Accumulate);
                    transform
                        .transform(black_box(input), &mut sink)
                        .expect("Conversion failed");
                    black_box(sink.len());
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the whole repetition loop under each sink policy.
fn bench_runner_sink_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner_sink_policy");
    group.measurement_time(Duration::from_secs(5));

    let input = document(16);
    let repetitions = RepetitionCount::new(100).expect("Valid repetition count");

    for policy in [SinkPolicy::Accumulate, SinkPolicy::ResetPerIteration] {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy.name()),
            &policy,
            |b, &policy| {
                let runner = RepetitionRunner::new()
                    .repetitions(repetitions)
                    .sink_policy(policy);
                let mut transform =
                    build_transform(ConverterKind::PulldownCmark, &MarkdownExtensions::default());
                b.iter(|| {
                    let outcome = runner
                        .run(&input, transform.as_mut())
                        .expect("Run failed");
                    black_box(outcome);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the cost of autolink rewriting on top of pulldown-cmark.
fn bench_autolink_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("autolink_overhead");
    group.measurement_time(Duration::from_secs(3));

    let input = document(16);
    for autolink in [false, true] {
        let extensions = MarkdownExtensions {
            autolink,
            ..Default::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(autolink),
            &extensions,
            |b, extensions| {
                let mut transform = build_transform(ConverterKind::PulldownCmark, extensions);
                b.iter(|| {
                    let mut sink = OutputSink::new(SinkPolicy::Accumulate);
                    transform
                        .transform(black_box(&input), &mut sink)
                        .expect("Conversion failed");
                    black_box(sink.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_convert,
    bench_runner_sink_policy,
    bench_autolink_overhead,
);

criterion_main!(benches);
