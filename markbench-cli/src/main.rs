// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! markbench CLI
//!
//! Times a Markdown-to-HTML converter over a fixed input file and prints
//! the total elapsed time as a single line on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use markbench_core::{
    BenchResult, BenchmarkSession, ConfigLoader, ConverterKind, HarnessConfig,
    RepetitionCount, ReportFormat, SinkPolicy,
};
use tracing_subscriber::EnvFilter;

/// markbench - time repeated Markdown-to-HTML conversion of one document
#[derive(Parser)]
#[command(name = "markbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Markdown document to convert
    pub input: PathBuf,

    /// Number of timed repetitions [default: 1000]
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Sink handling between repetitions: accumulate | reset-per-iteration [default: accumulate]
    #[arg(long)]
    pub sink_policy: Option<SinkPolicy>,

    /// Converter to measure: pulldown-cmark | comrak [default: pulldown-cmark]
    #[arg(long)]
    pub converter: Option<ConverterKind>,

    /// Report format: human | json [default: human]
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// YAML configuration file; flags given on the command line win
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report line.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("markbench: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> BenchResult<()> {
    let mut session = BenchmarkSession::new(resolve_config(cli)?);
    tracing::debug!(
        config = ?session.config(),
        input = %cli.input.display(),
        "Resolved configuration"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    session.execute(&cli.input, &mut out)?;

    Ok(())
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(cli: &Cli) -> BenchResult<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => HarnessConfig::default(),
    };

    if let Some(iterations) = cli.iterations {
        config = config.repetitions(RepetitionCount::new(iterations)?);
    }
    if let Some(policy) = cli.sink_policy {
        config = config.sink_policy(policy);
    }
    if let Some(converter) = cli.converter {
        config = config.converter(converter);
    }
    if let Some(format) = cli.format {
        config = config.format(format);
    }

    Ok(config)
}
