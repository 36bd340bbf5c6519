//! CLI entrypoint for jury-sim
//!
//! This is the main binary that wires together all layers: configuration
//! loading, logging, the simulation use case, output and the report file.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use jury_application::{
    NoProgress, ProgressNotifier, RunSimulationInput, RunSimulationUseCase,
};
use jury_infrastructure::{ConfigLoader, FileConfig, TextReportWriter};
use jury_presentation::{Cli, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let config = load_config(&cli)?;
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let trial = config.validate().context("Invalid configuration")?;
    let output = OutputConfig {
        format: config.output.format,
        color: config.output.color,
        show_progress: config.output.show_progress,
    };
    output.apply_color();

    info!("Starting jury-sim");

    let input = RunSimulationInput::new(trial).with_params(config.simulation.to_params());
    let use_case = RunSimulationUseCase::new();

    let progress: Box<dyn ProgressNotifier> = if !output.wants_progress() {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };
    let report = use_case.execute_with_progress(input, progress.as_ref())?;

    println!("{}", ConsoleFormatter::render(&report, &output));

    if let Some(path) = &config.output.report_file {
        TextReportWriter::write(&report, path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if output.show_progress {
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v`. With `--log-file` every event is
/// also written, without ANSI codes, to that file.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn log_file_appender(path: &Path) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    Ok(tracing_appender::rolling::never(dir, file_name))
}

/// Load file configuration and apply CLI overrides on top
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    let trial = &mut config.trial;
    if let Some(size) = cli.jury_size {
        trial.jury_size = size.size();
    }
    if let Some(rule) = cli.vote_rule {
        trial.vote_rule = rule;
    }
    if let Some(threshold) = cli.majority_threshold {
        trial.majority_threshold = threshold;
    }
    if let Some(count) = cli.argument_count {
        trial.argument_count = count;
    }
    if let Some(low) = cli.low_bias {
        trial.low_bias = low;
    }
    if let Some(high) = cli.high_bias {
        trial.high_bias = high;
    }
    if let Some(max_rounds) = cli.max_rounds {
        trial.max_rounds = max_rounds;
    }
    if let Some(fraction) = cli.innocent_fraction {
        trial.innocent_fraction = Some(fraction);
    }

    if let Some(runs) = cli.runs {
        config.simulation.runs = runs;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }

    let output = &mut config.output;
    if let Some(format) = cli.output {
        output.format = format.into();
    }
    if cli.no_color {
        output.color = false;
    }
    if cli.quiet {
        output.show_progress = false;
    }
    if let Some(path) = &cli.report {
        output.report_file = Some(path.clone());
    }
}
