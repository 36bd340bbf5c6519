//! Plain-text report writer.
//!
//! Renders a [`SimulationReport`] as a human-readable summary: a header,
//! the configuration, batch counts and averages, then one line per run.
//! The layout is for people, not parsers.

use jury_application::SimulationReport;
use jury_domain::{ArgumentType, TypeDistribution};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors from writing a report file
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes [`SimulationReport`]s as plain text
pub struct TextReportWriter;

impl TextReportWriter {
    /// Write the report to `path`, creating parent directories
    pub fn write(report: &SimulationReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(Self::render(report).as_bytes())?;
        writer.flush()?;

        info!(path = %path.display(), runs = report.runs.len(), "Report written");
        Ok(())
    }

    /// Render the report text
    pub fn render(report: &SimulationReport) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = Self::render_into(&mut out, report);
        out
    }

    fn render_into(out: &mut String, report: &SimulationReport) -> std::fmt::Result {
        let config = &report.config;
        let summary = &report.summary;

        writeln!(out, "Jury Deliberation Simulation Report")?;
        writeln!(out, "===================================")?;
        writeln!(
            out,
            "Generated: {}",
            report.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(out, "Duration:  {} ms", report.duration_ms())?;
        writeln!(out, "Base seed: {}", report.base_seed)?;
        writeln!(out)?;

        writeln!(out, "Configuration")?;
        writeln!(out, "-------------")?;
        writeln!(out, "Jury size:          {}", config.jury_size)?;
        writeln!(out, "Vote rule:          {}", config.vote_rule.description())?;
        writeln!(out, "Majority threshold: {}", config.majority_threshold)?;
        writeln!(out, "Arguments:          {}", config.argument_count)?;
        writeln!(
            out,
            "Biased jurors:      {} (low {}, high {})",
            config.biased_jurors, config.low_bias, config.high_bias
        )?;
        writeln!(out, "Split:              {}", config.split)?;
        writeln!(out, "Round cap:          {}", config.max_rounds)?;
        writeln!(out)?;

        writeln!(out, "Summary")?;
        writeln!(out, "-------")?;
        writeln!(out, "Runs:               {}", summary.runs)?;
        writeln!(
            out,
            "Correct verdicts:   {} ({:.1}%)",
            summary.correct,
            summary.accuracy() * 100.0
        )?;
        writeln!(out, "False guilty:       {}", summary.false_guilty)?;
        writeln!(out, "False innocent:     {}", summary.false_innocent)?;
        writeln!(out, "Hung juries:        {}", summary.hung)?;
        writeln!(out, "Forced terminations: {}", summary.forced)?;
        writeln!(out, "Average rounds:     {:.2}", summary.average_rounds)?;
        writeln!(
            out,
            "Claim spread/round: {:.3}",
            summary.average_claim_spread
        )?;
        writeln!(
            out,
            "Other spread/round: {:.3}",
            summary.average_non_claim_spread
        )?;
        writeln!(
            out,
            "Trial distribution: {}",
            distribution_line(&summary.average_trial_distribution)
        )?;
        writeln!(
            out,
            "Jury distribution:  {}",
            distribution_line(&summary.average_jury_distribution)
        )?;
        writeln!(out)?;

        writeln!(out, "Runs")?;
        writeln!(out, "----")?;
        for run in &report.runs {
            writeln!(
                out,
                "#{:<4} seed={} truth={} verdict={} votes={} rounds={} end={}",
                run.run,
                run.seed,
                run.ground_truth,
                run.verdict,
                run.tally.summary(),
                run.statistics.rounds,
                run.termination
            )?;
        }
        Ok(())
    }
}

fn distribution_line(distribution: &TypeDistribution) -> String {
    ArgumentType::ALL
        .iter()
        .map(|kind| format!("{} {:.1}%", kind, distribution.get(*kind)))
        .collect::<Vec<_>>()
        .join(", ")
}
