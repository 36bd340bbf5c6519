//! Console output formatter for simulation reports

use crate::config::OutputConfig;
use colored::{ColoredString, Colorize};
use jury_application::SimulationReport;
use jury_domain::{
    ArgumentType, BatchSummary, OutputFormat, TrialConfig, TrialOutcome, TypeDistribution,
    Verdict,
};

/// Formats simulation reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render in the configured format
    pub fn render(report: &SimulationReport, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Full => Self::format(report),
            OutputFormat::Summary => Self::format_summary_only(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// Format every run followed by the batch summary
    pub fn format(report: &SimulationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Jury Simulation Results"));
        output.push('\n');
        output.push_str(&Self::format_config(&report.config, report.base_seed));

        for outcome in &report.runs {
            output.push_str(&Self::format_run(outcome));
        }

        output.push_str(&Self::format_summary(&report.summary));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &SimulationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the configuration and batch summary only (concise output)
    pub fn format_summary_only(report: &SimulationReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Jury Simulation Summary ===".cyan().bold()
        ));
        output.push_str(&Self::format_config(&report.config, report.base_seed));
        output.push_str(&Self::format_summary(&report.summary));

        output
    }

    fn format_config(config: &TrialConfig, base_seed: u64) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} jurors, {}",
            "Jury:".cyan().bold(),
            config.jury_size,
            config.vote_rule.description()
        ));
        if config.vote_rule == jury_domain::VoteRule::Majority {
            output.push_str(&format!(", {} threshold", config.majority_threshold));
        }
        output.push('\n');
        output.push_str(&format!(
            "{} {} biased (low {}, high {})\n",
            "Bias:".cyan().bold(),
            config.biased_jurors,
            config.low_bias,
            config.high_bias
        ));
        output.push_str(&format!(
            "{} {} arguments, {} split, round cap {}\n",
            "Trial:".cyan().bold(),
            config.argument_count,
            config.split,
            config.max_rounds
        ));
        output.push_str(&format!("{} {}\n", "Seed:".cyan().bold(), base_seed));
        output
    }

    fn format_run(outcome: &TrialOutcome) -> String {
        let stats = &outcome.statistics;
        let mut output = Self::section_header(&format!("Run {} (seed {})", outcome.run, outcome.seed));

        output.push_str(&format!(
            "Truth: {}   Verdict: {}   Votes: {}\n",
            outcome.ground_truth.to_string().bold(),
            Self::verdict_label(outcome),
            outcome.tally.summary()
        ));
        output.push_str(&format!(
            "Rounds: {} ({})   Distinct arguments voiced: {}\n",
            stats.rounds,
            Self::termination_label(outcome),
            stats.distinct_presented
        ));
        output.push_str(&format!(
            "Spread: {} claims, {} other ({:.2} / {:.2} per round)\n",
            stats.spread.claims,
            stats.spread.non_claims,
            stats.average_claim_spread,
            stats.average_non_claim_spread
        ));
        output.push_str(&format!(
            "Trial mix: {}\n",
            Self::distribution(&stats.trial_distribution)
        ));
        output.push_str(&format!(
            "Jury mix:  {}\n",
            Self::distribution(&stats.jury_distribution)
        ));

        for juror in &stats.jurors {
            let opinion = if juror.opinion.is_innocent() {
                juror.opinion.to_string().green()
            } else {
                juror.opinion.to_string().red()
            };
            output.push_str(&format!(
                "  {:<4} {:<14} knows {:>3}  score {:>+4}  {:>5.1}% / {:>5.1}%  {}\n",
                juror.id.to_string(),
                juror.profile.to_string(),
                juror.knowledge,
                juror.opinion_score,
                juror.innocent_share * 100.0,
                juror.guilty_share * 100.0,
                opinion
            ));
        }

        output
    }

    fn format_summary(summary: &BatchSummary) -> String {
        let mut output = Self::section_header("Summary");

        output.push_str(&format!(
            "{} {} / {} ({:.1}%)\n",
            "Correct verdicts:".green().bold(),
            summary.correct,
            summary.runs,
            summary.accuracy() * 100.0
        ));
        output.push_str(&format!(
            "{} {}\n",
            "False guilty:".red().bold(),
            summary.false_guilty
        ));
        output.push_str(&format!(
            "{} {}\n",
            "False innocent:".red().bold(),
            summary.false_innocent
        ));
        output.push_str(&format!("{} {}\n", "Hung juries:".yellow().bold(), summary.hung));
        if summary.forced > 0 {
            output.push_str(&format!(
                "{} {}\n",
                "Forced by round cap:".yellow().bold(),
                summary.forced
            ));
        }
        output.push_str(&format!(
            "{} {:.2}\n",
            "Average rounds:".dimmed(),
            summary.average_rounds
        ));
        output.push_str(&format!(
            "{} {:.3} claims, {:.3} other\n",
            "Average spread per round:".dimmed(),
            summary.average_claim_spread,
            summary.average_non_claim_spread
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Trial mix:".dimmed(),
            Self::distribution(&summary.average_trial_distribution)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Jury mix:".dimmed(),
            Self::distribution(&summary.average_jury_distribution)
        ));

        output
    }

    fn verdict_label(outcome: &TrialOutcome) -> ColoredString {
        let label = outcome.verdict.to_string();
        match outcome.verdict {
            Verdict::Hung => label.yellow().bold(),
            _ if outcome.is_correct() => label.green().bold(),
            _ => label.red().bold(),
        }
    }

    fn termination_label(outcome: &TrialOutcome) -> ColoredString {
        let label = outcome.termination.to_string();
        if outcome.is_forced() {
            label.yellow()
        } else {
            label.dimmed()
        }
    }

    fn distribution(distribution: &TypeDistribution) -> String {
        ArgumentType::ALL
            .iter()
            .map(|kind| format!("{} {:.1}%", kind, distribution.get(*kind)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jury_application::{RunSimulationInput, RunSimulationUseCase, SimulationParams};
    use jury_domain::JurySize;

    fn report(runs: usize) -> SimulationReport {
        let input = RunSimulationInput::new(
            TrialConfig::default()
                .with_jury_size(JurySize::Small)
                .with_argument_count(20)
                .with_bias(0, 1),
        )
        .with_params(SimulationParams::default().with_runs(runs).with_seed(9));
        RunSimulationUseCase::new().execute(input).unwrap()
    }

    #[test]
    fn test_full_lists_every_run() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&report(3));

        assert!(text.contains("Run 1 (seed 9)"));
        assert!(text.contains("Run 3 (seed 11)"));
        assert!(text.contains("Summary"));
        // six jurors per run
        assert_eq!(text.matches("knows").count(), 18);
    }

    #[test]
    fn test_summary_only_omits_runs() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_summary_only(&report(2));

        assert!(text.contains("Correct verdicts:"));
        assert!(text.contains("Seed: 9"));
        assert!(!text.contains("Run 1"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text = ConsoleFormatter::format_json(&report(2));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["base_seed"], 9);
        assert_eq!(value["runs"].as_array().unwrap().len(), 2);
        assert_eq!(value["summary"]["runs"], 2);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let report = report(1);
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        assert!(ConsoleFormatter::render(&report, &config).starts_with('{'));
    }
}
