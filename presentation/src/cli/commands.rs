//! CLI command definitions

use clap::{Parser, ValueEnum};
use jury_domain::{JurySize, MajorityThreshold, VoteRule};
use std::path::PathBuf;

/// Output format for simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every run followed by the batch summary
    Full,
    /// Only the batch summary
    Summary,
    /// JSON report
    Json,
}

impl From<OutputFormat> for jury_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => jury_domain::OutputFormat::Full,
            OutputFormat::Summary => jury_domain::OutputFormat::Summary,
            OutputFormat::Json => jury_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for jury-sim
///
/// Every trial flag is optional: when absent the value comes from the
/// configuration files.
#[derive(Parser, Debug)]
#[command(name = "jury-sim")]
#[command(author, version, about = "Jury deliberation simulator")]
#[command(long_about = r#"
jury-sim simulates how a jury exchanges arguments and reaches a verdict.

Each run generates a pool of exonerating and incriminating arguments (the
majority side is the ground truth), seats a jury of neutral and biased
jurors, lets them deliberate and takes a vote. A batch of runs reports how
often the verdict matched the truth.

Configuration files are loaded from (in priority order):
1. JURY_<SECTION>__<KEY>    Environment variables
2. --config <path>          Explicit config file
3. ./jury.toml              Project-level config
4. ~/.config/jury-sim/config.toml   Global config

Example:
  jury-sim --runs 1000 --seed 42
  jury-sim --jury-size 6 --vote-rule majority --low-bias 1 --high-bias 1
  jury-sim --arguments 20 --innocent-fraction 0.4 -o full --runs 3
"#)]
pub struct Cli {
    /// Jury size (6 or 12)
    #[arg(long, value_name = "N", value_parser = parse_jury_size)]
    pub jury_size: Option<JurySize>,

    /// Vote rule (unanimous or majority)
    #[arg(long, value_name = "RULE")]
    pub vote_rule: Option<VoteRule>,

    /// Votes a side needs under the majority rule (plurality or absolute)
    #[arg(long, value_name = "THRESHOLD")]
    pub majority_threshold: Option<MajorityThreshold>,

    /// Number of arguments in the trial pool
    #[arg(long = "arguments", value_name = "N")]
    pub argument_count: Option<usize>,

    /// Jurors holding 10% of the trial size in one-sided claims
    #[arg(long, value_name = "N")]
    pub low_bias: Option<usize>,

    /// Jurors holding 20% of the trial size in one-sided claims
    #[arg(long, value_name = "N")]
    pub high_bias: Option<usize>,

    /// Hard cap on deliberation rounds per run
    #[arg(long, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Fixed share of exonerating arguments (0.0-1.0) instead of a random 45/55 split
    #[arg(long, value_name = "FRACTION")]
    pub innocent_fraction: Option<f64>,

    /// Number of runs in the batch
    #[arg(short = 'n', long, value_name = "N")]
    pub runs: Option<usize>,

    /// Base seed for a reproducible batch
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write a plain-text report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

fn parse_jury_size(value: &str) -> Result<JurySize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    JurySize::try_from(size).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_leave_overrides_empty() {
        let cli = Cli::parse_from(["jury-sim"]);
        assert!(cli.jury_size.is_none());
        assert!(cli.vote_rule.is_none());
        assert!(cli.runs.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_trial_flags() {
        let cli = Cli::parse_from([
            "jury-sim",
            "--jury-size",
            "6",
            "--vote-rule",
            "majority",
            "--majority-threshold",
            "absolute",
            "--arguments",
            "20",
            "--high-bias",
            "2",
            "--innocent-fraction",
            "0.4",
            "-n",
            "10",
            "--seed",
            "42",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.jury_size, Some(JurySize::Small));
        assert_eq!(cli.vote_rule, Some(VoteRule::Majority));
        assert_eq!(cli.majority_threshold, Some(MajorityThreshold::Absolute));
        assert_eq!(cli.argument_count, Some(20));
        assert_eq!(cli.high_bias, Some(2));
        assert_eq!(cli.innocent_fraction, Some(0.4));
        assert_eq!(cli.runs, Some(10));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_jury_size_rejected() {
        assert!(Cli::try_parse_from(["jury-sim", "--jury-size", "9"]).is_err());
        assert!(Cli::try_parse_from(["jury-sim", "--jury-size", "twelve"]).is_err());
    }

    #[test]
    fn test_invalid_vote_rule_rejected() {
        assert!(Cli::try_parse_from(["jury-sim", "--vote-rule", "plurality"]).is_err());
    }
}
