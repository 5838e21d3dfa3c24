use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{LOCAL_CONFIG_NAME, ThresholdSpec, parse_threshold_spec};
use crate::output::{ColorMode, ReporterKind};

/// Default location of Istanbul's JSON report.
pub const DEFAULT_COVERAGE_FILE: &str = "coverage/coverage-final.json";

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "coverage-guard")]
#[command(author, version, about = "Coverage guard - enforce code coverage thresholds")]
#[command(long_about = "Checks Istanbul coverage data against global and per-file thresholds.\n\n\
    A positive threshold is a minimum percentage; a negative threshold is the maximum\n\
    number of uncovered items; zero disables the check.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Coverage below threshold\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v prints the coverage summary)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress reporter output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a coverage report against thresholds
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Istanbul JSON coverage report
    #[arg(default_value = DEFAULT_COVERAGE_FILE)]
    pub coverage_file: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Whole-project threshold: a number, or metric=value pairs (statements=80,branches=-5)
    #[arg(long, value_parser = parse_threshold_spec, allow_hyphen_values = true)]
    pub global: Option<ThresholdSpec>,

    /// Per-file threshold: a number, or metric=value pairs
    #[arg(long, value_parser = parse_threshold_spec, allow_hyphen_values = true)]
    pub each: Option<ThresholdSpec>,

    /// Root for exclude patterns and reported file names (overrides config)
    #[arg(long)]
    pub base_path: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Reporters to use [possible values: text, teamcity, json] (replaces config)
    #[arg(long, short = 'r', value_delimiter = ',')]
    pub reporter: Vec<ReporterKind>,

    /// Write reporter output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
