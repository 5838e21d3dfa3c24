use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::checker::{CoverageChecker, EvaluationResult, report};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use crate::coverage::{IstanbulSummarizer, RawCoverageDataset, Summarizer, load_dataset};
use crate::filter::ExcludeFilter;
use crate::output::{ColorMode, SharedWriter, SummaryFormatter, build_reporters, print_warning};
use crate::{EXIT_CONFIG_ERROR, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command and returns its exit code.
///
/// # Errors
/// Returns an error if configuration or coverage data cannot be loaded, or output fails.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Load coverage data
    let dataset = load_dataset(&args.coverage_file)?;
    if dataset.is_empty() {
        print_warning(&format!(
            "no files in coverage report {}",
            args.coverage_file.display()
        ));
    }

    // 4. Evaluate thresholds
    let filter = ExcludeFilter::new(&config.excludes, &config.base_path)?;
    let checker = CoverageChecker::new(config.thresholds, filter.clone());
    let result = checker.check(&dataset)?;

    // 5. Verbose summary on stderr
    if cli.verbose > 0 {
        print_summary(&result, &filter, &dataset)?;
    }

    // 6. Report violations
    if !cli.quiet {
        let color_mode = resolve_color_mode(&config, cli, args.output.is_some());
        write_report(&result, &config, color_mode, args.output.as_deref())?;
    }

    Ok(result.exit_code())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(global) = args.global {
        config.thresholds.global = Some(global);
    }

    if let Some(each) = args.each {
        config.thresholds.each = Some(each);
    }

    if let Some(base_path) = &args.base_path {
        config.base_path.clone_from(base_path);
    }

    config.excludes.extend(args.exclude.iter().cloned());

    if !args.reporter.is_empty() {
        config.reporters.clone_from(&args.reporter);
    }
}

/// `colors = false` in config wins over everything; files get no colors unless forced.
pub(crate) fn resolve_color_mode(config: &Config, cli: &Cli, to_file: bool) -> ColorMode {
    if !config.colors {
        return ColorMode::Never;
    }
    match ColorMode::from(cli.color) {
        ColorMode::Auto if to_file => ColorMode::Never,
        mode => mode,
    }
}

fn print_summary(
    result: &EvaluationResult,
    filter: &ExcludeFilter,
    dataset: &RawCoverageDataset,
) -> Result<()> {
    let summary = match result.summary {
        Some(summary) => summary,
        None => IstanbulSummarizer::new().summarize_global(&filter.apply(dataset))?,
    };
    eprint!("{}", SummaryFormatter::format(&summary));
    Ok(())
}

fn write_report(
    result: &EvaluationResult,
    config: &Config,
    color_mode: ColorMode,
    output_path: Option<&Path>,
) -> Result<()> {
    let writer: Box<dyn Write> = match output_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };
    let cwd = std::env::current_dir()?;
    let shared = SharedWriter::new(writer);
    let mut sinks = build_reporters(&config.reporters, color_mode, || shared.clone());
    report(result, &config.base_path, &cwd.to_string_lossy(), &mut sinks)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
