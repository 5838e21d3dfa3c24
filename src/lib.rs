pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod output;
pub mod path_utils;

pub use error::{CoverageGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

use checker::CoverageChecker;
use config::{Config, validate_config};
use coverage::RawCoverageDataset;
use filter::ExcludeFilter;
use output::ViolationSink;

/// Check `dataset` against `config` and report violations to `sink`.
///
/// Returns [`EXIT_SUCCESS`] or [`EXIT_THRESHOLD_EXCEEDED`]. The dataset is not modified.
/// File names are labelled relative to `base_path`, taken from the current directory
/// when it is empty or relative.
///
/// # Errors
/// Returns an error for invalid configuration, malformed coverage data, an unreadable
/// current directory, or sink failures.
pub fn check_coverage(
    dataset: &RawCoverageDataset,
    config: &Config,
    sink: &mut dyn ViolationSink,
) -> Result<i32> {
    validate_config(config)?;
    let filter = ExcludeFilter::new(&config.excludes, &config.base_path)?;
    let result = CoverageChecker::new(config.thresholds, filter).check(dataset)?;
    let cwd = std::env::current_dir()?;
    checker::report(&result, &config.base_path, &cwd.to_string_lossy(), sink)?;
    Ok(result.exit_code())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
