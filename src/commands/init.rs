use std::fs;

use crate::{CoverageGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_error(e.error_type(), &e.message());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CoverageGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# coverage-guard configuration file

# Root used for exclude patterns and for file names in reports (default: "")
# base_path = "/path/to/project"

# Output reporters: "text", "teamcity", "json" (default: ["text"])
reporters = ["text"]

# Files left out of global totals and per-file checks (glob syntax)
excludes = [
    # "**/vendor/**",
    # "test/**",
]

# Allow terminal colors in text output (default: true)
colors = true

# Thresholds: a positive number is a minimum percentage, a negative number is the
# maximum number of uncovered items, 0 disables the check.
# A single number applies to statements, branches, lines and functions alike.
[thresholds]
# global = 80

# Per-metric thresholds applied to every file
# [thresholds.each]
# statements = 80
# branches = -10
# lines = 80
# functions = 75
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
