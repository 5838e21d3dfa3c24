//! Configuration semantic validation.
//!
//! Runs after parsing: checks value ranges that the type system cannot express.

use crate::config::{Config, ThresholdSpec};
use crate::{CoverageGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a threshold is not finite or a percentage threshold exceeds 100.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(spec) = &config.thresholds.global {
        validate_spec("thresholds.global", spec)?;
    }
    if let Some(spec) = &config.thresholds.each {
        validate_spec("thresholds.each", spec)?;
    }
    Ok(())
}

/// Rejects non-finite values and percentages above 100. A threshold above 100 is a
/// configuration error here, not a check that fails on every run.
fn validate_spec(key: &str, spec: &ThresholdSpec) -> Result<()> {
    for (metric, value) in spec.values() {
        if !value.is_finite() {
            return Err(CoverageGuardError::Config(format!(
                "{key}.{metric} must be a finite number, got {value}"
            )));
        }
        if value > 100.0 {
            return Err(CoverageGuardError::Config(format!(
                "{key}.{metric} is a percentage and must not exceed 100, got {value}"
            )));
        }
    }
    Ok(())
}
