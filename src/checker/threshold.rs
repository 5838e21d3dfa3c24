use crate::coverage::CoverageSummary;

/// Outcome of one threshold against one summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdOutcome {
    /// No threshold, or a threshold of zero.
    Skipped,
    Passed { value: f64 },
    Failed { value: f64 },
}

impl ThresholdOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The measured value compared against the threshold: a percentage for positive
    /// thresholds, the (non-positive) gap for negative ones.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Skipped => None,
            Self::Passed { value } | Self::Failed { value } => Some(*value),
        }
    }
}

/// Evaluate `threshold` against `summary`.
///
/// - absent or `0`: skipped.
/// - positive: minimum percentage, fails when `pct < threshold`.
/// - negative: largest allowed gap, fails when `covered - total < threshold`.
///
/// Equality passes in both directions.
#[must_use]
pub fn evaluate(threshold: Option<f64>, summary: &CoverageSummary) -> ThresholdOutcome {
    let Some(threshold) = threshold.filter(|t| *t != 0.0 && !t.is_nan()) else {
        return ThresholdOutcome::Skipped;
    };

    let value = if threshold > 0.0 {
        summary.pct
    } else {
        summary.gap()
    };

    if value < threshold {
        ThresholdOutcome::Failed { value }
    } else {
        ThresholdOutcome::Passed { value }
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
