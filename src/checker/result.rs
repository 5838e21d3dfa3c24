use crate::coverage::MetricSummaries;
use crate::{EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED};

use super::violation::Violation;

/// Violations of one check, global ones first, then per file in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    pub violations: Vec<Violation>,
    /// Project-wide summary, present when global thresholds were evaluated.
    pub summary: Option<MetricSummaries>,
}

impl EvaluationResult {
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.violations.is_empty()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.failed() {
            EXIT_THRESHOLD_EXCEEDED
        } else {
            EXIT_SUCCESS
        }
    }
}
