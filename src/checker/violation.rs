use serde::Serialize;

use crate::coverage::MetricKind;

/// Label used in place of a file name for project-wide violations.
pub const GLOBAL_LABEL: &str = "GLOBAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The whole dataset after exclusions.
    Global,
    /// A single file.
    Each,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Each => "each",
        }
    }
}

/// One failing (scope, metric, file) check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub scope: Scope,
    pub metric: MetricKind,
    /// `None` for global violations.
    pub filename: Option<String>,
    /// Percentage, or gap (`covered - total`) for negative thresholds.
    pub actual: f64,
    pub expected: f64,
}

impl Violation {
    #[must_use]
    pub const fn global(metric: MetricKind, actual: f64, expected: f64) -> Self {
        Self {
            scope: Scope::Global,
            metric,
            filename: None,
            actual,
            expected,
        }
    }

    #[must_use]
    pub fn file(
        filename: impl Into<String>,
        metric: MetricKind,
        actual: f64,
        expected: f64,
    ) -> Self {
        Self {
            scope: Scope::Each,
            metric,
            filename: Some(filename.into()),
            actual,
            expected,
        }
    }

    /// `Low Coverage: <label> <actual>% of <expected>% <metric>`, without styling.
    #[must_use]
    pub fn message(&self, label: &str) -> String {
        format!(
            "Low Coverage: {label} {}% of {}% {}",
            self.actual, self.expected, self.metric
        )
    }
}
