use serde::{Deserialize, Serialize};

/// The four coverage metrics, in the order every check visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Statements,
    Branches,
    Lines,
    Functions,
}

impl MetricKind {
    pub const ALL: [Self; 4] = [
        Self::Statements,
        Self::Branches,
        Self::Lines,
        Self::Functions,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statements => "statements",
            Self::Branches => "branches",
            Self::Lines => "lines",
            Self::Functions => "functions",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "statements" => Ok(Self::Statements),
            "branches" => Ok(Self::Branches),
            "lines" => Ok(Self::Lines),
            "functions" => Ok(Self::Functions),
            _ => Err(format!("Unknown coverage metric: {s}")),
        }
    }
}

/// Covered/total counts for one metric in one scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub covered: u64,
    pub total: u64,
    pub skipped: u64,
    pub pct: f64,
}

impl CoverageSummary {
    #[must_use]
    pub fn new(covered: u64, total: u64, skipped: u64) -> Self {
        debug_assert!(covered <= total, "covered must not exceed total");
        Self {
            covered,
            total,
            skipped,
            pct: percent(covered, total),
        }
    }

    /// `covered - total`: zero when fully covered, negative by the number of misses.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gap(&self) -> f64 {
        self.covered as f64 - self.total as f64
    }

    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.covered + other.covered,
            self.total + other.total,
            self.skipped + other.skipped,
        )
    }
}

impl Default for CoverageSummary {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Percentage rounded half-up to two decimals; an empty metric counts as fully covered.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent(covered: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let scaled = 100_000.0 * covered as f64 / total as f64 + 5.0;
    (scaled / 10.0).floor() / 100.0
}

/// Summaries of all four metrics for one scope (a file, or the whole project).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricSummaries {
    pub statements: CoverageSummary,
    pub branches: CoverageSummary,
    pub lines: CoverageSummary,
    pub functions: CoverageSummary,
}

impl MetricSummaries {
    #[must_use]
    pub const fn get(&self, metric: MetricKind) -> &CoverageSummary {
        match metric {
            MetricKind::Statements => &self.statements,
            MetricKind::Branches => &self.branches,
            MetricKind::Lines => &self.lines,
            MetricKind::Functions => &self.functions,
        }
    }

    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            statements: self.statements.merge(&other.statements),
            branches: self.branches.merge(&other.branches),
            lines: self.lines.merge(&other.lines),
            functions: self.functions.merge(&other.functions),
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
