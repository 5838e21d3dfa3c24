use std::fmt::Write;

use crate::coverage::{MetricKind, MetricSummaries};

/// Renders a project-wide coverage summary for `--verbose` runs.
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// One line per metric: `statements : 75% (3/4)`, plus a skipped count when non-zero.
    #[must_use]
    pub fn format(summary: &MetricSummaries) -> String {
        let mut output = String::from("Coverage summary\n");
        for metric in MetricKind::ALL {
            let s = summary.get(metric);
            let _ = write!(
                output,
                "  {:<10} : {}% ({}/{})",
                metric.as_str(),
                s.pct,
                s.covered,
                s.total
            );
            if s.skipped > 0 {
                let _ = write!(output, ", {} skipped", s.skipped);
            }
            output.push('\n');
        }
        output
    }
}
