use std::io::Write;

use serde::Serialize;

use crate::checker::{EvaluationResult, Scope, Violation};
use crate::coverage::{MetricKind, MetricSummaries};
use crate::error::Result;

use super::ViolationSink;

/// Collects violations and writes a single JSON document when finished.
pub struct JsonReporter<W: Write> {
    writer: W,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a MetricSummaries>,
    violations: &'a [JsonViolation],
}

#[derive(Serialize)]
struct JsonViolation {
    scope: Scope,
    metric: MetricKind,
    file: Option<String>,
    actual: f64,
    expected: f64,
}

impl<W: Write> JsonReporter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            violations: Vec::new(),
        }
    }
}

impl<W: Write> ViolationSink for JsonReporter<W> {
    fn emit(&mut self, violation: &Violation, label: &str) -> Result<()> {
        self.violations.push(JsonViolation {
            scope: violation.scope,
            metric: violation.metric,
            file: violation.filename.as_ref().map(|_| label.to_string()),
            actual: violation.actual,
            expected: violation.expected,
        });
        Ok(())
    }

    fn finish(&mut self, result: &EvaluationResult) -> Result<()> {
        let output = JsonOutput {
            failed: result.failed(),
            summary: result.summary.as_ref(),
            violations: &self.violations,
        };
        serde_json::to_writer_pretty(&mut self.writer, &output)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
