use std::io::Write;

use crate::checker::{EvaluationResult, Violation};
use crate::error::Result;

use super::ViolationSink;

/// Identity shared by every coverage build problem, so TeamCity groups them.
pub const PROBLEM_IDENTITY: &str = "lowCodeCoverage";

/// Emits TeamCity `buildProblem` service messages.
pub struct TeamcityReporter<W: Write> {
    writer: W,
}

impl<W: Write> TeamcityReporter<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn format_violation(violation: &Violation, label: &str) -> String {
        format!(
            "##teamcity[buildProblem description='{}' identity='{PROBLEM_IDENTITY}']",
            escape(&violation.message(label))
        )
    }
}

impl<W: Write> ViolationSink for TeamcityReporter<W> {
    fn emit(&mut self, violation: &Violation, label: &str) -> Result<()> {
        writeln!(self.writer, "{}", Self::format_violation(violation, label))?;
        Ok(())
    }

    fn finish(&mut self, _result: &EvaluationResult) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Service-message value escaping: `|` is the escape character.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '|' => escaped.push_str("||"),
            '\'' => escaped.push_str("|'"),
            '[' => escaped.push_str("|["),
            ']' => escaped.push_str("|]"),
            '\n' => escaped.push_str("|n"),
            '\r' => escaped.push_str("|r"),
            other => escaped.push(other),
        }
    }
    escaped
}
