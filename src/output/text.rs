use std::io::Write;

use crate::checker::Violation;
use crate::error::Result;

use super::{ViolationSink, ansi};

/// Plain-text reporter: one `Low Coverage: ...` line per violation.
pub struct TextReporter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TextReporter<W> {
    #[must_use]
    pub const fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, ansi::BOLD)
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if self.use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Label with `/` separators and the last component highlighted.
    fn format_label(&self, label: &str) -> String {
        let mut components: Vec<String> = label.split(['/', '\\']).map(str::to_string).collect();
        if let Some(last) = components.last_mut() {
            *last = self.paint(last, ansi::YELLOW);
        }
        components.join("/")
    }

    /// Render one violation line, without the trailing newline.
    #[must_use]
    pub fn format_violation(&self, violation: &Violation, label: &str) -> String {
        let prefix = if self.use_colors {
            format!("{}{}Low Coverage: {}", ansi::BOLD, ansi::RED, ansi::RESET)
        } else {
            "Low Coverage: ".to_string()
        };
        format!(
            "{prefix}{} {} of {}{}",
            self.format_label(label),
            self.bold(&format!("{}%", violation.actual)),
            self.bold(&format!("{}% ", violation.expected)),
            self.bold(violation.metric.as_str()),
        )
    }
}

impl<W: Write> ViolationSink for TextReporter<W> {
    fn emit(&mut self, violation: &Violation, label: &str) -> Result<()> {
        let line = self.format_violation(violation, label);
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self, _result: &crate::checker::EvaluationResult) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
