mod error_output;
mod json;
mod summary;
mod teamcity;
mod text;

pub use error_output::{ErrorOutput, print_error, print_error_full, print_warning};
pub use json::JsonReporter;
pub use summary::SummaryFormatter;
pub use teamcity::TeamcityReporter;
pub use text::TextReporter;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::checker::{EvaluationResult, Violation};
use crate::error::Result;

/// Receives violations as the checker reports them.
pub trait ViolationSink {
    /// Handle one violation. `label` is `GLOBAL` or the file name relative to the base path.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn emit(&mut self, violation: &Violation, label: &str) -> Result<()>;

    /// Called once after the last violation.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn finish(&mut self, _result: &EvaluationResult) -> Result<()> {
        Ok(())
    }
}

/// Fans each violation out to several sinks, in order.
#[derive(Default)]
pub struct MultiSink<'a> {
    sinks: Vec<Box<dyn ViolationSink + 'a>>,
}

impl<'a> MultiSink<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(&mut self, sink: impl ViolationSink + 'a) {
        self.sinks.push(Box::new(sink));
    }
}

impl ViolationSink for MultiSink<'_> {
    fn emit(&mut self, violation: &Violation, label: &str) -> Result<()> {
        for sink in &mut self.sinks {
            sink.emit(violation, label)?;
        }
        Ok(())
    }

    fn finish(&mut self, result: &EvaluationResult) -> Result<()> {
        for sink in &mut self.sinks {
            sink.finish(result)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    #[default]
    Text,
    Teamcity,
    Json,
}

impl std::str::FromStr for ReporterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "teamcity" => Ok(Self::Teamcity),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown reporter: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve to a yes/no answer for a writer on stdout.
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Cloneable handle to one writer, so several reporters can interleave their lines.
pub struct SharedWriter<W: Write> {
    inner: Rc<RefCell<W>>,
}

impl<W: Write> SharedWriter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(writer)),
        }
    }

    /// The wrapped writer, if this is the last handle.
    #[must_use]
    pub fn into_inner(self) -> Option<W> {
        Rc::try_unwrap(self.inner).ok().map(RefCell::into_inner)
    }
}

impl<W: Write> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

/// Build one sink per reporter, all writing to `make_writer()`.
pub fn build_reporters<'a, W, F>(
    reporters: &[ReporterKind],
    color_mode: ColorMode,
    mut make_writer: F,
) -> MultiSink<'a>
where
    W: Write + 'a,
    F: FnMut() -> W,
{
    let use_colors = color_mode.use_colors();
    let mut sinks = MultiSink::new();
    for kind in reporters {
        match kind {
            ReporterKind::Text => sinks.push(TextReporter::new(make_writer(), use_colors)),
            ReporterKind::Teamcity => sinks.push(TeamcityReporter::new(make_writer())),
            ReporterKind::Json => sinks.push(JsonReporter::new(make_writer())),
        }
    }
    sinks
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
