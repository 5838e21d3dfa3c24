mod result;
mod threshold;
mod violation;

pub use result::EvaluationResult;
pub use threshold::{ThresholdOutcome, evaluate};
pub use violation::{GLOBAL_LABEL, Scope, Violation};

use crate::config::{ThresholdConfig, ThresholdSpec};
use crate::coverage::{
    IstanbulSummarizer, MetricKind, MetricSummaries, RawCoverageDataset, Summarizer,
};
use crate::error::Result;
use crate::filter::ExcludeFilter;
use crate::output::ViolationSink;
use crate::path_utils;

/// Checks a coverage dataset against global and per-file thresholds.
///
/// The dataset passed to [`CoverageChecker::check`] is never modified; exclusions are
/// applied to a copy.
pub struct CoverageChecker<S: Summarizer = IstanbulSummarizer> {
    thresholds: ThresholdConfig,
    filter: ExcludeFilter,
    summarizer: S,
}

impl CoverageChecker<IstanbulSummarizer> {
    #[must_use]
    pub const fn new(thresholds: ThresholdConfig, filter: ExcludeFilter) -> Self {
        Self::with_summarizer(thresholds, filter, IstanbulSummarizer)
    }
}

impl<S: Summarizer> CoverageChecker<S> {
    #[must_use]
    pub const fn with_summarizer(
        thresholds: ThresholdConfig,
        filter: ExcludeFilter,
        summarizer: S,
    ) -> Self {
        Self {
            thresholds,
            filter,
            summarizer,
        }
    }

    /// Run every configured check.
    ///
    /// # Errors
    /// Returns `MalformedCoverage` if a remaining file cannot be summarized.
    pub fn check(&self, dataset: &RawCoverageDataset) -> Result<EvaluationResult> {
        let dataset = self.filter.apply(dataset);
        let mut result = EvaluationResult::default();

        if let Some(spec) = &self.thresholds.global {
            let summary = self.summarizer.summarize_global(&dataset)?;
            for (metric, value, expected) in failures(spec, &summary) {
                result
                    .violations
                    .push(Violation::global(metric, value, expected));
            }
            result.summary = Some(summary);
        }

        if let Some(spec) = &self.thresholds.each {
            for (name, coverage) in &dataset {
                let summary = self.summarizer.summarize_file(name, coverage)?;
                for (metric, value, expected) in failures(spec, &summary) {
                    result
                        .violations
                        .push(Violation::file(name.as_str(), metric, value, expected));
                }
            }
        }

        Ok(result)
    }
}

/// Failing `(metric, measured value, threshold)` triples, in metric order.
fn failures(spec: &ThresholdSpec, summary: &MetricSummaries) -> Vec<(MetricKind, f64, f64)> {
    MetricKind::ALL
        .into_iter()
        .filter_map(|metric| {
            let threshold = spec.resolve(metric)?;
            let outcome = evaluate(Some(threshold), summary.get(metric));
            if !outcome.is_failed() {
                return None;
            }
            outcome.value().map(|value| (metric, value, threshold))
        })
        .collect()
}

/// The name a sink shows for `violation`: [`GLOBAL_LABEL`] for global scope,
/// otherwise the file name relative to `base_path`.
///
/// A relative (or empty) `base_path` and relative file names are taken from `cwd`
/// first. An empty `cwd` keeps the comparison purely lexical.
#[must_use]
pub fn display_label(violation: &Violation, base_path: &str, cwd: &str) -> String {
    match (&violation.scope, &violation.filename) {
        (Scope::Each, Some(name)) => path_utils::relative_to(
            &path_utils::resolve(cwd, base_path),
            &path_utils::resolve(cwd, name),
        ),
        _ => GLOBAL_LABEL.to_string(),
    }
}

/// Hand every violation of `result` to `sink`, in order, then finish the sink.
///
/// Labels are built by [`display_label`] with `base_path` and `cwd`.
///
/// # Errors
/// Returns an error if the sink fails to write.
pub fn report(
    result: &EvaluationResult,
    base_path: &str,
    cwd: &str,
    sink: &mut dyn ViolationSink,
) -> Result<()> {
    for violation in &result.violations {
        sink.emit(violation, &display_label(violation, base_path, cwd))?;
    }
    sink.finish(result)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
