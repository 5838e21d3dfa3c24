use std::collections::BTreeMap;

use crate::error::{CoverageGuardError, Result};

use super::model::{FileCoverage, RawCoverageDataset};
use super::summary::{CoverageSummary, MetricSummaries};

/// Turns raw per-file coverage into metric summaries.
pub trait Summarizer {
    /// Summarize one file. `name` is only used for error reporting.
    ///
    /// # Errors
    /// Returns `MalformedCoverage` if the raw entry is inconsistent.
    fn summarize_file(&self, name: &str, coverage: &FileCoverage) -> Result<MetricSummaries>;

    /// Summarize the whole dataset by merging every file summary.
    ///
    /// # Errors
    /// Returns the first `MalformedCoverage` error encountered.
    fn summarize_global(&self, dataset: &RawCoverageDataset) -> Result<MetricSummaries> {
        dataset
            .iter()
            .try_fold(MetricSummaries::default(), |acc, (name, coverage)| {
                Ok(acc.merge(&self.summarize_file(name, coverage)?))
            })
    }
}

/// Summarizer following Istanbul's counting rules, including `skip` hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct IstanbulSummarizer;

impl IstanbulSummarizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn statements(name: &str, coverage: &FileCoverage) -> Result<CoverageSummary> {
        let mut tally = Tally::default();
        for (id, &count) in &coverage.s {
            let location = coverage
                .statement_map
                .get(id)
                .ok_or_else(|| missing_mapping(name, "statement", id, "statementMap"))?;
            tally.add(count > 0, location.is_skipped());
        }
        Ok(tally.finish())
    }

    fn functions(name: &str, coverage: &FileCoverage) -> Result<CoverageSummary> {
        let mut tally = Tally::default();
        for (id, &count) in &coverage.f {
            let mapping = coverage
                .fn_map
                .get(id)
                .ok_or_else(|| missing_mapping(name, "function", id, "fnMap"))?;
            tally.add(count > 0, mapping.is_skipped());
        }
        Ok(tally.finish())
    }

    fn branches(name: &str, coverage: &FileCoverage) -> Result<CoverageSummary> {
        let mut tally = Tally::default();
        for (id, arms) in &coverage.b {
            let mapping = coverage
                .branch_map
                .get(id)
                .ok_or_else(|| missing_mapping(name, "branch", id, "branchMap"))?;
            for (index, &count) in arms.iter().enumerate() {
                tally.add(count > 0, mapping.is_arm_skipped(index));
            }
        }
        Ok(tally.finish())
    }

    fn lines(name: &str, coverage: &FileCoverage) -> Result<CoverageSummary> {
        let mut tally = Tally::default();
        if let Some(line_hits) = &coverage.l {
            for &count in line_hits.values() {
                tally.add(count > 0, false);
            }
            return Ok(tally.finish());
        }

        for &count in Self::derive_line_hits(name, coverage)?.values() {
            tally.add(count > 0, false);
        }
        Ok(tally.finish())
    }

    /// Line hits derived from statements: each line takes the highest count of the
    /// statements starting on it. A skipped statement that never ran counts as one hit.
    fn derive_line_hits(name: &str, coverage: &FileCoverage) -> Result<BTreeMap<u32, u64>> {
        let mut hits: BTreeMap<u32, u64> = BTreeMap::new();
        for (id, &count) in &coverage.s {
            let location = coverage
                .statement_map
                .get(id)
                .ok_or_else(|| missing_mapping(name, "statement", id, "statementMap"))?;
            let count = if count == 0 && location.is_skipped() {
                1
            } else {
                count
            };
            hits.entry(location.start.line)
                .and_modify(|existing| *existing = (*existing).max(count))
                .or_insert(count);
        }
        Ok(hits)
    }
}

impl Summarizer for IstanbulSummarizer {
    fn summarize_file(&self, name: &str, coverage: &FileCoverage) -> Result<MetricSummaries> {
        Ok(MetricSummaries {
            statements: Self::statements(name, coverage)?,
            branches: Self::branches(name, coverage)?,
            lines: Self::lines(name, coverage)?,
            functions: Self::functions(name, coverage)?,
        })
    }
}

#[derive(Default)]
struct Tally {
    covered: u64,
    total: u64,
    skipped: u64,
}

impl Tally {
    const fn add(&mut self, hit: bool, skip: bool) {
        self.total += 1;
        if hit || skip {
            self.covered += 1;
        }
        if !hit && skip {
            self.skipped += 1;
        }
    }

    fn finish(&self) -> CoverageSummary {
        CoverageSummary::new(self.covered, self.total, self.skipped)
    }
}

fn missing_mapping(name: &str, item: &str, id: &str, map: &str) -> CoverageGuardError {
    CoverageGuardError::MalformedCoverage {
        file: name.to_string(),
        reason: format!("{item} '{id}' has no {map} entry"),
    }
}

#[cfg(test)]
#[path = "summarizer_tests.rs"]
mod tests;
