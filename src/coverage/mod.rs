mod model;
mod summarizer;
mod summary;

pub use model::{
    BranchMapping, FileCoverage, FunctionMapping, Location, Position, RawCoverageDataset,
};
pub use summarizer::{IstanbulSummarizer, Summarizer};
pub use summary::{CoverageSummary, MetricKind, MetricSummaries, percent};

use std::path::Path;

use crate::error::{CoverageGuardError, Result};

/// Parse an Istanbul `coverage-final.json` document.
///
/// `source` names the document in error messages.
///
/// # Errors
/// Returns `MalformedCoverage` if the document is not a map of per-file coverage objects.
pub fn parse_dataset(content: &str, source: &str) -> Result<RawCoverageDataset> {
    serde_json::from_str(content).map_err(|e| CoverageGuardError::MalformedCoverage {
        file: source.to_string(),
        reason: e.to_string(),
    })
}

/// Read and parse a coverage report from disk.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read, `MalformedCoverage` if it cannot be parsed.
pub fn load_dataset(path: &Path) -> Result<RawCoverageDataset> {
    let content = std::fs::read_to_string(path).map_err(|source| CoverageGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&content, &path.display().to_string())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
