use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::coverage::RawCoverageDataset;
use crate::error::{CoverageGuardError, Result};
use crate::path_utils;

/// Drops files matching any exclude glob before coverage is summarized.
///
/// Patterns are joined onto the base path, so `**/vendor/**` with base `/project`
/// becomes `/project/**/vendor/**`. `*` does not match across `/`.
///
/// `*` and `**` also match names starting with `.`, so `**/vendor/**` excludes
/// `.yarn/vendor/a.js`. minimatch (used by `nyc`/`jest` excludes) skips dot entries
/// unless asked to.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    exclude_patterns: GlobSet,
}

impl ExcludeFilter {
    /// Create a filter from exclude patterns relative to `base_path`.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String], base_path: &str) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let joined = path_utils::join(base_path, pattern);
            let glob = GlobBuilder::new(&joined)
                .literal_separator(true)
                .build()
                .map_err(|e| CoverageGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| CoverageGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    /// A filter that keeps every file.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_patterns
            .is_match(name.replace('\\', "/").as_str())
    }

    /// Copy of `dataset` without the excluded files, in the original order.
    #[must_use]
    pub fn apply(&self, dataset: &RawCoverageDataset) -> RawCoverageDataset {
        if self.exclude_patterns.is_empty() {
            return dataset.clone();
        }
        dataset
            .iter()
            .filter(|(name, _)| !self.is_excluded(name))
            .map(|(name, coverage)| (name.clone(), coverage.clone()))
            .collect()
    }
}

impl Default for ExcludeFilter {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
