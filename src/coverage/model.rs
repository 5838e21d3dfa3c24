use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Coverage keyed by file name, in the order the report lists them.
///
/// Iteration order of this map is the order per-file violations are reported in.
pub type RawCoverageDataset = IndexMap<String, FileCoverage>;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: Option<u32>,
}

/// A source range from `statementMap`, `fnMap.loc` or `branchMap.locations`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    #[serde(default)]
    pub start: Position,
    #[serde(default)]
    pub end: Position,
    /// Set by `istanbul ignore` hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
}

impl Location {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skip.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionMapping {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub loc: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
}

impl FunctionMapping {
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skip.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchMapping {
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl BranchMapping {
    /// Whether the `index`-th arm is marked skip. Missing locations are not skipped.
    #[must_use]
    pub fn is_arm_skipped(&self, index: usize) -> bool {
        self.locations.get(index).is_some_and(Location::is_skipped)
    }
}

/// Per-file Istanbul coverage object (one value of `coverage-final.json`).
///
/// Hit counters are keyed by the same ids as their maps. Unknown keys such as
/// `hash` or `inputSourceMap` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileCoverage {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub statement_map: BTreeMap<String, Location>,
    #[serde(default)]
    pub fn_map: BTreeMap<String, FunctionMapping>,
    #[serde(default)]
    pub branch_map: BTreeMap<String, BranchMapping>,
    #[serde(default)]
    pub s: BTreeMap<String, u64>,
    #[serde(default)]
    pub f: BTreeMap<String, u64>,
    #[serde(default)]
    pub b: BTreeMap<String, Vec<u64>>,
    /// Line hits. Older reporters emit them; otherwise they are derived from statements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<BTreeMap<String, u64>>,
}
