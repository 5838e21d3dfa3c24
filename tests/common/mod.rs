#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the coverage-guard binary.
#[macro_export]
macro_rules! coverage_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("coverage-guard"))
    };
}

pub const COVERAGE_FILE: &str = "coverage/coverage-final.json";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.coverage-guard.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".coverage-guard.toml", content);
    }

    /// Writes the default coverage file from `(file name, counts)` pairs.
    pub fn create_coverage(&self, files: &[(&str, FileSpec)]) {
        let mut report = Map::new();
        for (name, spec) in files {
            report.insert((*name).to_string(), spec.to_istanbul(name));
        }
        let content = serde_json::to_string_pretty(&Value::Object(report))
            .expect("Failed to serialize coverage");
        self.create_file(COVERAGE_FILE, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Covered/total counts for one file. Each statement sits on its own line, so
/// line coverage mirrors statement coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSpec {
    pub statements: (u64, u64),
    pub branches: (u64, u64),
    pub functions: (u64, u64),
}

impl FileSpec {
    pub const fn statements(covered: u64, total: u64) -> Self {
        Self {
            statements: (covered, total),
            branches: (0, 0),
            functions: (0, 0),
        }
    }

    pub const fn branches(mut self, covered: u64, total: u64) -> Self {
        self.branches = (covered, total);
        self
    }

    pub const fn functions(mut self, covered: u64, total: u64) -> Self {
        self.functions = (covered, total);
        self
    }

    fn to_istanbul(self, name: &str) -> Value {
        let mut statement_map = Map::new();
        let mut s = Map::new();
        for i in 0..self.statements.1 {
            let line = i + 1;
            statement_map.insert(
                i.to_string(),
                json!({
                    "start": { "line": line, "column": 0 },
                    "end": { "line": line, "column": 10 }
                }),
            );
            s.insert(i.to_string(), json!(u64::from(i < self.statements.0)));
        }

        let mut fn_map = Map::new();
        let mut f = Map::new();
        for i in 0..self.functions.1 {
            fn_map.insert(i.to_string(), json!({ "name": format!("fn{i}"), "line": 1 }));
            f.insert(i.to_string(), json!(u64::from(i < self.functions.0)));
        }

        let mut branch_map = Map::new();
        let mut b = Map::new();
        for i in 0..self.branches.1 {
            branch_map.insert(
                i.to_string(),
                json!({
                    "line": 1,
                    "type": "if",
                    "locations": [{ "start": { "line": 1 }, "end": { "line": 1 } }]
                }),
            );
            b.insert(i.to_string(), json!([u64::from(i < self.branches.0)]));
        }

        json!({
            "path": name,
            "statementMap": statement_map,
            "fnMap": fn_map,
            "branchMap": branch_map,
            "s": s,
            "f": f,
            "b": b
        })
    }
}
