mod common;

use common::{FileSpec, TestFixture};
use predicates::prelude::*;

#[test]
fn init_creates_config_file() {
    let fixture = TestFixture::new();

    coverage_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".coverage-guard.toml")).unwrap();
    assert!(content.contains("[thresholds]"));
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();

    coverage_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "ci/coverage.toml"])
        .assert()
        .code(2);

    std::fs::create_dir(fixture.path().join("ci")).unwrap();
    coverage_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", "ci/coverage.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("ci/coverage.toml").exists());
}

#[test]
fn init_refuses_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_config("colors = false\n");

    coverage_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    let content = std::fs::read_to_string(fixture.path().join(".coverage-guard.toml")).unwrap();
    assert_eq!(content, "colors = false\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("colors = false\n");

    coverage_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".coverage-guard.toml")).unwrap();
    assert_ne!(content, "colors = false\n");
}

#[test]
fn generated_config_is_accepted_by_check() {
    let fixture = TestFixture::new();
    fixture.create_coverage(&[("/project/a.js", FileSpec::statements(0, 3))]);

    coverage_guard!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success();

    coverage_guard!()
        .current_dir(fixture.path())
        .arg("check")
        .assert()
        .success();
}
