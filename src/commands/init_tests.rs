use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::cli::InitArgs;
use crate::config::Config;

#[test]
fn template_parses_as_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn template_documents_threshold_sign() {
    let template = generate_config_template();
    assert!(template.contains("[thresholds]"));
    assert!(template.contains("negative number"));
}

#[test]
fn init_writes_file() {
    let dir = TempDir::new().unwrap();
    let output: PathBuf = dir.path().join(".coverage-guard.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    assert!(output.exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".coverage-guard.toml");
    std::fs::write(&output, "# existing\n").unwrap();

    let args = InitArgs {
        output: output.clone(),
        force: false,
    };
    assert!(run_init_impl(&args).is_err());
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "# existing\n");

    let forced = InitArgs {
        output: output.clone(),
        force: true,
    };
    run_init_impl(&forced).unwrap();
    assert!(std::fs::read_to_string(&output).unwrap().contains("coverage-guard"));
}
