//! End-to-end tests for parameter loading.
//!
//! Parameters come from built-in defaults, then a YAML parameter file (named by
//! `COMMAND_KIT_PARAMETERS` or found in the platform configuration directory),
//! then `COMMAND_KIT_*` environment overrides.

#[allow(dead_code)]
mod common;
use common::prelude::*;

#[test]
fn test_parameter_file_from_environment() {
    let fixture = TestFixture::new().with_parameters(parameters::CUSTOM_NAME);

    fixture
        .command_with_parameters()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("custom-kit v"));
}

#[test]
fn test_parameter_file_from_config_dir() {
    let fixture = TestFixture::new().with_file("command-kit/parameters.yaml", parameters::CUSTOM_NAME);

    fixture
        .command()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("custom-kit v"));
}

#[test]
fn test_environment_override_wins() {
    let fixture = TestFixture::new().with_parameters(parameters::CUSTOM_NAME);

    fixture
        .command_with_parameters()
        .env("COMMAND_KIT_APP_NAME", "env-kit")
        .env("COMMAND_KIT_APP_VERSION", "9.9.9")
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("env-kit v9.9.9 - about"));
}

#[test]
fn test_missing_parameter_file() {
    let fixture = TestFixture::new();

    fixture
        .command_with_parameters()
        .arg("about")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parameter file not found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_sequence_parameter_file_is_rejected() {
    let fixture = TestFixture::new().with_parameters(parameters::SEQUENCE);

    fixture
        .command_with_parameters()
        .arg("about")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("mapping at the top level"));
}

#[test]
fn test_invalid_yaml_parameter_file() {
    let fixture = TestFixture::new().with_parameters(parameters::INVALID_YAML);

    fixture
        .command_with_parameters()
        .arg("about")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load parameters"));
}
