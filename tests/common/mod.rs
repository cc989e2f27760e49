//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_parameters(parameters::CUSTOM_NAME);
//!     fixture.command().arg("about").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::parameters;
    pub use super::TestFixture;
}

/// Parameter file snippets for testing.
#[allow(dead_code)]
pub mod parameters {
    /// Overrides the application name shown in the banner.
    pub const CUSTOM_NAME: &str = r#"
app:
  name: custom-kit
"#;

    /// A sequence at the top level, which is not a valid parameter file.
    pub const SEQUENCE: &str = "- app.name\n- app.version\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "invalid: yaml: content:";
}

/// Environment variables the binary reads, cleared for every test run.
const ISOLATED_ENV: [&str; 4] = [
    "COMMAND_KIT_PARAMETERS",
    "COMMAND_KIT_APP_NAME",
    "COMMAND_KIT_APP_VERSION",
    "COMMAND_KIT_LOG",
];

/// A test fixture that provides a temporary directory with optional files.
///
/// Commands created from the fixture run inside the directory, with the
/// platform configuration directory pointed at it so no user parameter file
/// leaks into the test.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `parameters.yaml` file with the given content.
    #[allow(dead_code)]
    pub fn with_parameters(self, content: &str) -> Self {
        self.with_file("parameters.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the parameter file.
    #[allow(dead_code)]
    pub fn parameters_path(&self) -> PathBuf {
        self.temp_dir.path().join("parameters.yaml")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("command-kit");
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path())
            .env("NO_COLOR", "1");
        for name in ISOLATED_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Create a command reading the fixture's parameter file.
    #[allow(dead_code)]
    pub fn command_with_parameters(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.env("COMMAND_KIT_PARAMETERS", self.parameters_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_parameters() {
        let fixture = TestFixture::new().with_parameters(parameters::CUSTOM_NAME);
        assert!(fixture.parameters_path().exists());
    }

    #[test]
    fn test_parameter_snippets_are_valid_yaml() {
        for snippet in [parameters::CUSTOM_NAME, parameters::SEQUENCE] {
            let result: Result<serde_yaml::Value, _> = serde_yaml::from_str(snippet);
            assert!(result.is_ok(), "invalid snippet: {}", snippet);
        }
    }
}
