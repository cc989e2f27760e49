//! Default values for command-kit configuration.
//!
//! This module provides centralized default values used by the binary,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Prefix of environment variables overriding parameters
/// (`COMMAND_KIT_APP_NAME` overrides `app.name`).
pub const ENV_PREFIX: &str = "COMMAND_KIT";

/// Environment variable naming an explicit parameter file.
pub const PARAMETERS_ENV: &str = "COMMAND_KIT_PARAMETERS";

/// Environment variable holding `env_logger` filter directives.
pub const LOG_ENV: &str = "COMMAND_KIT_LOG";

/// Returns the default parameter file location.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/command-kit/parameters.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/command-kit/parameters.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\command-kit\parameters.yaml`
///
/// Falls back to `.command-kit/parameters.yaml` in the current directory if
/// the platform directory cannot be determined.
///
/// This can be overridden by the `COMMAND_KIT_PARAMETERS` environment
/// variable.
pub fn default_parameters_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".command-kit"))
        .join("command-kit")
        .join("parameters.yaml")
}
