//! # Logging Setup
//!
//! Installs `env_logger` as the `log` backend for binaries built on this
//! crate. The level comes from the invocation's global flags:
//!
//! | Flags                     | Level   |
//! |---------------------------|---------|
//! | `--quiet`                 | `error` |
//! | `--verbose`               | `debug` |
//! | `--verbose --no-debug`    | `info`  |
//! | none                      | `warn`  |
//!
//! Filter directives in `COMMAND_KIT_LOG` (same syntax as `RUST_LOG`) are
//! applied on top, so `COMMAND_KIT_LOG=command_kit=info` shows invocation
//! records without touching the flags.

use log::LevelFilter;
use std::env;

use crate::defaults::LOG_ENV;
use crate::input::Input;
use crate::output::Verbosity;

/// Log level implied by the global flags of `input`.
pub fn level_for(input: &Input) -> LevelFilter {
    match Verbosity::from_input(input) {
        Verbosity::Quiet => LevelFilter::Error,
        Verbosity::Verbose if input.flag("no-debug") => LevelFilter::Info,
        Verbosity::Verbose => LevelFilter::Debug,
        Verbosity::Normal => LevelFilter::Warn,
    }
}

/// Install the global logger.
///
/// Only the first call takes effect; later calls are ignored because the
/// `log` facade can only be set once per process.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);
    if let Ok(directives) = env::var(LOG_ENV) {
        builder.parse_filters(&directives);
    }
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
