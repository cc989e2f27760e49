//! Parameter loading, command registration and dispatch

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::rc::Rc;

use command_kit::application::Application;
use command_kit::config::{ParameterBag, APP_NAME, APP_VERSION};
use command_kit::defaults::{self, ENV_PREFIX, PARAMETERS_ENV};
use command_kit::logger::LogLogger;
use command_kit::output::{Output, OutputConfig};
use command_kit::registry::CommandRegistry;
use command_kit::suggestions;

use crate::commands::{about, check, completions, greet, pipeline};

/// Top-level description shown in `--help`.
const ABOUT: &str = "Demo tool for the command-kit lifecycle";

/// Run the tool with the process arguments and return the exit code.
pub fn run() -> Result<i32> {
    let parameters = load_parameters()?;
    let registry = Rc::new(build_registry(parameters));
    let application = Application::new(registry)?
        .with_about(ABOUT)
        .with_env_logger();

    let output = Output::stdio(&OutputConfig::from_env_and_flag("auto"));
    Ok(application.run(env::args_os(), &output))
}

/// Built-in defaults, then the parameter file, then environment overrides.
///
/// A parameter file named by `COMMAND_KIT_PARAMETERS` must exist; the default
/// location is only read when present.
fn load_parameters() -> Result<ParameterBag> {
    let mut parameters = ParameterBag::new()
        .with(APP_NAME, env!("CARGO_PKG_NAME"))
        .with(APP_VERSION, env!("CARGO_PKG_VERSION"));

    match env::var_os(PARAMETERS_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(suggestions::parameters_file_not_found(&path));
            }
            parameters
                .merge_file(&path)
                .with_context(|| format!("Failed to load parameters from {}", path.display()))?;
        }
        None => {
            let path = defaults::default_parameters_file();
            if path.exists() {
                parameters
                    .merge_file(&path)
                    .with_context(|| format!("Failed to load parameters from {}", path.display()))?;
            }
        }
    }

    parameters.apply_env_overrides(ENV_PREFIX);
    Ok(parameters)
}

fn build_registry(parameters: ParameterBag) -> CommandRegistry {
    let mut registry = CommandRegistry::new(Rc::new(LogLogger::default()), Rc::new(parameters));
    registry
        .register("about", about::AboutCommand::new)
        .register("check", check::CheckCommand::new)
        .register("completions", completions::CompletionsCommand::new)
        .register("greet", greet::GreetCommand::new)
        .register("pipeline", pipeline::PipelineCommand::new);
    registry
}
