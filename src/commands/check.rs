//! # Check Command Implementation
//!
//! This module implements the `check` subcommand. It validates a state name,
//! given either as an argument or read from a file, and reports its progress
//! through console events rendered with the command's own style.
//!
//! ## Failures
//!
//! - An unknown state is an `invalid-state` domain failure (exit code 2).
//! - No state at all is a `missing-state` domain failure (exit code 2).
//! - A state file that cannot be read is an unexpected failure (exit code 1).

use anyhow::Context;
use std::fs;
use std::path::Path;

use command_kit::command::{Command, CommandBase};
use command_kit::definition::{InputArgument, InputOption};
use command_kit::error::{DomainError, Failure};
use command_kit::event::{ConsoleEvent, ConsoleEventSubscriber, EventCommandBase, StyleEventSubscriber};
use command_kit::exit_codes::ExitOutcome;
use command_kit::input::Input;
use command_kit::output::Output;
use command_kit::registry::CommandContext;

/// States accepted by `check`.
pub const VALID_STATES: [&str; 3] = ["ready", "running", "stopped"];

/// Check that a state is valid
pub struct CheckCommand {
    events: EventCommandBase,
}

impl CheckCommand {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            events: EventCommandBase::new(context),
        }
    }

    fn read_state(&self, input: &Input, subscriber: &dyn ConsoleEventSubscriber) -> Result<String, Failure> {
        if let Some(path) = input.option_str("file") {
            subscriber.on_event(&ConsoleEvent::Notice(format!("Reading state from {}", path)))?;
            let contents = fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read state file {}", path))?;
            let state = contents.trim().to_string();
            if state.is_empty() {
                subscriber.on_event(&ConsoleEvent::Warning("State file is empty".to_string()))?;
            }
            return Ok(state);
        }

        match input.argument_str("state") {
            Some(state) => Ok(state.trim().to_string()),
            None => Err(DomainError::new(
                "missing-state",
                "No state given. Pass a state argument or --file",
            )
            .into()),
        }
    }
}

impl Command for CheckCommand {
    fn base(&self) -> &CommandBase {
        self.events.base()
    }

    fn base_mut(&mut self) -> &mut CommandBase {
        self.events.base_mut()
    }

    fn configure(&mut self) {
        let base = self.events.base_mut();
        base.set_description("Check that a state is valid").set_help(format!(
            "Valid states are: {}. Exits with code 2 for any other state.",
            VALID_STATES.join(", ")
        ));
        base.definition_mut()
            .add_argument(InputArgument::optional("state", "State to check"))
            .add_option(InputOption::value("file", "Read the state from a file"));
    }

    fn execute(&mut self, input: &Input, output: &Output) -> Result<ExitOutcome, Failure> {
        self.events.base().execute(input, output)?;

        let mut subscriber = StyleEventSubscriber::new();
        self.events.init_console_event_subscriber(&mut subscriber)?;

        let state = self.read_state(input, &subscriber)?;
        if !VALID_STATES.contains(&state.as_str()) {
            return Err(DomainError::new("invalid-state", format!("State \"{}\" is invalid", state)).into());
        }

        subscriber.on_event(&ConsoleEvent::Completed(format!("State \"{}\" is valid", state)))?;
        Ok(ExitOutcome::Success)
    }
}
