//! # Greet Command Implementation
//!
//! This module implements the `greet` subcommand, a small command with its
//! own arguments and options on top of the global flags.
//!
//! An empty (or whitespace-only) name is rejected with an `empty-name`
//! domain failure, which exits with code 2.

use command_kit::command::{Command, CommandBase};
use command_kit::definition::{InputArgument, InputOption};
use command_kit::error::{DomainError, Failure};
use command_kit::exit_codes::ExitOutcome;
use command_kit::input::Input;
use command_kit::output::Output;
use command_kit::registry::CommandContext;

const DEFAULT_GREETING: &str = "Hello";

/// Greet someone by name
pub struct GreetCommand {
    base: CommandBase,
}

impl GreetCommand {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            base: CommandBase::new(context),
        }
    }
}

impl Command for GreetCommand {
    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CommandBase {
        &mut self.base
    }

    fn configure(&mut self) {
        self.base
            .set_description("Greet someone by name")
            .set_help("Prints a greeting. Fails with exit code 2 when the name is empty.");
        self.base
            .definition_mut()
            .add_argument(InputArgument::required("name", "Who to greet"))
            .add_option(InputOption::flag("shout", "Print the greeting in upper case"))
            .add_option(
                InputOption::value("greeting", "Greeting word to use").with_default(DEFAULT_GREETING),
            );
    }

    fn execute(&mut self, input: &Input, output: &Output) -> Result<ExitOutcome, Failure> {
        self.base.execute(input, output)?;

        let name = input.argument_str("name").unwrap_or_default().trim();
        if name.is_empty() {
            return Err(DomainError::new("empty-name", "The name to greet must not be empty").into());
        }

        let greeting = format_greeting(
            input.option_str("greeting").unwrap_or(DEFAULT_GREETING),
            name,
            input.flag("shout"),
        );
        self.base.style()?.text(&greeting)?;

        Ok(ExitOutcome::Success)
    }
}

fn format_greeting(greeting: &str, name: &str, shout: bool) -> String {
    let line = format!("{}, {}!", greeting, name);
    if shout {
        line.to_uppercase()
    } else {
        line
    }
}
