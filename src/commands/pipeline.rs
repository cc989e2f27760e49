//! # Pipeline Command Implementation
//!
//! This module implements the `pipeline` subcommand, a meta-command that runs
//! `greet` and then `check`. Both sub-commands receive the global flags of the
//! pipeline invocation (`--quiet`, `--verbose`, `--no-debug`).
//!
//! The pipeline stops at the first sub-command that does not succeed and
//! exits with that sub-command's outcome.

use command_kit::command::{Command, CommandBase};
use command_kit::definition::InputArgument;
use command_kit::error::Failure;
use command_kit::exit_codes::ExitOutcome;
use command_kit::input::{Input, Parameters};
use command_kit::meta::MetaCommandBase;
use command_kit::output::Output;
use command_kit::registry::CommandContext;

/// Greet someone, then check a state
pub struct PipelineCommand {
    meta: MetaCommandBase,
}

impl PipelineCommand {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            meta: MetaCommandBase::new(context),
        }
    }
}

impl Command for PipelineCommand {
    fn base(&self) -> &CommandBase {
        self.meta.base()
    }

    fn base_mut(&mut self) -> &mut CommandBase {
        self.meta.base_mut()
    }

    fn configure(&mut self) {
        let base = self.meta.base_mut();
        base.set_description("Greet someone, then check a state")
            .set_help("Runs `greet <name>` followed by `check <state>`, forwarding the global flags.");
        base.definition_mut()
            .add_argument(InputArgument::required("name", "Who to greet"))
            .add_argument(InputArgument::optional("state", "State to check").with_default("ready"));
    }

    fn execute(&mut self, input: &Input, output: &Output) -> Result<ExitOutcome, Failure> {
        self.meta.base().execute(input, output)?;

        let name = input.argument_str("name").unwrap_or_default();
        let greeted = self
            .meta
            .run_command("greet", Parameters::new().with("name", name), input, output)?;
        if !greeted.is_success() {
            return Ok(greeted);
        }

        let state = input.argument_str("state").unwrap_or_default();
        Ok(self
            .meta
            .run_command("check", Parameters::new().with("state", state), input, output)?)
    }
}
