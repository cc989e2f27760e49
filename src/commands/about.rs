//! # About Command Implementation
//!
//! This module implements the `about` subcommand. It only sets metadata and
//! relies on the default execution, which renders the application banner
//! and logs the invocation.

use command_kit::command::{Command, CommandBase};
use command_kit::registry::CommandContext;

/// Display application information
pub struct AboutCommand {
    base: CommandBase,
}

impl AboutCommand {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            base: CommandBase::new(context),
        }
    }
}

impl Command for AboutCommand {
    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CommandBase {
        &mut self.base
    }

    fn configure(&mut self) {
        self.base
            .set_description("Display application information")
            .set_help("Prints the application name and version configured for this installation.");
    }
}
