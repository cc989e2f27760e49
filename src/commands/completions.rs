//! # Completions Command Implementation
//!
//! This module implements the `completions` subcommand, which generates shell
//! completion scripts for various shells. The completions are generated using
//! `clap_complete` from the same command tree the application parses with,
//! so every registered command and option is covered.
//!
//! ## Supported Shells
//!
//! - **Bash**: Add to `.bashrc` or source directly
//! - **Zsh**: Add to `fpath` or source directly
//! - **Fish**: Save to `~/.config/fish/completions/`
//! - **PowerShell**: Add to PowerShell profile
//!
//! ## Example
//!
//! ```bash
//! # Generate and install bash completions
//! command-kit completions bash > ~/.local/share/bash-completion/completions/command-kit
//!
//! # Generate zsh completions
//! command-kit completions zsh > ~/.zfunc/_command-kit
//! ```
//!
//! The script is written raw to stdout: no banner, and `--quiet` does not
//! suppress it.

use anyhow::anyhow;
use clap::ValueEnum;
use clap_complete::{generate, Shell};
use std::rc::Weak;

use command_kit::command::{Command, CommandBase};
use command_kit::config::{APP_NAME, APP_VERSION};
use command_kit::definition::InputArgument;
use command_kit::error::{DomainError, Failure};
use command_kit::exit_codes::ExitOutcome;
use command_kit::input::Input;
use command_kit::output::{Channel, Output};
use command_kit::registry::{CommandContext, CommandRegistry};

/// Shell types for completion generation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Fish Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish Shell
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Names accepted for the `shell` argument.
fn shell_names() -> Vec<String> {
    CompletionShell::value_variants()
        .iter()
        .filter_map(|shell| shell.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect()
}

/// Generate shell completion scripts
pub struct CompletionsCommand {
    base: CommandBase,
    registry: Weak<CommandRegistry>,
}

impl CompletionsCommand {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            base: CommandBase::new(context),
            registry: context.registry(),
        }
    }
}

impl Command for CompletionsCommand {
    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CommandBase {
        &mut self.base
    }

    fn configure(&mut self) {
        self.base.set_description("Generate shell completion scripts").set_help(format!(
            "Writes a completion script to stdout. Supported shells: {}.",
            shell_names().join(", ")
        ));
        self.base
            .definition_mut()
            .add_argument(InputArgument::required("shell", "The shell to generate completions for"));
    }

    fn execute(&mut self, input: &Input, output: &Output) -> Result<ExitOutcome, Failure> {
        let name = input.argument_str("shell").unwrap_or_default();
        let shell = CompletionShell::from_str(name, true).map_err(|_| {
            DomainError::new(
                "unsupported-shell",
                format!(
                    "Shell \"{}\" is not supported (expected one of: {})",
                    name,
                    shell_names().join(", ")
                ),
            )
        })?;

        let registry = self
            .registry
            .upgrade()
            .ok_or_else(|| anyhow!("The command registry is no longer available"))?;
        let bin_name = self.base.config().get(APP_NAME)?;
        let version = self.base.config().get(APP_VERSION)?;
        let mut command = registry.clap_command(&bin_name, &version, "")?;

        let mut script = Vec::new();
        generate(Shell::from(shell), &mut command, bin_name.as_str(), &mut script);
        for line in String::from_utf8_lossy(&script).lines() {
            output.write_line(Channel::Stdout, line)?;
        }

        self.base.logger().info(self.base.name(), &input.log_context());
        Ok(ExitOutcome::Success)
    }
}
