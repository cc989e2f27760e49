//! # Application Driver
//!
//! [`Application`] is the top-level driver of a tool built on this crate. It
//! turns the registry into a clap command tree, parses the process arguments
//! and runs the selected command through its full lifecycle:
//!
//! 1. `registry.get(name)` builds and configures a fresh instance.
//! 2. The parsed matches are read back into an [`Input`].
//! 3. Optionally, `env_logger` is installed at the level implied by the
//!    global flags.
//! 4. `initialize` then `execute`.
//!
//! Failures are classified the same way a meta-command classifies the
//! failures of its sub-commands. Precondition violations, which a
//! meta-command propagates as errors, end here with their own exit code:
//!
//! | Result                     | Log severity | Exit code |
//! |----------------------------|--------------|-----------|
//! | `Ok(outcome)`              | none         | `outcome` |
//! | `Failure::Domain`          | error        | 2         |
//! | `Failure::Unexpected`      | critical     | 1         |
//! | `Failure::Precondition`    | critical     | 70        |
//! | clap usage error           | none         | 1         |
//! | `--help`, `--version`      | none         | 0         |
//!
//! A usage error (unknown command, missing or malformed argument) exits with
//! the same code a meta-command gets when its sub-command lookup or binding
//! fails, since both surface as unexpected failures.

use std::ffi::OsString;
use std::rc::Rc;

use crate::command::Command;
use crate::config::{APP_NAME, APP_VERSION};
use crate::error::{Failure, Result};
use crate::exit_codes::{self, ExitOutcome};
use crate::input::Input;
use crate::logging;
use crate::meta::{log_failure, render_failure};
use crate::output::{Channel, Output};
use crate::registry::CommandRegistry;
use crate::style::{ConsoleStyle, Style};

/// Top-level driver mapping process arguments to an exit code.
pub struct Application {
    name: String,
    version: String,
    about: String,
    registry: Rc<CommandRegistry>,
    install_logger: bool,
}

impl Application {
    /// Create a driver for `registry`.
    ///
    /// The binary name and version are read from the registry's configuration
    /// (`app.name`, `app.version`); a missing key fails with
    /// [`Error::KeyNotFound`](crate::error::Error::KeyNotFound).
    pub fn new(registry: Rc<CommandRegistry>) -> Result<Self> {
        let config = registry.config();
        let name = config.get(APP_NAME)?;
        let version = config.get(APP_VERSION)?;
        Ok(Self {
            name,
            version,
            about: String::new(),
            registry,
            install_logger: false,
        })
    }

    /// Set the description shown in the top-level help.
    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    /// Install `env_logger` before each command runs.
    pub fn with_env_logger(mut self) -> Self {
        self.install_logger = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn registry(&self) -> &Rc<CommandRegistry> {
        &self.registry
    }

    /// The full clap command tree.
    pub fn clap_command(&self) -> Result<clap::Command> {
        self.registry
            .clap_command(&self.name, &self.version, &self.about)
    }

    /// Parse `args` (including the binary name) and run the selected command.
    ///
    /// Returns the process exit code.
    pub fn run<I, T>(&self, args: I, output: &Output) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut root = match self.clap_command() {
            Ok(root) => root,
            Err(error) => return self.report_startup_error(&Failure::from(error), output),
        };

        let matches = match root.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(error) => {
                if !error.use_stderr() {
                    write_block(output, Channel::Stdout, &error.render().to_string());
                    return error.exit_code();
                }
                write_block(output, Channel::Stderr, &error.render().to_string());
                return exit_codes::UNEXPECTED_FAILURE;
            }
        };

        let Some((name, sub_matches)) = matches.subcommand() else {
            write_block(output, Channel::Stdout, &root.render_help().to_string());
            return exit_codes::SUCCESS;
        };

        let mut command = match self.registry.get(name) {
            Ok(command) => command,
            Err(error) => return self.report_startup_error(&Failure::from(error), output),
        };
        let input = command.definition().input_from_matches(sub_matches);

        if self.install_logger {
            logging::init(logging::level_for(&input));
        }

        log::debug!("Running command \"{}\"", name);
        match command.run(&input, output) {
            Ok(outcome) => outcome.code(),
            Err(failure) => self.report_failure(command.as_ref(), &input, output, &failure),
        }
    }

    fn report_failure(&self, command: &dyn Command, input: &Input, output: &Output, failure: &Failure) -> i32 {
        log_failure(self.registry.logger().as_ref(), command.name(), failure);

        let style: Rc<dyn Style> = match command.base().style() {
            Ok(style) => style,
            Err(_) => Rc::new(ConsoleStyle::new(input, output)),
        };
        render_failure(style.as_ref(), failure);

        exit_code(failure)
    }

    fn report_startup_error(&self, failure: &Failure, output: &Output) -> i32 {
        log_failure(self.registry.logger().as_ref(), &self.name, failure);
        render_failure(&ConsoleStyle::new(&Input::default(), output), failure);
        exit_code(failure)
    }
}

/// Exit code of a failed run.
fn exit_code(failure: &Failure) -> i32 {
    match failure {
        Failure::Domain(_) => ExitOutcome::DomainFailure.code(),
        Failure::Unexpected(_) => ExitOutcome::UnexpectedFailure.code(),
        Failure::Precondition(_) => exit_codes::PRECONDITION_VIOLATION,
    }
}

fn write_block(output: &Output, channel: Channel, text: &str) {
    for line in text.trim_end().lines() {
        if let Err(error) = output.write_line(channel, line) {
            log::warn!("Failed to write output: {}", error);
            return;
        }
    }
}
