//! # Meta-Commands
//!
//! A meta-command is a command whose execution consists of running other
//! registered commands. [`MetaCommandBase::run_command`] implements the
//! delegation protocol:
//!
//! 1. Resolve the registry ([`Error::RegistryUnavailable`] if none is bound).
//! 2. Refuse direct self-dispatch ([`Error::RecursiveDispatch`]).
//! 3. Look the command up ([`Error::CommandNotFound`] propagates).
//! 4. Derive the sub-invocation: caller parameters overlaid with the
//!    forwarded global flags, then bind it against the sub-command's
//!    grammar ([`Error::InvalidInvocation`] propagates).
//! 5. Run the sub-command and classify its result:
//!    - `Ok(outcome)` is returned unchanged;
//!    - [`Failure::Domain`] is logged at error severity → `DomainFailure`;
//!    - [`Failure::Unexpected`] is logged at critical severity →
//!      `UnexpectedFailure`;
//!    - [`Failure::Precondition`] is returned as an error, unlogged and
//!      never mapped to an exit code; the top-level driver reports it.
//! 6. A classified failure is rendered once through the error view, after
//!    it has been logged. An unbound style is itself a precondition
//!    violation and propagates before anything is logged.

use serde_json::{json, Value};
use std::rc::{Rc, Weak};

use crate::command::CommandBase;
use crate::definition::GLOBAL_OPTIONS;
use crate::error::{Error, Failure, Result};
use crate::exit_codes::ExitOutcome;
use crate::input::{Input, Parameters};
use crate::logger::Logger;
use crate::output::Output;
use crate::registry::{CommandContext, CommandRegistry};
use crate::style::Style;

/// Base for commands that dispatch other registered commands.
pub struct MetaCommandBase {
    base: CommandBase,
    registry: Weak<CommandRegistry>,
}

impl MetaCommandBase {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            base: CommandBase::new(context),
            registry: context.registry(),
        }
    }

    pub fn base(&self) -> &CommandBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CommandBase {
        &mut self.base
    }

    fn registry(&self) -> Result<Rc<CommandRegistry>> {
        self.registry.upgrade().ok_or_else(|| Error::RegistryUnavailable {
            command: self.base.name().to_string(),
        })
    }

    /// Run the command registered as `name` with `parameters`, forwarding the
    /// global flags of `input`.
    ///
    /// Lookup, validation and precondition errors propagate; failures of the
    /// sub-command itself are classified into the returned outcome.
    pub fn run_command(
        &self,
        name: &str,
        parameters: Parameters,
        input: &Input,
        output: &Output,
    ) -> Result<ExitOutcome> {
        let registry = self.registry()?;
        if name == self.base.name() {
            return Err(Error::RecursiveDispatch {
                command: name.to_string(),
            });
        }

        let mut command = registry.get(name)?;
        let derived = derive_parameters(parameters, input);
        let sub_input = command.definition().bind(name, &derived)?;

        log::debug!("{} dispatching {}", self.base.name(), name);
        let failure = match command.run(&sub_input, output) {
            Ok(outcome) => return Ok(outcome),
            Err(failure) => failure,
        };

        let outcome = match failure {
            Failure::Precondition(error) => return Err(error),
            Failure::Domain(_) => ExitOutcome::DomainFailure,
            Failure::Unexpected(_) => ExitOutcome::UnexpectedFailure,
        };
        let style = self.base.style()?;
        log_failure(self.base.logger(), name, &failure);
        render_failure(style.as_ref(), &failure);
        Ok(outcome)
    }
}

/// Build the derived parameters of a sub-invocation.
///
/// Starts from `parameters` and sets `--no-debug`, `--quiet` and `--verbose`
/// to the values `input` holds for those options (`false` when unset).
/// Forwarded values replace any same-named entry in `parameters`.
pub fn derive_parameters(mut parameters: Parameters, input: &Input) -> Parameters {
    for name in GLOBAL_OPTIONS {
        let value = input.option(name).cloned().unwrap_or(Value::Bool(false));
        parameters.insert(format!("--{}", name), value);
    }
    parameters
}

/// Log a failure with the severity of its kind.
///
/// Domain failures are errors; unexpected failures and precondition
/// violations are critical.
pub(crate) fn log_failure(logger: &dyn Logger, command: &str, failure: &Failure) {
    let context = json!({
        "command": command,
        "failure": {
            "kind": failure.kind(),
            "message": format!("{:#}", failure),
        }
    });
    let message = failure.to_string();

    match failure {
        Failure::Domain(_) => logger.error(&message, &context),
        Failure::Unexpected(_) | Failure::Precondition(_) => logger.critical(&message, &context),
    }
}

/// Render a failure through the error view of `style`.
///
/// A rendering problem is reported as a warning; the failure has already been
/// logged and its outcome decided.
pub(crate) fn render_failure(style: &dyn Style, failure: &Failure) {
    let message = match failure {
        Failure::Unexpected(error) => format!("{:#}", error),
        other => other.to_string(),
    };
    if let Err(error) = style.error_style().error(&message) {
        log::warn!("Failed to render error output: {}", error);
    }
}
