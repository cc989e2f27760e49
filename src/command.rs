//! # Command Lifecycle
//!
//! Every command embeds a [`CommandBase`] and implements the [`Command`]
//! trait. A command instance serves exactly one invocation and moves through
//! three states:
//!
//! 1. **configure**: static metadata (description, help, declared
//!    arguments and options). Called once by the registry right after the
//!    factory builds the instance. No I/O.
//! 2. **initialize**: binds the command's [`Style`] to the invocation's input
//!    and output. Repeated calls keep the first style.
//! 3. **execute**: performs the work and yields an [`ExitOutcome`] or a
//!    [`Failure`].
//!
//! The default `execute` renders the header
//! (`{app.name} v{app.version} - {command}`), the description and a blank
//! line, then writes the single invocation log entry. Commands overriding
//! `execute` call [`CommandBase::execute`] first, the way a subclass calls its
//! parent, so every execution logs exactly once with the same shape.

use std::rc::Rc;

use crate::config::{ConfigProvider, APP_NAME, APP_VERSION};
use crate::definition::InputDefinition;
use crate::error::{Error, Failure, Result};
use crate::exit_codes::ExitOutcome;
use crate::input::Input;
use crate::logger::Logger;
use crate::output::Output;
use crate::registry::CommandContext;
use crate::style::{ConsoleStyle, Style};

/// State shared by every command.
pub struct CommandBase {
    name: String,
    description: String,
    help: String,
    definition: InputDefinition,
    logger: Rc<dyn Logger>,
    config: Rc<dyn ConfigProvider>,
    style: Option<Rc<dyn Style>>,
}

impl CommandBase {
    /// Create the base for the command registered as `context.name()`.
    pub fn new(context: &CommandContext) -> Self {
        Self {
            name: context.name().to_string(),
            description: String::new(),
            help: String::new(),
            definition: InputDefinition::new(),
            logger: context.logger(),
            config: context.config(),
            style: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_help(&mut self, help: impl Into<String>) -> &mut Self {
        self.help = help.into();
        self
    }

    pub fn definition(&self) -> &InputDefinition {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut InputDefinition {
        &mut self.definition
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Bind a [`ConsoleStyle`] to `input`/`output` unless a style is already
    /// bound.
    pub fn initialize(&mut self, input: &Input, output: &Output) {
        if self.style.is_none() {
            self.style = Some(Rc::new(ConsoleStyle::new(input, output)));
        }
    }

    /// The bound style.
    ///
    /// Fails with [`Error::StyleNotBound`] before `initialize` has run.
    pub fn style(&self) -> Result<Rc<dyn Style>> {
        self.style.clone().ok_or_else(|| Error::StyleNotBound {
            command: self.name.clone(),
        })
    }

    /// Inject a style explicitly, bypassing lazy creation.
    pub fn set_style(&mut self, style: Rc<dyn Style>) {
        self.style = Some(style);
    }

    /// Default execution: header, description, invocation log entry.
    pub fn execute(&self, input: &Input, _output: &Output) -> std::result::Result<ExitOutcome, Failure> {
        let style = self.style()?;
        let app_name = self.config.get(APP_NAME)?;
        let app_version = self.config.get(APP_VERSION)?;

        style.title(&format!("{} v{} - {}", app_name, app_version, self.name))?;
        style.text(&self.description)?;
        style.new_line()?;

        self.logger.info(&self.name, &input.log_context());

        Ok(ExitOutcome::Success)
    }
}

/// Lifecycle hooks of a command.
///
/// Implementors only provide access to their [`CommandBase`]; every hook has
/// a default.
pub trait Command {
    fn base(&self) -> &CommandBase;

    fn base_mut(&mut self) -> &mut CommandBase;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn definition(&self) -> &InputDefinition {
        self.base().definition()
    }

    /// Set static metadata. Must be idempotent and free of I/O.
    fn configure(&mut self) {}

    /// Bind the invocation's style.
    fn initialize(&mut self, input: &Input, output: &Output) -> Result<()> {
        self.base_mut().initialize(input, output);
        Ok(())
    }

    /// Perform the command's action.
    fn execute(&mut self, input: &Input, output: &Output) -> std::result::Result<ExitOutcome, Failure> {
        self.base().execute(input, output)
    }

    /// Drive `initialize` then `execute`.
    fn run(&mut self, input: &Input, output: &Output) -> std::result::Result<ExitOutcome, Failure> {
        self.initialize(input, output)?;
        self.execute(input, output)
    }
}
