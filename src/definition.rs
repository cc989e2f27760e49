//! # Input Definitions
//!
//! Every command declares the arguments and options it accepts through an
//! [`InputDefinition`]. The definition is used two ways:
//!
//! - **From the command line**: [`InputDefinition::to_clap`] turns it into a
//!   `clap::Command` and [`InputDefinition::input_from_matches`] reads the
//!   parsed matches back into an [`Input`].
//! - **From a meta-command**: [`InputDefinition::bind`] validates a
//!   [`Parameters`] map against the grammar and fails with
//!   [`Error::InvalidInvocation`] when a key is unknown, a value has the
//!   wrong shape, or a required argument is missing.
//!
//! Every definition created with [`InputDefinition::new`] already carries the
//! global options (`--no-debug`, `-q/--quiet`, `-v/--verbose`).

use clap::{Arg, ArgAction, ArgMatches};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::input::{Input, Parameters, ValueMap};

/// Global options accepted by every command and forwarded on dispatch.
pub const GLOBAL_OPTIONS: [&str; 3] = ["no-debug", "quiet", "verbose"];

/// How an option takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean switch (`--quiet`).
    Flag,
    /// Option requiring a value (`--greeting Hello`).
    Value,
}

/// A positional argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputArgument {
    name: String,
    description: String,
    required: bool,
    default: Option<String>,
}

impl InputArgument {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Default value of an optional argument.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A named option.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOption {
    name: String,
    short: Option<char>,
    description: String,
    kind: OptionKind,
    default: Option<String>,
}

impl InputOption {
    pub fn flag(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            description: description.into(),
            kind: OptionKind::Flag,
            default: None,
        }
    }

    pub fn value(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: OptionKind::Value,
            ..Self::flag(name, description)
        }
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Default value of a value option. Ignored for flags.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    fn default_value(&self) -> Value {
        match (self.kind, &self.default) {
            (OptionKind::Flag, _) => Value::Bool(false),
            (OptionKind::Value, Some(default)) => Value::String(default.clone()),
            (OptionKind::Value, None) => Value::Null,
        }
    }
}

/// The global options every command accepts.
pub fn global_options() -> Vec<InputOption> {
    vec![
        InputOption::flag("no-debug", "Switch off debug output"),
        InputOption::flag("quiet", "Do not output any message").with_short('q'),
        InputOption::flag("verbose", "Increase the verbosity of messages").with_short('v'),
    ]
}

/// Declared grammar of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDefinition {
    arguments: Vec<InputArgument>,
    options: Vec<InputOption>,
}

impl Default for InputDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDefinition {
    /// A definition holding only the global options.
    pub fn new() -> Self {
        Self {
            arguments: Vec::new(),
            options: global_options(),
        }
    }

    /// Add an argument, or replace an existing one with the same name.
    pub fn add_argument(&mut self, argument: InputArgument) -> &mut Self {
        match self.arguments.iter_mut().find(|a| a.name == argument.name) {
            Some(existing) => *existing = argument,
            None => self.arguments.push(argument),
        }
        self
    }

    /// Add an option, or replace an existing one with the same name.
    pub fn add_option(&mut self, option: InputOption) -> &mut Self {
        match self.options.iter_mut().find(|o| o.name == option.name) {
            Some(existing) => *existing = option,
            None => self.options.push(option),
        }
        self
    }

    pub fn arguments(&self) -> &[InputArgument] {
        &self.arguments
    }

    pub fn options(&self) -> &[InputOption] {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&InputArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn option(&self, name: &str) -> Option<&InputOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Validate `parameters` against this definition and build an [`Input`].
    ///
    /// Unset arguments and options take their declared defaults (`false` for
    /// flags, `null` when no default exists).
    pub fn bind(&self, command: &str, parameters: &Parameters) -> Result<Input> {
        let invalid = |message: String| Error::InvalidInvocation {
            command: command.to_string(),
            message,
        };

        let mut arguments = ValueMap::new();
        let mut options = ValueMap::new();

        for (key, value) in parameters.iter() {
            if let Some(name) = key.strip_prefix("--") {
                let option = self
                    .option(name)
                    .ok_or_else(|| invalid(format!("The \"--{}\" option does not exist.", name)))?;
                match (option.kind, value) {
                    (OptionKind::Flag, Value::Bool(_)) => {}
                    (OptionKind::Flag, _) => {
                        return Err(invalid(format!(
                            "The \"--{}\" option does not accept a value.",
                            name
                        )))
                    }
                    (OptionKind::Value, Value::String(_) | Value::Number(_) | Value::Bool(_)) => {}
                    (OptionKind::Value, _) => {
                        return Err(invalid(format!("The \"--{}\" option requires a value.", name)))
                    }
                }
                options.insert(name.to_string(), value.clone());
            } else {
                if self.argument(key).is_none() {
                    return Err(invalid(format!("The \"{}\" argument does not exist.", key)));
                }
                if value.is_array() || value.is_object() {
                    return Err(invalid(format!(
                        "The \"{}\" argument only accepts scalar values.",
                        key
                    )));
                }
                arguments.insert(key.clone(), value.clone());
            }
        }

        let missing: Vec<&str> = self
            .arguments
            .iter()
            .filter(|a| a.required && arguments.get(&a.name).map_or(true, Value::is_null))
            .map(|a| a.name.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(invalid(format!(
                "Not enough arguments (missing: \"{}\").",
                missing.join(", ")
            )));
        }

        for argument in &self.arguments {
            arguments.entry(argument.name.clone()).or_insert_with(|| {
                argument
                    .default
                    .clone()
                    .map(Value::String)
                    .unwrap_or(Value::Null)
            });
        }
        for option in &self.options {
            options
                .entry(option.name.clone())
                .or_insert_with(|| option.default_value());
        }

        Ok(Input::new(arguments, options))
    }

    /// Build the clap subcommand for this definition.
    ///
    /// `help` is printed after the argument list of `-h` and `--help`.
    pub fn to_clap(&self, name: &str, about: &str, help: &str) -> clap::Command {
        let mut command = clap::Command::new(name.to_string()).about(about.to_string());
        if !help.is_empty() {
            command = command.after_help(help.to_string());
        }

        for argument in &self.arguments {
            let mut arg = Arg::new(argument.name.clone())
                .help(argument.description.clone())
                .required(argument.required)
                .action(ArgAction::Set);
            if let Some(default) = &argument.default {
                arg = arg.default_value(default.clone());
            }
            command = command.arg(arg);
        }

        for option in &self.options {
            let mut arg = Arg::new(option.name.clone())
                .long(option.name.clone())
                .help(option.description.clone());
            if let Some(short) = option.short {
                arg = arg.short(short);
            }
            arg = match option.kind {
                OptionKind::Flag => arg.action(ArgAction::SetTrue),
                OptionKind::Value => {
                    let arg = arg.action(ArgAction::Set).value_name("VALUE");
                    match &option.default {
                        Some(default) => arg.default_value(default.clone()),
                        None => arg,
                    }
                }
            };
            command = command.arg(arg);
        }

        command
    }

    /// Read parsed clap matches back into an [`Input`].
    ///
    /// `matches` must come from a command built by [`Self::to_clap`].
    pub fn input_from_matches(&self, matches: &ArgMatches) -> Input {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| {
                let value = matches
                    .get_one::<String>(&argument.name)
                    .map(|v| Value::String(v.clone()))
                    .unwrap_or(Value::Null);
                (argument.name.clone(), value)
            })
            .collect();

        let options = self
            .options
            .iter()
            .map(|option| {
                let value = match option.kind {
                    OptionKind::Flag => Value::Bool(matches.get_flag(&option.name)),
                    OptionKind::Value => matches
                        .get_one::<String>(&option.name)
                        .map(|v| Value::String(v.clone()))
                        .unwrap_or(Value::Null),
                };
                (option.name.clone(), value)
            })
            .collect();

        Input::new(arguments, options)
    }
}
