//! # Command Kit Library
//!
//! This library provides the base layer for command-line tools whose
//! commands share a uniform lifecycle: configuration, styled console output,
//! structured logging of every invocation, and the ability for one command to
//! run another while forwarding the global flags. It is used by the
//! `command-kit` demo binary but is meant to be embedded into other tools.
//!
//! ## Quick Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use command_kit::command::{Command, CommandBase};
//! use command_kit::config::{ParameterBag, APP_NAME, APP_VERSION};
//! use command_kit::logger::LogLogger;
//! use command_kit::output::{Channel, Output};
//! use command_kit::registry::{CommandContext, CommandRegistry};
//! use command_kit::application::Application;
//!
//! struct About {
//!     base: CommandBase,
//! }
//!
//! impl Command for About {
//!     fn base(&self) -> &CommandBase {
//!         &self.base
//!     }
//!
//!     fn base_mut(&mut self) -> &mut CommandBase {
//!         &mut self.base
//!     }
//!
//!     fn configure(&mut self) {
//!         self.base.set_description("Display application information");
//!     }
//! }
//!
//! let config = ParameterBag::new()
//!     .with(APP_NAME, "demo")
//!     .with(APP_VERSION, "0.1.0");
//! let mut registry = CommandRegistry::new(Rc::new(LogLogger::default()), Rc::new(config));
//! registry.register("about", |context: &CommandContext| About {
//!     base: CommandBase::new(context),
//! });
//!
//! let application = Application::new(Rc::new(registry)).unwrap();
//! let output = Output::buffered(false);
//! let code = application.run(["demo", "about"], &output);
//!
//! assert_eq!(code, 0);
//! assert!(output.contents(Channel::Stdout).starts_with("demo v0.1.0 - about"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Commands (`command`)**: [`command::CommandBase`] plus the
//!   [`command::Command`] trait give every command the
//!   configure / initialize / execute lifecycle and a lazily bound style.
//! - **Event commands (`event`)**: hand the command's style to console event
//!   subscribers through a non-owning reference.
//! - **Meta-commands (`meta`)**: run other registered commands with a derived
//!   invocation and classify their failures into exit outcomes.
//! - **Registry and application (`registry`, `application`)**: command
//!   factories, the clap command tree and the top-level driver returning the
//!   process exit code.
//! - **Ambient services (`config`, `logger`, `logging`, `output`, `style`)**:
//!   parameter storage, structured logging, and console rendering.

pub mod application;
pub mod command;
pub mod config;
pub mod defaults;
pub mod definition;
pub mod error;
pub mod event;
pub mod exit_codes;
pub mod input;
pub mod logger;
pub mod logging;
pub mod meta;
pub mod output;
pub mod registry;
pub mod style;
pub mod suggestions;

#[cfg(test)]
mod meta_proptest;
#[cfg(test)]
mod test_support;
