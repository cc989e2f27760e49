//! # Command Registry
//!
//! The registry is the "application" a meta-command dispatches into. It maps
//! command names to factories; every lookup builds a fresh, configured
//! command instance, so one instance never serves two invocations.
//!
//! Factories receive a [`CommandContext`] carrying the shared logger and
//! configuration provider plus a weak handle back to the registry, which is
//! how meta-commands reach it without a hidden global.
//!
//! ## Cycles
//!
//! A meta-command refuses to dispatch itself directly. Longer cycles
//! (`a` → `b` → `a`) are not detected: wiring commands so that none can reach
//! itself transitively is an invariant of the embedding application.

use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::command::Command;
use crate::config::ConfigProvider;
use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::suggestions;

/// Dependencies handed to a command factory.
#[derive(Clone)]
pub struct CommandContext {
    name: String,
    logger: Rc<dyn Logger>,
    config: Rc<dyn ConfigProvider>,
    registry: Weak<CommandRegistry>,
}

impl CommandContext {
    /// A context with no registry behind it.
    ///
    /// Meta-commands built from it fail with
    /// [`Error::RegistryUnavailable`] when they try to dispatch.
    pub fn detached(
        name: impl Into<String>,
        logger: Rc<dyn Logger>,
        config: Rc<dyn ConfigProvider>,
    ) -> Self {
        Self {
            name: name.into(),
            logger,
            config,
            registry: Weak::new(),
        }
    }

    /// Name the command is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logger(&self) -> Rc<dyn Logger> {
        Rc::clone(&self.logger)
    }

    pub fn config(&self) -> Rc<dyn ConfigProvider> {
        Rc::clone(&self.config)
    }

    /// The registry that built the command, if it is still alive.
    pub fn registry(&self) -> Weak<CommandRegistry> {
        self.registry.clone()
    }
}

type CommandFactory = Box<dyn Fn(&CommandContext) -> Box<dyn Command>>;

/// Named command factories sharing one logger and configuration provider.
pub struct CommandRegistry {
    logger: Rc<dyn Logger>,
    config: Rc<dyn ConfigProvider>,
    factories: BTreeMap<String, CommandFactory>,
}

impl CommandRegistry {
    pub fn new(logger: Rc<dyn Logger>, config: Rc<dyn ConfigProvider>) -> Self {
        Self {
            logger,
            config,
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory under `name`, replacing any previous one.
    pub fn register<F, C>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&CommandContext) -> C + 'static,
        C: Command + 'static,
    {
        let name = name.into();
        log::debug!("Registering command \"{}\"", name);
        self.factories.insert(
            name,
            Box::new(move |context: &CommandContext| {
                Box::new(factory(context)) as Box<dyn Command>
            }),
        );
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn logger(&self) -> Rc<dyn Logger> {
        Rc::clone(&self.logger)
    }

    pub fn config(&self) -> Rc<dyn ConfigProvider> {
        Rc::clone(&self.config)
    }

    /// The context handed to the factory of `name`.
    pub fn context(self: &Rc<Self>, name: &str) -> CommandContext {
        CommandContext {
            name: name.to_string(),
            logger: self.logger(),
            config: self.config(),
            registry: Rc::downgrade(self),
        }
    }

    /// Build and configure a fresh instance of the command named `name`.
    ///
    /// Fails with [`Error::CommandNotFound`] when nothing is registered under
    /// that name; the error suggests the closest registered name.
    pub fn get(self: &Rc<Self>, name: &str) -> Result<Box<dyn Command>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            let candidates: Vec<&str> = self.names().collect();
            Error::CommandNotFound {
                name: name.to_string(),
                suggestion: suggestions::find_similar(name, &candidates).map(str::to_string),
            }
        })?;

        let mut command = factory(&self.context(name));
        command.configure();
        Ok(command)
    }

    /// Build the clap command tree: one subcommand per registered command.
    pub fn clap_command(self: &Rc<Self>, bin_name: &str, version: &str, about: &str) -> Result<clap::Command> {
        let mut root = clap::Command::new(bin_name.to_string())
            .version(version.to_string())
            .about(about.to_string());
        for name in self.names() {
            let command = self.get(name)?;
            let base = command.base();
            root = root.subcommand(
                command
                    .definition()
                    .to_clap(name, base.description(), base.help()),
            );
        }
        Ok(root)
    }
}
