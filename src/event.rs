//! # Console Events
//!
//! Long-running commands often report progress from code that has no access
//! to the command itself: callbacks, helpers, library hooks. Those producers
//! publish [`ConsoleEvent`]s to a [`ConsoleEventSubscriber`], and the
//! subscriber renders them through the command's own style so all output of
//! one invocation looks the same.
//!
//! [`EventCommandBase`] wires the two: once the command is initialized,
//! [`EventCommandBase::init_console_event_subscriber`] hands the subscriber a
//! [`Weak`] reference to the style. The command keeps ownership; a subscriber
//! that outlives the command simply stops rendering.

use std::rc::{Rc, Weak};

use crate::command::CommandBase;
use crate::error::Result;
use crate::registry::CommandContext;
use crate::style::Style;

/// Something worth telling the user while a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Notice(String),
    Warning(String),
    Completed(String),
}

/// Receiver of console events rendered through a command's style.
pub trait ConsoleEventSubscriber {
    /// Receive the style events are rendered through.
    fn set_style(&mut self, style: Weak<dyn Style>);

    /// Handle one event.
    fn on_event(&self, event: &ConsoleEvent) -> std::io::Result<()>;
}

/// Subscriber rendering events with the style it was handed.
///
/// Notices and completions go to the regular view, warnings to the error
/// view. Events are dropped while no live style is attached.
#[derive(Debug, Default)]
pub struct StyleEventSubscriber {
    style: Option<Weak<dyn Style>>,
}

impl StyleEventSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the style handed to this subscriber is still alive.
    pub fn is_attached(&self) -> bool {
        self.live_style().is_some()
    }

    fn live_style(&self) -> Option<Rc<dyn Style>> {
        self.style.as_ref().and_then(Weak::upgrade)
    }
}

impl ConsoleEventSubscriber for StyleEventSubscriber {
    fn set_style(&mut self, style: Weak<dyn Style>) {
        self.style = Some(style);
    }

    fn on_event(&self, event: &ConsoleEvent) -> std::io::Result<()> {
        let Some(style) = self.live_style() else {
            log::debug!("Dropping console event without a style: {:?}", event);
            return Ok(());
        };
        match event {
            ConsoleEvent::Notice(message) => style.text(message),
            ConsoleEvent::Warning(message) => style.error_style().text(&format!("! {}", message)),
            ConsoleEvent::Completed(message) => style.text(&format!("✔ {}", message)),
        }
    }
}

/// Base for commands that publish console events.
pub struct EventCommandBase {
    base: CommandBase,
}

impl EventCommandBase {
    pub fn new(context: &CommandContext) -> Self {
        Self {
            base: CommandBase::new(context),
        }
    }

    pub fn base(&self) -> &CommandBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut CommandBase {
        &mut self.base
    }

    /// Hand the command's style to `subscriber`.
    ///
    /// The command must be initialized before any subscriber is wired;
    /// otherwise this fails with
    /// [`Error::StyleNotBound`](crate::error::Error::StyleNotBound).
    pub fn init_console_event_subscriber(&self, subscriber: &mut dyn ConsoleEventSubscriber) -> Result<()> {
        let style = self.base.style()?;
        subscriber.set_style(Rc::downgrade(&style));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::Input;
    use crate::output::{Channel, Output};
    use crate::test_support::{context, RecordingLogger, RecordingStyle, Rendered};

    fn event_base() -> EventCommandBase {
        EventCommandBase::new(&context("check", &Rc::new(RecordingLogger::default())))
    }

    #[test]
    fn test_init_before_initialize_fails() {
        let command = event_base();
        let mut subscriber = StyleEventSubscriber::new();

        let error = command
            .init_console_event_subscriber(&mut subscriber)
            .unwrap_err();

        assert!(matches!(error, Error::StyleNotBound { .. }));
        assert!(!subscriber.is_attached());
    }

    #[test]
    fn test_subscriber_renders_through_command_style() {
        let mut command = event_base();
        let style = Rc::new(RecordingStyle::default());
        command.base_mut().set_style(style.clone());

        let mut subscriber = StyleEventSubscriber::new();
        command.init_console_event_subscriber(&mut subscriber).unwrap();
        subscriber
            .on_event(&ConsoleEvent::Notice("Reading state".to_string()))
            .unwrap();
        subscriber
            .on_event(&ConsoleEvent::Warning("State file is empty".to_string()))
            .unwrap();
        subscriber
            .on_event(&ConsoleEvent::Completed("Done".to_string()))
            .unwrap();

        assert_eq!(
            style.rendered(),
            vec![
                Rendered::Text("Reading state".to_string()),
                Rendered::ErrorText("! State file is empty".to_string()),
                Rendered::Text("✔ Done".to_string()),
            ]
        );
    }

    #[test]
    fn test_subscriber_shares_bound_console_style() {
        let mut command = event_base();
        let output = Output::buffered(false);
        command.base_mut().initialize(&Input::default(), &output);

        let mut subscriber = StyleEventSubscriber::new();
        command.init_console_event_subscriber(&mut subscriber).unwrap();
        subscriber
            .on_event(&ConsoleEvent::Notice("hello".to_string()))
            .unwrap();

        assert_eq!(output.contents(Channel::Stdout), " hello\n");
    }

    #[test]
    fn test_subscriber_does_not_outlive_style() {
        let mut subscriber = StyleEventSubscriber::new();
        {
            let mut command = event_base();
            command
                .base_mut()
                .set_style(Rc::new(RecordingStyle::default()));
            command.init_console_event_subscriber(&mut subscriber).unwrap();
            assert!(subscriber.is_attached());
        }

        assert!(!subscriber.is_attached());
        subscriber
            .on_event(&ConsoleEvent::Notice("ignored".to_string()))
            .unwrap();
    }
}
