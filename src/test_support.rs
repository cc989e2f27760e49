//! Recording doubles shared by the unit tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use serde_json::Value;

use crate::config::{ParameterBag, APP_NAME, APP_VERSION};
use crate::logger::{Logger, Severity};
use crate::registry::CommandContext;
use crate::style::Style;

/// A detached context with `app.name: kit` and `app.version: 1.0.0`.
pub fn context(name: &str, logger: &Rc<RecordingLogger>) -> CommandContext {
    CommandContext::detached(
        name,
        logger.clone(),
        Rc::new(
            ParameterBag::new()
                .with(APP_NAME, "kit")
                .with(APP_VERSION, "1.0.0"),
        ),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
    pub context: Value,
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: RefCell<Vec<Record>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, severity: Severity, message: &str, context: &Value) {
        self.records.borrow_mut().push(Record {
            severity,
            message: message.to_string(),
            context: context.clone(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Title(String),
    Text(String),
    NewLine,
    Error(String),
    ErrorText(String),
    ErrorBlock(String),
}

/// Style recording every call. The error view shares the same log.
#[derive(Debug)]
pub struct RecordingStyle {
    log: Rc<RefCell<Vec<Rendered>>>,
    error_view: Option<Box<RecordingStyle>>,
}

impl Default for RecordingStyle {
    fn default() -> Self {
        let log = Rc::new(RefCell::new(Vec::new()));
        Self {
            log: log.clone(),
            error_view: Some(Box::new(Self {
                log,
                error_view: None,
            })),
        }
    }
}

impl RecordingStyle {
    pub fn rendered(&self) -> Vec<Rendered> {
        self.log.borrow().clone()
    }

    fn is_error_view(&self) -> bool {
        self.error_view.is_none()
    }

    fn push(&self, rendered: Rendered) -> io::Result<()> {
        self.log.borrow_mut().push(rendered);
        Ok(())
    }
}

impl Style for RecordingStyle {
    fn title(&self, message: &str) -> io::Result<()> {
        self.push(Rendered::Title(message.to_string()))
    }

    fn text(&self, message: &str) -> io::Result<()> {
        if self.is_error_view() {
            self.push(Rendered::ErrorText(message.to_string()))
        } else {
            self.push(Rendered::Text(message.to_string()))
        }
    }

    fn new_line(&self) -> io::Result<()> {
        self.push(Rendered::NewLine)
    }

    fn error(&self, message: &str) -> io::Result<()> {
        if self.is_error_view() {
            self.push(Rendered::ErrorBlock(message.to_string()))
        } else {
            self.push(Rendered::Error(message.to_string()))
        }
    }

    fn error_style(&self) -> &dyn Style {
        match &self.error_view {
            Some(view) => view.as_ref(),
            None => self,
        }
    }
}
